use crate::{
    ast::{BinaryOperator, Position},
    interpreter::{
        evaluator::{
            binary::{power::eval_pow, scalar::eval_scalar_op},
            core::EvalResult,
        },
        value::Value,
    },
};

/// Evaluates a binary operation between two already evaluated operands.
///
/// Arithmetic operators go to [`eval_scalar_op`]; exponentiation goes to
/// [`eval_pow`].
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `left`: The left operand.
/// - `right`: The right operand.
/// - `position`: Where the operator appears, attached to any error.
///
/// # Returns
/// The result of the operation.
///
/// # Errors
/// Any [`EvalError`](crate::error::EvalError) raised by the operator.
///
/// # Example
/// ```
/// use arithmo::{
///     ast::{BinaryOperator, Position},
///     interpreter::{evaluator::binary::core::eval_binary, value::Value},
/// };
///
/// let at = Position::default();
/// let result = eval_binary(BinaryOperator::Add, Value::Integer(3), Value::Integer(4), at);
/// assert_eq!(result.unwrap(), Value::Integer(7));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Value,
                   right: Value,
                   position: Position)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add | Sub | Mul | Div => eval_scalar_op(op, left, right, position),
        Pow => eval_pow(left, right, position),
    }
}

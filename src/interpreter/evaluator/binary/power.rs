use crate::{
    ast::{BinaryOperator, Position},
    error::{EvalError, EvalErrorKind},
    interpreter::{
        evaluator::{binary::scalar::eval_scalar_op, core::EvalResult},
        value::Value,
    },
};

/// Evaluates an exponentiation operation.
///
/// An integer raised to a non-negative integer uses checked arithmetic and
/// stays an integer unless it overflows. Negative integer exponents yield the
/// reciprocal as a real, and any real operand makes the result real.
/// `0 ^ 0` is `1`. The bases `0`, `1` and `-1` stay integers for any
/// non-negative exponent, however large.
///
/// # Parameters
/// - `base`: The value being raised.
/// - `exponent`: The power to raise it to.
/// - `position`: Where the `^` appears, attached to any error.
///
/// # Returns
/// `base` raised to `exponent`.
///
/// # Errors
/// - `EvalErrorKind::DivisionByZero` if the base is zero and the exponent is
///   negative.
/// - `EvalErrorKind::Overflow` if a real result is infinite.
/// - `EvalErrorKind::Undefined` if the result is not a real number, as for a
///   negative base with a fractional exponent.
///
/// # Example
/// ```
/// use arithmo::{
///     ast::Position,
///     interpreter::{evaluator::binary::power::eval_pow, value::Value},
/// };
///
/// let at = Position::default();
/// assert_eq!(eval_pow(Value::Integer(2), Value::Integer(10), at).unwrap(),
///            Value::Integer(1024));
/// assert_eq!(eval_pow(Value::Integer(2), Value::Integer(-2), at).unwrap(),
///            Value::Real(0.25));
/// assert_eq!(eval_pow(Value::Integer(-1), Value::Integer(5_000_000_001), at).unwrap(),
///            Value::Integer(-1));
/// ```
pub fn eval_pow(base: Value, exponent: Value, position: Position) -> EvalResult<Value> {
    if base.is_zero() && exponent.is_negative() {
        return Err(EvalError { kind: EvalErrorKind::DivisionByZero,
                               position });
    }

    eval_scalar_op(BinaryOperator::Pow, base, exponent, position)
}

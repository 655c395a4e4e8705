use crate::{
    ast::{Expr, Position},
    error::EvalError,
    interpreter::{
        evaluator::{binary::core::eval_binary, unary::eval_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree and returns its value.
///
/// The walk is post-order: both operands are evaluated, left first, before
/// their operator is applied. The tree is only borrowed, so the same tree can
/// be evaluated any number of times with identical results.
///
/// # Parameters
/// - `expr`: The root of the tree to evaluate.
///
/// # Returns
/// The value of the whole expression.
///
/// # Errors
/// Returns the first [`EvalError`] raised anywhere in the tree.
///
/// # Example
/// ```
/// use arithmo::interpreter::{
///     evaluator::core::evaluate, lexer::tokenize, parser::core::parse, value::Value,
/// };
///
/// let expr = parse(tokenize("(2 + 3) * 4").unwrap()).unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), Value::Integer(20));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::NumberLiteral { value, position } => eval_literal(*value, *position),
        Expr::UnaryOp { op, operand, .. } => Ok(eval_unary(*op, evaluate(operand)?)),
        Expr::BinaryOp { op,
                         left,
                         right,
                         position, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right, *position)
        },
    }
}

/// Literals reach the tree already converted; only a real literal too large
/// for `f64` can still fail here.
fn eval_literal(value: Value, position: Position) -> EvalResult<Value> {
    match value {
        Value::Integer(_) => Ok(value),
        Value::Real(r) => Value::finite_real(r, position),
    }
}

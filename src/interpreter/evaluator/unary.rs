use crate::{ast::UnaryOperator, interpreter::value::Value};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Plus`: returns the value unchanged.
/// - `Negate`: numeric negation. Negating `i64::MIN` has no `i64` result and
///   is promoted to a real.
///
/// Neither operator can fail: a negated finite real is still finite.
///
/// # Parameters
/// - `op`: The prefix operator to apply.
/// - `value`: The already evaluated operand.
///
/// # Returns
/// The resulting value.
///
/// # Example
/// ```
/// use arithmo::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::Value},
/// };
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, Value::Integer(5)), Value::Integer(-5));
/// assert_eq!(eval_unary(UnaryOperator::Plus, Value::Real(1.5)), Value::Real(1.5));
/// assert_eq!(eval_unary(UnaryOperator::Negate, Value::Integer(i64::MIN)),
///            Value::Real(9_223_372_036_854_775_808.0));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn eval_unary(op: UnaryOperator, value: Value) -> Value {
    match (op, value) {
        (UnaryOperator::Plus, _) => value,
        (UnaryOperator::Negate, Value::Integer(n)) => {
            n.checked_neg()
             .map_or_else(|| Value::Real(-(n as f64)), Value::Integer)
        },
        (UnaryOperator::Negate, Value::Real(r)) => Value::Real(-r),
    }
}

use crate::{
    ast::{BinaryOperator, Position},
    error::{EvalError, EvalErrorKind},
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a scalar arithmetic operation.
///
/// Two integers produce an integer whenever the exact result fits in an
/// `i64`; for division that also requires the division to leave no
/// remainder. Everything else is computed in `f64`: mixed or real operands,
/// inexact divisions and integer results that would overflow.
///
/// # Parameters
/// - `op`: The operator to apply.
/// - `left`: The left operand.
/// - `right`: The right operand.
/// - `position`: Where the operator appears, attached to any error.
///
/// # Returns
/// The result, as an integer when it is exact.
///
/// # Errors
/// - `EvalErrorKind::DivisionByZero` if `op` is `Div` and `right` is zero
///   (integer or real).
/// - `EvalErrorKind::Overflow` if a real result is infinite.
///
/// # Example
/// ```
/// use arithmo::{
///     ast::{BinaryOperator, Position},
///     interpreter::{evaluator::binary::scalar::eval_scalar_op, value::Value},
/// };
///
/// let at = Position::default();
/// let div = |a, b| eval_scalar_op(BinaryOperator::Div, Value::Integer(a), Value::Integer(b), at);
///
/// assert_eq!(div(8, 2).unwrap(), Value::Integer(4));
/// assert_eq!(div(7, 2).unwrap(), Value::Real(3.5));
/// assert!(div(5, 0).is_err());
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: Value,
                      right: Value,
                      position: Position)
                      -> EvalResult<Value> {
    if op == BinaryOperator::Div && right.is_zero() {
        return Err(EvalError { kind: EvalErrorKind::DivisionByZero,
                               position });
    }

    if let (Value::Integer(a), Value::Integer(b)) = (left, right)
       && let Some(n) = checked_integer_op(op, a, b)
    {
        return Ok(Value::Integer(n));
    }

    Value::finite_real(real_op(op, left.as_real(), right.as_real()), position)
}

/// Exact integer arithmetic. `None` means the result is not an integer or
/// does not fit, and the caller falls back to `f64`.
fn checked_integer_op(op: BinaryOperator, a: i64, b: i64) -> Option<i64> {
    match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div => a.checked_rem(b)
                                .filter(|rem| *rem == 0)
                                .and_then(|_| a.checked_div(b)),
        BinaryOperator::Pow => checked_integer_pow(a, b),
    }
}

/// Integer powers with a non-negative exponent. Exponents beyond `u32` only
/// have an `i64` result for the bases `0`, `1` and `-1`.
fn checked_integer_pow(base: i64, exponent: i64) -> Option<i64> {
    if exponent < 0 {
        return None;
    }
    if let Ok(e) = u32::try_from(exponent) {
        return base.checked_pow(e);
    }
    match base {
        0 | 1 => Some(base),
        -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => None,
    }
}

fn real_op(op: BinaryOperator, a: f64, b: f64) -> f64 {
    match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        BinaryOperator::Div => a / b,
        BinaryOperator::Pow => a.powf(b),
    }
}

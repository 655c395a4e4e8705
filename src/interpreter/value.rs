use std::fmt;

use crate::{
    ast::Position,
    error::{EvalError, EvalErrorKind},
    interpreter::evaluator::core::EvalResult,
};

/// A numeric value produced by evaluation.
///
/// Integers stay exact for as long as possible. An operation falls back to
/// `Real` when either operand is real, when a division leaves a remainder, or
/// when the exact integer result would not fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An exact 64 bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` lose precision; this is the promotion path, so
    /// rounding is accepted here.
    ///
    /// # Example
    /// ```
    /// use arithmo::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for `0` and `0.0` (including `-0.0`).
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Returns `true` if the value is strictly less than zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Integer(n) => n < 0,
            Self::Real(r) => r < 0.0,
        }
    }

    /// Wraps a floating-point result, rejecting values that are not finite.
    ///
    /// Operands reaching the evaluator are always finite, so an infinite
    /// result means the computation overflowed and a NaN means it has no real
    /// value (such as a fractional power of a negative number).
    ///
    /// # Errors
    /// - `EvalErrorKind::Overflow` if `value` is infinite.
    /// - `EvalErrorKind::Undefined` if `value` is NaN.
    ///
    /// # Example
    /// ```
    /// use arithmo::{
    ///     ast::Position,
    ///     error::EvalErrorKind,
    ///     interpreter::value::Value,
    /// };
    ///
    /// let at = Position::new(0, 1, 1);
    /// assert_eq!(Value::finite_real(1.5, at).unwrap(), Value::Real(1.5));
    /// assert_eq!(Value::finite_real(f64::INFINITY, at).unwrap_err().kind,
    ///            EvalErrorKind::Overflow);
    /// ```
    pub fn finite_real(value: f64, position: Position) -> EvalResult<Self> {
        if value.is_nan() {
            return Err(EvalError { kind: EvalErrorKind::Undefined,
                                   position });
        }
        if value.is_infinite() {
            return Err(EvalError { kind: EvalErrorKind::Overflow,
                                   position });
        }
        Ok(Self::Real(value))
    }
}

/// Integers print as-is. Whole reals keep a trailing `.0` so the two kinds
/// stay distinguishable (`4` versus `4.0`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.fract() == 0.0 && r.abs() < 1e16 => write!(f, "{r:.1}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

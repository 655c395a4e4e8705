use std::fmt;

use thiserror::Error;

use crate::ast::Position;

/// The reason an evaluation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Division by zero, or zero raised to a negative power.
    DivisionByZero,
    /// A floating-point result exceeded the range of `f64`.
    Overflow,
    /// The result has no real value, e.g. `(-8) ^ 0.5`.
    Undefined,
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow => write!(f, "Numeric overflow while trying to compute result"),
            Self::Undefined => write!(f, "Result is not a real number"),
        }
    }
}

/// An error raised while evaluating a syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Error at {position}: {kind}.")]
pub struct EvalError {
    /// What went wrong.
    pub kind:     EvalErrorKind,
    /// Position of the node whose evaluation failed.
    pub position: Position,
}

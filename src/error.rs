use std::ops::Range;

use thiserror::Error;

use crate::ast::Position;

/// Lexing errors.
///
/// Raised by the lexer on the first character that cannot start a token, or
/// on a numeric literal with more than one decimal point.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token stream does not match the expression grammar, or
/// when the input exceeds the configured nesting or size limits.
pub mod parse_error;
/// Evaluation errors.
///
/// Raised for structurally valid expressions whose value is undefined, such
/// as division by zero.
pub mod eval_error;

pub use eval_error::{EvalError, EvalErrorKind};
pub use lex_error::LexError;
pub use parse_error::{Expected, ParseError};

/// Any error the pipeline can produce, tagged by the stage that failed.
///
/// Each stage fails fast, so at most one error is ever reported per input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpreterError {
    /// The lexer rejected the input.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The parser rejected the token sequence.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of a well-formed tree failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl InterpreterError {
    /// Returns the position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Eval(e) => e.position,
        }
    }

    /// Returns the byte range of the source the error should be labeled on.
    ///
    /// The range may be empty, for example when the parser hit the end of
    /// input.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        let start = self.position().offset;
        let len = match self {
            Self::Lex(e) => e.character().len_utf8(),
            Self::Parse(ParseError::Unexpected { text, .. }) => text.len(),
            Self::Parse(ParseError::NestingTooDeep { .. }
                        | ParseError::ExpressionTooLarge { .. }) => 0,
            Self::Eval(_) => 1,
        };
        start..start + len
    }
}

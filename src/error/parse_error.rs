use std::fmt;

use thiserror::Error;

use crate::{ast::Position, interpreter::lexer::TokenKind};

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The start of an operand: a number, `(`, `+` or `-`.
    Expression,
    /// The `)` closing an open group.
    ClosingParen,
    /// Nothing more; a complete expression was already parsed.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression => write!(f, "an expression"),
            Self::ClosingParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The grammar required something other than the token found.
    #[error("Error at {position}: Expected {expected}, found {found}{}.", quoted(.found, .text))]
    Unexpected {
        /// What the grammar required at this point.
        expected: Expected,
        /// The kind of token actually found.
        found:    TokenKind,
        /// The source text of the token found (empty for end of input).
        text:     String,
        /// Position of the token found.
        position: Position,
    },
    /// The expression nests deeper than the configured limit.
    #[error("Error at {position}: Expression nests deeper than the limit of {limit}.")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Position of the token at which the limit was exceeded.
        position: Position,
    },
    /// The expression tree would be taller than the configured limit, as
    /// for a very long chain of operators.
    #[error("Error at {position}: Expression chains more than {limit} levels of operations.")]
    ExpressionTooLarge {
        /// The configured maximum tree height.
        limit:    usize,
        /// Position of the operator at which the limit was exceeded.
        position: Position,
    },
}

impl ParseError {
    /// Returns the position of the token that triggered the error.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Unexpected { position, .. }
            | Self::NestingTooDeep { position, .. }
            | Self::ExpressionTooLarge { position, .. } => *position,
        }
    }
}

fn quoted(found: &TokenKind, text: &str) -> String {
    match found {
        TokenKind::Integer | TokenKind::Float => format!(" '{text}'"),
        _ => String::new(),
    }
}

use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Error at {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
    /// A numeric literal containing more than one decimal point.
    #[error("Error at {position}: Malformed number '{literal}': unexpected second decimal point.")]
    MalformedNumber {
        /// The whole run of digits and points that was scanned.
        literal:  String,
        /// Position of the second decimal point.
        position: Position,
    },
}

impl LexError {
    /// Returns the position of the offending character.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::MalformedNumber { position, .. } => {
                *position
            },
        }
    }

    /// Returns the offending character. For malformed numbers this is the
    /// extra decimal point.
    #[must_use]
    pub const fn character(&self) -> char {
        match self {
            Self::UnexpectedCharacter { character, .. } => *character,
            Self::MalformedNumber { .. } => '.',
        }
    }
}

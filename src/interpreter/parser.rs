/// Parser entry points and the shared result type.
///
/// Drives a full parse: one expression followed by end of input.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence levels for `+ -`, `* /` and the
/// right-associative `^`.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix `+`/`-`, numeric literals and parenthesized groups.
pub mod unary;

/// The token cursor shared by all parsing functions.
///
/// Provides one token of lookahead and enforces the nesting limit.
pub mod stream;

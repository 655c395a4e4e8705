use crate::{
    ast::BinaryOperator,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            stream::{Parsed, TokenStream},
            unary::{parse_primary, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `1 - 2 - 3`
/// parses as `(1 - 2) - 3`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `stream`: The token cursor, positioned at the start of the operand.
///
/// # Returns
/// The parsed sum with its tree height. The stream is left on the first
/// token that is neither `+` nor `-`.
pub fn parse_additive<'src, I>(stream: &mut TokenStream<I>) -> ParseResult<Parsed>
    where I: Iterator<Item = Token<'src>>
{
    let mut left = parse_multiplicative(stream)?;
    loop {
        let token = stream.peek();
        match token_to_binary_operator(token.kind) {
            Some(op @ (BinaryOperator::Add | BinaryOperator::Sub)) => {
                stream.advance();
                let right = parse_multiplicative(stream)?;
                left = stream.fold(Parsed::binary(op, left, right, token.position))?;
            },
            _ => break,
        }
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative operators `*` and `/`. Operands are unary
/// expressions, so `2 * -3` is accepted.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `stream`: The token cursor, positioned at the start of the operand.
///
/// # Returns
/// The parsed product with its tree height.
pub fn parse_multiplicative<'src, I>(stream: &mut TokenStream<I>) -> ParseResult<Parsed>
    where I: Iterator<Item = Token<'src>>
{
    let mut left = parse_unary(stream)?;
    loop {
        let token = stream.peek();
        match token_to_binary_operator(token.kind) {
            Some(op @ (BinaryOperator::Mul | BinaryOperator::Div)) => {
                stream.advance();
                let right = parse_unary(stream)?;
                left = stream.fold(Parsed::binary(op, left, right, token.position))?;
            },
            _ => break,
        }
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as
/// `a ^ (b ^ c)`. The exponent is parsed as a unary expression, which in
/// turn reaches back into this rule, so the whole chain to the right is
/// consumed by the recursion.
///
/// The rule is: `power := primary ("^" unary)?`
///
/// # Parameters
/// - `stream`: The token cursor, positioned at the start of the operand.
///
/// # Returns
/// The base alone when no `^` follows it, otherwise the power node.
pub fn parse_power<'src, I>(stream: &mut TokenStream<I>) -> ParseResult<Parsed>
    where I: Iterator<Item = Token<'src>>
{
    let base = parse_primary(stream)?;

    let token = stream.peek();
    if token.kind != TokenKind::Caret {
        return Ok(base);
    }
    stream.advance();

    let exponent = stream.nested(token.position, parse_unary)?;
    stream.fold(Parsed::binary(BinaryOperator::Pow, base, exponent, token.position))
}

/// Maps a token kind to its binary operator, if it is one.
///
/// # Example
/// ```
/// use arithmo::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

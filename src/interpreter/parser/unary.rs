use crate::{
    ast::{Expr, UnaryOperator},
    error::Expected,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
            stream::{Parsed, TokenStream, unexpected},
        },
        value::Value,
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` and `-`. They nest to the right, so
/// `--x` parses as `-(-x)`. Without a prefix operator this delegates to
/// [`parse_power`], which places unary operators below exponentiation:
/// `-2 ^ 2` is `-(2 ^ 2)`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
///
/// # Parameters
/// - `stream`: The token cursor, positioned at the start of the operand.
///
/// # Returns
/// The operand wrapped in one node per prefix operator.
pub fn parse_unary<'src, I>(stream: &mut TokenStream<I>) -> ParseResult<Parsed>
    where I: Iterator<Item = Token<'src>>
{
    let token = stream.peek();
    let op = match token.kind {
        TokenKind::Plus => UnaryOperator::Plus,
        TokenKind::Minus => UnaryOperator::Negate,
        _ => return parse_power(stream),
    };
    stream.advance();

    let operand = stream.nested(token.position, parse_unary)?;
    stream.fold(Parsed::unary(op, operand, token.position))
}

/// Parses a primary (atomic) expression: a numeric literal or a
/// parenthesized expression.
///
/// Grammar:
/// ```text
///     primary := INTEGER | FLOAT | "(" expression ")"
/// ```
///
/// # Parameters
/// - `stream`: The token cursor, positioned at the start of the operand.
///
/// # Returns
/// A literal leaf, or the tree of the grouped expression.
///
/// # Errors
/// Returns `ParseError::Unexpected` expecting an expression for any other
/// token, including end of input.
pub fn parse_primary<'src, I>(stream: &mut TokenStream<I>) -> ParseResult<Parsed>
    where I: Iterator<Item = Token<'src>>
{
    let token = stream.peek();
    match token.kind {
        TokenKind::Integer | TokenKind::Float => {
            stream.advance();
            parse_literal(token)
        },
        TokenKind::LParen => parse_grouping(stream),
        _ => Err(unexpected(Expected::Expression, token)),
    }
}

/// Parses a parenthesized expression. The group itself leaves no node in
/// the tree.
///
/// # Errors
/// Returns `ParseError::Unexpected` expecting `)` if the group is not
/// closed.
fn parse_grouping<'src, I>(stream: &mut TokenStream<I>) -> ParseResult<Parsed>
    where I: Iterator<Item = Token<'src>>
{
    let open = stream.advance();
    let inner = stream.nested(open.position, parse_expression)?;

    let close = stream.peek();
    if close.kind != TokenKind::RParen {
        return Err(unexpected(Expected::ClosingParen, close));
    }
    stream.advance();

    Ok(inner)
}

/// Converts a numeric token into a literal node.
///
/// Integer literals too large for an `i64` become floating-point literals.
fn parse_literal(token: Token<'_>) -> ParseResult<Parsed> {
    let value = match token.kind {
        TokenKind::Integer => match token.text.parse::<i64>() {
            Ok(n) => Value::Integer(n),
            Err(_) => Value::Real(parse_real(token)?),
        },
        _ => Value::Real(parse_real(token)?),
    };

    Ok(Parsed::leaf(Expr::NumberLiteral { value,
                                          position: token.position }))
}

fn parse_real(token: Token<'_>) -> ParseResult<f64> {
    token.text
         .parse::<f64>()
         .map_err(|_| unexpected(Expected::Expression, token))
}

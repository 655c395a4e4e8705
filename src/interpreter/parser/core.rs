use tracing::trace;

use crate::{
    ast::Expr,
    config::Config,
    error::{Expected, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_additive,
            stream::{Parsed, TokenStream, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into an expression tree.
///
/// Uses the default limits; see [`parse_with_config`].
///
/// # Parameters
/// - `tokens`: The token sequence, normally produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root of the expression tree.
///
/// # Errors
/// Returns a [`ParseError`] on the first grammar violation.
///
/// # Example
/// ```
/// use arithmo::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
/// let expr = parse(tokens).unwrap();
/// assert_eq!(expr.to_string(), "(2 ^ (3 ^ 2))");
/// ```
pub fn parse<'src, T>(tokens: T) -> ParseResult<Expr>
    where T: IntoIterator<Item = Token<'src>>
{
    parse_with_config(tokens, &Config::default())
}

/// Parses a complete token sequence within the limits of `config`.
///
/// Grammar, from lowest to highest precedence:
/// ```text
///     program        := additive EOF
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := unary (("*" | "/") unary)*
///     unary          := ("+" | "-") unary | power
///     power          := primary ("^" unary)?
///     primary        := NUMBER | "(" additive ")"
/// ```
/// Prefix operators sit below `^`, so `-2 ^ 2` is `-(2 ^ 2)`, while the
/// exponent itself may carry a sign (`2 ^ -1`).
///
/// # Parameters
/// - `tokens`: The token sequence. A missing trailing EOF is tolerated.
/// - `config`: Nesting depth and tree height limits.
///
/// # Returns
/// The root of the expression tree.
///
/// # Errors
/// - `ParseError::Unexpected` when a required token is missing or extra
///   tokens follow a complete expression.
/// - `ParseError::NestingTooDeep` when groups or prefix operators nest
///   deeper than `config.max_depth`.
/// - `ParseError::ExpressionTooLarge` when the tree would be taller than
///   `config.max_height`.
pub fn parse_with_config<'src, T>(tokens: T, config: &Config) -> ParseResult<Expr>
    where T: IntoIterator<Item = Token<'src>>
{
    let mut stream = TokenStream::new(tokens.into_iter(), config);
    let parsed = parse_expression(&mut stream)?;

    let next = stream.peek();
    if next.kind != TokenKind::Eof {
        return Err(unexpected(Expected::EndOfInput, next));
    }

    trace!(height = parsed.height, "parsed expression tree");
    Ok(parsed.expr)
}

/// Parses one expression, starting at the lowest precedence level.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'src, I>(stream: &mut TokenStream<I>) -> ParseResult<Parsed>
    where I: Iterator<Item = Token<'src>>
{
    parse_additive(stream)
}

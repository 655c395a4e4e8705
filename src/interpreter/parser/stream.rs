use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Position, UnaryOperator},
    config::Config,
    error::{Expected, ParseError},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// A parsed subtree together with its height.
///
/// Long operator chains are parsed by a loop, so the parser's own recursion
/// does not see them; the height is what bounds them.
#[derive(Debug)]
pub struct Parsed {
    /// The subtree.
    pub expr:   Expr,
    /// Number of nodes on the longest root-to-leaf path.
    pub height: usize,
}

impl Parsed {
    /// Wraps a leaf node.
    #[must_use]
    pub const fn leaf(expr: Expr) -> Self {
        Self { expr,
               height: 1 }
    }

    /// Builds a `BinaryOp` node from two subtrees.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self, position: Position) -> Self {
        let height = left.height.max(right.height) + 1;
        Self { expr: Expr::BinaryOp { op,
                                      left: Box::new(left.expr),
                                      right: Box::new(right.expr),
                                      position },
               height }
    }

    /// Builds a `UnaryOp` node around a subtree.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self, position: Position) -> Self {
        Self { expr:   Expr::UnaryOp { op,
                                       operand: Box::new(operand.expr),
                                       position },
               height: operand.height + 1, }
    }
}

/// A cursor over a token sequence with one token of lookahead.
///
/// If the underlying iterator ends without an EOF token, an EOF is
/// synthesized just past the last token seen, so callers never have to
/// handle running out of tokens.
pub struct TokenStream<I: Iterator> {
    tokens:     Peekable<I>,
    end:        Position,
    depth:      usize,
    max_depth:  usize,
    max_height: usize,
}

impl<'src, I> TokenStream<I> where I: Iterator<Item = Token<'src>>
{
    /// Creates a cursor enforcing the limits of `config`.
    pub fn new(tokens: I, config: &Config) -> Self {
        Self { tokens:     tokens.peekable(),
               end:        Position::new(0, 1, 1),
               depth:      0,
               max_depth:  config.max_depth,
               max_height: config.max_height, }
    }

    /// Returns the current token without consuming it.
    pub fn peek(&mut self) -> Token<'src> {
        match self.tokens.peek() {
            Some(token) => *token,
            None => self.eof(),
        }
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Token<'src> {
        match self.tokens.next() {
            Some(token) => {
                self.end = Position::new(token.position.offset + token.text.len(),
                                         token.position.line,
                                         token.position.column + token.text.chars().count());
                token
            },
            None => self.eof(),
        }
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` if the limit is already reached,
    /// otherwise whatever `parse` returns.
    pub fn nested<T>(&mut self,
                     position: Position,
                     parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                     -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    position });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Accepts a freshly built subtree if its height is within the limit.
    ///
    /// # Errors
    /// Returns `ParseError::ExpressionTooLarge` if the subtree is too tall.
    pub fn fold(&self, parsed: Parsed) -> ParseResult<Parsed> {
        if parsed.height > self.max_height {
            return Err(ParseError::ExpressionTooLarge { limit:    self.max_height,
                                                        position: parsed.expr.position(), });
        }
        Ok(parsed)
    }

    const fn eof(&self) -> Token<'src> {
        Token { kind:     TokenKind::Eof,
                text:     "",
                position: self.end, }
    }
}

/// Builds the error for a token the grammar does not allow here.
#[must_use]
pub fn unexpected(expected: Expected, found: Token<'_>) -> ParseError {
    ParseError::Unexpected { expected,
                             found: found.kind,
                             text: found.text.to_string(),
                             position: found.position }
}

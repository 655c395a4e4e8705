use std::fmt;

use logos::Logos;

use crate::{ast::Position, error::LexError};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal, such as `42`.
    Integer,
    /// Floating-point literal with exactly one decimal point, such as `3.14`,
    /// `.5` or `2.`.
    Float,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input. Always the last token of a sequence, and only once.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "MUL",
            Self::Slash => "DIV",
            Self::Caret => "POW",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: its kind, the exact source text it matched and where it
/// starts.
///
/// Tokens borrow their text from the source, so a token sequence cannot
/// outlive the string it was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// The token kind.
    pub kind:     TokenKind,
    /// The matched source text. Empty for [`TokenKind::Eof`].
    pub text:     &'src str,
    /// Where the token starts.
    pub position: Position,
}

/// Renders like `(INTEGER:3)` for literals and `(PLUS)` for everything else.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Integer | TokenKind::Float => write!(f, "({}:{})", self.kind, self.text),
            kind => write!(f, "({kind})"),
        }
    }
}

/// The raw scanner. Patterns only; positions and the trailing EOF are added
/// by [`Lexer`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r"[0-9]+\.[0-9]*")]
    #[regex(r"\.[0-9]+")]
    Float,
    /// A run of digits with two or more points, e.g. `1.2.3` or `1..`.
    /// Longest match makes this win over `Float`.
    #[regex(r"[0-9]+\.[0-9]*\.[0-9.]*")]
    #[regex(r"\.[0-9]+\.[0-9.]*")]
    MalformedNumber,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// A lazy, finite token sequence over a source string.
///
/// Yields `Ok(token)` for every token, ending with exactly one
/// [`TokenKind::Eof`]. On the first unrecognized character or malformed
/// number it yields a single `Err` and then stops. The lexer holds no state
/// beyond the source it borrows: creating a new one over the same text
/// yields an identical sequence.
///
/// # Example
/// ```
/// use arithmo::interpreter::lexer::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("1 + 2.5").map(|t| t.unwrap().kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Integer, TokenKind::Plus, TokenKind::Float, TokenKind::Eof]);
/// ```
pub struct Lexer<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, Lexeme>,
    /// Line and column of `scanned`.
    line:     usize,
    column:   usize,
    /// Offset up to which the source has been walked.
    scanned:  usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    ///
    /// # Parameters
    /// - `source`: The text to scan. Tokens borrow from it.
    ///
    /// # Returns
    /// A lexer at line 1, column 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: Lexeme::lexer(source),
               line: 1,
               column: 1,
               scanned: 0,
               finished: false }
    }

    /// Computes the position of `offset` by walking only the text between
    /// the previous call and `offset`, so each character is visited once.
    /// Offsets must be requested in increasing order.
    fn locate(&mut self, offset: usize) -> Position {
        for c in self.source[self.scanned..offset].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.scanned = offset;

        Position::new(offset, self.line, self.column)
    }

    fn fail(&mut self, error: LexError) -> Option<LexResult<Token<'src>>> {
        self.finished = true;
        Some(Err(error))
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = LexResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let lexeme = match self.inner.next() {
            Some(Ok(lexeme)) => lexeme,
            Some(Err(())) => {
                let offset = self.inner.span().start;
                let position = self.locate(offset);
                let character = self.source[offset..].chars().next().unwrap_or('\u{FFFD}');
                return self.fail(LexError::UnexpectedCharacter { character,
                                                                 position });
            },
            None => {
                self.finished = true;
                let position = self.locate(self.source.len());
                return Some(Ok(Token { kind: TokenKind::Eof,
                                       text: "",
                                       position }));
            },
        };

        let span = self.inner.span();
        let text = self.inner.slice();

        let kind = match lexeme {
            Lexeme::Integer => TokenKind::Integer,
            Lexeme::Float => TokenKind::Float,
            Lexeme::Plus => TokenKind::Plus,
            Lexeme::Minus => TokenKind::Minus,
            Lexeme::Star => TokenKind::Star,
            Lexeme::Slash => TokenKind::Slash,
            Lexeme::Caret => TokenKind::Caret,
            Lexeme::LParen => TokenKind::LParen,
            Lexeme::RParen => TokenKind::RParen,
            Lexeme::MalformedNumber => {
                // The pattern guarantees at least two points.
                let second_point = text.match_indices('.').nth(1).map_or(0, |(i, _)| i);
                let position = self.locate(span.start + second_point);
                return self.fail(LexError::MalformedNumber { literal: text.to_string(),
                                                             position });
            },
        };

        let position = self.locate(span.start);
        Some(Ok(Token { kind,
                        text,
                        position }))
    }
}

/// Tokenizes `source` into a complete token sequence ending with EOF.
///
/// # Parameters
/// - `source`: The text to tokenize.
///
/// # Returns
/// Every token of `source` in order, the last one being EOF.
///
/// # Errors
/// Returns the first [`LexError`] encountered; no tokens are returned in
/// that case.
///
/// # Example
/// ```
/// use arithmo::{error::LexError, interpreter::lexer::tokenize};
///
/// let tokens = tokenize("(1)").unwrap();
/// assert_eq!(tokens.len(), 4);
///
/// let err = tokenize("2 $ 3").unwrap_err();
/// assert!(matches!(err, LexError::UnexpectedCharacter { character: '$', .. }));
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token<'_>>> {
    Lexer::new(source).collect()
}

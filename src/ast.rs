use std::fmt;

use crate::interpreter::value::Value;

/// A location in the source text.
///
/// Every token and every AST node carries the position where it starts, so
/// that errors raised by any stage can point back at the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line:   usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Position {
    /// Creates a position from its raw parts.
    #[must_use]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset,
               line,
               column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is strict: each node exclusively owns its children and nodes are
/// never mutated after the parser builds them. Parenthesized groups do not
/// get a node of their own; they only shape the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `42` or `2.5`.
    NumberLiteral {
        /// The value of the literal, already converted from its source text.
        value:    Value,
        /// Where the literal starts.
        position: Position,
    },
    /// A binary operation between two expressions, e.g. `a + b`.
    BinaryOp {
        /// The operator.
        op:       BinaryOperator,
        /// The left-hand operand.
        left:     Box<Self>,
        /// The right-hand operand.
        right:    Box<Self>,
        /// Position of the operator token.
        position: Position,
    },
    /// A prefix operation such as `-x`.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand the operator applies to.
        operand:  Box<Self>,
        /// Position of the operator token.
        position: Position,
    },
}

impl Expr {
    /// Returns the source position attached to this node.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::NumberLiteral { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::UnaryOp { position, .. } => *position,
        }
    }
}

/// Renders the tree fully parenthesized, so grouping is explicit:
/// `2 ^ 3 ^ 2` is shown as `(2 ^ (3 ^ 2))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberLiteral { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op, operand, .. } => write!(f, "({op}{operand})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary (prefix) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}

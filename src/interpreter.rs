/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the AST bottom-up, applies arithmetic with
/// integer/real promotion, and reports errors such as division by zero
/// together with the position of the failing operator.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces a lazy sequence of
/// tokens (numbers, operators, parentheses), each with its source position,
/// terminated by a single end-of-input token.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Distinguishes integer and floating-point literals.
/// - Fails on the first unrecognized character or malformed number.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one token of lookahead. It
/// encodes operator precedence and associativity in its layered rules and
/// stops at the first grammar violation.
pub mod parser;
/// The value module defines the numeric result type.
pub mod value;

//! # arithmo
//!
//! arithmo evaluates arithmetic expressions written as text. Input flows
//! through three stages: the lexer turns text into tokens, the parser builds
//! an abstract syntax tree, and the evaluator computes a numeric value. Every
//! stage fails fast with an error that carries the source position.
//!
//! Each call is self-contained: there is no interpreter state, so [`run`] may
//! be called from any number of threads at once.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use tracing::{debug, trace};

use crate::{
    config::Config,
    error::InterpreterError,
    interpreter::{
        evaluator::core::evaluate, lexer::tokenize, parser::core::parse_with_config, value::Value,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator and position types
/// that the parser produces and the evaluator consumes. Every node records
/// the source position it came from for error reporting.
pub mod ast;
/// Pipeline limits.
///
/// Holds the configuration accepted by [`run_with_config`], such as the
/// maximum nesting depth.
pub mod config;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines one error type per stage and [`InterpreterError`],
/// which wraps them. All errors carry the position of the offending input.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers and detailed messages for context.
/// - Integrates with `std::error::Error` via `thiserror`.
pub mod error;
/// Contains the three pipeline stages and the value type.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for each stage on its own.
pub mod interpreter;

/// Evaluates an arithmetic expression using the default configuration.
///
/// This is the whole pipeline: tokenize, parse and evaluate. The first error
/// from any stage is returned as is.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// Returns an [`InterpreterError`] describing the stage that failed and
/// where.
///
/// # Examples
/// ```
/// use arithmo::{interpreter::value::Value, run};
///
/// assert_eq!(run("2 + 3 * 4").unwrap(), Value::Integer(14));
/// assert_eq!(run("7 / 2").unwrap(), Value::Real(3.5));
///
/// // Division by zero is an evaluation error.
/// assert!(run("5 / 0").is_err());
/// ```
pub fn run(source: &str) -> Result<Value, InterpreterError> {
    run_with_config(source, &Config::default())
}

/// Evaluates an arithmetic expression with explicit limits.
///
/// # Parameters
/// - `source`: The expression text.
/// - `config`: The nesting and size limits to parse under.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// Returns an [`InterpreterError`] describing the stage that failed and
/// where.
///
/// # Examples
/// ```
/// use arithmo::{config::Config, error::InterpreterError, run_with_config};
///
/// let config = Config::default().with_max_depth(4);
/// let err = run_with_config("((((((1))))))", &config).unwrap_err();
/// assert!(matches!(err, InterpreterError::Parse(_)));
/// ```
pub fn run_with_config(source: &str, config: &Config) -> Result<Value, InterpreterError> {
    let tokens = tokenize(source)?;
    trace!(count = tokens.len(), "tokenized source");

    let expr = parse_with_config(tokens, config)?;
    trace!(tree = %expr, "parsed source");

    let value = evaluate(&expr)?;
    debug!(%value, "evaluated expression");
    Ok(value)
}

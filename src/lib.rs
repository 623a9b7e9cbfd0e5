//! # numex
//!
//! numex is an interactive calculator language written in Rust.
//! It tokenizes a line of input, parses it into a syntax tree honoring
//! operator precedence and associativity, and evaluates that tree against a
//! session-wide set of variable bindings and native functions.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse, value::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and its operators, representing the
/// syntactic structure of one input line as a tree. The AST is built by the
/// parser and traversed by the evaluator; every node carries the byte offset
/// of its defining token for error reporting.
pub mod ast;
/// Provides the error types for all three interpretation phases.
///
/// Lexing, parsing and evaluation each have their own error enum. Every
/// variant carries a byte offset into the source line and renders a
/// human-readable message; none of the phases recovers internally — errors
/// always surface to the caller.
pub mod error;
/// Orchestrates the process of evaluating input.
///
/// This module ties together lexing, parsing, evaluation and value
/// representation. It exposes the three phase entry points that collaborators
/// such as the interactive prompt build on.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// Houses the checked integer-to-real promotion shared by the evaluator.
pub mod util;

/// Evaluates a single line of input against the given context.
///
/// This chains the three phases: tokenize, parse, evaluate. Errors from any
/// phase abort the line and surface to the caller; the context keeps every
/// assignment that completed before the failure, so one malformed line never
/// corrupts a session.
///
/// # Parameters
/// - `source`: One line of input.
/// - `context`: The session state, created once and reused across lines.
///
/// # Returns
/// `Some(Value)` when the line produced a value, `None` for an empty line or
/// an invocation that yields nothing.
///
/// # Errors
/// Returns the lexer, parser or runtime error that stopped the line.
///
/// # Examples
/// ```
/// use numex::{eval_source, interpreter::{evaluator::core::Context, value::Value}};
///
/// let mut context = Context::new();
///
/// eval_source("a = 20 + 1", &mut context).unwrap();
/// let result = eval_source("a * 2", &mut context).unwrap();
///
/// assert_eq!(result, Some(Value::Integer(42)));
/// ```
pub fn eval_source(source: &str,
                   context: &mut Context)
                   -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    let Some(expr) = parse(&tokens)? else {
        return Ok(None);
    };

    Ok(context.eval(&expr)?)
}

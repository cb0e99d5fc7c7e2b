//! # graph_gen
//!
//! graph_gen interprets a small line-oriented language that describes an
//! annotated diagram on the complex plane: axis ranges and tick intervals,
//! points, line segments, circles and text labels, with single-assignment
//! variables and complex-number arithmetic for coordinates.
//!
//! ```text
//! xrange -2, 2
//! variable a, 1 + i       % a complex number is a coordinate
//! point [0,0]!blue
//! line [0,0], @a!#ff8800
//! text @a, "a = 1 + i"
//! ```

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
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::LineError,
    render::Renderer,
    report::ErrorReporter,
    script::Script,
};

/// Defines the syntax tree of numeric expressions.
///
/// The parser builds [`Expr`](ast::Expr) nodes and the evaluator walks them.
/// Every node keeps the byte offset it started at so errors can point at a
/// column.
pub mod ast;
/// Provides the error types for every layer.
///
/// # Responsibilities
/// - [`ExpressionError`](error::ExpressionError) for lexing, parsing and
///   evaluating a numeric expression.
/// - [`ScriptError`](error::ScriptError) for the kinds of failure a script line
///   can hit.
/// - [`LineError`] to tag a script error with its line number and raw text.
pub mod error;
/// Evaluates numeric expressions over complex numbers.
///
/// This module ties together the lexer, parser and evaluator behind
/// [`clean_number`](interpreter::number::clean_number).
pub mod interpreter;
/// Renderers that consume a finished [`Script`].
pub mod render;
/// Error reporters that receive the message of a failed run.
pub mod report;
/// The script language itself.
///
/// # Responsibilities
/// - Tokenizes lines and strips comments.
/// - Dispatches commands and resolves their arguments.
/// - Accumulates the [`Script`] aggregate.
pub mod script;
/// General utilities for safe numeric conversion and parsing.
pub mod util;

/// Parses a complete script.
///
/// # Errors
/// The first failing line, as a [`LineError`].
///
/// # Examples
/// ```
/// use graph_gen::parse_script;
///
/// let script = parse_script("circle 1!red\ntext [0,1], \"unit circle\"").unwrap();
/// assert_eq!(script.circles().len(), 1);
/// assert_eq!(script.text()[0].text, "unit circle");
///
/// let err = parse_script("point [0,0]\ncircle one").unwrap_err();
/// assert_eq!(err.line, 2);
/// assert!(err.to_string().starts_with("Error at line 2: \"circle one\""));
/// ```
pub fn parse_script(source: &str) -> Result<Script, LineError> {
    Script::parse(source)
}

/// Parses `source` and hands the result to its collaborator.
///
/// A finished script goes to `renderer`. A failed one goes to `reporter`,
/// which does not return.
///
/// # Errors
/// Only I/O errors from the renderer.
pub fn run<E, R>(source: &str, reporter: &E, renderer: &mut R) -> std::io::Result<()>
    where E: ErrorReporter + ?Sized,
          R: Renderer + ?Sized
{
    match parse_script(source) {
        Ok(script) => renderer.render(&script),
        Err(e) => reporter.report(&e.to_string()),
    }
}

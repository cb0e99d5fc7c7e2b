/// Expression errors.
///
/// Defines every failure the number evaluator can hit while lexing, parsing,
/// or computing a numeric expression such as `sqrt(2) + 3i`.
pub mod expression_error;
/// Line errors.
///
/// Wraps a [`ScriptError`] together with the line number and raw source text
/// of the line that caused it. This is what the top-level parse loop returns.
pub mod line_error;
/// Script errors.
///
/// The error kinds raised by the tokenizer, the command dispatcher, the
/// coordinate resolver, the symbol table, and the color validator.
pub mod script_error;

pub use expression_error::ExpressionError;
pub use line_error::LineError;
pub use script_error::ScriptError;

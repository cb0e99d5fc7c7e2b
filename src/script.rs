/// The annotation records a script accumulates.
pub mod annotation;
/// The color validator: named colors and `#rrggbb` hex codes.
pub mod color;
/// The command dispatcher.
///
/// # Responsibilities
/// - Maps a command name to its handler and arity.
/// - Resolves arguments into numbers, coordinates and text.
/// - Mutates the script being built.
pub mod command;
/// The coordinate resolver: bracketed pairs, `@name` references and complex
/// expressions.
pub mod coordinate;
/// The `Script` aggregate and the top-level parse loop.
pub mod core;
/// Single-assignment variable bindings.
pub mod symbols;
/// The line tokenizer.
///
/// Splits a raw line into command, arguments and an optional color suffix,
/// and strips `%` comments.
pub mod tokenizer;

pub use self::core::Script;
use crate::error::ScriptError;

/// Result type used while interpreting a script line.
pub type ScriptResult<T> = Result<T, ScriptError>;

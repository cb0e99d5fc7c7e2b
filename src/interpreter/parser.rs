/// Entry points for expression parsing.
///
/// Defines [`ParseResult`](core::ParseResult) and the top-level functions
/// that parse a whole expression and reject trailing input.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels.
pub mod binary;

/// Unary, power and primary parsing.
///
/// Handles prefix signs, exponentiation, literals, the imaginary unit, `pi`,
/// parenthesized groups and function calls.
pub mod unary;

/// Shared helpers for the parser.
pub mod utils;

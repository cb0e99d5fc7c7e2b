/// Core evaluation logic.
///
/// Walks an [`Expr`](crate::ast::Expr) and produces a complex value.
pub mod core;

/// Unary operator evaluation.
///
/// Handles the prefix signs.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators and exponentiation.
pub mod binary;

/// Builtin functions.
///
/// The lookup table of callable functions and their implementations.
pub mod function;

/// The evaluator module computes the value of a parsed expression.
///
/// # Responsibilities
/// - Evaluates AST nodes over complex numbers.
/// - Looks up builtin functions and checks their arity.
/// - Reports arithmetic failures such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes numeric expressions.
///
/// Produces `(Token, offset)` pairs so later errors can name a column.
pub mod lexer;
/// The number module is the front door of the evaluator.
///
/// It runs lexer, parser and evaluator over one raw expression and wraps any
/// failure as [`ScriptError::InvalidExpression`](crate::error::ScriptError).
pub mod number;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) nodes.
/// - Encodes operator precedence and associativity.
/// - Rejects malformed input with a position.
pub mod parser;
/// The value module defines complex numbers and coordinates.
pub mod value;

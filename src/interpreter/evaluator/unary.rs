use crate::{ast::UnaryOperator, interpreter::value::ComplexNumber};

/// Evaluates a unary operation on a value.
///
/// Both signs are total, so this cannot fail.
///
/// # Example
/// ```
/// use graph_gen::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::ComplexNumber},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, ComplexNumber::new(5.0, -1.0));
/// assert_eq!(v, ComplexNumber::new(-5.0, 1.0));
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: ComplexNumber) -> ComplexNumber {
    match op {
        UnaryOperator::Negate => -value,
        UnaryOperator::Plus => value,
    }
}

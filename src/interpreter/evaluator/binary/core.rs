use crate::{
    ast::BinaryOperator,
    error::ExpressionError,
    interpreter::{
        evaluator::{binary::power::eval_pow, core::EvalResult},
        value::ComplexNumber,
    },
};

/// Evaluates a binary operation between two values.
///
/// Addition, subtraction and multiplication are total. Division fails on a
/// zero divisor. Power calls [`eval_pow`].
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Offset of the operator, for error reporting.
///
/// # Example
/// ```
/// use graph_gen::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::ComplexNumber},
/// };
///
/// let result = eval_binary(BinaryOperator::Div, 7.0.into(), 2.0.into(), 1);
/// assert_eq!(result.unwrap(), ComplexNumber::from(3.5));
///
/// assert!(eval_binary(BinaryOperator::Div, 1.0.into(), 0.0.into(), 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: ComplexNumber,
                   right: ComplexNumber,
                   position: usize)
                   -> EvalResult<ComplexNumber> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right.is_zero() {
                return Err(ExpressionError::DivisionByZero { position });
            }
            Ok(left / right)
        },
        BinaryOperator::Pow => eval_pow(left, right, position),
    }
}

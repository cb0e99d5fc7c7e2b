use crate::{
    error::ExpressionError,
    interpreter::{evaluator::core::EvalResult, value::ComplexNumber},
};

/// Computes the square root of a non-negative real value.
///
/// Negative and non-real arguments are rejected rather than promoted to a
/// complex root: write `2i` instead of `sqrt(-4)`.
///
/// # Example
/// ```
/// use graph_gen::interpreter::{evaluator::function::sqrt::sqrt, value::ComplexNumber};
///
/// assert_eq!(sqrt(&[4.0.into()]).unwrap(), ComplexNumber::from(2.0));
/// assert!(sqrt(&[(-4.0).into()]).is_err());
/// assert!(sqrt(&[ComplexNumber::new(0.0, 1.0)]).is_err());
/// ```
pub fn sqrt(args: &[ComplexNumber]) -> EvalResult<ComplexNumber> {
    match args {
        [x] if x.is_real() && x.real >= 0.0 => Ok(x.real.sqrt().into()),
        [x] => Err(ExpressionError::InvalidSqrtArgument { argument: x.to_string() }),
        _ => Err(ExpressionError::ArgumentCountMismatch { name:     "sqrt".to_string(),
                                                          expected: 1,
                                                          found:    args.len(), }),
    }
}

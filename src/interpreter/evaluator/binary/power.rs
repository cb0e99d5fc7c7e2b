use crate::{
    error::ExpressionError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{ComplexNumber, complex::ZERO},
    },
    util::num::f64_to_i64_exact,
};

/// Evaluates an exponentiation operation.
///
/// Integral real exponents use repeated multiplication, so `2^3` is exactly
/// `8`. A non-negative real base with a real exponent uses `powf`. Everything
/// else takes the principal complex power, which is how `(-8)^(1/3)` ends up
/// complex.
///
/// # Errors
/// - `DivisionByZero` when zero is raised to a negative (or, for complex
///   exponents, non-positive) power.
/// - `Overflow` when the result is not finite.
///
/// # Example
/// ```
/// use graph_gen::interpreter::{evaluator::binary::power::eval_pow, value::ComplexNumber};
///
/// let result = eval_pow(2.0.into(), 10.0.into(), 1).unwrap();
/// assert_eq!(result, ComplexNumber::from(1024.0));
///
/// let result = eval_pow(4.0.into(), 0.5.into(), 1).unwrap();
/// assert_eq!(result, ComplexNumber::from(2.0));
/// ```
pub fn eval_pow(base: ComplexNumber,
                exponent: ComplexNumber,
                position: usize)
                -> EvalResult<ComplexNumber> {
    let undefined = || {
        if base.is_zero() {
            ExpressionError::DivisionByZero { position }
        } else {
            ExpressionError::Overflow { position }
        }
    };

    if exponent.is_real()
       && let Some(exp) = f64_to_i64_exact(exponent.real)
    {
        return base.checked_powi(exp).ok_or_else(undefined);
    }

    if base.is_zero() {
        return if exponent.real > 0.0 {
            Ok(ZERO)
        } else {
            Err(undefined())
        };
    }

    let result = if base.is_real() && base.real >= 0.0 && exponent.is_real() {
        ComplexNumber::from(base.real.powf(exponent.real))
    } else {
        base.powc(exponent)
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(undefined())
    }
}

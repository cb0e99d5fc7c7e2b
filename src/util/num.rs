use crate::error::ExpressionError;

/// Largest integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if the value is finite, not fractional, and
/// within the range where every integer is representable.
///
/// ## Example
/// ```
/// use graph_gen::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(3.0), Some(3));
/// assert_eq!(f64_to_i64_exact(-2.0), Some(-2));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e300), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}

/// Reads a plain float literal after trimming surrounding whitespace.
///
/// Accepts the usual spellings (`2`, `-1.5`, `.5`, `1e3`, `inf`). This is not
/// an expression: `1+1` is rejected.
///
/// ## Errors
/// Returns [`ExpressionError::NotANumber`] if the text is not a float.
///
/// ## Example
/// ```
/// use graph_gen::util::num::parse_real;
///
/// assert_eq!(parse_real(" -2 ").unwrap(), -2.0);
/// assert_eq!(parse_real("0.25").unwrap(), 0.25);
/// assert!(parse_real("1+1").is_err());
/// assert!(parse_real("").is_err());
/// ```
pub fn parse_real(text: &str) -> Result<f64, ExpressionError> {
    text.trim()
        .parse()
        .map_err(|_| ExpressionError::NotANumber { text: text.trim().to_string() })
}

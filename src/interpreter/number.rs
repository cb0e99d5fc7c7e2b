use crate::{
    error::{ExpressionError, ScriptError},
    interpreter::{
        evaluator::core::eval, lexer::tokenize, parser::core::parse_complete, value::ComplexNumber,
    },
    script::ScriptResult,
};

/// Evaluates a raw numeric expression such as `2^3`, `sqrt(2)/2 + pi*i` or
/// `-1.5i`.
///
/// Supported: number literals, `+ - * /`, `^` and `**` for powers,
/// parentheses, `i` (or `j`) for the imaginary unit, `pi`, and `sqrt(...)`.
///
/// # Errors
/// Any lexing, parsing or arithmetic failure becomes
/// [`ScriptError::InvalidExpression`] carrying `raw_number` as written.
///
/// # Example
/// ```
/// use graph_gen::interpreter::{number::clean_number, value::ComplexNumber};
///
/// assert_eq!(clean_number("2^3").unwrap(), ComplexNumber::from(8.0));
/// assert_eq!(clean_number("sqrt(4)").unwrap(), ComplexNumber::from(2.0));
/// assert_eq!(clean_number("2i").unwrap(), ComplexNumber::new(0.0, 2.0));
/// assert!(clean_number("2 +").is_err());
/// ```
pub fn clean_number(raw_number: &str) -> ScriptResult<ComplexNumber> {
    evaluate(raw_number).map_err(|cause| ScriptError::InvalidExpression { expression: raw_number.trim()
                                                                                            .to_string(),
                                                                          cause })
}

fn evaluate(source: &str) -> Result<ComplexNumber, ExpressionError> {
    let tokens = tokenize(source)?;
    let expr = parse_complete(&tokens)?;
    eval(&expr)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    fn value(source: &str) -> ComplexNumber {
        clean_number(source).unwrap_or_else(|e| panic!("{source}: {e}"))
    }

    fn cause(source: &str) -> ExpressionError {
        match clean_number(source) {
            Err(ScriptError::InvalidExpression { cause, .. }) => cause,
            other => panic!("{source}: expected an invalid expression, got {other:?}"),
        }
    }

    #[test]
    fn arithmetic_precedence() {
        assert_eq!(value("1 + 2 * 3"), 7.0.into());
        assert_eq!(value("(1 + 2) * 3"), 9.0.into());
        assert_eq!(value("7 / 2"), 3.5.into());
        assert_eq!(value("-2^2"), (-4.0).into());
        assert_eq!(value("2^-1"), 0.5.into());
        assert_eq!(value("2**3"), 8.0.into());
        assert_eq!(value("2^3^2"), 512.0.into());
    }

    #[test]
    fn imaginary_numbers() {
        assert_eq!(value("i"), ComplexNumber::new(0.0, 1.0));
        assert_eq!(value("1 - 0.5i"), ComplexNumber::new(1.0, -0.5));
        assert_eq!(value("3*i"), ComplexNumber::new(0.0, 3.0));
        assert_eq!(value("i^2"), (-1.0).into());
        assert_eq!(value("2j"), ComplexNumber::new(0.0, 2.0));
    }

    #[test]
    fn pi_and_sqrt() {
        assert_eq!(value("pi"), PI.into());
        assert_eq!(value("pi*i"), ComplexNumber::new(0.0, PI));
        assert_eq!(value("sqrt(2)^2").real.round(), 2.0);
        assert_eq!(value("sqrt(16) + 1"), 5.0.into());
    }

    #[test]
    fn malformed_expressions() {
        assert_eq!(cause(""), ExpressionError::UnexpectedEndOfInput);
        assert!(matches!(cause("1 +"), ExpressionError::UnexpectedEndOfInput));
        assert!(matches!(cause("1 2"),
                         ExpressionError::UnexpectedTrailingTokens { .. }));
        assert!(matches!(cause("x"), ExpressionError::UnknownIdentifier { .. }));
        assert!(matches!(cause("cbrt(8)"), ExpressionError::UnknownFunction { .. }));
        assert!(matches!(cause("1/0"), ExpressionError::DivisionByZero { .. }));
        assert!(matches!(cause("sqrt(-1)"),
                         ExpressionError::InvalidSqrtArgument { .. }));
        assert!(matches!(cause("2 # 3"),
                         ExpressionError::UnexpectedCharacter { .. }));
    }

    #[test]
    fn error_keeps_the_raw_text() {
        let Err(ScriptError::InvalidExpression { expression, .. }) = clean_number(" 1 + ") else {
            panic!("expected an error");
        };
        assert_eq!(expression, "1 +");
    }
}

use crate::{
    error::ExpressionError,
    interpreter::{
        evaluator::{core::EvalResult, function::sqrt},
        value::ComplexNumber,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns a value
/// or an error.
type BuiltinFn = fn(&[ComplexNumber]) -> EvalResult<ComplexNumber>;

/// Metadata for one builtin: its name, exact arity and implementation.
struct BuiltinDef {
    name:  &'static str,
    arity: usize,
    func:  BuiltinFn,
}

static BUILTIN_TABLE: &[BuiltinDef] = &[BuiltinDef { name:  "sqrt",
                                                     arity: 1,
                                                     func:  sqrt::sqrt, }];

/// Names of every builtin function.
pub const BUILTIN_FUNCTIONS: &[&str] = &["sqrt"];

/// Evaluates a function call.
///
/// # Parameters
/// - `name`: Function name.
/// - `args`: Evaluated argument values.
/// - `position`: Offset of the call, for error reporting.
///
/// # Errors
/// - `UnknownFunction` if `name` is not a builtin.
/// - `ArgumentCountMismatch` on the wrong number of arguments.
/// - Whatever the builtin itself reports.
///
/// # Example
/// ```
/// use graph_gen::interpreter::{evaluator::function::core::eval_function, value::ComplexNumber};
///
/// assert_eq!(eval_function("sqrt", &[9.0.into()], 0).unwrap(),
///            ComplexNumber::from(3.0));
/// assert!(eval_function("cbrt", &[8.0.into()], 0).is_err());
/// ```
pub fn eval_function(name: &str,
                     args: &[ComplexNumber],
                     position: usize)
                     -> EvalResult<ComplexNumber> {
    let builtin = BUILTIN_TABLE.iter()
                               .find(|b| b.name == name)
                               .ok_or_else(|| ExpressionError::UnknownFunction { name: name.to_string(),
                                                                                 position })?;

    if args.len() != builtin.arity {
        return Err(ExpressionError::ArgumentCountMismatch { name:     name.to_string(),
                                                            expected: builtin.arity,
                                                            found:    args.len(), });
    }

    (builtin.func)(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_builtin_is_in_the_table() {
        for name in BUILTIN_FUNCTIONS {
            assert!(BUILTIN_TABLE.iter().any(|b| b.name == *name));
        }
    }

    #[test]
    fn arity_is_checked() {
        assert_eq!(eval_function("sqrt", &[1.0.into(), 2.0.into()], 0),
                   Err(ExpressionError::ArgumentCountMismatch { name:     "sqrt".to_string(),
                                                                expected: 1,
                                                                found:    2, }));
        assert!(eval_function("sqrt", &[], 0).is_err());
    }
}

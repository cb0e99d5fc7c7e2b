use crate::{
    ast::Expr,
    error::ExpressionError,
    interpreter::{
        evaluator::{binary::core::eval_binary, function::core::eval_function, unary::eval_unary},
        value::ComplexNumber,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ExpressionError` describing the failure.
pub type EvalResult<T> = Result<T, ExpressionError>;

/// Evaluates an expression and returns the resulting value.
///
/// The evaluator dispatches based on expression variant: literals, unary and
/// binary operations, and function calls. Arguments are evaluated left to
/// right before the function is looked up.
///
/// # Example
/// ```
/// use graph_gen::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{evaluator::core::eval, value::ComplexNumber},
/// };
///
/// let expr = Expr::BinaryOp { left:     Box::new(Expr::Literal { value:    1.0.into(),
///                                                                position: 0, }),
///                             op:       BinaryOperator::Add,
///                             right:    Box::new(Expr::Literal { value:    ComplexNumber::new(0.0, 1.0),
///                                                                position: 4, }),
///                             position: 2, };
/// assert_eq!(eval(&expr).unwrap(), ComplexNumber::new(1.0, 1.0));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<ComplexNumber> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::UnaryOp { op, expr, .. } => Ok(eval_unary(*op, eval(expr)?)),
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = eval(left)?;
            let right = eval(right)?;
            eval_binary(*op, left, right, *position)
        },
        Expr::FunctionCall { name,
                             arguments,
                             position, } => {
            let values = arguments.iter().map(eval).collect::<EvalResult<Vec<_>>>()?;
            eval_function(name, &values, *position)
        },
    }
}

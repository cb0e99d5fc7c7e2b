use crate::interpreter::value::ComplexNumber;

/// An abstract syntax tree (AST) node representing a numeric expression.
///
/// Every node remembers a byte offset so evaluation errors can point back
/// into the expression text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant: a number, an imaginary literal such as `2i`, `i` or `pi`.
    Literal {
        /// The constant value.
        value:    ComplexNumber,
        /// Offset in the expression text.
        position: usize,
    },
    /// A prefix operation such as `-x`.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        expr:     Box<Self>,
        /// Offset of the operator.
        position: usize,
    },
    /// A binary operation such as `a + b` or `a ^ b`.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Offset of the operator.
        position: usize,
    },
    /// A call to a builtin function, such as `sqrt(2)`.
    FunctionCall {
        /// Name of the function.
        name:      String,
        /// Argument expressions.
        arguments: Vec<Self>,
        /// Offset of the name.
        position:  usize,
    },
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `+x`
    Plus,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^` or `**`
    Pow,
}

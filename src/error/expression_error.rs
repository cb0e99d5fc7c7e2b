#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a numeric expression.
///
/// Positions are byte offsets into the expression text.
pub enum ExpressionError {
    /// A character that cannot start any token.
    UnexpectedCharacter {
        /// The offending slice of input.
        found:    String,
        /// Where the slice starts.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of the expression unexpectedly.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Position of the matching `(`.
        position: usize,
    },
    /// Found extra tokens after the expression should have ended.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where the token starts.
        position: usize,
    },
    /// A name that is neither `i`, `j` nor `pi`.
    UnknownIdentifier {
        /// The name.
        name:     String,
        /// Where the name starts.
        position: usize,
    },
    /// Called a function that is not a builtin.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Where the call starts.
        position: usize,
    },
    /// A builtin was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// How many arguments the builtin takes.
        expected: usize,
        /// How many were supplied.
        found:    usize,
    },
    /// Attempted division by zero, or zero raised to a negative power.
    DivisionByZero {
        /// Position of the operator.
        position: usize,
    },
    /// A power overflowed to a non-finite value.
    Overflow {
        /// Position of the operator.
        position: usize,
    },
    /// The expression nests deeper than the parser allows.
    TooDeeplyNested {
        /// Where the limit was hit.
        position: usize,
    },
    /// `sqrt` was given a negative or non-real argument.
    InvalidSqrtArgument {
        /// The argument, formatted.
        argument: String,
    },
    /// A plain float argument could not be read.
    NotANumber {
        /// The text that failed to parse.
        text: String,
    },
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, position } => {
                write!(f, "unexpected character '{found}' at column {}", position + 1)
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "unexpected {token} at column {}", position + 1)
            },
            Self::UnexpectedEndOfInput => write!(f, "unexpected end of expression"),
            Self::ExpectedClosingParen { position } => write!(f,
                                                              "the '(' at column {} is never closed",
                                                              position + 1),
            Self::UnexpectedTrailingTokens { token, position } => {
                write!(f, "extra {token} at column {} after the expression", position + 1)
            },
            Self::UnknownIdentifier { name, position } => write!(f,
                                                                 "unknown name '{name}' at column {}; only i, j and pi are allowed",
                                                                 position + 1),
            Self::UnknownFunction { name, position } => {
                write!(f, "unknown function '{name}' at column {}", position + 1)
            },
            Self::ArgumentCountMismatch { name, expected, found } => write!(f,
                                                                            "'{name}' takes {expected} argument(s) but was given {found}"),
            Self::DivisionByZero { position } => {
                write!(f, "division by zero at column {}", position + 1)
            },
            Self::Overflow { position } => {
                write!(f, "power at column {} is too large", position + 1)
            },
            Self::TooDeeplyNested { position } => {
                write!(f, "expression is nested too deeply at column {}", position + 1)
            },
            Self::InvalidSqrtArgument { argument } => {
                write!(f, "sqrt is only defined for non-negative real numbers, not {argument}")
            },
            Self::NotANumber { text } => write!(f, "'{text}' is not a number"),
        }
    }
}

impl std::error::Error for ExpressionError {}

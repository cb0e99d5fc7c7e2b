use crate::{error::ExpressionError, interpreter::value::coordinate::Coordinate};

/// Where to look up the accepted color names.
pub const COLOR_REFERENCE: &str = "http://www.w3schools.com/html/html_colornames.asp";

#[derive(Debug, Clone, PartialEq)]
/// Represents every way a single script line can fail.
///
/// Each variant is raised where the problem is detected and travels up to the
/// parse loop untouched; the loop attaches the line number (see
/// [`LineError`](crate::error::LineError)).
pub enum ScriptError {
    /// Tried to define a variable that already exists.
    OverridingSymbol {
        /// The name of the variable.
        name:  String,
        /// The value the script tried to bind.
        value: Coordinate,
    },
    /// Referred to a variable that was never defined.
    FetchingNonexistentSymbol {
        /// The name of the variable.
        name: String,
    },
    /// A bracketed coordinate without its closing `]`.
    ImproperCoordinate {
        /// The coordinate as written.
        coordinate: String,
    },
    /// A bracketed coordinate that does not have exactly two components.
    WrongNumberOfCommas {
        /// The coordinate contents, without brackets.
        coordinate: String,
        /// The number of components found.
        found:      usize,
    },
    /// A command received the wrong number of arguments.
    WrongNumberOfArguments {
        /// The command.
        command:  &'static str,
        /// How many arguments the command takes.
        expected: usize,
        /// How many it was given.
        found:    usize,
    },
    /// A command name that is not recognized.
    UnknownCommand {
        /// The command as written.
        command: String,
    },
    /// A color that is neither a known name nor `#rrggbb`.
    InvalidColor {
        /// The color as written, lowercased.
        color: String,
    },
    /// A numeric expression that could not be evaluated.
    InvalidExpression {
        /// The expression as written.
        expression: String,
        /// Why evaluation failed.
        cause:      ExpressionError,
    },
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OverridingSymbol { name, value } => {
                write!(f, "Overwriting point {name} with {value}")
            },
            Self::FetchingNonexistentSymbol { name } => {
                write!(f, "Referring to nonexistent point {name}")
            },
            Self::ImproperCoordinate { coordinate } => write!(f,
                                                              "Coordinate {coordinate} is missing a close bracket \"]\""),
            Self::WrongNumberOfCommas { coordinate, found } if *found < 2 => {
                write!(f, "Coordinate {coordinate} is missing a comma")
            },
            Self::WrongNumberOfCommas { coordinate, .. } => {
                write!(f, "Coordinate {coordinate} has too many commas")
            },
            Self::WrongNumberOfArguments { command,
                                           expected,
                                           found, } => write!(f,
                                                              "The \"{command}\" command requires {expected} value(s). You have {found} value(s).\nDid you remember to add a comma?"),
            Self::UnknownCommand { command } => write!(f, "Unknown command found: {command}"),
            Self::InvalidColor { color } => write!(f,
                                                   "\"{color}\" is not a valid color.\nSee {COLOR_REFERENCE} for a list of all valid colors, or use hex colors."),
            Self::InvalidExpression { expression, cause } => {
                write!(f, "Invalid Expression: {expression} ({cause})")
            },
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidExpression { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

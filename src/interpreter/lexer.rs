use logos::Logos;

use crate::error::ExpressionError;

/// Represents a lexical token of a numeric expression.
///
/// Names are kept as plain identifiers here; the parser decides whether one is
/// the imaginary unit, `pi`, or a function.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literals such as `3`, `3.14`, `5.`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// Names such as `i`, `pi` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `^`
    #[token("^")]
    Caret,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "name '{name}'"),
            Self::DoubleStar => write!(f, "'**'"),
            Self::Caret => write!(f, "'^'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Splits an expression into `(token, byte offset)` pairs.
///
/// # Errors
/// Returns [`ExpressionError::UnexpectedCharacter`] for input no token
/// matches.
///
/// # Example
/// ```
/// use graph_gen::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2^3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0), (Token::Caret, 1), (Token::Number(3.0), 2)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ExpressionError::UnexpectedCharacter { found:    lexer.slice().to_string(),
                                                              position: lexer.span().start, });
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float.
fn parse_float(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ExpressionError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ExpressionError>;

/// How deep expressions may nest: parentheses, signs, call arguments and
/// operator chains all count.
pub const MAX_DEPTH: usize = 256;

/// Steps one level deeper into the expression.
///
/// # Errors
/// `TooDeeplyNested` once `depth` reaches [`MAX_DEPTH`].
pub(in crate::interpreter::parser) fn descend(depth: usize,
                                              position: usize)
                                              -> ParseResult<usize> {
    if depth >= MAX_DEPTH {
        Err(ExpressionError::TooDeeplyNested { position })
    } else {
        Ok(depth + 1)
    }
}

/// Parses a full expression.
///
/// This is the entry point for recursive descent. It begins at the
/// lowest-precedence level and descends through the hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `depth`: Current nesting depth, `0` at the top.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, depth)
}

/// Parses a token list that must contain exactly one expression.
///
/// # Errors
/// - Whatever [`parse_expression`] reports, including `TooDeeplyNested`.
/// - `UnexpectedTrailingTokens` if anything is left over.
///
/// # Example
/// ```
/// use graph_gen::interpreter::{lexer::tokenize, parser::core::parse_complete};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert!(parse_complete(&tokens).is_ok());
///
/// let tokens = tokenize("1 2").unwrap();
/// assert!(parse_complete(&tokens).is_err());
/// ```
pub fn parse_complete(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        None => Ok(expr),
        Some((token, position)) => {
            Err(ExpressionError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                            position: *position, })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parse(source: &str) -> ParseResult<Expr> {
        parse_complete(&tokenize(source)?)
    }

    #[test]
    fn deep_parentheses_are_rejected() {
        let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(parse(&source), Err(ExpressionError::TooDeeplyNested { .. })));
    }

    #[test]
    fn long_sign_runs_are_rejected() {
        let source = format!("{}1", "-".repeat(200_000));
        assert!(matches!(parse(&source), Err(ExpressionError::TooDeeplyNested { .. })));
    }

    #[test]
    fn long_operator_chains_are_rejected() {
        let source = vec!["1"; 10_000].join(" + ");
        assert!(matches!(parse(&source), Err(ExpressionError::TooDeeplyNested { .. })));

        let source = vec!["2"; 10_000].join("^");
        assert!(matches!(parse(&source), Err(ExpressionError::TooDeeplyNested { .. })));
    }

    #[test]
    fn moderate_nesting_is_fine() {
        let source = format!("{}1{}", "(".repeat(40), ")".repeat(40));
        assert!(parse(&source).is_ok());
        assert!(parse(&vec!["1"; 50].join(" * ")).is_ok());
    }
}

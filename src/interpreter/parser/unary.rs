use std::{f64::consts::PI, iter::Peekable};

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ExpressionError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, descend, parse_expression},
            utils::parse_comma_separated,
        },
        value::{ComplexNumber, complex::I},
    },
};

/// Names that stand for the imaginary unit.
pub const IMAGINARY_UNITS: &[&str] = &["i", "j"];

/// Parses a unary expression.
///
/// Supports the prefix signs `-` and `+`. They bind looser than powers, so
/// `-2^2` is `-(2^2)`. Every path into a nested expression passes through
/// here, so this is where the depth limit is enforced.
///
/// Grammar:
/// ```text
///     unary := ("-" | "+") unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let depth = descend(depth, tokens.peek().map_or(0, |(_, position)| *position))?;

    let op = match tokens.peek() {
        Some((Token::Minus, position)) => Some((UnaryOperator::Negate, *position)),
        Some((Token::Plus, position)) => Some((UnaryOperator::Plus, *position)),
        _ => None,
    };

    if let Some((op, position)) = op {
        tokens.next();
        let expr = parse_unary(tokens, depth)?;
        return Ok(Expr::UnaryOp { op,
                                  expr: Box::new(expr),
                                  position });
    }

    parse_power(tokens, depth)
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes the operator
/// right-associative (`2^3^2` is `2^(3^2)`) and allows `2^-1`.
///
/// Grammar: `power := primary (("^" | "**") unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens, depth)?;

    if let Some((Token::Caret | Token::DoubleStar, position)) = tokens.peek() {
        let position = *position;
        tokens.next();
        let exponent = parse_unary(tokens, depth)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   position });
    }

    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "(" expression ")"
/// ```
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), position)) => parse_literal(tokens, *n, *position),
        Some((Token::LParen, position)) => parse_grouping(tokens, *position, depth),
        Some((Token::Identifier(name), position)) => {
            parse_identifier_or_function(tokens, name, *position, depth)
        },
        Some((tok, position)) => Err(ExpressionError::UnexpectedToken { token:    tok.to_string(),
                                                                        position: *position, }),
        None => Err(ExpressionError::UnexpectedEndOfInput),
    }
}

/// Parses the remainder of a numeric literal.
///
/// A number directly followed by `i` or `j` is an imaginary literal; any
/// other name in that spot is an error.
///
/// Grammar: `literal := NUMBER [("i" | "j")]?`
fn parse_literal<'a, I>(tokens: &mut Peekable<I>, n: f64, position: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(id), id_position)) = tokens.peek() {
        if IMAGINARY_UNITS.contains(&id.as_str()) {
            tokens.next();
            return Ok(Expr::Literal { value: ComplexNumber::new(0.0, n),
                                      position });
        }
        return Err(ExpressionError::UnexpectedToken { token:    format!("name '{id}'"),
                                                      position: *id_position, });
    }

    Ok(Expr::Literal { value: n.into(),
                       position })
}

/// Parses a parenthesized expression.
///
/// Grammar `grouping := "(" expression ")"`
///
/// The opening parenthesis has already been consumed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         position: usize,
                         depth: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ExpressionError::ExpectedClosingParen { position }),
    }
}

/// Parses a name: the imaginary unit, `pi`, or a function call.
///
/// Whether a called function exists is checked at evaluation time.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       name: &str,
                                       position: usize,
                                       depth: usize)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens,
                                                  |tokens| parse_expression(tokens, depth),
                                                  &Token::RParen)?;
            Ok(Expr::FunctionCall { name: name.to_string(),
                                    arguments,
                                    position })
        },
        _ if IMAGINARY_UNITS.contains(&name) => Ok(Expr::Literal { value: I, position }),
        _ if name == "pi" => Ok(Expr::Literal { value: PI.into(),
                                                position }),
        _ => Err(ExpressionError::UnknownIdentifier { name: name.to_string(),
                                                      position }),
    }
}

use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume, current, match_kinds},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so `--x` is parsed as `-(-x)` and
/// `!-x` as `!(-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(operator) = match_kinds(tokens, &[TokenKind::Bang, TokenKind::Minus]) {
        let operand = parse_unary(tokens)?;
        return Ok(Expr::unary(operator.clone(), operand));
    }

    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := "false" | "true" | "nil"
///              | NUMBER | STRING
///              | "(" expression ")"
/// ```
///
/// # Errors
/// Returns `ParseError::ExpectedExpression` anchored at the current token if
/// no primary expression starts there.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens)?;

    match token.kind {
        TokenKind::False => {
            tokens.next();
            Ok(Expr::literal(false))
        },
        TokenKind::True => {
            tokens.next();
            Ok(Expr::literal(true))
        },
        TokenKind::Nil => {
            tokens.next();
            Ok(Expr::literal(LiteralValue::Nil))
        },
        TokenKind::Number | TokenKind::String => parse_literal(tokens),
        TokenKind::LeftParen => parse_grouping(tokens),
        _ => Err(ParseError::ExpectedExpression { token: token.clone() }),
    }
}

/// Parses a number or string literal from its decoded token payload.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens)?;
    let value = token.literal
                     .as_ref()
                     .map(LiteralValue::from)
                     .ok_or_else(|| ParseError::ExpectedExpression { token: token.clone() })?;
    tokens.next();

    Ok(Expr::literal(value))
}

/// Parses a parenthesized expression into a grouping node.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// Returns `ParseError::ExpectedClosingParen` if the `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    tokens.next();
    let inner = parse_expression(tokens)?;
    consume(tokens, TokenKind::RightParen, |token| {
        ParseError::ExpectedClosingParen { token }
    })?;

    Ok(Expr::grouping(inner))
}

use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        parser::{core::ParseResult, unary::parse_unary, utils::match_kinds},
        token::{Token, TokenKind},
    },
};

/// Operators of the equality level.
pub const EQUALITY_OPERATORS: [TokenKind; 2] = [TokenKind::BangEqual, TokenKind::EqualEqual];
/// Operators of the comparison level.
pub const COMPARISON_OPERATORS: [TokenKind; 4] = [TokenKind::Greater,
                                                  TokenKind::GreaterEqual,
                                                  TokenKind::Less,
                                                  TokenKind::LessEqual];
/// Operators of the term level.
pub const TERM_OPERATORS: [TokenKind; 2] = [TokenKind::Plus, TokenKind::Minus];
/// Operators of the factor level.
pub const FACTOR_OPERATORS: [TokenKind; 2] = [TokenKind::Star, TokenKind::Slash];

/// Parses a left-associative chain of binary operators.
///
/// Parses one operand with `parse_operand`, then keeps folding
/// `operator operand` pairs into the left side while the next token is one of
/// `operators`, so `a - b - c` becomes `(a - b) - c`.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operators: &[TokenKind],
                                 parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_operand(tokens)?;

    while let Some(operator) = match_kinds(tokens, operators) {
        let right = parse_operand(tokens)?;
        left = Expr::binary(left, operator.clone(), right);
    }

    Ok(left)
}

/// Parses equality expressions.
///
/// Grammar: `equality := comparison (("!=" | "==") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, &EQUALITY_OPERATORS, parse_comparison)
}

/// Parses relational comparisons.
///
/// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, &COMPARISON_OPERATORS, parse_term)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `term := factor (("+" | "-") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, &TERM_OPERATORS, parse_factor)
}

/// Parses multiplication and division expressions.
///
/// Grammar: `factor := unary (("*" | "/") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_associative(tokens, &FACTOR_OPERATORS, parse_unary)
}

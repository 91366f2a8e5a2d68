use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::{
            binary::parse_equality,
            utils::{consume, current, match_kinds},
        },
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence as a single expression.
///
/// The whole input must form one expression followed by the end-of-input
/// token. On error nothing is returned but the error; there is no partial
/// tree.
///
/// # Errors
/// Returns the first syntax error found.
///
/// # Example
/// ```
/// use lumen::interpreter::{parser::core::parse, printer::print, scanner::scan};
///
/// let tokens = scan("1 + 2 * 3").tokens;
/// let expr = parse(&tokens).unwrap();
///
/// assert_eq!(print(&expr), "(+ 1 (* 2 3))");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    let next = current(&mut iter)?;
    if next.kind != TokenKind::Eof {
        return Err(ParseError::UnexpectedTrailingTokens { token: next.clone() });
    }

    log::debug!("parsed expression: {expr}");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing inside statements and
/// groupings. It begins at the lowest-precedence level, the ternary
/// conditional, and recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := ternary`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_ternary(tokens)
}

/// Parses a ternary conditional.
///
/// Both branches are full ternaries, so chains nest to the right:
/// `a ? b : c ? d : e` parses as `a ? b : (c ? d : e)`. Without a `?` the
/// equality-level expression is returned unchanged.
///
/// Grammar: `ternary := equality ("?" ternary ":" ternary)?`
///
/// # Errors
/// - `ExpectedTernaryColon` if the `:` is missing.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_ternary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let condition = parse_equality(tokens)?;

    if match_kinds(tokens, &[TokenKind::Question]).is_none() {
        return Ok(condition);
    }

    let then_branch = parse_ternary(tokens)?;
    consume(tokens, TokenKind::Colon, |token| ParseError::ExpectedTernaryColon { token })?;
    let else_branch = parse_ternary(tokens)?;

    Ok(Expr::ternary(condition, then_branch, else_branch))
}

use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume, is_at_end, match_kinds},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a complete token sequence as a list of statements.
///
/// After a syntax error the parser skips to the next statement boundary and
/// keeps going, so every broken statement in the input is reported.
///
/// Grammar: `program := statement* EOF`
///
/// # Errors
/// Returns all syntax errors found, in source order.
///
/// # Example
/// ```
/// use lumen::interpreter::{parser::statement::parse_program, scanner::scan};
///
/// let tokens = scan("print 1; 2 + 3;").tokens;
/// assert_eq!(parse_program(&tokens).unwrap().len(), 2);
///
/// let tokens = scan("print ; print (1;").tokens;
/// assert_eq!(parse_program(&tokens).unwrap_err().len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> Result<Vec<Statement>, Vec<ParseError>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while !is_at_end(&mut iter) {
        match parse_statement(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(e) => {
                log::debug!("recovering from syntax error: {e}");
                errors.push(e);
                synchronize(&mut iter);
            },
        }
    }

    if errors.is_empty() {
        Ok(statements)
    } else {
        Err(errors)
    }
}

/// Parses a single statement.
///
/// Grammar:
/// ```text
///     statement := "print" expression ";"
///                | expression ";"
/// ```
///
/// # Errors
/// Returns the first syntax error of the statement, including a missing `;`.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if match_kinds(tokens, &[TokenKind::Print]).is_some() {
        let value = parse_expression(tokens)?;
        consume(tokens, TokenKind::Semicolon, |token| {
            ParseError::ExpectedSemicolonAfterValue { token }
        })?;

        return Ok(Statement::Print(value));
    }

    let expr = parse_expression(tokens)?;
    consume(tokens, TokenKind::Semicolon, |token| {
        ParseError::ExpectedSemicolonAfterExpression { token }
    })?;

    Ok(Statement::Expression(expr))
}

/// Discards tokens until a likely statement boundary.
///
/// Always consumes at least one token unless only `Eof` is left. Stops right
/// after a `;`, or right before a keyword that starts a statement.
pub fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    let Some(mut previous) = tokens.next_if(|token| token.kind != TokenKind::Eof) else {
        return;
    };

    while previous.kind != TokenKind::Semicolon {
        match tokens.next_if(|token| {
                        token.kind != TokenKind::Eof && !token.kind.starts_statement()
                    }) {
            Some(token) => previous = token,
            None => return,
        }
    }
}

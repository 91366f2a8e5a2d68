use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// Returns the next token without consuming it.
///
/// A scanned token sequence always ends with `Eof`, which no rule consumes, so
/// this only fails for hand-built sequences missing the end marker.
///
/// # Errors
/// Returns `ParseError::UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn current<'a, I>(tokens: &mut Peekable<I>)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().ok_or(ParseError::UnexpectedEndOfInput)
}

/// Consumes the next token if its kind is one of `kinds`.
///
/// # Returns
/// The consumed token, or `None` if the next token did not match.
pub(in crate::interpreter::parser) fn match_kinds<'a, I>(tokens: &mut Peekable<I>,
                                                         kinds: &[TokenKind])
                                                         -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| kinds.contains(&token.kind))
}

/// Consumes a token of the given kind or fails with an error built from the
/// token found instead.
///
/// # Errors
/// Returns the error produced by `error` if the next token has another kind.
pub(in crate::interpreter::parser) fn consume<'a, I>(tokens: &mut Peekable<I>,
                                                     kind: TokenKind,
                                                     error: impl FnOnce(Token) -> ParseError)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.next_if(|token| token.kind == kind) {
        return Ok(token);
    }

    Err(error(current(tokens)?.clone()))
}

/// Returns `true` once only the end-of-input token is left.
pub(in crate::interpreter::parser) fn is_at_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().is_none_or(|token| token.kind == TokenKind::Eof)
}

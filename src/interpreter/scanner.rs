use logos::Logos;

use crate::{
    error::ScanError,
    interpreter::{
        lexer::{LexerExtras, LexicalError, RawToken},
        token::{Literal, Token, TokenKind},
    },
};

/// The result of scanning a source string.
///
/// Tokens are always produced, even when errors were found, so that the parser
/// can still report syntax errors for the same input.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    /// The tokens, always terminated by exactly one `Eof` token.
    pub tokens: Vec<Token>,
    /// Lexical errors, in source order.
    pub errors: Vec<ScanError>,
}

impl Scanned {
    /// Returns `true` if scanning reported no errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Scans source text into a sequence of tokens.
///
/// Whitespace and `//` comments are skipped. Unexpected characters and
/// unterminated strings are recorded in [`Scanned::errors`] and scanning
/// continues with the next character.
///
/// # Example
/// ```
/// use lumen::interpreter::{scanner::scan, token::TokenKind};
///
/// let scanned = scan("1 >= 2 // compare");
/// let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::GreaterEqual, TokenKind::Number, TokenKind::Eof]);
/// assert!(scanned.is_clean());
/// ```
#[must_use]
pub fn scan(source: &str) -> Scanned {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        let lexeme = lexer.slice();

        match result {
            Ok(raw) => tokens.push(into_token(raw, lexeme, line)),
            Err(LexicalError::UnterminatedString) => {
                errors.push(ScanError::UnterminatedString { line });
            },
            Err(LexicalError::UnexpectedCharacter) => {
                for character in lexeme.chars() {
                    errors.push(ScanError::UnexpectedCharacter { character, line });
                }
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    log::trace!("scanned {} tokens with {} errors", tokens.len(), errors.len());

    Scanned { tokens, errors }
}

/// Builds a token from a raw lexer token and its source slice.
fn into_token(raw: RawToken, lexeme: &str, line: usize) -> Token {
    let kind = match raw {
        RawToken::Number(n) => {
            return Token::with_literal(TokenKind::Number, lexeme, Literal::Number(n), line);
        },
        RawToken::String(s) => {
            return Token::with_literal(TokenKind::String, lexeme, Literal::Str(s), line);
        },
        RawToken::And => TokenKind::And,
        RawToken::Class => TokenKind::Class,
        RawToken::Else => TokenKind::Else,
        RawToken::False => TokenKind::False,
        RawToken::For => TokenKind::For,
        RawToken::Fun => TokenKind::Fun,
        RawToken::If => TokenKind::If,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Or => TokenKind::Or,
        RawToken::Print => TokenKind::Print,
        RawToken::Return => TokenKind::Return,
        RawToken::Super => TokenKind::Super,
        RawToken::This => TokenKind::This,
        RawToken::True => TokenKind::True,
        RawToken::Var => TokenKind::Var,
        RawToken::While => TokenKind::While,
        RawToken::Identifier => TokenKind::Identifier,
        RawToken::LeftParen => TokenKind::LeftParen,
        RawToken::RightParen => TokenKind::RightParen,
        RawToken::LeftBrace => TokenKind::LeftBrace,
        RawToken::RightBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Question => TokenKind::Question,
        RawToken::Colon => TokenKind::Colon,
        RawToken::BangEqual => TokenKind::BangEqual,
        RawToken::Bang => TokenKind::Bang,
        RawToken::EqualEqual => TokenKind::EqualEqual,
        RawToken::Equal => TokenKind::Equal,
        RawToken::GreaterEqual => TokenKind::GreaterEqual,
        RawToken::Greater => TokenKind::Greater,
        RawToken::LessEqual => TokenKind::LessEqual,
        RawToken::Less => TokenKind::Less,
        // Skipped or turned into errors by their callbacks.
        RawToken::UnterminatedString
        | RawToken::Comment
        | RawToken::NewLine
        | RawToken::Ignored => unreachable!("lexer emitted a skipped token"),
    };

    Token::new(kind, lexeme, line)
}

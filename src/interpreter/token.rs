/// Lexeme of the end-of-input token.
pub const EOF_LEXEME: &str = "";

/// The kind of a lexical unit.
///
/// This is the closed set of token categories the parser dispatches on. Some
/// kinds (braces, `,`, `.`, `=`, most keywords) are scanned but never accepted
/// by the expression grammar; they exist so that such input is reported as a
/// syntax error at the right token instead of as an unexpected character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// Any identifier that is not a keyword.
    Identifier,
    /// A string literal, e.g. `"abc"`.
    String,
    /// A number literal, e.g. `3.14`.
    Number,
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `for`
    For,
    /// `fun`
    Fun,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,
    /// End of input. Always the last token of a scanned sequence.
    Eof,
}

impl TokenKind {
    /// Returns `true` for keywords that can begin a statement.
    ///
    /// The parser stops discarding tokens in front of one of these when it
    /// recovers from a syntax error.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::token::TokenKind;
    ///
    /// assert!(TokenKind::Print.starts_statement());
    /// assert!(!TokenKind::Plus.starts_statement());
    /// ```
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }
}

/// A decoded literal payload carried by number and string tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The value of a number literal.
    Number(f64),
    /// The contents of a string literal, without the surrounding quotes.
    Str(String),
}

/// A single lexical unit.
///
/// Tokens are produced by [`crate::interpreter::scanner::scan`] and are never
/// modified afterwards. The parser clones operator tokens into the AST so that
/// runtime errors can point back at the source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The category of the token.
    pub kind:    TokenKind,
    /// The exact source text of the token.
    pub lexeme:  String,
    /// The decoded value for number and string literals.
    pub literal: Option<Literal>,
    /// The 1-based source line on which the token ends.
    pub line:    usize,
}

impl Token {
    /// Creates a token without a literal payload.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::token::{Token, TokenKind};
    ///
    /// let plus = Token::new(TokenKind::Plus, "+", 1);
    /// assert_eq!(plus.lexeme, "+");
    /// assert!(plus.literal.is_none());
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: None,
               line }
    }

    /// Creates a token carrying a decoded literal.
    #[must_use]
    pub fn with_literal(kind: TokenKind,
                        lexeme: impl Into<String>,
                        literal: Literal,
                        line: usize)
                        -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: Some(literal),
               line }
    }

    /// Creates the end-of-input token for the given line.
    #[must_use]
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, EOF_LEXEME, line)
    }

    /// Describes where this token sits, for diagnostics.
    ///
    /// Returns ` at end` for the end-of-input token and ` at '<lexeme>'`
    /// otherwise.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::token::{Token, TokenKind};
    ///
    /// assert_eq!(Token::eof(3).location(), " at end");
    /// assert_eq!(Token::new(TokenKind::Minus, "-", 1).location(), " at '-'");
    /// ```
    #[must_use]
    pub fn location(&self) -> String {
        if self.kind == TokenKind::Eof {
            " at end".to_string()
        } else {
            format!(" at '{}'", self.lexeme)
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(Literal::Number(n)) => write!(f, "{:?} {} {n}", self.kind, self.lexeme),
            Some(Literal::Str(s)) => write!(f, "{:?} {} {s}", self.kind, self.lexeme),
            None => write!(f, "{:?} {}", self.kind, self.lexeme),
        }
    }
}

use logos::Logos;

/// A raw lexical token recognized by the `logos` state machine.
///
/// The raw form carries decoded literal data directly in its variants. The
/// scanner turns every raw token into a [`crate::interpreter::token::Token`]
/// together with its lexeme and line number.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexicalError)]
pub enum RawToken {
    /// Number literals such as `42` or `3.14`. No exponent, no leading or
    /// trailing dot.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literals such as `"abc"`. May span several lines.
    #[regex(r#""[^"]*""#, parse_string, allow_greedy = true)]
    String(String),
    /// A string literal missing its closing quote. Never emitted; the
    /// callback always turns it into [`LexicalError::UnterminatedString`].
    #[regex(r#""[^"]*"#, unterminated_string, allow_greedy = true)]
    UnterminatedString,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// Identifiers that are not keywords, such as `x` or `_tmp1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// Line breaks. Counted, then skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Errors produced by the raw lexer.
///
/// Unrecognized input maps to the default variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexicalError {
    /// A character that starts no token.
    #[default]
    UnexpectedCharacter,
    /// A `"` with no matching closing quote before end of input.
    UnterminatedString,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a number literal from the current token slice.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Decodes a string literal, dropping the quotes.
///
/// Newlines inside the literal advance the line counter so that the token
/// reports the line on which it ends.
fn parse_string(lex: &mut logos::Lexer<RawToken>) -> String {
    let newlines = count_newlines(lex.slice());
    lex.extras.line += newlines;

    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Consumes an unterminated string literal and reports it as an error.
fn unterminated_string(lex: &mut logos::Lexer<RawToken>) -> Result<(), LexicalError> {
    let newlines = count_newlines(lex.slice());
    lex.extras.line += newlines;

    Err(LexicalError::UnterminatedString)
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

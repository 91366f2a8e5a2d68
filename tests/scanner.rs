use lumen::{
    error::ScanError,
    interpreter::{
        scanner::scan,
        token::{Literal, TokenKind},
    },
};

fn kinds(src: &str) -> Vec<TokenKind> {
    scan(src).tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn operators_prefer_the_longest_match() {
    use TokenKind::*;

    assert_eq!(kinds("! != = == > >= < <="),
               [Bang, BangEqual, Equal, EqualEqual, Greater, GreaterEqual, Less, LessEqual, Eof]);
    assert_eq!(kinds("(){},.-+;*/?:"),
               [LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus,
                Semicolon, Star, Slash, Question, Colon, Eof]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::*;

    assert_eq!(kinds("and class else false for fun if nil or print return super this true var \
                      while"),
               [And, Class, Else, False, For, Fun, If, Nil, Or, Print, Return, Super, This, True,
                Var, While, Eof]);
    assert_eq!(kinds("orchid _x1 truthy"), [Identifier, Identifier, Identifier, Eof]);
}

#[test]
fn number_literals_carry_their_value() {
    let scanned = scan("12 3.25 7.");
    let tokens = &scanned.tokens;

    assert_eq!(tokens[0].literal, Some(Literal::Number(12.0)));
    assert_eq!(tokens[1].literal, Some(Literal::Number(3.25)));
    assert_eq!(tokens[1].lexeme, "3.25");
    assert_eq!(tokens[2].literal, Some(Literal::Number(7.0)));
    assert_eq!(tokens[3].kind, TokenKind::Dot);
    assert!(scanned.is_clean());
}

#[test]
fn string_literals_drop_their_quotes() {
    let scanned = scan("\"hello world\" \"\"");

    assert_eq!(scanned.tokens[0].kind, TokenKind::String);
    assert_eq!(scanned.tokens[0].lexeme, "\"hello world\"");
    assert_eq!(scanned.tokens[0].literal, Some(Literal::Str("hello world".to_string())));
    assert_eq!(scanned.tokens[1].literal, Some(Literal::Str(String::new())));
}

#[test]
fn lines_are_tracked_across_comments_and_strings() {
    let scanned = scan("1\n// two\n\"three\nfour\" 5\n");
    let lines: Vec<usize> = scanned.tokens.iter().map(|t| t.line).collect();

    assert_eq!(lines, [1, 4, 4, 5]);
}

#[test]
fn eof_is_always_last_and_unique() {
    for src in ["", "   ", "// only a comment", "1 + 2", "@"] {
        let scanned = scan(src);
        let eofs = scanned.tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();

        assert_eq!(eofs, 1, "scanning {src:?}");
        assert_eq!(scanned.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(scanned.tokens.last().map(|t| t.lexeme.as_str()), Some(""));
    }
}

#[test]
fn scanning_continues_after_errors() {
    let scanned = scan("1 @\n$ 2");

    assert_eq!(scanned.errors,
               [ScanError::UnexpectedCharacter { character: '@',
                                                 line: 1, },
                ScanError::UnexpectedCharacter { character: '$',
                                                 line: 2, }]);
    assert_eq!(scanned.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn unterminated_string_is_reported_once() {
    let scanned = scan("1 + \"never closed\nstill open");

    assert_eq!(scanned.errors, [ScanError::UnterminatedString { line: 2 }]);
    assert_eq!(scanned.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::Number, TokenKind::Plus, TokenKind::Eof]);
}

use lumen::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        parser::{core::parse, statement::parse_program},
        printer::print,
        scanner::scan,
        token::{Token, TokenKind},
    },
    render_ast,
};

fn assert_tree(src: &str, expected: &str) {
    match render_ast(src) {
        Ok(tree) => assert_eq!(tree, expected, "parsing {src:?}"),
        Err(e) => panic!("Expression {src:?} failed to parse: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse(&scan(src).tokens) {
        Ok(expr) => panic!("Expression {src:?} parsed as {expr} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_climbs_from_ternary_to_primary() {
    assert_tree("1 + 2*3", "(+ 1 (* 2 3))");
    assert_tree("1 * 2 + 3", "(+ (* 1 2) 3)");
    assert_tree("1 < 2 == true", "(== (< 1 2) true)");
    assert_tree("-1 + 2", "(+ (- 1) 2)");
    assert_tree("1 + 2 > 3 ? 4 : 5", "(ternary (> (+ 1 2) 3) 4 5)");
    assert_tree("!true == false", "(== (! true) false)");
}

#[test]
fn binary_operators_associate_left() {
    assert_tree("1 - 2 - 3", "(- (- 1 2) 3)");
    assert_tree("8 / 4 / 2", "(/ (/ 8 4) 2)");
    assert_tree("1 == 2 != 3", "(!= (== 1 2) 3)");
    assert_tree("1 < 2 <= 3", "(<= (< 1 2) 3)");
}

#[test]
fn unary_and_ternary_associate_right() {
    assert_tree("--1", "(- (- 1))");
    assert_tree("!-1", "(! (- 1))");
    assert_tree("true ? 1 : false ? 2 : 3", "(ternary true 1 (ternary false 2 3))");
    assert_tree("true ? false ? 1 : 2 : 3", "(ternary true (ternary false 1 2) 3)");
}

#[test]
fn groupings_are_kept_in_the_tree() {
    assert_tree("(1 + 2) * 3", "(* (group (+ 1 2)) 3)");
    assert_tree("((nil))", "(group (group nil))");
    assert_tree("(true ? 1 : 2)", "(group (ternary true 1 2))");
}

#[test]
fn literals_render_in_source_form() {
    assert_tree("12", "12");
    assert_tree("2.50", "2.5");
    assert_tree("\"two words\"", "\"two words\"");
    assert_tree("true", "true");
    assert_tree("nil", "nil");
}

#[test]
fn string_literals_stay_distinct_from_numbers() {
    assert_tree("\"1\" + 2", "(+ \"1\" 2)");
    assert_tree("1 == \"1\"", "(== 1 \"1\")");
    assert_ne!(render_ast("\"1\" + 2").unwrap(), render_ast("1 + 2").unwrap());
}

#[test]
fn operator_tokens_keep_their_line() {
    let expr = parse(&scan("1\n+\n2").tokens).unwrap();

    match expr {
        Expr::Binary { operator, .. } => {
            assert_eq!(operator.kind, TokenKind::Plus);
            assert_eq!(operator.line, 2);
        },
        other => panic!("Expected a binary node, got {other:?}"),
    }
}

#[test]
fn hand_built_trees_print_like_parsed_ones() {
    let expr = Expr::binary(Expr::unary(Token::new(TokenKind::Minus, "-", 1), Expr::literal(123.0)),
                            Token::new(TokenKind::Star, "*", 1),
                            Expr::grouping(Expr::literal(45.67)));

    assert_eq!(print(&expr), "(* (- 123) (group 45.67))");
    assert_eq!(expr.to_string(), print(&expr));
}

#[test]
fn errors_point_at_the_offending_token() {
    let e = parse_error("(1 + 2");
    assert!(matches!(e, ParseError::ExpectedClosingParen { .. }));
    assert_eq!(e.token().map(|t| t.kind), Some(TokenKind::Eof));

    let e = parse_error("1 + )");
    assert!(matches!(e, ParseError::ExpectedExpression { .. }));
    assert_eq!(e.to_string(), "[line 1] Error at ')': Expect expression.");

    let e = parse_error("true ? 1 2");
    assert!(matches!(e, ParseError::ExpectedTernaryColon { .. }));
    assert_eq!(e.to_string(), "[line 1] Error at '2': Expect ':' in ternary.");

    let e = parse_error("(1) (2)");
    assert!(matches!(e, ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn missing_end_marker_is_reported() {
    let tokens = [Token::new(TokenKind::Number, "1", 1)];

    assert_eq!(parse(&tokens[..0]), Err(ParseError::UnexpectedEndOfInput));
    assert!(parse(&tokens).is_err());
}

#[test]
fn statements_parse_in_order() {
    let statements = parse_program(&scan("print 1 + 2; nil;").tokens).unwrap();

    assert_eq!(statements.len(), 2);
    assert!(matches!(&statements[0], Statement::Print(expr) if expr.to_string() == "(+ 1 2)"));
    assert!(matches!(&statements[1], Statement::Expression(expr) if expr.to_string() == "nil"));
}

#[test]
fn recovery_resumes_at_the_next_statement() {
    let errors = parse_program(&scan("1 +; print 2\nprint 3; (4;").tokens).unwrap_err();
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();

    assert_eq!(messages,
               ["[line 1] Error at ';': Expect expression.",
                "[line 2] Error at 'print': Expect ';' after value.",
                "[line 2] Error at ';': Expect ')' after expression."]);
}

#[test]
fn recovery_never_skips_the_end_marker() {
    let errors = parse_program(&scan("print").tokens).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "[line 1] Error at end: Expect expression.");
}

use lumen::{
    get_result,
    interpreter::{
        evaluator::core::Interpreter,
        token::{Token, TokenKind},
        value::Value,
    },
    run_program,
};

fn assert_value(src: &str, expected: impl Into<Value>) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected.into(), "evaluating {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_output(src: &str, expected: &str) {
    match get_result(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "evaluating {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &str) {
    match get_result(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(failure) => assert_eq!(failure.to_string(), expected, "evaluating {src:?}"),
    }
}

#[test]
fn arithmetic_follows_precedence_and_associativity() {
    assert_value("2 + 2", 4.0);
    assert_value("2 + 5*8", 42.0);
    assert_value("(2 + 5) * 8", 56.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("48 / 4 / 2", 6.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
    assert_value("2.5 * 2", 5.0);
}

#[test]
fn unary_operators_nest() {
    assert_value("-3", -3.0);
    assert_value("--1", 1.0);
    assert_value("-(2 + 3)", -5.0);
    assert_value("!true", false);
    assert_value("!!nil", false);
    assert_value("!0", false);
    assert_value("!\"\"", false);
    assert_value("!nil", true);
}

#[test]
fn comparisons_and_equality() {
    assert_value("1 < 2", true);
    assert_value("2 <= 2", true);
    assert_value("3 > 4", false);
    assert_value("3 >= 4", false);
    assert_value("1 < 2 == true", true);
    assert_value("1 == 1", true);
    assert_value("1 != 2", true);
    assert_value("\"a\" == \"a\"", true);
    assert_value("\"a\" != \"b\"", true);
}

#[test]
fn equality_never_raises() {
    assert_value("1 == \"1\"", false);
    assert_value("nil == nil", true);
    assert_value("nil == false", false);
    assert_value("true != 1", true);
    assert_value("0 == \"\"", false);
}

#[test]
fn plus_concatenates_when_a_string_is_involved() {
    assert_value("\"1\" + 2", "12");
    assert_value("2 + \"1\"", "21");
    assert_value("\"foo\" + \"bar\"", "foobar");
    assert_value("\"is \" + true", "is true");
    assert_value("nil + \"!\"", "nil!");
    assert_value("\"x\" + 2.5", "x2.5");
    assert_value("2 + 2", 4.0);
}

#[test]
fn ternary_evaluates_only_the_taken_branch() {
    assert_value("true ? 1 : 0", 1.0);
    assert_value("false ? 1/0 : 2", 2.0);
    assert_value("true ? 3 : -\"never\"", 3.0);
    assert_value("nil ? 1 : 2", 2.0);
    assert_value("0 ? \"zero is truthy\" : \"no\"", "zero is truthy");
    assert_value("1 < 2 ? \"less\" : \"more\"", "less");
}

#[test]
fn ternary_is_right_associative() {
    assert_value("true ? 1 : false ? 2 : 3", 1.0);
    assert_value("false ? 1 : false ? 2 : 3", 3.0);
    assert_value("false ? 1 : true ? 2 : 3", 2.0);
    assert_value("true ? false ? 1 : 2 : 3", 2.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("-1 / 0", f64::NEG_INFINITY);

    match get_result("0 / 0") {
        Ok(Value::Number(n)) => assert!(n.is_nan()),
        other => panic!("Expected NaN, got {other:?}"),
    }
}

#[test]
fn values_render_in_natural_form() {
    assert_output("4", "4");
    assert_output("1.5 + 1", "2.5");
    assert_output("nil", "nil");
    assert_output("true", "true");
    assert_output("\"text\"", "text");
    assert_output("1 / 0", "inf");
}

#[test]
fn comments_and_whitespace_are_ignored() {
    assert_value("1 + // the rest of the line\n 2", 3.0);
    assert_value("  \t3\r\n  ", 3.0);
    assert_value("4 // trailing comment", 4.0);
}

#[test]
fn syntax_errors_produce_no_value() {
    assert_failure("(1 + 2", "[line 1] Error at end: Expect ')' after expression.");
    assert_failure("1 +", "[line 1] Error at end: Expect expression.");
    assert_failure("true ? 1", "[line 1] Error at end: Expect ':' in ternary.");
    assert_failure("1 2", "[line 1] Error at '2': Expect end of expression.");
    assert_failure("foo", "[line 1] Error at 'foo': Expect expression.");
    assert_failure("", "[line 1] Error at end: Expect expression.");
}

#[test]
fn syntax_errors_report_their_line() {
    assert_failure("1 +\n\n*", "[line 3] Error at '*': Expect expression.");
}

#[test]
fn scan_errors_are_all_reported() {
    let failure = get_result("1 @ + # 2").unwrap_err();

    assert!(failure.had_error());
    assert!(!failure.had_runtime_error());
    assert_eq!(failure.diagnostics.len(), 2);
    assert_eq!(failure.diagnostics[0].to_string(),
               "[line 1] Error: Unexpected character: @.");
    assert_eq!(failure.diagnostics[1].to_string(),
               "[line 1] Error: Unexpected character: #.");
}

#[test]
fn scan_and_parse_errors_are_reported_together() {
    assert_failure("1 + @",
                   "[line 1] Error: Unexpected character: @.\n[line 1] Error at end: Expect \
                    expression.");
}

#[test]
fn unterminated_string_is_an_error() {
    assert_failure("\"abc",
                   "[line 1] Error: Unterminated string.\n[line 1] Error at end: Expect \
                    expression.");
}

#[test]
fn type_mismatches_are_runtime_errors() {
    assert_failure("-\"a\"", "[line 1] Error at '-': Operand must be a number.");
    assert_failure("-nil", "[line 1] Error at '-': Operand must be a number.");
    assert_failure("1 - \"a\"", "[line 1] Error at '-': Operands must be numbers.");
    assert_failure("true * 2", "[line 1] Error at '*': Operands must be numbers.");
    assert_failure("\"a\" < \"b\"", "[line 1] Error at '<': Operands must be numbers.");
    assert_failure("nil >= 1", "[line 1] Error at '>=': Operands must be numbers.");
    assert_failure("true + 1",
                   "[line 1] Error at '+': Operands must be two numbers, or two strings.");
    assert_failure("nil + nil",
                   "[line 1] Error at '+': Operands must be two numbers, or two strings.");
}

#[test]
fn runtime_errors_set_only_the_runtime_flag() {
    let failure = get_result("1 +\n-true").unwrap_err();

    assert!(failure.had_runtime_error());
    assert!(!failure.had_error());
    assert_eq!(failure.diagnostics[0].line(), 2);
}

#[test]
fn runs_do_not_share_state() {
    assert!(get_result("(").is_err());
    assert_value("1 + 1", 2.0);
    assert!(get_result("-\"x\"").is_err());
    assert_value("2 * 2", 4.0);
}

#[test]
fn program_mode_prints_in_order() {
    assert_eq!(run_program("print 1; print \"a\" + 2; 3 + 4; print nil;").unwrap(),
               ["1", "a2", "nil"]);
    assert!(run_program("").unwrap().is_empty());
}

#[test]
fn program_mode_reports_every_broken_statement() {
    let failure = run_program("print ; print (1;\nprint 3;\n4").unwrap_err();
    let messages: Vec<String> = failure.diagnostics.iter().map(ToString::to_string).collect();

    assert_eq!(messages,
               ["[line 1] Error at ';': Expect expression.",
                "[line 1] Error at ';': Expect ')' after expression.",
                "[line 3] Error at end: Expect ';' after expression."]);
}

#[test]
fn program_mode_stops_at_the_first_runtime_error() {
    let failure = run_program("print 1;\nprint -\"a\";\nprint 2;").unwrap_err();

    assert!(failure.had_runtime_error());
    assert_eq!(failure.to_string(),
               "[line 2] Error at '-': Operand must be a number.");
}

#[test]
fn program_mode_keeps_output_printed_before_a_runtime_error() {
    let failure = run_program("print \"before\"; print 1 + 1; print -\"a\"; print \"after\";")
        .unwrap_err();

    assert!(failure.had_runtime_error());
    assert_eq!(failure.output, ["before", "2"]);
}

#[test]
fn front_end_failures_carry_no_output() {
    assert!(run_program("print 1; print (;").unwrap_err().output.is_empty());
    assert!(get_result("-\"a\"").unwrap_err().output.is_empty());
}

#[test]
#[should_panic(expected = "not an arithmetic operator")]
fn arithmetic_rejects_foreign_operators() {
    let plus = Token::new(TokenKind::Plus, "+", 1);
    let _ = Interpreter::eval_arithmetic(&plus, &Value::Number(1.0), &Value::Number(2.0));
}

#[test]
#[should_panic(expected = "not a comparison operator")]
fn comparison_rejects_foreign_operators() {
    let equal = Token::new(TokenKind::EqualEqual, "==", 1);
    let _ = Interpreter::eval_comparison(&equal, &Value::Number(1.0), &Value::Number(2.0));
}

//! # lumen
//!
//! lumen is a tree-walking evaluator for a small expression language written
//! in Rust. It scans, parses and evaluates expressions built from number,
//! string, boolean and `nil` literals, arithmetic and comparison operators,
//! string concatenation, grouping and the ternary conditional.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Error, Failure},
    interpreter::{
        evaluator::core::Interpreter,
        parser::{core::parse, statement::parse_program},
        scanner::{Scanned, scan},
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator and the printer.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code, the
/// `Error` union over them, and `Failure`, the set of diagnostics a failed run
/// returns.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Renders every error as `[line <n>] Error<where>: <message>`.
/// - Replaces global error flags with queries on the returned value.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, evaluation, value
/// representations and the tree printer.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, scanner, parser, evaluator.
/// - Provides the building blocks behind the entry points of this crate.
pub mod interpreter;

/// Scans and parses `source` as a single expression, then evaluates it.
///
/// Every call starts from scratch; nothing carries over between calls. If
/// scanning or parsing reports any error, evaluation is skipped and all of
/// those diagnostics are returned.
///
/// # Errors
/// Returns a [`Failure`] holding the scan and parse errors, or the single
/// runtime error that stopped evaluation.
///
/// # Examples
/// ```
/// use lumen::{get_result, interpreter::value::Value};
///
/// assert_eq!(get_result("2 + 5*8").unwrap(), Value::Number(42.0));
/// assert_eq!(get_result("\"1\" + 2").unwrap(), Value::from("12"));
///
/// let failure = get_result("-\"a\"").unwrap_err();
/// assert!(failure.had_runtime_error());
/// assert_eq!(failure.to_string(), "[line 1] Error at '-': Operand must be a number.");
/// ```
pub fn get_result(source: &str) -> Result<Value, Failure> {
    let scanned = scan(source);
    let parsed = parse(&scanned.tokens);
    let expr = match (scanned.is_clean(), parsed) {
        (true, Ok(expr)) => expr,
        (_, parsed) => return Err(front_end_failure(scanned, parsed.err())),
    };

    let value = Interpreter::new().evaluate(&expr)?;
    log::debug!("evaluated to {} `{value}`", value.type_name());

    Ok(value)
}

/// Scans and parses `source` as a sequence of statements, then executes them.
///
/// Statements are `print <expression>;` and `<expression>;`. The parser
/// recovers after each syntax error, so all of them are reported at once.
///
/// # Errors
/// Returns a [`Failure`] holding every scan and parse error, or the single
/// runtime error that stopped execution together with the lines printed
/// before it.
///
/// # Examples
/// ```
/// use lumen::run_program;
///
/// assert_eq!(run_program("print 1; print \"a\" + 2;").unwrap(), ["1", "a2"]);
/// assert_eq!(run_program("print ; print (1;").unwrap_err().diagnostics.len(), 2);
/// ```
pub fn run_program(source: &str) -> Result<Vec<String>, Failure> {
    let scanned = scan(source);
    let parsed = parse_program(&scanned.tokens);
    let statements = match (scanned.is_clean(), parsed) {
        (true, Ok(statements)) => statements,
        (_, parsed) => {
            let mut diagnostics: Vec<Error> =
                scanned.errors.into_iter().map(Error::from).collect();
            diagnostics.extend(parsed.err().into_iter().flatten().map(Error::from));
            return Err(Failure::new(diagnostics));
        },
    };

    let mut interpreter = Interpreter::new();
    if let Err(e) = interpreter.interpret(&statements) {
        log::debug!("program stopped after {} printed lines", interpreter.output().len());
        return Err(Failure::from(e).with_output(interpreter.into_output()));
    }

    Ok(interpreter.into_output())
}

/// Scans and parses `source` as a single expression and renders its tree.
///
/// # Errors
/// Returns a [`Failure`] holding the scan and parse errors.
///
/// # Examples
/// ```
/// use lumen::render_ast;
///
/// assert_eq!(render_ast("1 + 2*3").unwrap(), "(+ 1 (* 2 3))");
/// assert_eq!(render_ast("true ? 1 : false ? 2 : 3").unwrap(),
///            "(ternary true 1 (ternary false 2 3))");
/// ```
pub fn render_ast(source: &str) -> Result<String, Failure> {
    let scanned = scan(source);
    let parsed = parse(&scanned.tokens);

    match (scanned.is_clean(), parsed) {
        (true, Ok(expr)) => Ok(interpreter::printer::print(&expr)),
        (_, parsed) => Err(front_end_failure(scanned, parsed.err())),
    }
}

/// Collects scan errors, followed by the parse error if there is one.
fn front_end_failure(scanned: Scanned, parse_error: Option<error::ParseError>) -> Failure {
    let mut diagnostics: Vec<Error> = scanned.errors.into_iter().map(Error::from).collect();
    diagnostics.extend(parse_error.map(Error::from));
    log::debug!("front end reported {} diagnostics", diagnostics.len());

    Failure::new(diagnostics)
}

/// Parser entry points and the ternary level.
///
/// Contains the expression-mode entry point, the shared result type, and the
/// loosest precedence level of the grammar.
pub mod core;

/// Binary precedence levels.
///
/// Implements the left-associative equality, comparison, term and factor
/// levels.
pub mod binary;

/// Unary and primary expressions.
///
/// Handles prefix operators, literals and parenthesized groupings.
pub mod unary;

/// Statement parsing and error recovery.
///
/// Parses `print` and expression statements and resynchronizes at statement
/// boundaries after a syntax error.
pub mod statement;

/// Token stream helpers shared by the parser levels.
pub mod utils;

/// Core evaluation logic.
///
/// Contains the `Interpreter`, the result type shared by all evaluation
/// routines, and the dispatch over expression variants.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and equality.
pub mod binary;

/// Statement execution.
///
/// Runs `print` and expression statements and collects printed output.
pub mod statement;

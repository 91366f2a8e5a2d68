/// Operator dispatch for binary expressions.
pub mod core;

/// Numeric arithmetic and `+` with string concatenation.
pub mod arithmetic;

/// Relational comparisons and equality.
pub mod comparison;

use crate::interpreter::token::{Literal, Token};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers, strings, booleans and `nil`. Literal tokens are decoded into
/// this form by the parser, so the tree never holds raw token text for a
/// constant.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, without quotes.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `nil` literal.
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&Literal> for LiteralValue {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Number(n) => Self::Number(*n),
            Literal::Str(s) => Self::Str(s.clone()),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The set of variants is closed; the evaluator and the printer match on it
/// exhaustively. Every child is owned by its parent through a `Box`, so a tree
/// has no sharing and no back-references.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or nil).
    Literal {
        /// The decoded constant.
        value: LiteralValue,
    },
    /// A prefix operation: `-x` or `!x`.
    Unary {
        /// The operator token, either `-` or `!`.
        operator: Token,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// An infix arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A parenthesized expression. Kept for display only; evaluates to its
    /// inner expression.
    Grouping {
        /// The parenthesized expression.
        inner: Box<Self>,
    },
    /// A conditional `condition ? then_branch : else_branch`.
    Ternary {
        /// The condition, tested for truthiness.
        condition:   Box<Self>,
        /// Expression evaluated if the condition is truthy.
        then_branch: Box<Self>,
        /// Expression evaluated otherwise.
        else_branch: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    ///
    /// ## Example
    /// ```
    /// use lumen::ast::{Expr, LiteralValue};
    ///
    /// let expr = Expr::literal(2.0);
    ///
    /// assert_eq!(expr, Expr::Literal { value: LiteralValue::Number(2.0) });
    /// ```
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(operator: Token, operand: Self) -> Self {
        Self::Unary { operator,
                      operand: Box::new(operand) }
    }

    /// Builds a binary node.
    #[must_use]
    pub fn binary(left: Self, operator: Token, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       operator,
                       right: Box::new(right) }
    }

    /// Builds a grouping node.
    #[must_use]
    pub fn grouping(inner: Self) -> Self {
        Self::Grouping { inner: Box::new(inner) }
    }

    /// Builds a ternary node.
    #[must_use]
    pub fn ternary(condition: Self, then_branch: Self, else_branch: Self) -> Self {
        Self::Ternary { condition:   Box::new(condition),
                        then_branch: Box::new(then_branch),
                        else_branch: Box::new(else_branch), }
    }
}

/// Represents a top-level statement.
///
/// Statements are only produced in program mode; the default entry point
/// evaluates a single bare expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its side effects: `expr;`.
    Expression(Expr),
    /// A print statement: `print expr;`.
    Print(Expr),
}

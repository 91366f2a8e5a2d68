use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks expression trees and computes their values.
///
/// Expression evaluation keeps no state between calls. The only state is the
/// output buffer filled by `print` statements in program mode.
///
/// ## Usage
///
/// Create one `Interpreter` per run. [`Interpreter::evaluate`] computes the
/// value of a single expression; [`Interpreter::interpret`] executes a list of
/// statements.
#[derive(Debug, Default)]
pub struct Interpreter {
    /// Lines produced by `print` statements, in execution order.
    pub(crate) output: Vec<String>,
}

impl Interpreter {
    /// Creates an interpreter with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Groupings are
    /// transparent, binary operands are evaluated left to right before the
    /// operator checks their types, and a ternary evaluates only the branch
    /// its condition selects.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by an operator; no partial
    /// value is produced.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::{
    ///     evaluator::core::Interpreter, parser::core::parse, scanner::scan, value::Value,
    /// };
    ///
    /// let expr = parse(&scan("false ? 1 / 0 : 2").tokens).unwrap();
    /// let value = Interpreter::new().evaluate(&expr).unwrap();
    ///
    /// assert_eq!(value, Value::Number(2.0));
    /// ```
    pub fn evaluate(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Grouping { inner } => self.evaluate(inner),
            Expr::Unary { operator, operand } => {
                let operand = self.evaluate(operand)?;
                Self::eval_unary(operator, &operand)
            },
            Expr::Binary { left,
                           operator,
                           right, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(operator, &left, &right)
            },
            Expr::Ternary { condition,
                            then_branch,
                            else_branch, } => {
                self.eval_ternary(condition, then_branch, else_branch)
            },
        }
    }

    /// Evaluates a ternary conditional.
    ///
    /// The condition is tested for truthiness and exactly one branch is
    /// evaluated; the other is never touched.
    fn eval_ternary(&self,
                    condition: &Expr,
                    then_branch: &Expr,
                    else_branch: &Expr)
                    -> EvalResult<Value> {
        if self.evaluate(condition)?.is_truthy() {
            self.evaluate(then_branch)
        } else {
            self.evaluate(else_branch)
        }
    }
}

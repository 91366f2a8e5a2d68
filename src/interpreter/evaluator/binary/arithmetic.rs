use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::{Token, TokenKind},
        value::Value,
    },
};

/// Extracts both operands as numbers.
///
/// # Errors
/// Returns `RuntimeError::OperandsMustBeNumbers` if either operand is not a
/// number.
pub(in crate::interpreter::evaluator) fn number_operands(operator: &Token,
                                                         left: &Value,
                                                         right: &Value)
                                                         -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { operator: operator.clone() }),
    }
}

impl Interpreter {
    /// Evaluates `-`, `*` or `/` on two numbers.
    ///
    /// Follows IEEE 754 double semantics: division by zero yields an infinity
    /// or `NaN` instead of an error.
    ///
    /// # Errors
    /// Returns `RuntimeError::OperandsMustBeNumbers` if either operand is not a
    /// number.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     token::{Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let slash = Token::new(TokenKind::Slash, "/", 1);
    /// let result = Interpreter::eval_arithmetic(&slash, &Value::Number(1.0), &Value::Number(0.0));
    ///
    /// assert_eq!(result.unwrap(), Value::Number(f64::INFINITY));
    /// ```
    pub fn eval_arithmetic(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        let (l, r) = number_operands(operator, left, right)?;

        Ok(Value::Number(match operator.kind {
                             TokenKind::Minus => l - r,
                             TokenKind::Star => l * r,
                             TokenKind::Slash => l / r,
                             _ => unreachable!("not an arithmetic operator"),
                         }))
    }

    /// Evaluates `+`.
    ///
    /// Two numbers are added. Otherwise, if either operand is a string, both
    /// operands are stringified and concatenated, so `"1" + 2` is `"12"` and
    /// `nil + "x"` is `"nilx"`.
    ///
    /// # Errors
    /// Returns `RuntimeError::OperandsMustBeNumbersOrStrings` when neither
    /// rule applies, e.g. for `true + 1`.
    pub fn eval_addition(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            _ if left.is_string() || right.is_string() => Ok(Value::Str(format!("{left}{right}"))),
            _ => {
                log::debug!("cannot add {} and {}", left.type_name(), right.type_name());
                Err(RuntimeError::OperandsMustBeNumbersOrStrings { operator: operator.clone() })
            },
        }
    }
}

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::{Token, TokenKind},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `-`: numeric negation. The operand must be a number.
    /// - `!`: logical negation of the operand's truthiness. Accepts any value.
    ///
    /// # Errors
    /// Returns `RuntimeError::OperandMustBeNumber` when `-` receives a
    /// non-number.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     token::{Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let minus = Token::new(TokenKind::Minus, "-", 1);
    /// let bang = Token::new(TokenKind::Bang, "!", 1);
    ///
    /// assert_eq!(Interpreter::eval_unary(&minus, &Value::Number(5.0)).unwrap(),
    ///            Value::Number(-5.0));
    /// assert_eq!(Interpreter::eval_unary(&bang, &Value::Nil).unwrap(),
    ///            Value::Bool(true));
    /// assert!(Interpreter::eval_unary(&minus, &Value::from("a")).is_err());
    /// ```
    pub fn eval_unary(operator: &Token, value: &Value) -> EvalResult<Value> {
        match operator.kind {
            TokenKind::Minus => {
                value.as_number()
                     .map(|n| Value::Number(-n))
                     .ok_or_else(|| {
                         RuntimeError::OperandMustBeNumber { operator: operator.clone() }
                     })
            },
            TokenKind::Bang => Ok(Value::Bool(!value.is_truthy())),
            kind => unreachable!("parser produced unary operator {kind:?}"),
        }
    }
}

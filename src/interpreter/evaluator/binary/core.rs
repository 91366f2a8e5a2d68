use crate::interpreter::{
    evaluator::core::{EvalResult, Interpreter},
    token::{Token, TokenKind},
    value::Value,
};

impl Interpreter {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// Routes the operation by operator kind:
    /// - `+` goes to `eval_addition`, which also concatenates strings.
    /// - `-`, `*`, `/` go to `eval_arithmetic`.
    /// - `>`, `>=`, `<`, `<=` go to `eval_comparison`.
    /// - `==`, `!=` go to `eval_equality`, which never fails.
    ///
    /// # Errors
    /// Returns a `RuntimeError` carrying `operator` when the operand types do
    /// not suit the operator.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     token::{Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let plus = Token::new(TokenKind::Plus, "+", 1);
    ///
    /// let sum = Interpreter::eval_binary(&plus, &Value::Number(3.0), &Value::Number(4.0));
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let joined = Interpreter::eval_binary(&plus, &Value::from("1"), &Value::Number(2.0));
    /// assert_eq!(joined.unwrap(), Value::from("12"));
    /// ```
    pub fn eval_binary(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        match operator.kind {
            TokenKind::Plus => Self::eval_addition(operator, left, right),
            TokenKind::Minus | TokenKind::Star | TokenKind::Slash => {
                Self::eval_arithmetic(operator, left, right)
            },
            TokenKind::Greater
            | TokenKind::GreaterEqual
            | TokenKind::Less
            | TokenKind::LessEqual => Self::eval_comparison(operator, left, right),
            TokenKind::EqualEqual | TokenKind::BangEqual => {
                Ok(Self::eval_equality(operator.kind, left, right))
            },
            kind => unreachable!("parser produced binary operator {kind:?}"),
        }
    }
}

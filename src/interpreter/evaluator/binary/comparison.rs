use crate::interpreter::{
    evaluator::{
        binary::arithmetic::number_operands,
        core::{EvalResult, Interpreter},
    },
    token::{Token, TokenKind},
    value::Value,
};

impl Interpreter {
    /// Evaluates a relational comparison: `>`, `>=`, `<` or `<=`.
    ///
    /// Both operands must be numbers; comparisons involving `NaN` are false.
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
    /// let less = Token::new(TokenKind::Less, "<", 1);
    /// let result = Interpreter::eval_comparison(&less, &Value::Number(3.0), &Value::Number(5.0));
    ///
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        let (l, r) = number_operands(operator, left, right)?;

        Ok(Value::Bool(match operator.kind {
                           TokenKind::Greater => l > r,
                           TokenKind::GreaterEqual => l >= r,
                           TokenKind::Less => l < r,
                           TokenKind::LessEqual => l <= r,
                           _ => unreachable!("not a comparison operator"),
                       }))
    }

    /// Evaluates `==` or `!=`.
    ///
    /// Values of different types are never equal and `nil` equals only `nil`.
    /// Never fails, whatever the operand types.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::{evaluator::core::Interpreter, token::TokenKind, value::Value};
    ///
    /// let one = Value::Number(1.0);
    ///
    /// assert_eq!(Interpreter::eval_equality(TokenKind::EqualEqual, &one, &Value::from("1")),
    ///            Value::Bool(false));
    /// assert_eq!(Interpreter::eval_equality(TokenKind::EqualEqual, &Value::Nil, &Value::Nil),
    ///            Value::Bool(true));
    /// ```
    #[must_use]
    pub fn eval_equality(kind: TokenKind, left: &Value, right: &Value) -> Value {
        let is_equal = left == right;

        Value::Bool(match kind {
                        TokenKind::EqualEqual => is_equal,
                        TokenKind::BangEqual => !is_equal,
                        _ => unreachable!("eval_equality used with non equality operator"),
                    })
    }
}

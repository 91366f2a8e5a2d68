use crate::{
    ast::Statement,
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter {
    /// Executes a single statement.
    ///
    /// An expression statement evaluates its expression and discards the
    /// value. A print statement appends the stringified value to the output
    /// buffer.
    ///
    /// # Errors
    /// Propagates the `RuntimeError` of the statement's expression.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Expression(expr) => {
                self.evaluate(expr)?;
            },
            Statement::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.output.push(value.to_string());
            },
        }

        Ok(())
    }

    /// Executes statements in order, stopping at the first runtime error.
    ///
    /// Output printed before the error stays in the buffer.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::{
    ///     evaluator::core::Interpreter, parser::statement::parse_program, scanner::scan,
    /// };
    ///
    /// let statements = parse_program(&scan("print 1 + 1; print \"a\" + 2;").tokens).unwrap();
    /// let mut interpreter = Interpreter::new();
    /// interpreter.interpret(&statements).unwrap();
    ///
    /// assert_eq!(interpreter.output(), ["2", "a2"]);
    /// ```
    pub fn interpret(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            self.execute(statement)?;
        }

        Ok(())
    }

    /// The lines printed so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Consumes the interpreter, returning the printed lines.
    #[must_use]
    pub fn into_output(self) -> Vec<String> {
        self.output
    }
}

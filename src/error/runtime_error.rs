use crate::interpreter::token::Token;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Each variant carries the operator token that rejected its operands, so the
/// diagnostic can name the line and the operator.
pub enum RuntimeError {
    /// A unary operator received a non-number operand.
    OperandMustBeNumber {
        /// The operator token.
        operator: Token,
    },
    /// A binary arithmetic or comparison operator received a non-number
    /// operand.
    OperandsMustBeNumbers {
        /// The operator token.
        operator: Token,
    },
    /// `+` received operands that are neither two numbers nor include a
    /// string.
    OperandsMustBeNumbersOrStrings {
        /// The operator token.
        operator: Token,
    },
}

impl RuntimeError {
    /// The operator token that raised the error.
    #[must_use]
    pub const fn operator(&self) -> &Token {
        match self {
            Self::OperandMustBeNumber { operator }
            | Self::OperandsMustBeNumbers { operator }
            | Self::OperandsMustBeNumbersOrStrings { operator } => operator,
        }
    }

    /// The fixed human-readable message of the error.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::OperandMustBeNumber { .. } => "Operand must be a number.",
            Self::OperandsMustBeNumbers { .. } => "Operands must be numbers.",
            Self::OperandsMustBeNumbersOrStrings { .. } => {
                "Operands must be two numbers, or two strings."
            },
        }
    }

    /// The source line the error is reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.operator().line
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = self.operator();
        write!(f,
               "[line {}] Error{}: {}",
               operator.line,
               operator.location(),
               self.message())
    }
}

impl std::error::Error for RuntimeError {}

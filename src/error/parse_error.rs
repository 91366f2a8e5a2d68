use crate::interpreter::token::Token;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing tokens.
///
/// Every variant carries the token the parser was looking at when it gave up,
/// which determines the reported line and location.
pub enum ParseError {
    /// No expression can start at this token.
    ExpectedExpression {
        /// The offending token.
        token: Token,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The offending token.
        token: Token,
    },
    /// A ternary conditional is missing its `:`.
    ExpectedTernaryColon {
        /// The offending token.
        token: Token,
    },
    /// A `print` statement is missing its terminating `;`.
    ExpectedSemicolonAfterValue {
        /// The offending token.
        token: Token,
    },
    /// An expression statement is missing its terminating `;`.
    ExpectedSemicolonAfterExpression {
        /// The offending token.
        token: Token,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: Token,
    },
    /// The token sequence ended without an end-of-input marker.
    UnexpectedEndOfInput,
}

impl ParseError {
    /// The token the error is anchored at, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        match self {
            Self::ExpectedExpression { token }
            | Self::ExpectedClosingParen { token }
            | Self::ExpectedTernaryColon { token }
            | Self::ExpectedSemicolonAfterValue { token }
            | Self::ExpectedSemicolonAfterExpression { token }
            | Self::UnexpectedTrailingTokens { token } => Some(token),
            Self::UnexpectedEndOfInput => None,
        }
    }

    /// The fixed human-readable message of the error.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ExpectedExpression { .. } => "Expect expression.",
            Self::ExpectedClosingParen { .. } => "Expect ')' after expression.",
            Self::ExpectedTernaryColon { .. } => "Expect ':' in ternary.",
            Self::ExpectedSemicolonAfterValue { .. } => "Expect ';' after value.",
            Self::ExpectedSemicolonAfterExpression { .. } => "Expect ';' after expression.",
            Self::UnexpectedTrailingTokens { .. } => "Expect end of expression.",
            Self::UnexpectedEndOfInput => "Unexpected end of input.",
        }
    }

    /// The source line the error is reported on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.token().map_or(0, |token| token.line)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.token() {
            Some(token) => write!(f,
                                  "[line {}] Error{}: {}",
                                  token.line,
                                  token.location(),
                                  self.message()),
            None => write!(f, "[line 0] Error at end: {}", self.message()),
        }
    }
}

impl std::error::Error for ParseError {}

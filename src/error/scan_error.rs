#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
///
/// Scan errors never stop the scanner; they are collected next to the tokens.
pub enum ScanError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Reached the end of input inside a string literal.
    UnterminatedString {
        /// The source line where the input ended.
        line: usize,
    },
}

impl ScanError {
    /// The source line the error is reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "[line {line}] Error: Unexpected character: {character}.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "[line {line}] Error: Unterminated string.")
            },
        }
    }
}

impl std::error::Error for ScanError {}

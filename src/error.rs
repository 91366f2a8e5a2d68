/// Scanning errors.
///
/// Lexical problems found while turning source text into tokens, such as
/// unexpected characters and unterminated strings. They are collected rather
/// than raised, so one pass reports all of them.
pub mod scan_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into an
/// expression tree or a list of statements.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Every runtime
/// error is an operand type mismatch reported against the operator token.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;

/// Any diagnostic the pipeline can report.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A lexical error.
    Scan(ScanError),
    /// A syntax error.
    Parse(ParseError),
    /// A runtime type error.
    Runtime(RuntimeError),
}

impl Error {
    /// The source line the diagnostic is reported on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Scan(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

/// The outcome of a failed run: every diagnostic that was reported.
///
/// Scan and parse errors are all collected before evaluation is skipped, so a
/// failure may hold several of them. A runtime error is always alone, since
/// evaluation stops at the first one.
///
/// In program mode, the lines printed by statements that ran before a runtime
/// error are kept in `output`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Failure {
    /// The diagnostics, in the order they were found.
    pub diagnostics: Vec<Error>,
    /// Lines printed before execution stopped. Empty unless a runtime error
    /// interrupted a program.
    pub output:      Vec<String>,
}

impl Failure {
    /// Creates a failure from diagnostics, with no output.
    #[must_use]
    pub const fn new(diagnostics: Vec<Error>) -> Self {
        Self { diagnostics,
               output: Vec::new() }
    }

    /// Attaches the lines printed before the failure.
    ///
    /// # Example
    /// ```
    /// let failure = lumen::run_program("print \"before\"; print -\"a\";").unwrap_err();
    ///
    /// assert!(failure.had_runtime_error());
    /// assert_eq!(failure.output, ["before"]);
    /// ```
    #[must_use]
    pub fn with_output(mut self, output: Vec<String>) -> Self {
        self.output = output;
        self
    }

    /// Returns `true` if scanning or parsing reported an error.
    ///
    /// # Example
    /// ```
    /// let failure = lumen::get_result("(1 + 2").unwrap_err();
    ///
    /// assert!(failure.had_error());
    /// assert!(!failure.had_runtime_error());
    /// ```
    #[must_use]
    pub fn had_error(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|e| matches!(e, Error::Scan(_) | Error::Parse(_)))
    }

    /// Returns `true` if evaluation reported a runtime error.
    #[must_use]
    pub fn had_runtime_error(&self) -> bool {
        self.diagnostics.iter().any(|e| matches!(e, Error::Runtime(_)))
    }
}

impl From<RuntimeError> for Failure {
    fn from(e: RuntimeError) -> Self {
        Self::new(vec![e.into()])
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, diagnostic) in self.diagnostics.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }

            write!(f, "{diagnostic}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Failure {}

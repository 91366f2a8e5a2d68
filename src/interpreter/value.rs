use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// Values are dynamically typed: every operator checks the variants it
/// receives. Equality is by value, and values of different variants are never
/// equal; `Nil` equals only `Nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// The absent value, `nil`.
    Nil,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

impl Value {
    /// Maps the value to a boolean for conditions and `!`.
    ///
    /// `nil` is false, a boolean is itself, and every other value, including
    /// `0` and the empty string, is true.
    ///
    /// # Example
    /// ```
    /// use lumen::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(b) => *b,
            Self::Number(_) | Self::Str(_) => true,
        }
    }

    /// Returns the number held by the value, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` if the value is a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// A short name of the value's type, used in logs.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Nil => "nil",
        }
    }
}

/// Renders the value the way it is shown to users.
///
/// Numbers use the shortest representation that reads back to the same value,
/// so whole numbers print without a fractional part.
///
/// # Example
/// ```
/// use lumen::interpreter::value::Value;
///
/// assert_eq!(Value::Number(4.0).to_string(), "4");
/// assert_eq!(Value::Number(2.5).to_string(), "2.5");
/// assert_eq!(Value::Nil.to_string(), "nil");
/// assert_eq!(Value::from("hi").to_string(), "hi");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}

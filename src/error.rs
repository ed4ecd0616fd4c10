/// Parsing errors.
///
/// Defines the errors raised while normalizing, validating and converting a
/// line before anything is evaluated: unbalanced parentheses, doubled
/// multiplicative operators and literals that do not fit in an `i64`.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a postfix sequence or binding
/// a variable, such as division by zero, unknown variables or arithmetic
/// overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The category of a failed line, independent of the phase that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unbalanced parentheses or a doubled `*`, `/` or `^`.
    InvalidExpression,
    /// A name that is not made of letters only.
    InvalidIdentifier,
    /// A name with no binding in the environment.
    UnknownVariable,
    /// The right-hand side of `=` is neither a literal nor an identifier.
    InvalidAssignment,
    /// Division (or a negative power) of zero.
    DivisionByZero,
    /// The postfix sequence did not reduce to exactly one value.
    MalformedExpression,
    /// Integer arithmetic left the `i64` range.
    Overflow,
    /// A number literal does not fit in an `i64`.
    LiteralTooLarge,
}

/// Any error a single input line can fail with.
///
/// Wraps the phase specific error types so that `?` composes across the
/// whole pipeline. The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Failure before evaluation started.
    Parse(ParseError),
    /// Failure during evaluation or assignment.
    Runtime(RuntimeError),
}

impl CalcError {
    /// Returns the category of this error.
    ///
    /// # Example
    /// ```
    /// use smartcalc::error::{CalcError, ErrorKind, RuntimeError};
    ///
    /// let err = CalcError::from(RuntimeError::DivisionByZero);
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and assignment.
pub enum RuntimeError {
    /// A name contained something other than letters.
    InvalidIdentifier {
        /// The offending name.
        name: String,
    },
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// The right-hand side of an assignment is neither a number nor a name.
    InvalidAssignment {
        /// The right-hand side as written.
        value: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// An operator ran out of operands, or operands were left over.
    MalformedExpression,
    /// Arithmetic operation overflowed.
    Overflow,
}

impl RuntimeError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            Self::UnknownVariable { .. } => ErrorKind::UnknownVariable,
            Self::InvalidAssignment { .. } => ErrorKind::InvalidAssignment,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::MalformedExpression => ErrorKind::MalformedExpression,
            Self::Overflow => ErrorKind::Overflow,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier { .. } => write!(f, "Invalid identifier"),
            Self::UnknownVariable { .. } => write!(f, "Unknown variable"),
            Self::InvalidAssignment { .. } => write!(f, "Invalid assignment"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::MalformedExpression => write!(f, "Malformed expression"),
            Self::Overflow => write!(f, "Integer overflow"),
        }
    }
}

impl std::error::Error for RuntimeError {}

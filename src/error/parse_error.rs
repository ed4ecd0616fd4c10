use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur before evaluation.
pub enum ParseError {
    /// A `)` appeared without a matching `(`, or a `(` was never closed.
    UnbalancedParentheses,
    /// The same multiplicative or exponent operator appeared twice in a row.
    RepeatedOperator {
        /// The doubled operator character.
        operator: char,
    },
    /// A number literal was too large to be represented safely.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
    },
}

impl ParseError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnbalancedParentheses | Self::RepeatedOperator { .. } => {
                ErrorKind::InvalidExpression
            },
            Self::LiteralTooLarge { .. } => ErrorKind::LiteralTooLarge,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses | Self::RepeatedOperator { .. } => {
                write!(f, "Invalid expression")
            },
            Self::LiteralTooLarge { .. } => write!(f, "Literal is too large"),
        }
    }
}

impl std::error::Error for ParseError {}

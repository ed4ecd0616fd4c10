use crate::error::ParseError;

/// Returns `true` if `s` is an integer literal.
///
/// A literal is an optional single leading `+` or `-` followed by one or more
/// ASCII digits. A lone sign is not a literal.
///
/// ## Example
/// ```
/// use smartcalc::util::num::is_number_literal;
///
/// assert!(is_number_literal("42"));
/// assert!(is_number_literal("-7"));
/// assert!(is_number_literal("+7"));
/// assert!(!is_number_literal("-"));
/// assert!(!is_number_literal("--7"));
/// assert!(!is_number_literal("4a"));
/// ```
#[must_use]
pub fn is_number_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses an integer literal into an `i64`.
///
/// The caller is expected to have checked the shape with
/// [`is_number_literal`]; the only failure left is a value outside the `i64`
/// range.
///
/// ## Errors
/// Returns `ParseError::LiteralTooLarge` if the literal does not fit.
///
/// ## Example
/// ```
/// use smartcalc::{error::ParseError, util::num::parse_number_literal};
///
/// assert_eq!(parse_number_literal("-12").unwrap(), -12);
///
/// let err = parse_number_literal("99999999999999999999").unwrap_err();
/// assert!(matches!(err, ParseError::LiteralTooLarge { .. }));
/// ```
pub fn parse_number_literal(s: &str) -> Result<i64, ParseError> {
    s.parse().map_err(|_| ParseError::LiteralTooLarge { literal: s.to_string() })
}

/// Returns `true` if `s` is a non-empty run of letters.
///
/// Letters are characters with the Unicode `Alphabetic` property, the same
/// class the lexer glues into one name. `größe` is a valid name while `x1`,
/// `a_b` and the empty string are not.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

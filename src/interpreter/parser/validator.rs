use crate::{error::ParseError, interpreter::{lexer::Token, parser::core::ParseResult}};

/// Checks that a token sequence is structurally sound.
///
/// Two rules are enforced:
/// - parentheses balance: scanning left to right there are never more `)`
///   than `(`, and both counts agree at the end;
/// - no `*`, `/` or `^` is immediately followed by the same character. Runs
///   of `+` and `-` are allowed, they are sign runs.
///
/// # Errors
/// - `UnbalancedParentheses` if the first rule is broken.
/// - `RepeatedOperator` if the second rule is broken.
///
/// # Example
/// ```
/// use smartcalc::{
///     error::ParseError,
///     interpreter::{lexer::normalize, parser::validator::validate},
/// };
///
/// assert!(validate(&normalize("2 * (3 - -1)").unwrap()).is_ok());
/// assert_eq!(validate(&normalize("(2))").unwrap()),
///            Err(ParseError::UnbalancedParentheses));
/// assert_eq!(validate(&normalize("2^^3").unwrap()),
///            Err(ParseError::RepeatedOperator { operator: '^' }));
/// ```
pub fn validate(tokens: &[Token]) -> ParseResult<()> {
    check_parentheses(tokens)?;
    check_repeated_operators(tokens)
}

fn check_parentheses(tokens: &[Token]) -> ParseResult<()> {
    let mut depth = 0usize;

    for token in tokens {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => {
                depth = depth.checked_sub(1).ok_or(ParseError::UnbalancedParentheses)?;
            },
            _ => {},
        }
    }

    if depth == 0 { Ok(()) } else { Err(ParseError::UnbalancedParentheses) }
}

// Doubled operators only survive tokenizing inside a field that failed to
// classify as an operator, so only identifier text needs scanning.
fn check_repeated_operators(tokens: &[Token]) -> ParseResult<()> {
    for token in tokens {
        let Token::Identifier(text) = token else {
            continue;
        };

        let mut previous = None;
        for c in text.chars() {
            if previous == Some(c) && matches!(c, '*' | '/' | '^') {
                return Err(ParseError::RepeatedOperator { operator: c });
            }
            previous = Some(c);
        }
    }

    Ok(())
}

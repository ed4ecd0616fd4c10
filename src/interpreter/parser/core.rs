use crate::{
    ast::Postfix,
    error::ParseError,
    interpreter::{
        lexer::normalize,
        parser::{converter::to_postfix, validator::validate},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression line into postfix order.
///
/// This is the entry point for expression parsing: the line is normalized
/// into tokens, the tokens are validated, and the validated sequence is
/// converted with the shunting-yard algorithm.
///
/// # Parameters
/// - `line`: The raw input line.
///
/// # Returns
/// The postfix sequence, ready for evaluation.
///
/// # Errors
/// - `LiteralTooLarge` if a number does not fit in an `i64`.
/// - `UnbalancedParentheses` or `RepeatedOperator` for structurally invalid
///   input.
///
/// # Example
/// ```
/// use smartcalc::interpreter::parser::core::parse_expression;
///
/// let postfix = parse_expression("3 + 4 * 2").unwrap();
/// assert_eq!(postfix.to_string(), "3 4 2 * +");
///
/// assert!(parse_expression("3 + ( 4").is_err());
/// ```
pub fn parse_expression(line: &str) -> ParseResult<Postfix> {
    let tokens = normalize(line)?;
    validate(&tokens)?;
    to_postfix(&tokens)
}

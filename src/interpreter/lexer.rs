use logos::Logos;

use crate::{
    ast::Operator,
    error::ParseError,
    util::num::{is_number_literal, parse_number_literal},
};

/// Represents a lexical token of an expression line.
///
/// A token is one whitespace-delimited field of the normalized line. Fields
/// that are neither numbers, parentheses nor operator runs are kept as
/// [`Token::Identifier`] and checked when they are evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Integer literal such as `42` or `-7`.
    Number(i64),
    /// Variable name such as `x`, or any unrecognized field.
    Identifier(String),
    /// `*`, `/`, `^` or a run of `+`/`-`.
    Operator(Operator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl Token {
    /// Classifies a single field of a normalized line.
    ///
    /// # Errors
    /// Returns `ParseError::LiteralTooLarge` for a number literal outside the
    /// `i64` range.
    ///
    /// # Example
    /// ```
    /// use smartcalc::{ast::Operator, interpreter::lexer::Token};
    ///
    /// assert_eq!(Token::from_field("-5").unwrap(), Token::Number(-5));
    /// assert_eq!(Token::from_field("(").unwrap(), Token::OpenParen);
    /// assert_eq!(Token::from_field("*").unwrap(), Token::Operator(Operator::Star));
    /// assert_eq!(Token::from_field("x1").unwrap(), Token::Identifier("x1".to_string()));
    /// ```
    pub fn from_field(field: &str) -> Result<Self, ParseError> {
        if field == "(" {
            return Ok(Self::OpenParen);
        }
        if field == ")" {
            return Ok(Self::CloseParen);
        }
        if is_number_literal(field) {
            return parse_number_literal(field).map(Self::Number);
        }
        Ok(Operator::from_field(field).map_or_else(|| Self::Identifier(field.to_string()),
                                                   Self::Operator))
    }

    /// Numbers and identifiers are operands; everything else is structure.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Identifier(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
        }
    }
}

/// Character classes that glue together in a line written without spaces.
///
/// Consecutive digits form one number, consecutive letters (the Unicode
/// `Alphabetic` property, as in `util::num::is_identifier`) one name, and
/// consecutive operator characters one operator field. Parentheses always
/// stand alone; any other character becomes a field of its own through the
/// lexer's error path.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    #[regex(r"[0-9]+")]
    Digits,
    #[regex(r"\p{Alphabetic}+")]
    Letters,
    #[regex(r"[-+*/^]+")]
    Operators,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Splits a raw line into fields.
///
/// A line that contains whitespace, or that is a single number literal, is
/// taken to be spaced already: parentheses get padded and the line is split
/// on whitespace. Anything else is cut at every change of character class.
///
/// # Example
/// ```
/// use smartcalc::interpreter::lexer::fields;
///
/// assert_eq!(fields("3+--4*(x)"), ["3", "+--", "4", "*", "(", "x", ")"]);
/// assert_eq!(fields("  (3 + 4)*2 "), ["(", "3", "+", "4", ")", "*2"]);
/// assert_eq!(fields("-12"), ["-12"]);
/// ```
#[must_use]
pub fn fields(line: &str) -> Vec<String> {
    let line = line.trim();

    if is_number_literal(line) || line.contains(char::is_whitespace) {
        return line.replace('(', " ( ")
                   .replace(')', " ) ")
                   .split_whitespace()
                   .map(str::to_string)
                   .collect();
    }

    let mut lexer = Glyph::lexer(line);
    let mut fields = Vec::new();
    while lexer.next().is_some() {
        fields.push(lexer.slice().to_string());
    }
    fields
}

/// Turns a raw line into its token sequence.
///
/// Adjacent sign runs are joined into one, so `5 - - 3` carries the single
/// run `--` just like `5--3` does. Otherwise this is purely lexical; whether
/// the tokens form a sensible expression is decided later by the validator
/// and the evaluator.
///
/// # Errors
/// Returns `ParseError::LiteralTooLarge` if a number literal does not fit in
/// an `i64`.
///
/// # Example
/// ```
/// use smartcalc::interpreter::lexer::{Token, normalize};
///
/// let tokens = normalize("(1+x)").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0], Token::OpenParen);
/// assert_eq!(tokens[3], Token::Identifier("x".to_string()));
///
/// assert_eq!(normalize("5 - - 3").unwrap().len(), 3);
/// ```
pub fn normalize(line: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens: Vec<Token> = Vec::new();

    for field in fields(line) {
        let token = Token::from_field(&field)?;
        if let (Some(Token::Operator(Operator::Signs(run))), Token::Operator(Operator::Signs(next))) =
            (tokens.last_mut(), &token)
        {
            run.append(next);
            continue;
        }
        tokens.push(token);
    }

    Ok(tokens)
}

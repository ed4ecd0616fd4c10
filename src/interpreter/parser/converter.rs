use crate::{
    ast::{Operator, Postfix},
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
    util::stack::Stack,
};

/// An entry on the converter's operator stack. A `(` acts as a floor that
/// no operator comparison crosses.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    OpenParen,
    Operator(Operator),
}

/// Converts a validated infix token sequence into postfix order.
///
/// Operands go straight to the output. An operator that binds tighter than
/// the operator on top of the stack waits on the stack; otherwise every
/// operator of the current parenthesis scope is emitted first, down to the
/// nearest `(`. Operators of equal priority therefore group from the left,
/// including `^`: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`. A lower priority operator
/// waiting beneath a higher one is emitted along with it, so
/// `8 - 2 ^ 2 * 3` becomes `8 2 2 ^ - 3 *`.
///
/// # Parameters
/// - `tokens`: Infix tokens, already accepted by the validator.
///
/// # Returns
/// The postfix sequence. It never contains parentheses.
///
/// # Errors
/// Returns `UnbalancedParentheses` if a `)` has no matching `(` or a `(` is
/// left open. The validator rejects such input first, so this only guards
/// against unvalidated callers.
///
/// # Example
/// ```
/// use smartcalc::interpreter::{lexer::normalize, parser::converter::to_postfix};
///
/// let postfix = to_postfix(&normalize("( 3 + 4 ) * 2").unwrap()).unwrap();
/// assert_eq!(postfix.to_string(), "3 4 + 2 *");
///
/// let postfix = to_postfix(&normalize("2^3^2").unwrap()).unwrap();
/// assert_eq!(postfix.to_string(), "2 3 ^ 2 ^");
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Postfix> {
    let mut operators = Stack::new();
    let mut postfix = Postfix::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) => postfix.push(token.clone()),
            Token::OpenParen => operators.push(Pending::OpenParen),
            Token::CloseParen => {
                drain_scope(&mut operators, &mut postfix);
                operators.pop().map_err(|_| ParseError::UnbalancedParentheses)?;
            },
            Token::Operator(op) => {
                let waits = match operators.peek() {
                    None | Some(Pending::OpenParen) => true,
                    Some(Pending::Operator(top)) => op.priority() > top.priority(),
                };
                if !waits {
                    drain_scope(&mut operators, &mut postfix);
                }
                operators.push(Pending::Operator(op.clone()));
            },
        }
    }

    drain_scope(&mut operators, &mut postfix);
    if operators.is_empty() { Ok(postfix) } else { Err(ParseError::UnbalancedParentheses) }
}

/// Emits operators until the nearest `(` or the bottom of the stack.
fn drain_scope(operators: &mut Stack<Pending>, postfix: &mut Postfix) {
    while let Some(Pending::Operator(_)) = operators.peek() {
        if let Ok(Pending::Operator(op)) = operators.pop() {
            postfix.push(Token::Operator(op));
        }
    }
}

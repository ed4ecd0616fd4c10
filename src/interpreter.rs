/// The environment module holds variable bindings.
///
/// A session owns exactly one `VariableEnvironment`. It is mutated only by
/// assignments and read by the evaluator when an expression names a
/// variable.
pub mod environment;
/// The evaluator module computes the value of a postfix sequence.
///
/// The evaluator walks the postfix tokens with an operand stack, resolves
/// sign runs to `+` or `-`, and applies checked integer arithmetic.
///
/// # Responsibilities
/// - Resolves identifiers against the environment.
/// - Applies `+`, `-`, `*`, `/` and `^` without overflow or panics.
/// - Reports division by zero and malformed postfix input.
pub mod evaluator;
/// The lexer module splits a raw line into tokens.
///
/// Lines written with spaces are split on whitespace after padding the
/// parentheses; lines written without spaces are cut wherever the character
/// class changes, which glues digits, letters and operator runs together.
///
/// # Responsibilities
/// - Normalizes both spacing styles to one field sequence.
/// - Classifies fields into numbers, identifiers, operators and parentheses.
pub mod lexer;
/// The parser module turns tokens into postfix order.
///
/// It validates the infix sequence and runs the shunting-yard conversion.
///
/// # Responsibilities
/// - Rejects unbalanced parentheses and doubled `*`, `/` or `^`.
/// - Orders operators by priority, grouping equal priorities from the left.
pub mod parser;

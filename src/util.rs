/// Literal and identifier helpers.
///
/// This module provides the lexical predicates shared by the tokenizer, the
/// evaluator and the variable environment: recognizing integer literals
/// (with an optional leading sign), parsing them without silent overflow, and
/// recognizing letter-only identifiers.
pub mod num;
/// A stack whose `pop` reports underflow instead of panicking.
///
/// Used for the converter's operator stack and the evaluator's operand stack.
pub mod stack;

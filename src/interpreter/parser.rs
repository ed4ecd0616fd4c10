/// Entry point tying the parsing phases together.
///
/// Runs normalization, validation and conversion for one line and defines the
/// shared `ParseResult` alias.
pub mod core;

/// Structural checks on the infix token sequence.
///
/// Rejects unbalanced parentheses and doubled `*`, `/` or `^` before any
/// conversion is attempted.
pub mod validator;

/// Infix to postfix conversion.
///
/// Implements the shunting-yard algorithm over the operator priorities of
/// `+`/`-`, `*`/`/` and `^`.
pub mod converter;

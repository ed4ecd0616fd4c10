/// Core evaluation logic.
///
/// Walks a postfix sequence with an operand stack, resolving variables
/// against the environment.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic for `+`, `-`, `*`, `/` and `^`.
pub mod binary;

//! # smartcalc
//!
//! smartcalc is an interactive integer calculator written in Rust.
//! It reads one expression or assignment per line, converts infix
//! expressions to postfix with the shunting-yard algorithm, and evaluates
//! them with checked integer arithmetic against a table of variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of a parsed line.
///
/// This module declares the operator types and the `Postfix` sequence that
/// the converter produces and the evaluator consumes.
///
/// # Responsibilities
/// - Models operators with their priority and lazy sign-run resolution.
/// - Guarantees that a postfix sequence never holds parentheses.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every way a line can fail. Errors are split by phase
/// and unified by `CalcError`, whose `Display` output is the message shown to
/// the user and whose `kind()` classifies the failure.
///
/// # Responsibilities
/// - Defines error enums for the parsing and evaluation phases.
/// - Maps every error to an `ErrorKind`.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, validation, conversion, evaluation and
/// the variable environment.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Owns the variable environment type.
pub mod interpreter;
/// The read loop and slash commands.
///
/// Wraps a session with blank-line handling, `/help` and `/exit`, and turns
/// outcomes into printable replies.
pub mod repl;
/// Routes a line to assignment, query or expression evaluation.
///
/// A session owns the variable environment for its whole lifetime.
pub mod session;
/// General utilities for literals and stacks.
///
/// # Responsibilities
/// - Recognize and parse integer literals without silent overflow.
/// - Provide a stack whose `pop` is fallible.
pub mod util;

pub use session::{Outcome, Session, evaluate_line};

/// Evaluates every line of `source` in a fresh session and returns the
/// printed replies.
///
/// Blank lines and assignments print nothing; `/exit` stops processing.
///
/// # Examples
/// ```
/// use smartcalc::get_result;
///
/// let out = get_result("n = 3\nn ^ 2 - 1\n/exit\n1 + 1");
/// assert_eq!(out, ["8", "Bye!"]);
///
/// let out = get_result("y + 1");
/// assert_eq!(out, ["Unknown variable"]);
/// ```
#[must_use]
pub fn get_result(source: &str) -> Vec<String> {
    let mut repl = repl::Repl::new();
    let mut replies = Vec::new();

    for line in source.lines() {
        match repl.handle_line(line) {
            repl::Reply::Silent => {},
            repl::Reply::Print(text) => replies.push(text),
            repl::Reply::Exit(text) => {
                replies.push(text);
                break;
            },
        }
    }

    replies
}

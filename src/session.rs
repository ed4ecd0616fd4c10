use tracing::{debug, trace};

use crate::{
    error::CalcError,
    interpreter::{environment::VariableEnvironment, parser::core::parse_expression},
};

/// What a single line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value of an expression.
    Value(i64),
    /// An assignment succeeded.
    Bound,
    /// The value of a bare variable name.
    Query(i64),
    /// The line failed; nothing was changed.
    Failure(CalcError),
}

impl From<Result<i64, CalcError>> for Outcome {
    fn from(value: Result<i64, CalcError>) -> Self {
        value.map_or_else(Self::Failure, Self::Value)
    }
}

/// Evaluates one line against `env`.
///
/// A line containing `=` is an assignment, split on the first `=`. A line
/// that is exactly the name of a bound variable (ignoring surrounding
/// whitespace) is a query. Everything else is an expression and goes through
/// normalization, validation, conversion and evaluation.
///
/// # Example
/// ```
/// use smartcalc::{
///     error::ErrorKind,
///     interpreter::environment::VariableEnvironment,
///     session::{Outcome, evaluate_line},
/// };
///
/// let mut env = VariableEnvironment::new();
/// assert_eq!(evaluate_line("x = 5", &mut env), Outcome::Bound);
/// assert_eq!(evaluate_line("x", &mut env), Outcome::Query(5));
/// assert_eq!(evaluate_line("x + 2", &mut env), Outcome::Value(7));
///
/// let Outcome::Failure(err) = evaluate_line("7 / 0", &mut env) else { panic!() };
/// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate_line(line: &str, env: &mut VariableEnvironment) -> Outcome {
    if let Some((name, raw_value)) = line.split_once('=') {
        debug!(name = name.trim(), value = raw_value.trim(), "assignment");
        return match env.assign(name, raw_value) {
            Ok(_) => Outcome::Bound,
            Err(e) => {
                debug!(error = ?e, "assignment failed");
                Outcome::Failure(e)
            },
        };
    }

    if let Some(value) = env.get(line.trim()) {
        debug!(name = line.trim(), "query");
        return Outcome::Query(value);
    }

    let outcome = Outcome::from(eval_expression(line, env));
    if let Outcome::Failure(e) = &outcome {
        debug!(error = ?e, "expression failed");
    }
    outcome
}

fn eval_expression(line: &str, env: &VariableEnvironment) -> Result<i64, CalcError> {
    let postfix = parse_expression(line)?;
    trace!(%postfix, "postfix");
    Ok(env.eval_postfix(&postfix)?)
}

/// One interactive calculator session.
///
/// Owns the variable environment for as long as the session lives and feeds
/// each line through [`evaluate_line`].
#[derive(Debug, Default)]
pub struct Session {
    env: VariableEnvironment,
}

impl Session {
    #[must_use]
    pub const fn new() -> Self {
        Self { env: VariableEnvironment::new() }
    }

    pub fn evaluate(&mut self, line: &str) -> Outcome {
        evaluate_line(line, &mut self.env)
    }

    #[must_use]
    pub const fn env(&self) -> &VariableEnvironment {
        &self.env
    }
}

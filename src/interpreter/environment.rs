use std::collections::BTreeMap;

use crate::{
    error::{CalcError, RuntimeError},
    util::num::{is_identifier, is_number_literal, parse_number_literal},
};

/// Stores the variables of one calculator session.
///
/// Bindings map letter-only names to integers. They are only created or
/// overwritten by [`VariableEnvironment::assign`] and are never removed.
/// The environment is also the evaluation context: the evaluator resolves
/// every identifier of an expression against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableEnvironment {
    bindings: BTreeMap<String, i64>,
}

impl VariableEnvironment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub const fn new() -> Self {
        Self { bindings: BTreeMap::new() }
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Binds `name` to the value described by `raw_value`.
    ///
    /// Both sides are trimmed. The right-hand side is either an integer
    /// literal or the name of a bound variable; in the latter case the
    /// current value is copied, so later changes to the source variable do
    /// not affect `name`. On failure the environment is left untouched.
    ///
    /// # Parameters
    /// - `name`: Variable to bind.
    /// - `raw_value`: Right-hand side as written.
    ///
    /// # Returns
    /// The value now bound to `name`.
    ///
    /// # Errors
    /// - `InvalidIdentifier` if `name` is empty or not made of letters only.
    /// - `InvalidAssignment` if `raw_value` is neither a literal nor a name.
    /// - `UnknownVariable` if `raw_value` names an unbound variable.
    /// - `LiteralTooLarge` if the literal does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::environment::VariableEnvironment;
    ///
    /// let mut env = VariableEnvironment::new();
    /// env.assign("x", "5").unwrap();
    /// env.assign("y", "x").unwrap();
    /// env.assign("x", "9").unwrap();
    ///
    /// assert_eq!(env.get("x"), Some(9));
    /// assert_eq!(env.get("y"), Some(5));
    /// assert!(env.assign("z1", "1").is_err());
    /// ```
    pub fn assign(&mut self, name: &str, raw_value: &str) -> Result<i64, CalcError> {
        let name = name.trim();
        let raw_value = raw_value.trim();

        if !is_identifier(name) {
            return Err(RuntimeError::InvalidIdentifier { name: name.to_string() }.into());
        }

        let value = if is_number_literal(raw_value) {
            parse_number_literal(raw_value)?
        } else if is_identifier(raw_value) {
            self.get(raw_value)
                .ok_or_else(|| RuntimeError::UnknownVariable { name: raw_value.to_string() })?
        } else {
            return Err(RuntimeError::InvalidAssignment { value: raw_value.to_string() }.into());
        };

        self.bindings.insert(name.to_string(), value);
        Ok(value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over all bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

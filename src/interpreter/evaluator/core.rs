use crate::{
    ast::Postfix,
    error::RuntimeError,
    interpreter::{environment::VariableEnvironment, lexer::Token},
    util::{num::is_identifier, stack::Stack},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl VariableEnvironment {
    /// Evaluates a postfix sequence and returns its value.
    ///
    /// Numbers and variables are pushed on an operand stack. Each operator
    /// pops its right operand, then its left operand, and pushes the result.
    /// Sign runs are collapsed to `+` or `-` at this point.
    ///
    /// # Parameters
    /// - `postfix`: Sequence produced by the converter.
    ///
    /// # Returns
    /// The single value left on the stack.
    ///
    /// # Errors
    /// - `InvalidIdentifier` for a name that is not all letters.
    /// - `UnknownVariable` for an unbound name.
    /// - `MalformedExpression` if an operator lacks operands or more than one
    ///   value is left at the end.
    /// - Any error of [`VariableEnvironment::eval_binary`].
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::{
    ///     environment::VariableEnvironment, parser::core::parse_expression,
    /// };
    ///
    /// let mut env = VariableEnvironment::new();
    /// env.assign("x", "5").unwrap();
    ///
    /// let postfix = parse_expression("x - - 3").unwrap();
    /// assert_eq!(env.eval_postfix(&postfix).unwrap(), 8);
    /// ```
    pub fn eval_postfix(&self, postfix: &Postfix) -> EvalResult<i64> {
        let mut operands = Stack::new();

        for token in postfix.tokens() {
            match token {
                Token::Number(n) => operands.push(*n),
                Token::Identifier(name) => operands.push(self.eval_variable(name)?),
                Token::Operator(op) => {
                    let right = operands.pop().map_err(|_| RuntimeError::MalformedExpression)?;
                    let left = operands.pop().map_err(|_| RuntimeError::MalformedExpression)?;
                    operands.push(Self::eval_binary(op.resolve(), left, right)?);
                },
                Token::OpenParen | Token::CloseParen => {
                    return Err(RuntimeError::MalformedExpression);
                },
            }
        }

        let result = operands.pop().map_err(|_| RuntimeError::MalformedExpression)?;
        if operands.is_empty() { Ok(result) } else { Err(RuntimeError::MalformedExpression) }
    }

    /// Looks up a variable referenced in an expression.
    ///
    /// # Errors
    /// - `InvalidIdentifier` if `name` is not made of letters only.
    /// - `UnknownVariable` if `name` has no binding.
    pub fn eval_variable(&self, name: &str) -> EvalResult<i64> {
        if !is_identifier(name) {
            return Err(RuntimeError::InvalidIdentifier { name: name.to_string() });
        }

        self.get(name).ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }
}

/// Evaluates `postfix` against `env`.
///
/// Free-standing form of [`VariableEnvironment::eval_postfix`].
///
/// # Errors
/// See [`VariableEnvironment::eval_postfix`].
pub fn evaluate(postfix: &Postfix, env: &VariableEnvironment) -> EvalResult<i64> {
    env.eval_postfix(postfix)
}

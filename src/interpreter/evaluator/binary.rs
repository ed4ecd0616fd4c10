use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{environment::VariableEnvironment, evaluator::core::EvalResult},
};

impl VariableEnvironment {
    /// Evaluates a binary arithmetic operation on two integers.
    ///
    /// All operations are checked: leaving the `i64` range is an error rather
    /// than a wrap-around. Division truncates toward zero.
    ///
    /// # Parameters
    /// - `op`: The resolved operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing `left op right`.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` with a zero divisor.
    /// - `Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use smartcalc::{
    ///     ast::BinaryOperator, error::RuntimeError,
    ///     interpreter::environment::VariableEnvironment,
    /// };
    ///
    /// assert_eq!(VariableEnvironment::eval_binary(BinaryOperator::Div, 7, 2), Ok(3));
    /// assert_eq!(VariableEnvironment::eval_binary(BinaryOperator::Div, -7, 2), Ok(-3));
    /// assert_eq!(VariableEnvironment::eval_binary(BinaryOperator::Div, 7, 0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        match op {
            Add => left.checked_add(right).ok_or(RuntimeError::Overflow),
            Sub => left.checked_sub(right).ok_or(RuntimeError::Overflow),
            Mul => left.checked_mul(right).ok_or(RuntimeError::Overflow),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right).ok_or(RuntimeError::Overflow)
            },
            Pow => Self::eval_pow(left, right),
        }
    }

    /// Evaluates an integer exponentiation.
    ///
    /// Non-negative exponents use checked arithmetic. A negative exponent
    /// gives the real-valued power truncated toward zero: `1` for a base of
    /// `1`, `±1` for a base of `-1` depending on parity, and `0` for every
    /// other non-zero base.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero base with a negative exponent.
    /// - `Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use smartcalc::interpreter::environment::VariableEnvironment;
    ///
    /// assert_eq!(VariableEnvironment::eval_pow(2, 10), Ok(1024));
    /// assert_eq!(VariableEnvironment::eval_pow(2, -1), Ok(0));
    /// assert_eq!(VariableEnvironment::eval_pow(-1, -3), Ok(-1));
    /// assert!(VariableEnvironment::eval_pow(0, -2).is_err());
    /// ```
    pub fn eval_pow(base: i64, exponent: i64) -> EvalResult<i64> {
        let odd = exponent % 2 != 0;

        match base {
            0 if exponent < 0 => Err(RuntimeError::DivisionByZero),
            0 => Ok(i64::from(exponent == 0)),
            1 => Ok(1),
            -1 => Ok(if odd { -1 } else { 1 }),
            _ if exponent < 0 => Ok(0),
            _ => u32::try_from(exponent).ok()
                                        .and_then(|e| base.checked_pow(e))
                                        .ok_or(RuntimeError::Overflow),
        }
    }
}

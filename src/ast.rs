use crate::interpreter::lexer::Token;

/// An arithmetic operator after sign runs have been resolved.
///
/// This is what the evaluator actually applies. It is produced from an
/// [`Operator`] at evaluation time by [`Operator::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
    /// `^`
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// A maximal run of `+` and `-` characters, such as `--` or `+-+`.
///
/// The run is kept as written and only collapsed to a single operator when it
/// is applied, see [`SignRun::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRun {
    run: String,
}

impl SignRun {
    /// Wraps `run` if it is a non-empty string of `+` and `-` only.
    #[must_use]
    pub fn new(run: &str) -> Option<Self> {
        if !run.is_empty() && run.chars().all(|c| c == '+' || c == '-') {
            Some(Self { run: run.to_string() })
        } else {
            None
        }
    }

    /// Collapses the run into `+` or `-`.
    ///
    /// Any `+` in the run makes it `+`. A run made only of `-` is `+` when its
    /// length is even and `-` when it is odd.
    ///
    /// # Example
    /// ```
    /// use smartcalc::ast::{BinaryOperator, SignRun};
    ///
    /// let resolve = |run| SignRun::new(run).unwrap().resolve();
    ///
    /// assert_eq!(resolve("--"), BinaryOperator::Add);
    /// assert_eq!(resolve("---"), BinaryOperator::Sub);
    /// assert_eq!(resolve("+--"), BinaryOperator::Add);
    /// assert_eq!(resolve("----"), BinaryOperator::Add);
    /// ```
    #[must_use]
    pub fn resolve(&self) -> BinaryOperator {
        if self.run.contains('+') || self.run.len() % 2 == 0 {
            BinaryOperator::Add
        } else {
            BinaryOperator::Sub
        }
    }

    /// Extends this run with the signs of `other`.
    pub fn append(&mut self, other: &Self) {
        self.run.push_str(&other.run);
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.run
    }
}

/// An operator token as it appears in the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// A run of `+`/`-`.
    Signs(SignRun),
}

impl Operator {
    /// Recognizes an operator field: a single `*`, `/` or `^`, or a sign run.
    #[must_use]
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "*" => Some(Self::Star),
            "/" => Some(Self::Slash),
            "^" => Some(Self::Caret),
            _ => SignRun::new(field).map(Self::Signs),
        }
    }

    /// Binding strength used by the converter. Higher binds tighter.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::Signs(_) => 1,
            Self::Star | Self::Slash => 2,
            Self::Caret => 3,
        }
    }

    #[must_use]
    pub fn resolve(&self) -> BinaryOperator {
        match self {
            Self::Star => BinaryOperator::Mul,
            Self::Slash => BinaryOperator::Div,
            Self::Caret => BinaryOperator::Pow,
            Self::Signs(run) => run.resolve(),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::Signs(run) => write!(f, "{}", run.as_str()),
        }
    }
}

/// A token sequence in postfix (reverse Polish) order.
///
/// Parentheses never make it into a postfix sequence: pushing one is a
/// no-op, so the length of a well-formed sequence is always the number of
/// operands plus the number of operators.
///
/// # Example
/// ```
/// use smartcalc::{ast::Postfix, interpreter::lexer::Token};
///
/// let mut postfix = Postfix::new();
/// postfix.push(Token::Number(3));
/// postfix.push(Token::CloseParen);
/// postfix.push(Token::Number(4));
/// assert_eq!(postfix.len(), 2);
/// assert_eq!(postfix.to_string(), "3 4");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends `token`, silently dropping parentheses.
    pub fn push(&mut self, token: Token) {
        if !matches!(token, Token::OpenParen | Token::CloseParen) {
            self.tokens.push(token);
        }
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::session::{Outcome, Session};

/// Printed by `/help`.
pub const HELP: &str = "\
Enter an integer expression using + - * / ^ and parentheses, e.g. 3 + 4 * 2.
Runs of + and - collapse into one sign: 5 - - 3 is 8.
Assign variables with name = value or name = other, then use them by name.
Division truncates toward zero. Commands: /help, /exit.";

/// A slash command recognized by the read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/help`
    Help,
    /// `/exit`
    Exit,
}

impl Command {
    /// Parses the text after the leading `/`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Self::Help),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// What the read loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print.
    Silent,
    /// Print this text and keep reading.
    Print(String),
    /// Print this text and end the session.
    Exit(String),
}

/// The line-oriented front end around a [`Session`].
///
/// Handles blank lines and slash commands itself and hands everything else
/// to the session.
///
/// # Example
/// ```
/// use smartcalc::repl::{Repl, Reply};
///
/// let mut repl = Repl::new();
/// assert_eq!(repl.handle_line("a = 4"), Reply::Silent);
/// assert_eq!(repl.handle_line("a*(2+1)"), Reply::Print("12".to_string()));
/// assert_eq!(repl.handle_line("/exit"), Reply::Exit("Bye!".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct Repl {
    session: Session,
}

impl Repl {
    #[must_use]
    pub const fn new() -> Self {
        Self { session: Session::new() }
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Reply::Silent;
        }

        if let Some(name) = trimmed.strip_prefix('/') {
            debug!(command = name, "command");
            return match Command::parse(name) {
                Some(Command::Help) => Reply::Print(HELP.to_string()),
                Some(Command::Exit) => Reply::Exit("Bye!".to_string()),
                None => Reply::Print("Unknown command".to_string()),
            };
        }

        match self.session.evaluate(line) {
            Outcome::Value(value) | Outcome::Query(value) => Reply::Print(value.to_string()),
            Outcome::Bound => Reply::Silent,
            Outcome::Failure(e) => Reply::Print(e.to_string()),
        }
    }

    /// Reads lines from `input` until EOF or `/exit`, writing replies to
    /// `output`.
    ///
    /// # Errors
    /// Returns any I/O error from reading or writing.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
        where R: BufRead,
              W: Write
    {
        for line in input.lines() {
            match self.handle_line(&line?) {
                Reply::Silent => {},
                Reply::Print(text) => writeln!(output, "{text}")?,
                Reply::Exit(text) => {
                    writeln!(output, "{text}")?;
                    break;
                },
            }
        }

        output.flush()
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }
}

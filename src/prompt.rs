//! Interactive yes/no confirmation.
use std::io::{self, BufRead, Write as _};

/// Capability to ask the user a yes/no question.
///
/// Injected into the deployment stages so that conflict handling can be
/// exercised without a terminal.
#[cfg_attr(test, mockall::automock)]
pub trait Confirm {
    /// Ask `question` and return the user's answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, question: &str) -> io::Result<bool>;
}

/// Interpret a single line of input as a yes/no answer.
///
/// Returns `None` for anything that is neither, so the caller can ask again.
#[must_use]
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask on stdout and read answers line by line from `input` until one parses.
///
/// End of input counts as "no".
///
/// # Errors
///
/// Returns an error if writing the prompt or reading a line fails.
pub fn ask<R: BufRead, W: io::Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    loop {
        write!(output, "{question} [y/n] ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }
        if let Some(answer) = parse_answer(&line) {
            return Ok(answer);
        }
    }
}

/// [`Confirm`] implementation reading from the process's stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, question: &str) -> io::Result<bool> {
        ask(question, &mut io::stdin().lock(), &mut io::stdout().lock())
    }
}

//! Host UI adapters — input prompt, modal confirmation, error display.
//!
//! The dialog flows only see the `Ui` trait, so tests substitute
//! deterministic fakes. `TerminalUi` is the production implementation:
//! prompts go to stderr, answers are read from stdin, and stdout stays
//! reserved for the JSON outcome the host consumes.

use std::io::{BufRead, Write};

use anyhow::Result;

/// Options for a single-line input prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBoxOptions {
    /// Label shown next to the input field.
    pub prompt: &'static str,
    /// Text pre-filled in the input field; an empty answer accepts it.
    pub default: Option<String>,
}

pub trait Ui {
    /// Show a single-line input box. None means the user cancelled.
    fn input_box(&mut self, options: &InputBoxOptions) -> Result<Option<String>>;

    /// Show a modal message with a single affirmative action.
    /// True only when the user picked the action.
    fn confirm_modal(&mut self, message: &str, action: &str) -> Result<bool>;

    /// Surface a failure message verbatim.
    fn error_message(&mut self, message: &str);
}

#[derive(Debug, Default)]
pub struct TerminalUi;

impl TerminalUi {
    pub fn new() -> Self {
        TerminalUi
    }

    fn read_answer() -> Result<Option<String>> {
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // EOF: the user closed the input stream.
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl Ui for TerminalUi {
    fn input_box(&mut self, options: &InputBoxOptions) -> Result<Option<String>> {
        {
            let mut err = std::io::stderr().lock();
            match &options.default {
                Some(default) => write!(err, "{} [{}]: ", options.prompt, default)?,
                None => write!(err, "{}: ", options.prompt)?,
            }
            err.flush()?;
        }
        match Self::read_answer()? {
            Some(entered) if entered.is_empty() => Ok(options.default.clone()),
            other => Ok(other),
        }
    }

    fn confirm_modal(&mut self, message: &str, action: &str) -> Result<bool> {
        {
            let mut err = std::io::stderr().lock();
            write!(err, "{message} [{action}/cancel]: ")?;
            err.flush()?;
        }
        let Some(answer) = Self::read_answer()? else {
            return Ok(false);
        };
        Ok(answer.eq_ignore_ascii_case(action)
            || answer.eq_ignore_ascii_case("y")
            || answer.eq_ignore_ascii_case("yes"))
    }

    fn error_message(&mut self, message: &str) {
        eprintln!("error: {message}");
    }
}

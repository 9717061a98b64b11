//! Line-oriented console I/O
//!
//! `Console` wraps any `BufRead`/`Write` pair so the interactive session can be
//! driven from stdin/stdout or from in-memory buffers in tests.

use std::io::{BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::error::{RosterError, RosterResult};

/// Message shown when a validated prompt rejects its input
pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Console input and output
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console; screen clearing is off by default
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enable or disable screen clearing
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Write text as-is
    pub fn write(&mut self, text: &str) -> RosterResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write text followed by a newline
    pub fn line(&mut self, text: &str) -> RosterResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Show a prompt and read one trimmed line
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` at end of input.
    pub fn prompt_string(&mut self, prompt: &str) -> RosterResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Err(RosterError::InputClosed);
        }

        Ok(input.trim().to_string())
    }

    /// Prompt repeatedly until `parse` accepts the input
    pub fn prompt_valid<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> RosterResult<T>,
    ) -> RosterResult<T> {
        loop {
            let raw = self.prompt_string(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(RosterError::Validation(_)) => self.line(INVALID_INPUT)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask a y/n question; only `y` confirms
    pub fn confirm(&mut self, prompt: &str) -> RosterResult<bool> {
        let answer = self.prompt_string(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Clear the screen and home the cursor, when enabled
    pub fn clear_screen(&mut self) -> RosterResult<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Consume the console, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

//! # Console
//!
//! Line-based prompt boundary between the edit session and whoever drives
//! it: a terminal in the binary, in-memory buffers in tests.

use crate::EditorError;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, text: &str) -> Result<(), EditorError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), EditorError> {
        self.say("")
    }

    /// Print `message` without a newline and read the reply.
    ///
    /// The trailing line break is stripped; everything else is returned
    /// as typed. Fails with [`EditorError::InputClosed`] at end of input.
    pub fn prompt(&mut self, message: &str) -> Result<String, EditorError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EditorError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

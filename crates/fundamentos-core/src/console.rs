//! Line-oriented terminal dialogue.
//!
//! `Console` wraps any reader/writer pair so the same code drives a real
//! terminal (stdin/stdout) and in-memory buffers in tests. The prompt loop
//! has no retry cap and no timeout: it returns only once the validator
//! accepts a line, or fails when the input stream itself is gone.

#[cfg(test)]
#[path = "console_test.rs"]
mod tests;

use std::io::{BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::errors::{ConsoleError, ConsoleResult};

pub const PAUSE_MESSAGE: &str = "Pressione Enter para continuar...";

/// Terminal behaviour that can be switched off, e.g. when input is piped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub clear_screen: bool,
    pub pause: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause: true,
        }
    }
}

/// Whether the prompt text ends its own line or leaves the cursor after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    Line,
    Inline,
}

pub struct Console<R, W> {
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    pub fn options(&self) -> ConsoleOptions {
        self.options
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line and trims it. End of input is reported as `InputClosed`.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, so a line typed in a
    /// legacy encoding reaches the validator and is rejected like any other
    /// bad input.
    pub fn read_line(&mut self) -> ConsoleResult<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    pub fn write(&mut self, text: &str) -> ConsoleResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn write_line(&mut self, text: &str) -> ConsoleResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn clear(&mut self) -> ConsoleResult<()> {
        if self.options.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Waits for Enter so the user can read a result before the menu redraws.
    pub fn pause(&mut self) -> ConsoleResult<()> {
        if self.options.pause {
            self.write_line("")?;
            self.write_line(PAUSE_MESSAGE)?;
            self.output.flush()?;
            self.read_line()?;
        }
        Ok(())
    }

    /// Shows `prompt` until `parse` yields a value for a non-empty line,
    /// printing `error` after each miss.
    pub fn prompt_map<T, F>(
        &mut self,
        style: PromptStyle,
        prompt: &str,
        error: &str,
        parse: F,
    ) -> ConsoleResult<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            match style {
                PromptStyle::Line => self.write_line(prompt)?,
                PromptStyle::Inline => self.write(prompt)?,
            }
            self.output.flush()?;

            let line = self.read_line()?;
            if !line.is_empty() {
                if let Some(value) = parse(&line) {
                    return Ok(value);
                }
            }

            log::debug!("rejected input for prompt {:?}: {:?}", prompt, line);
            self.write_line(error)?;
        }
    }

    /// Shows `prompt` until a non-empty line satisfies `accept`, returning that line.
    pub fn prompt_until<F>(
        &mut self,
        style: PromptStyle,
        prompt: &str,
        error: &str,
        accept: F,
    ) -> ConsoleResult<String>
    where
        F: Fn(&str) -> bool,
    {
        self.prompt_map(style, prompt, error, |line| {
            accept(line).then(|| line.to_string())
        })
    }

    /// Prompt loop that accepts any non-empty text.
    pub fn prompt_text(&mut self, prompt: &str, error: &str) -> ConsoleResult<String> {
        self.prompt_until(PromptStyle::Line, prompt, error, |_| true)
    }
}

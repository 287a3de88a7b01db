//! Error types for the console session
//!
//! Invalid user input is never an error here: it is answered by re-prompting.
//! What remains are the ways the terminal itself can fail underneath a prompt,
//! which end the session instead of looping.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Input stream closed")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// True when the session ended because the user (or the pipe) closed stdin.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, ConsoleError::InputClosed)
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

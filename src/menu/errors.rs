use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No entry carries the requested global index (gap between group
    /// blocks, or past the last assigned index).
    NotFound(u32),
    /// Non-empty sub-choice input that matches none of the offered modes.
    InvalidModeChoice(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NotFound(index) => write!(f, "no host with menu index {}", index),
            SelectionError::InvalidModeChoice(msg) => write!(f, "invalid mode choice: {}", msg),
        }
    }
}

impl Error for SelectionError {}

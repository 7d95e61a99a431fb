//! Logging-related error types

use std::{error::Error, fmt, io};

/// Errors raised while writing the debug log
#[derive(Debug)]
pub enum LogError {
    /// The log file could not be opened or written
    IoError(io::Error),
    /// The log directory could not be resolved or created
    DirectoryCreationError(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::IoError(err) => write!(f, "could not write the debug log: {}", err),
            LogError::DirectoryCreationError(msg) => {
                write!(f, "could not create the log directory: {}", msg)
            }
        }
    }
}

impl Error for LogError {}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        LogError::IoError(err)
    }
}

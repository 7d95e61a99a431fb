use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file at any search location.
    NotFound,
    /// The document parsed but does not have the expected shape.
    Malformed(String),
    /// `--init` target already exists.
    AlreadyExists(PathBuf),
    IoError(io::Error),
    DirectoryCreationError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound => {
                write!(f, "no configuration file found in any search location (run with --init to create one)")
            }
            ConfigError::Malformed(msg) => write!(f, "malformed configuration: {}", msg),
            ConfigError::AlreadyExists(path) => {
                write!(f, "configuration already exists at {}", path.display())
            }
            ConfigError::IoError(err) => write!(f, "I/O error: {}", err),
            ConfigError::DirectoryCreationError(msg) => {
                write!(f, "Failed to create directory: {}", msg)
            }
        }
    }
}

impl Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IoError(error)
    }
}

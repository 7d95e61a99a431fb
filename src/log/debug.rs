//! Debug logging implementation
//!
//! Provides file-based logging for debug, info, warn, and error messages.
//! Logs are written to `~/.config/sshmenu/logs/sshm.log` with timestamps and
//! log levels. The menu is a single-threaded, short-lived process, so each
//! entry is appended and flushed synchronously.

use super::{LogError, LogLevel, formatter::LogFormatter};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

/// Debug logger that writes formatted log messages to a file
#[derive(Clone, Default)]
pub(super) struct DebugLogger {
    /// Formatter for log messages (includes timestamp and level)
    formatter: LogFormatter,
}

impl DebugLogger {
    pub(super) fn new() -> Self {
        Self {
            formatter: LogFormatter::new(true, true),
        }
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let log_path = Self::debug_log_path()?;
        let mut file = OpenOptions::new()
            .create(true) // Create if missing.
            .append(true) // Preserve existing logs.
            .open(&log_path)?;

        writeln!(file, "{}", self.formatter.format(Some(level), message))?;
        Ok(())
    }

    fn debug_log_path() -> Result<PathBuf, LogError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LogError::DirectoryCreationError("Config directory not found".to_string()))?;

        let log_dir = config_dir.join("sshmenu").join("logs");
        fs::create_dir_all(&log_dir)
            .map_err(|err| LogError::DirectoryCreationError(format!("{}: {}", log_dir.display(), err)))?;

        Ok(log_dir.join("sshm.log"))
    }
}

//! File-based logging for menu runs.
//!
//! Logging is off unless enabled with `-d/--debug` or `settings.debug`, and
//! all log writes are best-effort: a failure to log never aborts the menu.

mod debug;
mod errors;
mod formatter;
mod macros;

pub use errors::LogError;

use std::sync::atomic::{AtomicBool, Ordering};

// Global flag for enabling debug logging
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

#[derive(Clone, Default)]
pub struct Logger {
    debug_logger: debug::DebugLogger,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            debug_logger: debug::DebugLogger::new(),
        }
    }

    pub fn enable_debug(&self) {
        DEBUG_MODE.store(true, Ordering::SeqCst);
    }

    pub fn is_debug_enabled(&self) -> bool {
        DEBUG_MODE.load(Ordering::SeqCst)
    }

    pub fn log_debug(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Debug, message)
    }

    pub fn log_info(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Info, message)
    }

    pub fn log_warn(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Warning, message)
    }

    pub fn log_error(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Error, message)
    }

    fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        if self.is_debug_enabled() {
            self.debug_logger.log(level, message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "test/log/macros.rs"]
mod tests;

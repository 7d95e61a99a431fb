use crate::log::LogLevel;
use chrono::Local;
use std::fmt::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Renders one log line, `2026-08-22 10:41:03.512 [WARN] message` shaped.
/// The timestamp and level prefixes can each be switched off.
#[derive(Clone)]
pub struct LogFormatter {
    include_timestamp: bool,
    include_level: bool,
}

impl LogFormatter {
    pub fn new(include_timestamp: bool, include_level: bool) -> Self {
        Self {
            include_timestamp,
            include_level,
        }
    }

    pub fn format(&self, level: Option<LogLevel>, message: &str) -> String {
        let mut line = String::new();

        if self.include_timestamp {
            // write! to a String cannot fail.
            let _ = write!(line, "{} ", Local::now().format(TIMESTAMP_FORMAT));
        }
        if let (true, Some(level)) = (self.include_level, level) {
            let _ = write!(line, "[{}] ", level.as_str());
        }
        line.push_str(message);

        line
    }
}

impl Default for LogFormatter {
    fn default() -> Self {
        Self::new(true, true)
    }
}

#[cfg(test)]
#[path = "../test/log/formatter.rs"]
mod tests;

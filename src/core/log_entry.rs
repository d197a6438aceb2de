//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// One accepted message, stamped once and handed to every active sink
#[derive(Debug, Clone)]
pub struct LogEntry<'a> {
    pub level: LogLevel,
    pub message: &'a str,
    pub timestamp: DateTime<Local>,
}

impl<'a> LogEntry<'a> {
    pub fn new(level: LogLevel, message: &'a str) -> Self {
        Self {
            level,
            message,
            timestamp: Local::now(),
        }
    }
}

/// Append `body` to `line`, terminating it with exactly one newline
///
/// A message that already ends in `'\n'` is not given a second one.
pub(crate) fn push_terminated(line: &mut String, body: &str) {
    line.push_str(body);
    if !body.ends_with('\n') {
        line.push('\n');
    }
}

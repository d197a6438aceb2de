//! Timestamp formatting utilities
//!
//! Every line starts with a timestamp rendered in local time. The default
//! mirrors the classic `YYYY/MM/DD HH:MM:SS` prefix of line-oriented loggers.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const STANDARD: &str = "%Y/%m/%d %H:%M:%S";

/// Timestamp format options for the line prefix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Date and time to the second: `2025/01/08 10:30:45`
    #[default]
    Standard,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45.123456789+01:00`
    Rfc3339,

    /// Custom strftime format
    ///
    /// ```
    /// use leveled_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// assert_eq!(format.format(&chrono::Local::now()).len(), 8);
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime`; a custom pattern chrono cannot render falls back to
    /// the standard format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Standard => datetime.format(STANDARD).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    out = datetime.format(STANDARD).to_string();
                }
                out
            }
        }
    }
}

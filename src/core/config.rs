//! Logger configuration
//!
//! A [`LoggerConfig`] is a plain record: it decides which sinks exist and the
//! minimum level, and is consumed once by [`Logger::new`](crate::Logger::new).

use super::{error::Result, log_level::LogLevel, timestamp::TimestampFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Messages below this level are dropped on every sink
    pub min_level: LogLevel,
    pub log_to_console: bool,
    pub log_to_file: bool,
    /// Only consulted when `log_to_file` is set
    pub file_path: PathBuf,
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Debug,
            log_to_console: true,
            log_to_file: false,
            file_path: PathBuf::new(),
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    ///
    /// ```
    /// use leveled_logger::{LoggerConfig, LogLevel};
    ///
    /// let config = LoggerConfig::from_json_str(r#"{ "min_level": "WARNING" }"#).unwrap();
    /// assert_eq!(config.min_level, LogLevel::Warning);
    /// assert!(config.log_to_console);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Debug);
        assert!(config.log_to_console);
        assert!(!config.log_to_file);
        assert_eq!(config.file_path, PathBuf::new());
    }

    #[test]
    fn test_full_json() {
        let config = LoggerConfig::from_json_str(
            r#"{
                "min_level": "ERROR",
                "log_to_console": false,
                "log_to_file": true,
                "file_path": "/tmp/app.log",
                "timestamp_format": "Rfc3339"
            }"#,
        )
        .unwrap();

        assert_eq!(config.min_level, LogLevel::Error);
        assert!(!config.log_to_console);
        assert!(config.log_to_file);
        assert_eq!(config.file_path, PathBuf::from("/tmp/app.log"));
        assert_eq!(config.timestamp_format, TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_invalid_json() {
        let err = LoggerConfig::from_json_str(r#"{ "min_level": "LOUD" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = LoggerConfig::from_json_file("/nonexistent/logger.json").unwrap_err();
        assert!(matches!(err, LoggerError::IoError(_)));
    }
}

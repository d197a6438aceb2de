//! Error types for the logger

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The file sink could not be opened for appending
    #[error("Failed to open log file '{}': {source}", .path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create a sink-open error for `path`
    pub fn sink_open(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

//! File sink implementation

use crate::core::log_entry::push_terminated;
use crate::core::{LogEntry, LoggerError, Result, Sink, TimestampFormat};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends `<timestamp> [<LEVEL>] <message>` lines to a file, without colors
///
/// Writes go straight to the file handle; nothing is buffered in process.
pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
    timestamp_format: TimestampFormat,
}

impl FileSink {
    /// Open `path` write-only for appending, creating it if absent
    ///
    /// Existing content is never truncated.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink_open(&path, e))?;

        Ok(Self {
            file: Mutex::new(file),
            path,
            timestamp_format: TimestampFormat::default(),
        })
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(&self, entry: &LogEntry<'_>) -> String {
        let mut line = format!(
            "{} [{}] ",
            self.timestamp_format.format(&entry.timestamp),
            entry.level.to_str()
        );
        push_terminated(&mut line, entry.message);
        line
    }
}

impl Sink for FileSink {
    fn write_entry(&self, entry: &LogEntry<'_>) -> Result<()> {
        let line = self.format_line(entry);
        self.file.lock().write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut file = self.file.lock();
        file.flush()?;
        file.sync_data()?;
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("new.log");
        assert!(!path.exists());

        let sink = FileSink::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(sink.path(), path.as_path());
    }

    #[test]
    fn test_plain_line() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("plain.log");

        let sink = FileSink::open(&path).unwrap();
        sink.write_entry(&LogEntry::new(LogLevel::Error, "boom"))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.ends_with(" [ERROR] boom\n"));
        assert!(!content.contains('\x1b'));
    }

    #[test]
    fn test_missing_parent_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("app.log");

        let err = FileSink::open(&path).err().expect("open should fail");
        match err {
            LoggerError::SinkOpen { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}

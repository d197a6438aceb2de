//! Console sink implementation

use crate::core::log_entry::push_terminated;
use crate::core::log_level::RESET;
use crate::core::{LogEntry, Result, Sink, TimestampFormat};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes `<timestamp> <color>[<LEVEL>]<reset> <message>` lines
///
/// Only the bracketed level tag is colored. Output goes to stdout unless a
/// writer is supplied with [`ConsoleSink::with_writer`].
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    timestamp_format: TimestampFormat,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Send console lines to `writer` instead of stdout
    ///
    /// ```
    /// use leveled_logger::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::with_writer(Vec::new());
    /// ```
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn format_line(&self, entry: &LogEntry<'_>) -> String {
        let mut line = format!(
            "{} {}[{}]{} ",
            self.timestamp_format.format(&entry.timestamp),
            entry.level.color_escape(),
            entry.level.to_str(),
            RESET
        );
        push_terminated(&mut line, entry.message);
        line
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn write_entry(&self, entry: &LogEntry<'_>) -> Result<()> {
        let line = self.format_line(entry);
        self.writer.lock().write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

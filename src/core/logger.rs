//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::{ConsoleSink, FileSink};
use std::io::Write;
use std::path::PathBuf;

/// A leveled logger with an optional console sink and an optional file sink
///
/// The minimum level and the set of sinks are fixed at construction. Emit
/// operations take `&self`, so a `Logger` can be shared across threads behind
/// an `Arc`.
pub struct Logger {
    min_level: LogLevel,
    console: Option<ConsoleSink>,
    file: Option<FileSink>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Build a logger from a configuration record
    ///
    /// Fails with [`LoggerError::SinkOpen`](crate::LoggerError::SinkOpen) when file output is enabled and
    /// the path cannot be opened for appending. No logger is returned in that
    /// case.
    ///
    /// ```
    /// use leveled_logger::{Logger, LoggerConfig, LogLevel};
    ///
    /// let logger = Logger::new(LoggerConfig {
    ///     min_level: LogLevel::Warning,
    ///     ..LoggerConfig::default()
    /// })
    /// .unwrap();
    ///
    /// logger.info("dropped");
    /// logger.warning("printed");
    /// ```
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let mut builder = Logger::builder()
            .min_level(config.min_level)
            .console(config.log_to_console)
            .timestamp_format(config.timestamp_format);

        if config.log_to_file {
            builder = builder.file(config.file_path);
        }

        builder.build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn has_console(&self) -> bool {
        self.console.is_some()
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    fn sinks(&self) -> impl Iterator<Item = &dyn Sink> {
        let console = self.console.iter().map(|s| s as &dyn Sink);
        let file = self.file.iter().map(|s| s as &dyn Sink);
        console.chain(file)
    }

    /// Filter `message` by level and write it to every active sink
    ///
    /// A failed write on one sink does not stop the other and is not
    /// returned; it only increments [`LoggerMetrics::write_failures`].
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if level < self.min_level {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(level, message.as_ref());
        for sink in self.sinks() {
            if sink.write_entry(&entry).is_err() {
                self.metrics.record_write_failure();
            }
        }
        self.metrics.record_emitted();
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    /// Flush every active sink
    ///
    /// A failing sink does not keep the others from being flushed; the first
    /// error is returned once all have been tried.
    pub fn flush(&self) -> Result<()> {
        flush_sinks(self.sinks())
    }

    /// Flush and release both sinks
    ///
    /// Dropping a `Logger` releases the sinks too, but discards flush errors.
    pub fn close(self) -> Result<()> {
        self.flush()
    }
}

fn flush_sinks<'a>(sinks: impl IntoIterator<Item = &'a dyn Sink>) -> Result<()> {
    let mut first_error = None;
    for sink in sinks {
        if let Err(e) = sink.flush() {
            first_error.get_or_insert(e);
        }
    }
    first_error.map_or(Ok(()), Err)
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Info)
///     .console_writer(Vec::new())
///     .build()
///     .unwrap();
///
/// assert!(logger.has_console());
/// assert!(!logger.has_file());
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    console: Option<ConsoleSink>,
    file_path: Option<PathBuf>,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    /// Create a builder with no sinks and a DEBUG minimum level
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Debug,
            console: None,
            file_path: None,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Enable or disable the stdout console sink
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, enabled: bool) -> Self {
        self.console = enabled.then(ConsoleSink::stdout);
        self
    }

    /// Enable the console sink, writing to `writer` instead of stdout
    #[must_use = "builder methods return a new value"]
    pub fn console_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Some(ConsoleSink::with_writer(writer));
        self
    }

    /// Enable the file sink at `path`; the file is opened by [`build`](Self::build)
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Build the Logger, opening the file sink if one was requested
    pub fn build(self) -> Result<Logger> {
        let console = self
            .console
            .map(|sink| sink.with_timestamp_format(self.timestamp_format.clone()));

        let file = match self.file_path {
            Some(path) => {
                Some(FileSink::open(path)?.with_timestamp_format(self.timestamp_format))
            }
            None => None,
        };

        Ok(Logger {
            min_level: self.min_level,
            console,
            file,
            metrics: LoggerMetrics::new(),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

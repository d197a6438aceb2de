//! # Leveled Logger
//!
//! A minimal leveled logger. Messages below a configured minimum level are
//! dropped; the rest go to a colorized console sink, a plain-text append-only
//! file sink, or both.
//!
//! ```no_run
//! use leveled_logger::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let logger = Logger::new(LoggerConfig {
//!         min_level: LogLevel::Info,
//!         log_to_console: true,
//!         log_to_file: true,
//!         file_path: "app.log".into(),
//!         ..LoggerConfig::default()
//!     })?;
//!
//!     logger.info("service started");
//!     logger.close()
//! }
//! ```
//!
//! Console lines look like `2025/01/08 10:30:45 \x1b[32m[INFO]\x1b[0m service started`;
//! file lines carry the same text without the color escapes.

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Result, Sink, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use core::{
    LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
    Sink, TimestampFormat,
};
pub use sinks::{ConsoleSink, FileSink};

//! Sink trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A line-oriented output destination
///
/// Implementations must write each entry as a single call on the underlying
/// writer while holding their own lock, so lines from concurrent callers never
/// interleave mid-line.
pub trait Sink: Send + Sync {
    fn write_entry(&self, entry: &LogEntry<'_>) -> Result<()>;
    fn flush(&self) -> Result<()>;
}

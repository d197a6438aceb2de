//! Basic usage example
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::prelude::*;
use leveled_logger::{info, warning};

fn main() -> Result<()> {
    let logger = Logger::new(LoggerConfig {
        min_level: LogLevel::Info,
        ..LoggerConfig::default()
    })?;

    logger.debug("This is filtered out");
    logger.info("Application started");
    logger.warning("Using default settings");
    logger.error("Failed to load optional plugin");

    let items = 3;
    info!(logger, "Processing {} items", items);
    warning!(logger, "Item {} took longer than expected", 2);

    logger.close()
}

//! File logging example
//!
//! Writes to both the console and `application.log`. Run it twice to see the
//! file grow: existing lines are kept.
//!
//! Run with: cargo run --example file_logging

use leveled_logger::prelude::*;

fn main() -> Result<()> {
    let logger = Logger::new(LoggerConfig {
        min_level: LogLevel::Debug,
        log_to_console: true,
        log_to_file: true,
        file_path: "application.log".into(),
        ..LoggerConfig::default()
    })?;

    logger.info("Application started");
    logger.debug("Loading configuration...");

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warning("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");
    logger.close()?;

    println!("Check 'application.log' for the plain-text log output");
    Ok(())
}

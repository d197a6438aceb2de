//! Configuration file example
//!
//! Run with: cargo run --example config_file -- logger.json

use leveled_logger::prelude::*;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => LoggerConfig::from_json_file(path)?,
        None => LoggerConfig::from_json_str(
            r#"{ "min_level": "WARNING", "timestamp_format": "Iso8601" }"#,
        )?,
    };

    let logger = match Logger::new(config) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("logging disabled: {err}");
            return Err(err);
        }
    };

    logger.info("not shown at WARNING");
    logger.warning("shown with an ISO 8601 timestamp");
    logger.close()
}

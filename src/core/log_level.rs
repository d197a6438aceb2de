//! Log level definitions
//!
//! Display names and console colors live in fixed tables indexed by the
//! level's ordinal. Ordinals outside the tables resolve to `"UNKNOWN"` and
//! the reset escape.

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ANSI escape that restores the terminal's default attributes
pub const RESET: &str = "\x1b[0m";

/// Name shown for an ordinal with no table entry
pub const UNKNOWN_LEVEL: &str = "UNKNOWN";

const LEVEL_NAMES: [&str; 4] = ["DEBUG", "INFO", "WARNING", "ERROR"];

const LEVEL_COLORS: [Color; 4] = [Color::Cyan, Color::Green, Color::Yellow, Color::Red];

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    /// All levels, lowest severity first
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
    ];

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    #[inline]
    pub fn to_str(self) -> &'static str {
        level_name(self.ordinal())
    }

    /// Console color of the bracketed level tag
    pub fn color_code(self) -> Color {
        LEVEL_COLORS[usize::from(self.ordinal())]
    }

    /// ANSI foreground escape for this level, e.g. `"\x1b[33m"` for WARNING
    ///
    /// Rendered from the color's SGR code directly, so the bytes do not
    /// depend on whether stdout is a terminal.
    pub fn color_escape(self) -> String {
        format!("\x1b[{}m", self.color_code().to_fg_str())
    }
}

/// Resolve a level ordinal to its display name
pub fn level_name(ordinal: u8) -> &'static str {
    LEVEL_NAMES
        .get(usize::from(ordinal))
        .copied()
        .unwrap_or(UNKNOWN_LEVEL)
}

/// Resolve a level ordinal to its ANSI foreground escape
pub fn color_escape(ordinal: u8) -> String {
    LogLevel::from_ordinal(ordinal).map_or_else(|| RESET.to_string(), LogLevel::color_escape)
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = LogLevel::ALL.iter().map(|l| l.to_str()).collect();
        assert_eq!(names, ["DEBUG", "INFO", "WARNING", "ERROR"]);
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
    }

    #[test]
    fn test_color_escapes() {
        assert_eq!(LogLevel::Debug.color_escape(), "\x1b[36m");
        assert_eq!(LogLevel::Info.color_escape(), "\x1b[32m");
        assert_eq!(LogLevel::Warning.color_escape(), "\x1b[33m");
        assert_eq!(LogLevel::Error.color_escape(), "\x1b[31m");
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(LogLevel::Debug.color_code(), Color::Cyan);
        assert_eq!(LogLevel::Info.color_code(), Color::Green);
        assert_eq!(LogLevel::Warning.color_code(), Color::Yellow);
        assert_eq!(LogLevel::Error.color_code(), Color::Red);
        assert_eq!(color_escape(LogLevel::Error.ordinal()), "\x1b[31m");
    }

    #[test]
    fn test_unknown_ordinal() {
        assert_eq!(level_name(4), "UNKNOWN");
        assert_eq!(level_name(u8::MAX), "UNKNOWN");
        assert_eq!(color_escape(4), RESET);
        assert_eq!(LogLevel::from_ordinal(4), None);
    }

    #[test]
    fn test_ordinal_roundtrip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_ordinal(level.ordinal()), Some(level));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("Warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!(" ERROR ".parse::<LogLevel>(), Ok(LogLevel::Error));
        assert!("fatal".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&LogLevel::Warning).unwrap(),
            "\"WARNING\""
        );
        let level: LogLevel = serde_json::from_str("\"INFO\"").unwrap();
        assert_eq!(level, LogLevel::Info);
    }
}

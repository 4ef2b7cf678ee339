//! Severity levels

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Severity of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Error,
    Warn,
    Debug,
    Verbose,
}

/// Every level, in the order they are enabled by default
pub const DEFAULT_LOG_LEVELS: [Level; 5] = [
    Level::Info,
    Level::Error,
    Level::Warn,
    Level::Debug,
    Level::Verbose,
];

impl Level {
    /// Lowercase name, as accepted by [`Level::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Debug => "debug",
            Level::Verbose => "verbose",
        }
    }

    /// Uppercase name right-aligned to 7 columns, as printed in a log line
    pub fn label(&self) -> String {
        format!("{:>7}", self.as_str().to_uppercase())
    }

    /// Color used for the pid tag, the level label and the message
    pub fn color(&self) -> Color {
        match self {
            Level::Debug => Color::BrightMagenta,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
            Level::Verbose => Color::BrightCyan,
            Level::Info => Color::Green,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl std::fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown log level '{}'", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Level::Info),
            "error" => Ok(Level::Error),
            "warn" => Ok(Level::Warn),
            "debug" => Ok(Level::Debug),
            "verbose" => Ok(Level::Verbose),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Level::Verbose,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::ERROR => Level::Error,
        }
    }
}

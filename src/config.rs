//! Logger options

use serde::{Deserialize, Serialize};

use crate::logging::{Level, DEFAULT_LOG_LEVELS};

/// Environment variable that turns colors off when set to a non-empty value
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Options accepted when constructing a [`Logger`](crate::Logger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    /// Levels this logger emits; calls at any other level are dropped
    pub levels: Vec<Level>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LOG_LEVELS.to_vec(),
        }
    }
}

impl LoggerOptions {
    /// Options enabling exactly `levels`
    pub fn with_levels(levels: impl IntoIterator<Item = Level>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
        }
    }
}

//! Error type for logging operations
//!
//! Logging is not best-effort: a line that cannot be written or a message that
//! cannot be serialized fails the call that produced it.

use thiserror::Error;

/// Failure of a single logging call
#[derive(Debug, Error)]
pub enum LogError {
    /// The output stream rejected the write
    #[error("failed to write log line: {0}")]
    Write(#[from] std::io::Error),

    /// A composite message could not be rendered as JSON
    #[error("failed to serialize log message: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The global tracing subscriber could not be installed
    #[error("failed to install console subscriber: {0}")]
    Subscriber(String),
}

/// Result alias used by every logging operation
pub type Result<T> = std::result::Result<T, LogError>;

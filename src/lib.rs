//! dest-logger - colorized console logging with context labels
//!
//! Each line carries the process id, a local timestamp, the level, an optional
//! context label, and the time elapsed since the previous line.
//!
//! ```
//! use dest_logger::{log_args, Logger};
//!
//! let mut logger = Logger::with_context("Bootstrap");
//! logger.info(["server starting"]).unwrap();
//! logger.warn(log_args!["port in use", 8080, "Network"]).unwrap();
//! logger.set_context("Shutdown");
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::LoggerOptions;
pub use error::{LogError, Result};
pub use logging::{
    init_console_logging, Arg, ColorChoice, ElapsedClock, Level, Logger, LoggerLayer, Sink,
    DEFAULT_LOG_LEVELS,
};

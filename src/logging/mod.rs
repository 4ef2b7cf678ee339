//! Console logging
//!
//! Provides the colorized [`Logger`], its severity levels and coloring, the
//! shared elapsed-time clock, output sinks, and a `tracing` layer that routes
//! events through a logger.

mod clock;
mod color;
mod json;
mod layer;
mod level;
mod logger;
mod message;
mod sink;

pub use clock::ElapsedClock;
pub use color::{Color, ColorChoice};
pub use layer::{init_console_logging, LoggerLayer};
pub use level::{Level, UnknownLevel, DEFAULT_LOG_LEVELS};
pub use logger::{format_timestamp, Logger};
pub use message::Arg;
pub use sink::{CaptureBuffer, Sink};

//! `tracing` integration
//!
//! Routes `tracing` events through a [`Logger`] so that code instrumented with
//! the `tracing` macros prints the same lines as direct logger calls. The
//! event target becomes the line's context.

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::level::Level;
use super::logger::Logger;
use super::message::Arg;
use crate::error::{LogError, Result};

/// Subscriber layer that prints events with a [`Logger`]
#[derive(Debug, Clone)]
pub struct LoggerLayer {
    logger: Logger,
}

impl LoggerLayer {
    /// Create a layer printing through `logger`
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// The logger events are printed with
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl<S: Subscriber> Layer<S> for LoggerLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Level::from(*metadata.level());
        if !self.logger.is_level_enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let args = [Arg::text(visitor.finish()), Arg::text(metadata.target())];
        // A layer has nowhere to report a failed write.
        let _ = self.logger.log(level, args);
    }
}

/// Collects the `message` field and renders the rest as `key=value`
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<String>,
}

impl EventVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let fields = self.fields.join(" ");
        if self.message.is_empty() {
            fields
        } else {
            format!("{} {}", self.message, fields)
        }
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

/// Install `logger` as the global `tracing` subscriber
///
/// `RUST_LOG` narrows which events reach the logger; when unset every event
/// is forwarded and the logger's own level set decides what prints.
pub fn init_console_logging(logger: Logger) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(LoggerLayer::new(logger))
        .try_init()
        .map_err(|e| LogError::Subscriber(e.to_string()))
}

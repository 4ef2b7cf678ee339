//! The console logger
//!
//! A `Logger` filters calls by its enabled level set, resolves the call's
//! context, and writes one line per message:
//!
//! ```text
//! [DEST] - {pid} {timestamp} {LEVEL:>7} [{context}] {message} +{ms}ms
//! ```
//!
//! The context tag is left empty when there is none, and the elapsed suffix is
//! absent on the first line emitted through the logger's clock.

use std::sync::Arc;

use chrono::{DateTime, Local};

use super::clock::ElapsedClock;
use super::color::{Color, ColorChoice};
use super::level::Level;
use super::message::{split_context, Arg};
use super::sink::Sink;
use crate::config::LoggerOptions;
use crate::error::Result;

/// Colorized console logger with an optional context label
#[derive(Debug, Clone)]
pub struct Logger {
    /// Label printed in brackets when a call does not supply its own
    context: Option<String>,
    /// Enabled levels
    options: LoggerOptions,
    /// Color choice applied to every span of the line
    colors: ColorChoice,
    /// Output destination
    sink: Sink,
    /// Timeline used for the elapsed-time suffix
    clock: Arc<ElapsedClock>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger without a context, all levels enabled
    pub fn new() -> Self {
        Self {
            context: None,
            options: LoggerOptions::default(),
            colors: ColorChoice::default(),
            sink: Sink::default(),
            clock: ElapsedClock::global(),
        }
    }

    /// Logger with a context, all levels enabled
    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            ..Self::new()
        }
    }

    /// Logger with a context and explicit options
    pub fn with_options(context: impl Into<String>, options: LoggerOptions) -> Self {
        Self {
            context: Some(context.into()),
            options,
            ..Self::new()
        }
    }

    /// Write to `sink` instead of standard output
    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    /// Override the color choice
    pub fn with_colors(mut self, colors: ColorChoice) -> Self {
        self.colors = colors;
        self
    }

    /// Measure elapsed time against `clock` instead of the process-wide one
    pub fn with_clock(mut self, clock: Arc<ElapsedClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Log `args` at info level
    pub fn info<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Info, args)
    }

    /// Log `args` at error level
    pub fn error<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Error, args)
    }

    /// Log `args` at warn level
    pub fn warn<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Warn, args)
    }

    /// Log `args` at debug level
    pub fn debug<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Debug, args)
    }

    /// Log `args` at verbose level
    pub fn verbose<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Verbose, args)
    }

    /// Log `args` at `level`
    ///
    /// Does nothing, not even touching the clock, when `level` is disabled.
    /// With two or more arguments a trailing text argument is used as this
    /// call's context instead of the stored one. Each remaining argument is
    /// written as its own line; the first failure stops the call.
    pub fn log<I>(&self, level: Level, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        if !self.is_level_enabled(level) {
            return Ok(());
        }
        let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
        let (messages, context) = split_context(args, self.context.as_deref());
        self.print(messages, context.as_deref(), level)
    }

    /// Replace the enabled level set
    pub fn set_levels(&mut self, levels: impl IntoIterator<Item = Level>) {
        self.options.levels = levels.into_iter().collect();
    }

    /// Replace the enabled level set from level names
    ///
    /// Names that match no level are accepted and simply never enable anything.
    pub fn set_level_names<S: AsRef<str>>(&mut self, names: impl IntoIterator<Item = S>) {
        self.options.levels = names
            .into_iter()
            .filter_map(|name| match name.as_ref().parse::<Level>() {
                Ok(level) => Some(level),
                Err(e) => {
                    tracing::debug!("Ignoring level name: {}", e);
                    None
                }
            })
            .collect();
    }

    /// Replace the stored context
    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = Some(context.into());
    }

    /// The stored context, if any
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Currently enabled levels
    pub fn levels(&self) -> &[Level] {
        &self.options.levels
    }

    /// Check if calls at `level` produce output
    pub fn is_level_enabled(&self, level: Level) -> bool {
        self.options.levels.contains(&level)
    }

    fn print(&self, messages: Vec<Arg>, context: Option<&str>, level: Level) -> Result<()> {
        let color = level.color();
        let pid_tag = format!("[DEST] - {}", std::process::id());

        for message in messages {
            let output = message.render(color, self.colors)?;
            let context_tag = match context {
                Some(context) if !context.is_empty() => {
                    self.colors.paint(Color::Yellow, &format!("[{}]", context))
                }
                _ => String::new(),
            };
            let now = Local::now();
            let elapsed = self.elapsed_suffix(now);
            let line = format!(
                "{} {} {} {} {}{}\n",
                self.colors.paint(color, &pid_tag),
                format_timestamp(&now),
                self.colors.paint(color, &level.label()),
                context_tag,
                output,
                elapsed
            );
            self.sink.write_line(&line)?;
        }
        Ok(())
    }

    fn elapsed_suffix(&self, now: DateTime<Local>) -> String {
        match self.clock.advance(now) {
            Some(ms) => self.colors.paint(Color::Yellow, &format!(" +{}ms", ms)),
            None => String::new(),
        }
    }
}

/// Render a local time as `MM/DD/YYYY, h:mm:ss AM`
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%m/%d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::sink::CaptureBuffer;
    use chrono::TimeZone;
    use serde_json::json;

    fn capturing(
        logger: Logger,
        colors: ColorChoice,
    ) -> (Logger, CaptureBuffer, Arc<ElapsedClock>) {
        let buffer = CaptureBuffer::new();
        let clock = Arc::new(ElapsedClock::new());
        let logger = logger
            .with_sink(Sink::Buffer(buffer.clone()))
            .with_colors(colors)
            .with_clock(Arc::clone(&clock));
        (logger, buffer, clock)
    }

    fn pid_prefix() -> String {
        format!("[DEST] - {} ", std::process::id())
    }

    fn elapsed_ms(line: &str) -> Option<i64> {
        let (_, suffix) = line.rsplit_once(" +")?;
        suffix.strip_suffix("ms")?.parse().ok()
    }

    #[test]
    fn test_line_without_context() {
        let (logger, buffer, _) = capturing(Logger::new(), ColorChoice::Never);

        logger.info(["hello"]).unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(&pid_prefix()));
        assert!(lines[0].ends_with("    INFO  hello"));
        assert!(buffer.contents().ends_with('\n'));
    }

    #[test]
    fn test_line_with_stored_context() {
        let (logger, buffer, _) = capturing(Logger::with_context("Bootstrap"), ColorChoice::Never);

        logger.warn(["ready"]).unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("    WARN [Bootstrap] ready"));
    }

    #[test]
    fn test_empty_context_is_omitted() {
        let (logger, buffer, _) = capturing(Logger::with_context(""), ColorChoice::Never);

        logger.error(["boom"]).unwrap();

        assert!(buffer.lines()[0].ends_with("   ERROR  boom"));
    }

    #[test]
    fn test_trailing_text_overrides_context() {
        let (logger, buffer, _) = capturing(Logger::new(), ColorChoice::Never);

        logger.info(["a", "b", "ctx"]).unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("    INFO [ctx] a"));
        assert!(lines[1].contains("    INFO [ctx] b"));
    }

    #[test]
    fn test_trailing_non_text_keeps_stored_context() {
        let (logger, buffer, _) = capturing(Logger::with_context("Stored"), ColorChoice::Never);

        logger.info(crate::log_args!["a", "b", 5]).unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("[Stored] a"));
        assert!(lines[1].contains("[Stored] b"));
        assert!(lines[2].contains("[Stored] 5"));
    }

    #[test]
    fn test_set_context_applies_to_single_argument() {
        let (mut logger, buffer, _) = capturing(Logger::new(), ColorChoice::Never);

        logger.set_context("X");
        logger.debug(["only"]).unwrap();

        assert_eq!(logger.context(), Some("X"));
        assert!(buffer.lines()[0].ends_with("   DEBUG [X] only"));
    }

    #[test]
    fn test_disabled_level_is_silent_and_keeps_clock() {
        let options = LoggerOptions::with_levels([Level::Error]);
        let (logger, buffer, clock) =
            capturing(Logger::with_options("Ctx", options), ColorChoice::Never);

        logger.info(["ignored"]).unwrap();
        logger.warn(["ignored"]).unwrap();
        logger.debug(["ignored"]).unwrap();
        logger.verbose(["ignored"]).unwrap();

        assert!(buffer.is_empty());
        assert!(clock.last_emitted().is_none());

        logger.error(["shown"]).unwrap();
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(elapsed_ms(&lines[0]), None);
    }

    #[test]
    fn test_set_levels_empty_silences_everything() {
        let (mut logger, buffer, clock) = capturing(Logger::new(), ColorChoice::Never);

        logger.set_levels([]);
        for level in crate::logging::DEFAULT_LOG_LEVELS {
            assert!(!logger.is_level_enabled(level));
            logger.log(level, ["nothing"]).unwrap();
        }

        assert!(buffer.is_empty());
        assert!(clock.last_emitted().is_none());
    }

    #[test]
    fn test_set_level_names_accepts_unknown() {
        let (mut logger, buffer, _) = capturing(Logger::new(), ColorChoice::Never);

        logger.set_level_names(["verbose", "fatal"]);
        assert_eq!(logger.levels(), &[Level::Verbose]);

        logger.info(["dropped"]).unwrap();
        assert!(buffer.is_empty());

        logger.verbose(["kept"]).unwrap();
        assert!(buffer.lines()[0].ends_with(" VERBOSE  kept"));
    }

    #[test]
    fn test_elapsed_suffix_after_first_line() {
        let (logger, buffer, _) = capturing(Logger::new(), ColorChoice::Never);

        logger.info(["first"]).unwrap();
        logger.info(["second"]).unwrap();

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].contains("second +"));
        assert!(elapsed_ms(&lines[1]).is_some_and(|ms| ms >= 0));
    }

    #[test]
    fn test_clock_shared_between_loggers() {
        let clock = Arc::new(ElapsedClock::new());
        let buffer = CaptureBuffer::new();
        let first = Logger::with_context("One")
            .with_sink(Sink::Buffer(buffer.clone()))
            .with_colors(ColorChoice::Never)
            .with_clock(Arc::clone(&clock));
        let second = Logger::with_context("Two")
            .with_sink(Sink::Buffer(buffer.clone()))
            .with_colors(ColorChoice::Never)
            .with_clock(Arc::clone(&clock));

        first.info(["from one"]).unwrap();
        second.info(["from two"]).unwrap();

        let lines = buffer.lines();
        assert_eq!(elapsed_ms(&lines[0]), None);
        assert!(elapsed_ms(&lines[1]).is_some());
    }

    #[test]
    fn test_composite_message_line() {
        let (logger, buffer, _) = capturing(Logger::new(), ColorChoice::Never);

        logger.debug([json!({ "x": 1 })]).unwrap();

        let contents = buffer.contents();
        assert!(contents.starts_with(&pid_prefix()));
        assert!(contents.ends_with("   DEBUG  Object:\n{\n  \"x\": 1\n}\n\n"));
    }

    #[test]
    fn test_wide_integer_field_in_line() {
        #[derive(serde::Serialize)]
        struct Supply {
            total: u128,
        }

        let (logger, buffer, _) = capturing(Logger::new(), ColorChoice::Never);

        logger.info([Arg::object(&Supply { total: u128::MAX })]).unwrap();

        let expected = format!("    INFO  Object:\n{{\n  \"total\": \"{}\"\n}}\n\n", u128::MAX);
        assert!(buffer.contents().ends_with(&expected));
    }

    #[test]
    fn test_colored_line() {
        let (logger, buffer, _) = capturing(Logger::with_context("Ctx"), ColorChoice::Always);

        logger.error(["first"]).unwrap();
        logger.error(["second"]).unwrap();

        let lines = buffer.lines();
        let pid_tag = format!("\x1B[31m[DEST] - {}\x1B[39m ", std::process::id());
        assert!(lines[0].starts_with(&pid_tag));
        let tail = "\x1B[31m  ERROR\x1B[39m \x1B[33m[Ctx]\x1B[39m \x1B[31mfirst\x1B[39m";
        assert!(lines[0].ends_with(tail));
        assert!(lines[1].contains("\x1B[31msecond\x1B[39m\x1B[33m +"));
        assert!(lines[1].ends_with("ms\x1B[39m"));
    }

    #[test]
    fn test_level_colors_in_output() {
        let (logger, buffer, _) = capturing(Logger::new(), ColorChoice::Always);

        logger.info(["i"]).unwrap();
        logger.warn(["w"]).unwrap();
        logger.debug(["d"]).unwrap();
        logger.verbose(["v"]).unwrap();

        let contents = buffer.contents();
        assert!(contents.contains("\x1B[32m   INFO\x1B[39m"));
        assert!(contents.contains("\x1B[33m   WARN\x1B[39m"));
        assert!(contents.contains("\x1B[95m  DEBUG\x1B[39m"));
        assert!(contents.contains("\x1B[96mVERBOSE\x1B[39m"));
    }

    #[test]
    fn test_no_color_env_strips_escapes() {
        std::env::set_var(crate::config::NO_COLOR_ENV, "1");
        let (logger, buffer, _) = capturing(Logger::with_context("Ctx"), ColorChoice::Auto);

        for level in crate::logging::DEFAULT_LOG_LEVELS {
            logger.log(level, crate::log_args!["text", json!({ "k": [1, 2] })]).unwrap();
        }
        std::env::remove_var(crate::config::NO_COLOR_ENV);

        let contents = buffer.contents();
        assert_eq!(buffer.lines().iter().filter(|l| l.starts_with("[DEST]")).count(), 10);
        assert!(!contents.contains('\x1B'));
    }

    #[test]
    fn test_unserializable_message_fails_call() {
        use std::collections::BTreeMap;

        let (logger, buffer, _) = capturing(Logger::new(), ColorChoice::Never);
        let mut bad = BTreeMap::new();
        bad.insert((1, 2), "tuple key");

        let result = logger.info([Arg::from("before"), Arg::object(&bad), Arg::from("after")]);

        assert!(matches!(result, Err(crate::LogError::Serialize(_))));
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("before"));
    }

    #[test]
    fn test_format_timestamp() {
        let time = Local.with_ymd_and_hms(2026, 1, 5, 14, 3, 9).unwrap();
        assert_eq!(format_timestamp(&time), "01/05/2026, 2:03:09 PM");

        let time = Local.with_ymd_and_hms(2026, 11, 30, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&time), "11/30/2026, 12:00:00 AM");
    }

    #[test]
    fn test_default_logger() {
        let logger = Logger::default();
        assert_eq!(logger.context(), None);
        assert_eq!(logger.levels(), &crate::logging::DEFAULT_LOG_LEVELS);
    }
}

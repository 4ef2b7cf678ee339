//! ANSI coloring for log lines
//!
//! Only foreground colors are used. Each painted span is closed with the
//! default-foreground code so that nested or adjacent spans never leak.

use std::ffi::OsStr;

use crate::config::NO_COLOR_ENV;

const RESET_FOREGROUND: &str = "\x1B[39m";

/// Foreground colors used by the logger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Yellow,
    Red,
    BrightMagenta,
    BrightCyan,
}

impl Color {
    /// SGR escape that switches to this color
    pub fn code(&self) -> &'static str {
        match self {
            Color::Green => "\x1B[32m",
            Color::Yellow => "\x1B[33m",
            Color::Red => "\x1B[31m",
            Color::BrightMagenta => "\x1B[95m",
            Color::BrightCyan => "\x1B[96m",
        }
    }
}

/// Whether colors are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color unless `NO_COLOR` is set to a non-empty value, checked on every line
    #[default]
    Auto,
    /// Always emit escapes
    Always,
    /// Never emit escapes
    Never,
}

impl ColorChoice {
    /// Resolve the choice against the current environment
    pub fn is_enabled(&self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !no_color_requested(),
        }
    }

    /// Wrap `text` in `color`, or return it untouched when colors are off
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.is_enabled() {
            format!("{}{}{}", color.code(), text, RESET_FOREGROUND)
        } else {
            text.to_string()
        }
    }
}

fn no_color_requested() -> bool {
    no_color_requested_from(std::env::var_os(NO_COLOR_ENV).as_deref())
}

/// An unset or empty `NO_COLOR` keeps colors on
fn no_color_requested_from(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

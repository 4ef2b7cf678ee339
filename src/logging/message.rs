//! Log call arguments and message rendering
//!
//! A log call takes an ordered list of [`Arg`]s. Text, scalars and composite
//! JSON values are kept apart because they render differently and because a
//! trailing text argument may name the call's context.

use serde::Serialize;
use serde_json::Value;

use super::color::{Color, ColorChoice};
use super::json;
use crate::error::Result;

/// One argument of a log call
#[derive(Debug)]
pub struct Arg(Repr);

#[derive(Debug)]
enum Repr {
    /// A string value; the only kind that can act as a context override
    Text(String),
    /// Any other scalar, already rendered to its plain text form
    Plain(String),
    /// Object, array or null, pretty-printed as JSON
    Composite(Value),
    /// A value whose serialization failed; reported when the message is rendered
    Unserializable(serde_json::Error),
}

impl Arg {
    /// A text argument
    pub fn text(text: impl Into<String>) -> Self {
        Arg(Repr::Text(text.into()))
    }

    /// A non-text argument rendered with its `Display` form
    pub fn display(value: impl std::fmt::Display) -> Self {
        Arg(Repr::Plain(value.to_string()))
    }

    /// Any serializable value
    ///
    /// Structs, maps, sequences and unit values become composite messages,
    /// with every `i128`/`u128` inside written as a string. A bare wide
    /// integer or non-finite float stays plain text. A serialization failure
    /// is kept and surfaces as an error from the log call that tries to print it.
    pub fn object<T: Serialize + ?Sized>(value: &T) -> Self {
        if let Some(text) = json::plain_scalar(value) {
            return Arg(Repr::Plain(text));
        }
        match json::to_value(value) {
            Ok(value) => Arg::from(value),
            Err(e) => Arg(Repr::Unserializable(e)),
        }
    }

    /// Whether this argument is a text value
    pub fn is_text(&self) -> bool {
        matches!(self.0, Repr::Text(_))
    }

    /// Whether this argument prints as an `Object:` block
    pub fn is_composite(&self) -> bool {
        matches!(self.0, Repr::Composite(_) | Repr::Unserializable(_))
    }

    fn into_text(self) -> Option<String> {
        match self.0 {
            Repr::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Render the message part of a log line, colored as a whole
    pub(crate) fn render(self, color: Color, colors: ColorChoice) -> Result<String> {
        let text = match self.0 {
            Repr::Text(text) | Repr::Plain(text) => text,
            Repr::Composite(value) => {
                format!("Object:\n{}\n", serde_json::to_string_pretty(&value)?)
            }
            Repr::Unserializable(e) => return Err(e.into()),
        };
        Ok(colors.paint(color, &text))
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Arg(Repr::Text(text)),
            Value::Bool(b) => Arg(Repr::Plain(b.to_string())),
            Value::Number(n) => Arg(Repr::Plain(n.to_string())),
            composite => Arg(Repr::Composite(composite)),
        }
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Arg::text(text)
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Arg::text(text)
    }
}

impl From<&String> for Arg {
    fn from(text: &String) -> Self {
        Arg::text(text.as_str())
    }
}

macro_rules! plain_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::display(value)
                }
            }
        )*
    };
}

plain_arg!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Build a `Vec<Arg>` from heterogeneous values
///
/// ```
/// use dest_logger::{log_args, Logger};
///
/// let logger = Logger::new();
/// logger.info(log_args!["listening on port", 8080, "Bootstrap"]).unwrap();
/// ```
#[macro_export]
macro_rules! log_args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::Arg::from($arg)),*]
    };
}

/// Split a call's arguments into messages and the effective context
///
/// With two or more arguments a trailing text argument is taken as the
/// context and removed from the messages. Otherwise `stored` is used.
pub(crate) fn split_context(
    mut args: Vec<Arg>,
    stored: Option<&str>,
) -> (Vec<Arg>, Option<String>) {
    let stored = stored.map(str::to_string);
    if args.len() <= 1 {
        return (args, stored);
    }
    if !args.last().is_some_and(Arg::is_text) {
        return (args, stored);
    }
    let context = args.pop().and_then(Arg::into_text);
    (args, context)
}

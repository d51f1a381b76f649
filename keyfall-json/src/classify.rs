//! Maps serde_json errors onto the keyfall fault taxonomy.

use keyfall_core::DecodeFault;
use serde_json::Value;
use serde_json::error::Category;
use std::fmt;

/// Where a decoded value lives. Only rendered when a fault is built.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Location<'k> {
    Key(&'k str),
    Element(usize),
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "key `{key}`"),
            Self::Element(index) => write!(f, "element {index}"),
        }
    }
}

/// Classifies an error raised while deserializing `source` as `expected`.
///
/// `at` is prefixed to the fault context.
pub(crate) fn classify(
    error: &serde_json::Error,
    source: &Value,
    expected: &'static str,
    at: Location<'_>,
) -> DecodeFault {
    let message = error.to_string();
    let context = format!("{at}: {message}");
    match error.classify() {
        Category::Io => DecodeFault::Other(context),
        Category::Syntax | Category::Eof => DecodeFault::malformed(context),
        Category::Data => {
            let null_source = source.is_null() && message.starts_with("invalid type");
            if is_null_mismatch(&message) || null_source {
                DecodeFault::value_missing(expected, context)
            } else if message.starts_with("invalid type") {
                DecodeFault::type_mismatch(expected, context)
            } else if let Some(field) = missing_field(&message) {
                DecodeFault::not_found(field)
            } else {
                DecodeFault::malformed(context)
            }
        }
    }
}

/// Classifies an error from parsing JSON text.
pub(crate) fn classify_parse(error: &serde_json::Error) -> DecodeFault {
    match error.classify() {
        Category::Io => DecodeFault::Other(error.to_string()),
        _ => DecodeFault::malformed(format!("invalid JSON: {error}")),
    }
}

/// Human-readable kind of a JSON value, used in mismatch contexts.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// serde_json renders a null as "null"; serde's default rendering is "unit value".
fn is_null_mismatch(message: &str) -> bool {
    message.starts_with("invalid type: null") || message.starts_with("invalid type: unit value")
}

fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

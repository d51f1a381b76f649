//! Opt-in diagnostics for resolution and encoding.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// Whether diagnostic messages are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Emit nothing.
    #[default]
    #[serde(alias = "none")]
    Silent,
    /// Emit one line per attempt and outcome.
    #[serde(alias = "debug")]
    Verbose,
}

impl LogLevel {
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silent => write!(f, "silent"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" | "none" => Ok(Self::Silent),
            "verbose" | "debug" => Ok(Self::Verbose),
            other => Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
    }
}

/// Destination for diagnostic messages.
///
/// Messages arrive as [`fmt::Arguments`] so nothing is formatted while
/// logging is silent.
pub trait Diagnostics {
    /// Writes one message unconditionally.
    fn emit(&self, message: fmt::Arguments<'_>);

    /// Writes `message` only when `level` is [`LogLevel::Verbose`].
    fn log(&self, message: fmt::Arguments<'_>, level: LogLevel) {
        if level.is_verbose() {
            self.emit(message);
        }
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn emit(&self, message: fmt::Arguments<'_>) {
        (**self).emit(message);
    }
}

/// Forwards messages to `tracing` as debug events on the `keyfall` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, message: fmt::Arguments<'_>) {
        tracing::debug!(target: "keyfall", "{}", message);
    }
}

/// Keeps every emitted message in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    messages: RefCell<Vec<String>>,
}

impl RecordingDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all messages emitted so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Returns true if any emitted message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(needle))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn emit(&self, message: fmt::Arguments<'_>) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

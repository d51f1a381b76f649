//! Scalar candidate-key resolution.

use serde::de::DeserializeOwned;
use std::any::type_name;
use std::fmt;

use crate::container::{Access, KeyedContainer, try_get};
use crate::{
    CandidateKeys, CodingKey, DecodeFault, Diagnostics, LogLevel, ResolveError, ResolverConfig,
    TracingDiagnostics,
};

static TRACING: TracingDiagnostics = TracingDiagnostics;

/// Walks candidate keys against a container.
///
/// A `Resolver` is built per call site and carries the log level for the
/// calls made through it. It never holds on to a container.
#[derive(Clone, Copy)]
pub struct Resolver<'d> {
    level: LogLevel,
    diagnostics: &'d dyn Diagnostics,
}

/// A fault together with the key that produced it.
pub(crate) type KeyFault<'k> = (&'k str, DecodeFault);

impl Resolver<'static> {
    /// Creates a resolver that logs through `tracing`.
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            diagnostics: &TRACING,
        }
    }

    #[must_use]
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.log_level)
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl<'d> Resolver<'d> {
    /// Creates a resolver that logs to `diagnostics`.
    #[must_use]
    pub fn with_diagnostics(level: LogLevel, diagnostics: &'d dyn Diagnostics) -> Self {
        Self { level, diagnostics }
    }

    #[must_use]
    pub fn with_level(self, level: LogLevel) -> Self {
        Self { level, ..self }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub(crate) fn parts(&self) -> (LogLevel, &'d dyn Diagnostics) {
        (self.level, self.diagnostics)
    }

    pub(crate) fn log(&self, message: fmt::Arguments<'_>) {
        self.diagnostics.log(message, self.level);
    }

    /// Resolves the first candidate key holding a value, or `fallback`.
    ///
    /// Every key but the last must be present and well-typed; a missing key
    /// moves on to the next one. Any other fault stops the walk and returns
    /// `fallback` without consulting later keys. The last key is read
    /// leniently, so its absence also yields `fallback`.
    pub fn resolve<C, K, T>(
        &self,
        container: &C,
        keys: CandidateKeys<'_, K>,
        fallback: Option<T>,
    ) -> Option<T>
    where
        C: KeyedContainer,
        K: CodingKey,
        T: DeserializeOwned,
    {
        let has_fallback = fallback.is_some();
        self.settle(keys, self.walk(container, keys), has_fallback)
            .or(fallback)
    }

    /// Like [`resolve`](Self::resolve) with a mandatory fallback.
    pub fn resolve_or<C, K, T>(&self, container: &C, keys: CandidateKeys<'_, K>, fallback: T) -> T
    where
        C: KeyedContainer,
        K: CodingKey,
        T: DeserializeOwned,
    {
        self.settle(keys, self.walk(container, keys), true)
            .unwrap_or(fallback)
    }

    /// Resolves a single key; equivalent to a lenient get.
    pub fn resolve_key<C, K, T>(&self, container: &C, key: &K, fallback: Option<T>) -> Option<T>
    where
        C: KeyedContainer,
        K: CodingKey,
        T: DeserializeOwned,
    {
        self.resolve(container, CandidateKeys::single(key), fallback)
    }

    /// Resolves like [`resolve`](Self::resolve) but reports failure instead
    /// of substituting a fallback.
    ///
    /// Returns [`ResolveError::Fault`] when a present key can't be decoded
    /// and [`ResolveError::Exhausted`] when no candidate holds a value.
    pub fn try_resolve<C, K, T>(
        &self,
        container: &C,
        keys: CandidateKeys<'_, K>,
    ) -> Result<T, ResolveError>
    where
        C: KeyedContainer,
        K: CodingKey,
        T: DeserializeOwned,
    {
        match self.walk(container, keys) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => {
                self.log(format_args!("No value found for any of the keys {keys}"));
                Err(ResolveError::Exhausted { keys: keys.names() })
            }
            Err((key, fault)) => {
                self.log_fault(key, &fault, None);
                Err(ResolveError::Fault {
                    key: key.to_string(),
                    fault,
                })
            }
        }
    }

    /// Tries each key in order. `Ok(None)` means the last key was absent.
    fn walk<'k, C, K, T>(
        &self,
        container: &C,
        keys: CandidateKeys<'k, K>,
    ) -> Result<Option<T>, KeyFault<'k>>
    where
        C: KeyedContainer,
        K: CodingKey,
        T: DeserializeOwned,
    {
        let last = keys.last_index();
        for (index, key) in keys.iter().enumerate() {
            let name = key.as_str();
            let access = if index < last {
                Access::Strict
            } else {
                Access::Lenient
            };

            match try_get::<C, T>(container, name, access) {
                Ok(Some(value)) => {
                    self.log(format_args!(
                        "Decoded value of type `{}` for key `{name}`",
                        type_name::<T>()
                    ));
                    return Ok(Some(value));
                }
                Ok(None) => {
                    self.log(format_args!("No value present for key `{name}`"));
                    return Ok(None);
                }
                Err(DecodeFault::NotFound { key: missing }) if index < last => {
                    let next = keys.get(index + 1).map_or("", |k| k.as_str());
                    if missing == name {
                        self.log(format_args!(
                            "Failed to decode due to missing key `{name}`, trying `{next}` instead"
                        ));
                    } else {
                        self.log(format_args!(
                            "Failed to decode due to missing key `{missing}` while decoding \
                             `{name}`, trying `{next}` instead"
                        ));
                    }
                }
                Err(fault) => return Err((name, fault)),
            }
        }
        Ok(None)
    }

    /// Logs the end of a walk and returns the resolved value, if any.
    fn settle<K, T>(
        &self,
        keys: CandidateKeys<'_, K>,
        outcome: Result<Option<T>, KeyFault<'_>>,
        has_fallback: bool,
    ) -> Option<T>
    where
        K: CodingKey,
    {
        match outcome {
            Ok(Some(value)) => Some(value),
            Ok(None) => {
                self.log(format_args!(
                    "No value found for any of the keys {keys}. {}",
                    fallback_note(has_fallback)
                ));
                None
            }
            Err((key, fault)) => {
                self.log_fault(key, &fault, Some(has_fallback));
                None
            }
        }
    }

    /// Logs a terminal fault for `key`. `has_fallback` is `None` when the
    /// caller propagates the fault instead of substituting a fallback.
    pub(crate) fn log_fault(&self, key: &str, fault: &DecodeFault, has_fallback: Option<bool>) {
        let note = has_fallback.map_or("Propagating error.", fallback_note);
        match fault {
            DecodeFault::NotFound { key: missing } => self.log(format_args!(
                "Failed to decode key `{key}` due to missing key `{missing}`. {note}"
            )),
            DecodeFault::TypeMismatch { expected, context } => self.log(format_args!(
                "Failed to decode key `{key}` due to type mismatch of type `{expected}`: \
                 {context}. {note}"
            )),
            DecodeFault::ValueMissing { expected, context } => self.log(format_args!(
                "Failed to decode key `{key}` due to missing `{expected}` value: {context}. {note}"
            )),
            DecodeFault::Malformed { context } => self.log(format_args!(
                "Failed to decode key `{key}` because the data is malformed: {context}. {note}"
            )),
            DecodeFault::Other(message) => {
                self.log(format_args!("Failed to decode key `{key}`: {message}. {note}"))
            }
        }
    }
}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

pub(crate) fn fallback_note(has_fallback: bool) -> &'static str {
    if has_fallback {
        "Using fallback."
    } else {
        "No fallback given."
    }
}

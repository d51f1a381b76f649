//! Encode-path reporting.
//!
//! Encoding a document is usually a run of independent `set` calls. A value
//! that can't be represented should be reported, not allowed to abort the
//! fields after it; [`EncodeBatch`] and [`Reporter::encode`] do exactly that,
//! while [`Reporter::encode_one`] hands the failure back to the caller.

use serde::Serialize;
use std::any::type_name;
use std::fmt;

use crate::{CodingKey, Diagnostics, EncodeFault, Encoder, KeyedEncoder, LogLevel, Resolver};

/// Writes single values and logs why a write failed.
#[derive(Clone, Copy)]
pub struct Reporter<'d> {
    level: LogLevel,
    diagnostics: &'d dyn Diagnostics,
}

impl Reporter<'static> {
    /// Creates a reporter that logs through `tracing`.
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Resolver::new(level).reporter()
    }
}

impl<'d> Reporter<'d> {
    #[must_use]
    pub fn with_diagnostics(level: LogLevel, diagnostics: &'d dyn Diagnostics) -> Self {
        Self { level, diagnostics }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, message: fmt::Arguments<'_>) {
        self.diagnostics.log(message, self.level);
    }

    /// Writes `value` under `key`, logging and returning any failure.
    pub fn encode_one<E, K, T>(
        &self,
        encoder: &mut E,
        key: &K,
        value: &T,
    ) -> Result<(), EncodeFault>
    where
        E: KeyedEncoder,
        K: CodingKey + ?Sized,
        T: Serialize + ?Sized,
    {
        let name = key.as_str();
        match encoder.encode(name, value) {
            Ok(()) => {
                self.log(format_args!(
                    "Encoded value of type `{}` for key `{name}`",
                    type_name::<T>()
                ));
                Ok(())
            }
            Err(fault) => {
                self.log_fault(name, &fault);
                Err(fault)
            }
        }
    }

    /// Writes `value` under `key`; a failure is logged and dropped.
    pub fn encode<E, K, T>(&self, encoder: &mut E, key: &K, value: &T)
    where
        E: KeyedEncoder,
        K: CodingKey + ?Sized,
        T: Serialize + ?Sized,
    {
        let _ = self.encode_one(encoder, key, value);
    }

    /// Writes `value` under `key` in `document`, logging and returning any
    /// failure, including failure to open the document for keyed writes.
    pub fn try_encode_into<D, K, T>(
        &self,
        document: &mut D,
        key: &K,
        value: &T,
    ) -> Result<(), EncodeFault>
    where
        D: Encoder,
        K: CodingKey + ?Sized,
        T: Serialize + ?Sized,
    {
        let mut encoder = match document.keyed_encoder() {
            Ok(encoder) => encoder,
            Err(fault) => {
                self.log_fault(key.as_str(), &fault);
                return Err(fault);
            }
        };
        self.encode_one(&mut encoder, key, value)
    }

    /// Writes `value` under `key` in `document`; a failure is logged and dropped.
    pub fn encode_into<D, K, T>(&self, document: &mut D, key: &K, value: &T)
    where
        D: Encoder,
        K: CodingKey + ?Sized,
        T: Serialize + ?Sized,
    {
        let _ = self.try_encode_into(document, key, value);
    }

    /// Starts a best-effort batch of writes against `encoder`.
    pub fn batch<'e, E: KeyedEncoder>(&self, encoder: &'e mut E) -> EncodeBatch<'e, 'd, E> {
        EncodeBatch {
            encoder,
            reporter: *self,
            report: BatchReport::default(),
        }
    }

    fn log_fault(&self, key: &str, fault: &EncodeFault) {
        match fault {
            EncodeFault::InvalidValue { type_name, context } => self.log(format_args!(
                "Failed to encode type `{type_name}` for key `{key}` due to invalid value: \
                 {context}"
            )),
            EncodeFault::Other(message) => {
                self.log(format_args!("Failed to encode key `{key}`: {message}"))
            }
        }
    }
}

impl fmt::Debug for Reporter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl<'d> From<Resolver<'d>> for Reporter<'d> {
    fn from(resolver: Resolver<'d>) -> Self {
        resolver.reporter()
    }
}

impl<'d> Resolver<'d> {
    /// Returns a reporter sharing this resolver's level and diagnostics.
    #[must_use]
    pub fn reporter(&self) -> Reporter<'d> {
        let (level, diagnostics) = self.parts();
        Reporter { level, diagnostics }
    }
}

/// Outcome of an [`EncodeBatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of values written.
    pub encoded: usize,
    /// Keys whose values could not be written, in call order.
    pub failed: Vec<String>,
}

impl BatchReport {
    /// True if every value in the batch was written.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Chain of independent writes where one failure never blocks the others.
///
/// ```
/// use keyfall_core::{EncodeFault, KeyedEncoder, LogLevel, Reporter};
/// use serde::Serialize;
/// use std::any::type_name;
///
/// #[derive(Default)]
/// struct Fields(Vec<(String, serde_json::Value)>);
///
/// impl KeyedEncoder for Fields {
///     fn encode<T>(&mut self, key: &str, value: &T) -> Result<(), EncodeFault>
///     where
///         T: Serialize + ?Sized,
///     {
///         let value = serde_json::to_value(value)
///             .map_err(|e| EncodeFault::invalid_value(type_name::<T>(), e.to_string()))?;
///         self.0.push((key.to_string(), value));
///         Ok(())
///     }
/// }
///
/// let mut fields = Fields::default();
/// let report = Reporter::new(LogLevel::Silent)
///     .batch(&mut fields)
///     .encode("title", "hello")
///     .encode("score", &42)
///     .finish();
///
/// assert!(report.is_complete());
/// assert_eq!(report.encoded, 2);
/// assert_eq!(fields.0[1].0, "score");
/// ```
pub struct EncodeBatch<'e, 'd, E> {
    encoder: &'e mut E,
    reporter: Reporter<'d>,
    report: BatchReport,
}

impl<E: KeyedEncoder> EncodeBatch<'_, '_, E> {
    /// Writes one value; a failure is logged and recorded in the report.
    pub fn encode<K, T>(&mut self, key: &K, value: &T) -> &mut Self
    where
        K: CodingKey + ?Sized,
        T: Serialize + ?Sized,
    {
        match self.reporter.encode_one(&mut *self.encoder, key, value) {
            Ok(()) => self.report.encoded += 1,
            Err(_) => self.report.failed.push(key.as_str().to_string()),
        }
        self
    }

    /// Ends the batch.
    #[must_use]
    pub fn finish(&mut self) -> BatchReport {
        std::mem::take(&mut self.report)
    }
}

impl<E> fmt::Debug for EncodeBatch<'_, '_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeBatch")
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}

//! Error taxonomy shared by containers, resolvers and the encode reporter.

use thiserror::Error;

/// Why a single decode attempt failed.
///
/// Containers translate their parser's errors into these variants; the
/// resolver decides what to do next purely by matching on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFault {
    /// The key is absent from the container.
    #[error("key `{key}` not found")]
    NotFound { key: String },

    /// A value is present but has the wrong shape.
    #[error("type mismatch, expected `{expected}`: {context}")]
    TypeMismatch {
        expected: &'static str,
        context: String,
    },

    /// The key is present but holds the format's null marker.
    #[error("missing `{expected}` value: {context}")]
    ValueMissing {
        expected: &'static str,
        context: String,
    },

    /// The container reports structurally invalid data.
    #[error("malformed data: {context}")]
    Malformed { context: String },

    #[error("{0}")]
    Other(String),
}

impl DecodeFault {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn type_mismatch(expected: &'static str, context: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            context: context.into(),
        }
    }

    pub fn value_missing(expected: &'static str, context: impl Into<String>) -> Self {
        Self::ValueMissing {
            expected,
            context: context.into(),
        }
    }

    pub fn malformed(context: impl Into<String>) -> Self {
        Self::Malformed {
            context: context.into(),
        }
    }

    /// Returns true for the only fault that lets resolution try another key.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Why a single encode attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeFault {
    /// The value cannot be represented under the container's encoding rules.
    #[error("invalid value of type `{type_name}`: {context}")]
    InvalidValue {
        type_name: &'static str,
        context: String,
    },

    #[error("{0}")]
    Other(String),
}

impl EncodeFault {
    pub fn invalid_value(type_name: &'static str, context: impl Into<String>) -> Self {
        Self::InvalidValue {
            type_name,
            context: context.into(),
        }
    }
}

/// Failure of [`Resolver::try_resolve`](crate::Resolver::try_resolve).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A candidate key was present but could not be decoded.
    #[error("failed to decode key `{key}`: {fault}")]
    Fault { key: String, fault: DecodeFault },

    /// No candidate key held a value.
    #[error("no value for any of the keys {keys:?}")]
    Exhausted { keys: Vec<String> },
}

/// Errors raised while loading a [`ResolverConfig`](crate::ResolverConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

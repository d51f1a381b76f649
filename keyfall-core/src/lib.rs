//! Candidate-key fallback decoding for keyfall.
//!
//! Stored documents outlive the schemas that wrote them. A field that was
//! called `name` in v1 may be `display_name` in v2. This crate lets a decoder
//! name every historical key for a field and take the first one present:
//! - [`CandidateKeys`]: ordered, non-empty list of key names for one field
//! - [`Resolver`]: walks candidate keys and returns a value or the fallback
//! - [`DecodeFault`]: the error taxonomy that decides whether to keep looking
//! - [`Diagnostics`]: opt-in per-attempt logging, gated by [`LogLevel`]
//! - [`EncodeBatch`]: best-effort encoding where one bad field never blocks the rest
//!
//! The crate is format-agnostic: anything implementing the traits in
//! [`container`] can be resolved against. `keyfall-json` provides the
//! `serde_json::Value` implementation.
//!
//! # Resolution rules
//!
//! - A missing key moves on to the next candidate.
//! - A key that is present but unreadable (wrong type, null, malformed) stops
//!   the walk and yields the fallback.
//! - The last candidate is read leniently: absence there is not an error.
//! - Sequences keep searching on absence at every position and skip bad
//!   elements instead of discarding the whole list.

pub mod container;
mod config;
mod decoder;
mod diagnostics;
mod encode;
mod error;
mod key;
mod resolver;
mod sequence;

pub use config::ResolverConfig;
pub use container::{Decoder, Encoder, KeyedContainer, KeyedEncoder, SequenceContainer};
pub use diagnostics::{Diagnostics, LogLevel, RecordingDiagnostics, TracingDiagnostics};
pub use encode::{BatchReport, EncodeBatch, Reporter};
pub use error::{ConfigError, DecodeFault, EncodeFault, ResolveError};
pub use key::{CandidateKeys, CodingKey};
pub use resolver::Resolver;

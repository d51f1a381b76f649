//! `serde_json` container adapter for keyfall.
//!
//! - [`JsonDocument`]: an owned document usable as keyfall `Decoder` and `Encoder`
//! - [`JsonObject`]: a JSON object as a keyed container
//! - [`JsonArray`]: a JSON array as a sequence container
//! - [`JsonObjectMut`]: a JSON object as a keyed encoder
//!
//! ```
//! use keyfall_core::{CandidateKeys, LogLevel, Resolver};
//! use keyfall_json::JsonDocument;
//!
//! let doc = JsonDocument::parse(r#"{ "v1name": "hello" }"#).unwrap();
//! let keys = ["v2name", "v1name"];
//! let name: Option<String> = Resolver::new(LogLevel::Silent).decode(
//!     &doc,
//!     CandidateKeys::new(&keys).unwrap(),
//!     Some("default".to_string()),
//! );
//! assert_eq!(name.as_deref(), Some("hello"));
//! ```

mod array;
mod classify;
mod document;
mod encoder;
mod object;

pub use array::JsonArray;
pub use document::JsonDocument;
pub use encoder::JsonObjectMut;
pub use object::JsonObject;

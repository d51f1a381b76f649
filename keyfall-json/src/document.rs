use keyfall_core::{DecodeFault, Decoder, EncodeFault, Encoder};
use serde_json::Value;

use crate::classify::classify_parse;
use crate::{JsonObject, JsonObjectMut};

/// An owned JSON document that keyfall can decode from and encode into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonDocument {
    root: Value,
}

impl JsonDocument {
    /// Creates an empty document; the first keyed write turns it into `{}`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses JSON text, reporting invalid input as [`DecodeFault::Malformed`].
    pub fn parse(input: &str) -> Result<Self, DecodeFault> {
        let root = serde_json::from_str(input).map_err(|e| classify_parse(&e))?;
        Ok(Self { root })
    }

    /// Parses JSON bytes, reporting invalid input as [`DecodeFault::Malformed`].
    pub fn from_slice(input: &[u8]) -> Result<Self, DecodeFault> {
        let root = serde_json::from_slice(input).map_err(|e| classify_parse(&e))?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.root
    }
}

impl From<Value> for JsonDocument {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

impl From<JsonDocument> for Value {
    fn from(document: JsonDocument) -> Self {
        document.root
    }
}

impl Decoder for JsonDocument {
    type Keyed<'a> = JsonObject<'a>;

    fn keyed_container(&self) -> Result<JsonObject<'_>, DecodeFault> {
        JsonObject::from_value(&self.root)
    }
}

impl Encoder for JsonDocument {
    type Keyed<'a> = JsonObjectMut<'a>;

    fn keyed_encoder(&mut self) -> Result<JsonObjectMut<'_>, EncodeFault> {
        JsonObjectMut::from_value(&mut self.root)
    }
}

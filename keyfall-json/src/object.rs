use keyfall_core::{DecodeFault, KeyedContainer};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::any::type_name;

use crate::JsonArray;
use crate::classify::{Location, classify, kind};

/// A JSON object viewed as a keyed container.
#[derive(Debug, Clone, Copy)]
pub struct JsonObject<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> JsonObject<'a> {
    #[must_use]
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Views `value` as an object, failing if it holds anything else.
    pub fn from_value(value: &'a Value) -> Result<Self, DecodeFault> {
        match value {
            Value::Object(map) => Ok(Self::new(map)),
            Value::Null => Err(DecodeFault::value_missing(
                "object",
                "expected a keyed container but found null",
            )),
            other => Err(DecodeFault::type_mismatch(
                "object",
                format!("expected a keyed container but found {}", kind(other)),
            )),
        }
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}

pub(crate) fn decode_value<T: DeserializeOwned>(
    value: &Value,
    at: Location<'_>,
) -> Result<T, DecodeFault> {
    T::deserialize(value).map_err(|e| classify(&e, value, type_name::<T>(), at))
}

impl KeyedContainer for JsonObject<'_> {
    type Sequence<'s>
        = JsonArray<'s>
    where
        Self: 's;

    fn decode<T: DeserializeOwned>(&self, key: &str) -> Result<T, DecodeFault> {
        let value = self.map.get(key).ok_or_else(|| DecodeFault::not_found(key))?;
        decode_value(value, Location::Key(key))
    }

    fn decode_if_present<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DecodeFault> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode_value(value, Location::Key(key)).map(Some),
        }
    }

    fn nested_sequence(&self, key: &str) -> Result<JsonArray<'_>, DecodeFault> {
        match self.map.get(key) {
            None => Err(DecodeFault::not_found(key)),
            Some(Value::Array(items)) => Ok(JsonArray::new(items)),
            Some(Value::Null) => Err(DecodeFault::value_missing(
                "array",
                format!("key `{key}`: expected a sequence but found null"),
            )),
            Some(other) => Err(DecodeFault::type_mismatch(
                "array",
                format!("key `{key}`: expected a sequence but found {}", kind(other)),
            )),
        }
    }
}

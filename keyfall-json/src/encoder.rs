use keyfall_core::{EncodeFault, KeyedEncoder};
use serde::Serialize;
use serde_json::{Map, Value};
use std::any::type_name;

use crate::classify::kind;

/// A mutable JSON object viewed as a keyed encoder.
///
/// Each value is serialized on its own, so a value that fails leaves the
/// object exactly as it was.
#[derive(Debug)]
pub struct JsonObjectMut<'a> {
    map: &'a mut Map<String, Value>,
}

impl<'a> JsonObjectMut<'a> {
    #[must_use]
    pub fn new(map: &'a mut Map<String, Value>) -> Self {
        Self { map }
    }

    /// Views `value` as a writable object. A null value becomes `{}`.
    pub fn from_value(value: &'a mut Value) -> Result<Self, EncodeFault> {
        if value.is_null() {
            *value = Value::Object(Map::new());
        }
        match value {
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(EncodeFault::Other(format!(
                "cannot write keyed values into a JSON {}",
                kind(other)
            ))),
        }
    }
}

impl KeyedEncoder for JsonObjectMut<'_> {
    fn encode<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), EncodeFault> {
        let encoded = serde_json::to_value(value).map_err(|e| {
            EncodeFault::invalid_value(type_name::<T>(), format!("key `{key}`: {e}"))
        })?;
        self.map.insert(key.to_string(), encoded);
        Ok(())
    }
}

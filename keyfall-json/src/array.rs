use keyfall_core::{DecodeFault, SequenceContainer};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::classify::Location;
use crate::object::decode_value;

/// A JSON array viewed as a sequence container with a cursor.
#[derive(Debug, Clone)]
pub struct JsonArray<'a> {
    items: &'a [Value],
    index: usize,
}

impl<'a> JsonArray<'a> {
    #[must_use]
    pub fn new(items: &'a [Value]) -> Self {
        Self { items, index: 0 }
    }

    /// Total number of elements, consumed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn current(&self) -> Result<&'a Value, DecodeFault> {
        self.items.get(self.index).ok_or_else(|| {
            DecodeFault::Other(format!("sequence is at end (index {})", self.index))
        })
    }
}

impl SequenceContainer for JsonArray<'_> {
    fn is_at_end(&self) -> bool {
        self.index >= self.items.len()
    }

    fn current_index(&self) -> usize {
        self.index
    }

    fn decode_next<T: DeserializeOwned>(&mut self) -> Result<T, DecodeFault> {
        let value = self.current()?;
        let decoded = decode_value(value, Location::Element(self.index))?;
        self.index += 1;
        Ok(decoded)
    }

    fn skip_one(&mut self) -> Result<(), DecodeFault> {
        self.current()?;
        self.index += 1;
        Ok(())
    }
}

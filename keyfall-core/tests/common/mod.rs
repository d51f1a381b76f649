//! Shared test doubles for resolver tests.

#![allow(dead_code)]

use keyfall_core::{
    DecodeFault, Decoder, EncodeFault, Encoder, KeyedContainer, KeyedEncoder, SequenceContainer,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::type_name;
use std::cell::RefCell;
use std::collections::HashMap;

/// What a key or element holds in a [`MockContainer`].
#[derive(Debug, Clone)]
pub enum Slot {
    Value(Value),
    Fault(DecodeFault),
}

fn decode_slot<T: DeserializeOwned>(slot: &Slot, at: &str) -> Result<T, DecodeFault> {
    match slot {
        Slot::Fault(fault) => Err(fault.clone()),
        Slot::Value(Value::Null) => T::deserialize(&Value::Null)
            .map_err(|_| DecodeFault::value_missing(type_name::<T>(), format!("{at} is null"))),
        Slot::Value(value) => T::deserialize(value).map_err(|e| {
            let message = e.to_string();
            if message.starts_with("invalid type") {
                DecodeFault::type_mismatch(type_name::<T>(), format!("{at}: {message}"))
            } else {
                DecodeFault::malformed(format!("{at}: {message}"))
            }
        }),
    }
}

/// Keyed container with scripted contents that records every key consulted.
#[derive(Debug, Default)]
pub struct MockContainer {
    slots: HashMap<String, Slot>,
    sequences: HashMap<String, Vec<Slot>>,
    sequence_faults: HashMap<String, DecodeFault>,
    stuck_skip: bool,
    consulted: RefCell<Vec<String>>,
}

impl MockContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.slots.insert(key.to_string(), Slot::Value(value));
        self
    }

    pub fn with_fault(mut self, key: &str, fault: DecodeFault) -> Self {
        self.slots.insert(key.to_string(), Slot::Fault(fault));
        self
    }

    pub fn with_sequence(mut self, key: &str, items: Vec<Slot>) -> Self {
        self.sequences.insert(key.to_string(), items);
        self
    }

    pub fn with_sequence_fault(mut self, key: &str, fault: DecodeFault) -> Self {
        self.sequence_faults.insert(key.to_string(), fault);
        self
    }

    /// Makes `skip_one` fail, as if the malformed slot could not be consumed.
    pub fn with_stuck_skip(mut self) -> Self {
        self.stuck_skip = true;
        self
    }

    /// Keys looked up so far, in order.
    pub fn consulted(&self) -> Vec<String> {
        self.consulted.borrow().clone()
    }

    fn record(&self, key: &str) {
        self.consulted.borrow_mut().push(key.to_string());
    }
}

impl KeyedContainer for MockContainer {
    type Sequence<'a> = MockSequence<'a>;

    fn decode<T: DeserializeOwned>(&self, key: &str) -> Result<T, DecodeFault> {
        self.record(key);
        match self.slots.get(key) {
            None => Err(DecodeFault::not_found(key)),
            Some(slot) => decode_slot(slot, key),
        }
    }

    fn decode_if_present<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DecodeFault> {
        self.record(key);
        match self.slots.get(key) {
            None | Some(Slot::Value(Value::Null)) => Ok(None),
            Some(slot) => decode_slot(slot, key).map(Some),
        }
    }

    fn nested_sequence(&self, key: &str) -> Result<MockSequence<'_>, DecodeFault> {
        self.record(key);
        if let Some(fault) = self.sequence_faults.get(key) {
            return Err(fault.clone());
        }
        match self.sequences.get(key) {
            None => Err(DecodeFault::not_found(key)),
            Some(items) => Ok(MockSequence {
                items,
                index: 0,
                stuck_skip: self.stuck_skip,
            }),
        }
    }
}

#[derive(Debug)]
pub struct MockSequence<'a> {
    items: &'a [Slot],
    index: usize,
    stuck_skip: bool,
}

impl SequenceContainer for MockSequence<'_> {
    fn is_at_end(&self) -> bool {
        self.index >= self.items.len()
    }

    fn current_index(&self) -> usize {
        self.index
    }

    fn decode_next<T: DeserializeOwned>(&mut self) -> Result<T, DecodeFault> {
        let slot = self
            .items
            .get(self.index)
            .ok_or_else(|| DecodeFault::Other("at end".into()))?;
        let value = decode_slot(slot, &format!("element {}", self.index))?;
        self.index += 1;
        Ok(value)
    }

    fn skip_one(&mut self) -> Result<(), DecodeFault> {
        if self.stuck_skip {
            return Err(DecodeFault::Other("cannot skip element".into()));
        }
        self.index += 1;
        Ok(())
    }
}

/// Document wrapper whose root may or may not be keyed.
#[derive(Debug)]
pub enum MockDocument {
    Keyed(MockContainer),
    Scalar,
}

impl Decoder for MockDocument {
    type Keyed<'a> = &'a MockContainer;

    fn keyed_container(&self) -> Result<&MockContainer, DecodeFault> {
        match self {
            Self::Keyed(container) => Ok(container),
            Self::Scalar => Err(DecodeFault::type_mismatch(
                "keyed container",
                "document root is a scalar",
            )),
        }
    }
}

/// Keyed encoder that stores JSON values and can refuse whole value kinds.
#[derive(Debug, Default)]
pub struct MockEncoder {
    pub written: Vec<(String, Value)>,
    reject_numbers: bool,
    broken: bool,
}

impl MockEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuses numeric values, like a format without a number type.
    pub fn rejecting_numbers() -> Self {
        Self {
            reject_numbers: true,
            ..Self::default()
        }
    }

    /// Fails every write with a non-value error.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.written.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl KeyedEncoder for MockEncoder {
    fn encode<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), EncodeFault> {
        if self.broken {
            return Err(EncodeFault::Other("storage unavailable".into()));
        }
        let encoded = serde_json::to_value(value)
            .map_err(|e| EncodeFault::invalid_value(type_name::<T>(), e.to_string()))?;
        if self.reject_numbers && encoded.is_number() {
            return Err(EncodeFault::invalid_value(
                type_name::<T>(),
                "numbers are not representable in this format",
            ));
        }
        self.written.push((key.to_string(), encoded));
        Ok(())
    }
}

/// Document whose keyed encoder may be unavailable.
#[derive(Debug)]
pub enum MockOutput {
    Keyed(MockEncoder),
    Sealed,
}

impl Encoder for MockOutput {
    type Keyed<'a> = &'a mut MockEncoder;

    fn keyed_encoder(&mut self) -> Result<&mut MockEncoder, EncodeFault> {
        match self {
            Self::Keyed(encoder) => Ok(encoder),
            Self::Sealed => Err(EncodeFault::Other("document is sealed".into())),
        }
    }
}

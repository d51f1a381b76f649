//! Sequence resolution with per-element fault tolerance.

use serde::de::DeserializeOwned;
use std::any::type_name;

use crate::resolver::fallback_note;
use crate::{CandidateKeys, CodingKey, DecodeFault, KeyedContainer, Resolver, SequenceContainer};

impl Resolver<'_> {
    /// Resolves the first candidate key holding a sequence, or `fallback`.
    ///
    /// A missing key moves on to the next candidate at every position,
    /// including the last. Once a sequence is found, elements that fail to
    /// decode are skipped and the remaining ones are kept in order. An empty
    /// sequence resolves to an empty `Vec`, not to `fallback`.
    pub fn resolve_sequence<C, K, T>(
        &self,
        container: &C,
        keys: CandidateKeys<'_, K>,
        fallback: Option<Vec<T>>,
    ) -> Option<Vec<T>>
    where
        C: KeyedContainer,
        K: CodingKey,
        T: DeserializeOwned,
    {
        let has_fallback = fallback.is_some();
        for key in keys.iter() {
            let name = key.as_str();
            let mut sequence = match container.nested_sequence(name) {
                Ok(sequence) => sequence,
                Err(DecodeFault::NotFound { .. }) => {
                    self.log(format_args!(
                        "Failed to decode due to missing sequence key `{name}`"
                    ));
                    continue;
                }
                Err(fault) => {
                    self.log_fault(name, &fault, Some(has_fallback));
                    return fallback;
                }
            };

            return match self.collect_elements::<_, T>(&mut sequence) {
                Ok(values) => {
                    self.log(format_args!(
                        "Decoded {} element(s) of type `{}` for key `{name}`",
                        values.len(),
                        type_name::<T>()
                    ));
                    Some(values)
                }
                Err(fault) => {
                    self.log_fault(name, &fault, Some(has_fallback));
                    fallback
                }
            };
        }

        self.log(format_args!(
            "No sequence found for any of the keys {keys}. {}",
            fallback_note(has_fallback)
        ));
        fallback
    }

    /// Single-key form of [`resolve_sequence`](Self::resolve_sequence).
    pub fn resolve_sequence_key<C, K, T>(
        &self,
        container: &C,
        key: &K,
        fallback: Option<Vec<T>>,
    ) -> Option<Vec<T>>
    where
        C: KeyedContainer,
        K: CodingKey,
        T: DeserializeOwned,
    {
        self.resolve_sequence(container, CandidateKeys::single(key), fallback)
    }

    /// Decodes every element, skipping the ones that fail.
    ///
    /// Errors only when a failed element can't be skipped, since the cursor
    /// would otherwise never reach the end.
    fn collect_elements<S, T>(&self, sequence: &mut S) -> Result<Vec<T>, DecodeFault>
    where
        S: SequenceContainer,
        T: DeserializeOwned,
    {
        let mut values = Vec::new();
        while !sequence.is_at_end() {
            let index = sequence.current_index();
            match sequence.decode_next::<T>() {
                Ok(value) => values.push(value),
                Err(fault) => {
                    self.log_element_fault(index, &fault);
                    sequence.skip_one()?;
                    if sequence.current_index() == index {
                        return Err(DecodeFault::Other(format!(
                            "sequence cursor did not advance past element {index}"
                        )));
                    }
                }
            }
        }
        Ok(values)
    }

    fn log_element_fault(&self, index: usize, fault: &DecodeFault) {
        match fault {
            DecodeFault::NotFound { key } => self.log(format_args!(
                "Failed to decode element {index} due to missing key `{key}`. Skipping item."
            )),
            DecodeFault::TypeMismatch { expected, context } => self.log(format_args!(
                "Failed to decode element {index} due to type mismatch of type `{expected}`: \
                 {context}. Skipping item."
            )),
            DecodeFault::ValueMissing { expected, context } => self.log(format_args!(
                "Failed to decode element {index} due to missing `{expected}` value: \
                 {context}. Skipping item."
            )),
            DecodeFault::Malformed { context } => self.log(format_args!(
                "Failed to decode element {index} because the data is malformed: \
                 {context}. Skipping item."
            )),
            DecodeFault::Other(message) => self.log(format_args!(
                "Failed to decode element {index}: {message}. Skipping item."
            )),
        }
    }
}

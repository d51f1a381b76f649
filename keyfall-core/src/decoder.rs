//! Entry points that start from a whole document rather than a container.

use serde::de::DeserializeOwned;

use crate::resolver::fallback_note;
use crate::{CandidateKeys, CodingKey, Decoder, Resolver};

impl Resolver<'_> {
    /// Decodes a field from `decoder` by candidate keys, or returns `fallback`.
    ///
    /// Fails over to `fallback` if the document can't be read as a keyed
    /// container at all; otherwise behaves like [`resolve`](Self::resolve).
    pub fn decode<D, K, T>(
        &self,
        decoder: &D,
        keys: CandidateKeys<'_, K>,
        fallback: Option<T>,
    ) -> Option<T>
    where
        D: Decoder,
        K: CodingKey,
        T: DeserializeOwned,
    {
        self.announce(keys);
        match decoder.keyed_container() {
            Ok(container) => self.resolve(&container, keys, fallback),
            Err(fault) => {
                self.log(format_args!(
                    "Failed to decode: {fault}. {}",
                    fallback_note(fallback.is_some())
                ));
                fallback
            }
        }
    }

    /// Like [`decode`](Self::decode) with a mandatory fallback.
    pub fn decode_or<D, K, T>(&self, decoder: &D, keys: CandidateKeys<'_, K>, fallback: T) -> T
    where
        D: Decoder,
        K: CodingKey,
        T: DeserializeOwned,
    {
        self.announce(keys);
        match decoder.keyed_container() {
            Ok(container) => self.resolve_or(&container, keys, fallback),
            Err(fault) => {
                self.log(format_args!("Failed to decode: {fault}. Using fallback."));
                fallback
            }
        }
    }

    /// Decodes a sequence field from `decoder` by candidate keys.
    pub fn decode_sequence<D, K, T>(
        &self,
        decoder: &D,
        keys: CandidateKeys<'_, K>,
        fallback: Option<Vec<T>>,
    ) -> Option<Vec<T>>
    where
        D: Decoder,
        K: CodingKey,
        T: DeserializeOwned,
    {
        self.announce(keys);
        match decoder.keyed_container() {
            Ok(container) => self.resolve_sequence(&container, keys, fallback),
            Err(fault) => {
                self.log(format_args!(
                    "Failed to decode: {fault}. {}",
                    fallback_note(fallback.is_some())
                ));
                fallback
            }
        }
    }

    fn announce<K: CodingKey>(&self, keys: CandidateKeys<'_, K>) {
        self.log(format_args!("-----------------------------------"));
        self.log(format_args!("Starting to decode keys: {keys}"));
    }
}

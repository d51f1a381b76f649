//! Container capabilities the resolvers are written against.
//!
//! A format plugs into keyfall by implementing these traits and translating
//! its own errors into [`DecodeFault`] / [`EncodeFault`]. Decoding one value
//! of type `T` is delegated to serde, so any `Deserialize` type works.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{DecodeFault, EncodeFault};

/// Read access to a keyed (object-like) container.
pub trait KeyedContainer {
    type Sequence<'a>: SequenceContainer
    where
        Self: 'a;

    /// Strict get: the key must be present and hold a well-typed value.
    ///
    /// Fails with [`DecodeFault::NotFound`] when the key is absent and with
    /// [`DecodeFault::ValueMissing`] when it holds null and `T` can't be null.
    fn decode<T: DeserializeOwned>(&self, key: &str) -> Result<T, DecodeFault>;

    /// Lenient get: an absent key or a null value is `Ok(None)`.
    fn decode_if_present<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DecodeFault>;

    /// Opens the sequence stored under `key`.
    fn nested_sequence(&self, key: &str) -> Result<Self::Sequence<'_>, DecodeFault>;
}

/// Cursor over an ordered sequence, decoded one element at a time.
pub trait SequenceContainer {
    /// True once every element has been consumed.
    fn is_at_end(&self) -> bool;

    /// Position of the next element.
    fn current_index(&self) -> usize;

    /// Decodes the element under the cursor. Advances only on success.
    fn decode_next<T: DeserializeOwned>(&mut self) -> Result<T, DecodeFault>;

    /// Consumes the element under the cursor without decoding it.
    fn skip_one(&mut self) -> Result<(), DecodeFault>;
}

/// Write access to a keyed container.
pub trait KeyedEncoder {
    fn encode<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), EncodeFault>;
}

impl<C: KeyedContainer> KeyedContainer for &C {
    type Sequence<'a>
        = C::Sequence<'a>
    where
        Self: 'a;

    fn decode<T: DeserializeOwned>(&self, key: &str) -> Result<T, DecodeFault> {
        (**self).decode(key)
    }

    fn decode_if_present<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DecodeFault> {
        (**self).decode_if_present(key)
    }

    fn nested_sequence(&self, key: &str) -> Result<Self::Sequence<'_>, DecodeFault> {
        (**self).nested_sequence(key)
    }
}

impl<E: KeyedEncoder> KeyedEncoder for &mut E {
    fn encode<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), EncodeFault> {
        (**self).encode(key, value)
    }
}

/// A whole document that can be viewed as a keyed container.
pub trait Decoder {
    type Keyed<'a>: KeyedContainer
    where
        Self: 'a;

    fn keyed_container(&self) -> Result<Self::Keyed<'_>, DecodeFault>;
}

/// A whole document that can be written through a keyed encoder.
pub trait Encoder {
    type Keyed<'a>: KeyedEncoder
    where
        Self: 'a;

    fn keyed_encoder(&mut self) -> Result<Self::Keyed<'_>, EncodeFault>;
}

/// How absence is treated by [`try_get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    /// Absence is [`DecodeFault::NotFound`] / [`DecodeFault::ValueMissing`].
    Strict,
    /// Absence is `Ok(None)`.
    Lenient,
}

/// Single get used by the resolvers; `Ok(None)` only ever comes from a
/// lenient read.
pub(crate) fn try_get<C, T>(
    container: &C,
    key: &str,
    access: Access,
) -> Result<Option<T>, DecodeFault>
where
    C: KeyedContainer,
    T: DeserializeOwned,
{
    match access {
        Access::Strict => container.decode(key).map(Some),
        Access::Lenient => container.decode_if_present(key),
    }
}

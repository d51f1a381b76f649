//! Key identifiers and ordered candidate key sets.

use std::fmt;

/// A key with a stable string representation.
///
/// Implement this for a field-key enum to keep schema names in one place:
///
/// ```
/// use keyfall_core::CodingKey;
///
/// enum ProfileKey {
///     DisplayName,
///     Name,
/// }
///
/// impl CodingKey for ProfileKey {
///     fn as_str(&self) -> &str {
///         match self {
///             Self::DisplayName => "display_name",
///             Self::Name => "name",
///         }
///     }
/// }
/// ```
pub trait CodingKey {
    /// The key as it appears in the encoded document.
    fn as_str(&self) -> &str;
}

impl CodingKey for str {
    fn as_str(&self) -> &str {
        self
    }
}

impl CodingKey for String {
    fn as_str(&self) -> &str {
        String::as_str(self)
    }
}

impl<K: CodingKey + ?Sized> CodingKey for &K {
    fn as_str(&self) -> &str {
        K::as_str(*self)
    }
}

/// Ordered, non-empty list of keys naming the same logical field across
/// schema versions. Index 0 is tried first.
#[derive(Debug)]
pub struct CandidateKeys<'a, K> {
    keys: &'a [K],
}

impl<K> Clone for CandidateKeys<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for CandidateKeys<'_, K> {}

impl<'a, K: CodingKey> CandidateKeys<'a, K> {
    /// Wraps a key slice. Returns `None` if the slice is empty.
    #[must_use]
    pub fn new(keys: &'a [K]) -> Option<Self> {
        if keys.is_empty() {
            None
        } else {
            Some(Self { keys })
        }
    }

    /// Lifts one key into a one-element candidate set.
    #[must_use]
    pub fn single(key: &'a K) -> Self {
        Self {
            keys: std::slice::from_ref(key),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the last candidate, the one read leniently.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.keys.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a K> {
        self.keys.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, K> {
        self.keys.iter()
    }

    /// Key names in priority order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.keys.iter().map(|k| k.as_str().to_string()).collect()
    }
}

impl<'a, K: CodingKey> From<&'a K> for CandidateKeys<'a, K> {
    fn from(key: &'a K) -> Self {
        Self::single(key)
    }
}

impl<K: CodingKey> fmt::Display for CandidateKeys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.keys.iter().map(|k| k.as_str()))
            .finish()
    }
}

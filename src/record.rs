//! The observation type passed from the line parser to the selector.

use std::borrow::Cow;

/// One `(key, count)` observation read from the input.
///
/// Keys are raw bytes: input is not required to be UTF-8, and keys are written
/// back exactly as read. Records are immutable once built; the selector takes
/// ownership of every record it admits and hands them back from
/// [`TopK::drain`](crate::TopK::drain).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    key: Vec<u8>,
    count: u64,
}

impl Record {
    /// Create a new record.
    #[must_use]
    pub fn new(key: impl Into<Vec<u8>>, count: u64) -> Self {
        Self { key: key.into(), count }
    }

    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The key as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn key_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.key)
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Consume the record, keeping only its key.
    #[must_use]
    pub fn into_key(self) -> Vec<u8> {
        self.key
    }
}

impl<K: Into<Vec<u8>>> From<(K, u64)> for Record {
    fn from((key, count): (K, u64)) -> Self {
        Self::new(key, count)
    }
}

//! Neutral, algorithm-agnostic round-key record.

use core::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::InjectionError;
use crate::shape::CipherShape;

/// Ordered 32-bit round-key words of one schedule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundKeyTable(Vec<u32>);

impl RoundKeyTable {
    /// Wraps `words` as a table.
    pub fn new(words: Vec<u32>) -> Self {
        Self(words)
    }

    /// Borrowed view of the words.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Consumes the table, returning its words.
    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for RoundKeyTable {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for RoundKeyTable {
    fn from(words: Vec<u32>) -> Self {
        Self(words)
    }
}

impl From<&[u32]> for RoundKeyTable {
    fn from(words: &[u32]) -> Self {
        Self(words.to_vec())
    }
}

/// Encryption and decryption schedules copied out of a cipher.
///
/// The record does not know which cipher produced it; see [`CipherShape`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeutralRecord {
    /// Encryption round keys.
    pub enc: RoundKeyTable,
    /// Decryption round keys.
    pub dec: RoundKeyTable,
}

impl NeutralRecord {
    /// Builds a record from its two tables.
    pub fn new(enc: impl Into<RoundKeyTable>, dec: impl Into<RoundKeyTable>) -> Self {
        Self {
            enc: enc.into(),
            dec: dec.into(),
        }
    }

    /// Whether both tables carry at least one word.
    pub fn is_complete(&self) -> bool {
        !self.enc.is_empty() && !self.dec.is_empty()
    }

    /// Name of the first empty table, `enc` before `dec`.
    pub(crate) fn first_empty_field(&self) -> Option<&'static str> {
        if self.enc.is_empty() {
            Some("enc")
        } else if self.dec.is_empty() {
            Some("dec")
        } else {
            None
        }
    }

    /// Shape implied by the length of the encryption table.
    pub fn inferred_shape(&self) -> Result<CipherShape, InjectionError> {
        CipherShape::from_schedule_len(self.enc.len())
    }
}

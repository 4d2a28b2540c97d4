//! Dynamically-shaped cipher handle.

use aes_core::{Aes128, Aes192, Aes256, Block, BlockCipher, ExposeRoundKeys, KeyLengthError};

use crate::shape::CipherShape;

/// A reconstructed (or freshly keyed) AES instance of any supported size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CipherHandle {
    /// AES-128 instance.
    Aes128(Aes128),
    /// AES-192 instance.
    Aes192(Aes192),
    /// AES-256 instance.
    Aes256(Aes256),
}

impl CipherHandle {
    /// Keys a new instance, picking the size from the key length.
    pub fn from_key(key: &[u8]) -> Result<Self, KeyLengthError> {
        Ok(match key.len() {
            16 => CipherHandle::Aes128(Aes128::new_from_slice(key)?),
            24 => CipherHandle::Aes192(Aes192::new_from_slice(key)?),
            _ => CipherHandle::Aes256(Aes256::new_from_slice(key)?),
        })
    }

    /// Layout of this instance.
    pub fn shape(&self) -> CipherShape {
        match self {
            CipherHandle::Aes128(_) => CipherShape::Aes128,
            CipherHandle::Aes192(_) => CipherShape::Aes192,
            CipherHandle::Aes256(_) => CipherShape::Aes256,
        }
    }
}

macro_rules! dispatch {
    ($handle:expr, $cipher:ident => $body:expr) => {
        match $handle {
            CipherHandle::Aes128($cipher) => $body,
            CipherHandle::Aes192($cipher) => $body,
            CipherHandle::Aes256($cipher) => $body,
        }
    };
}

impl BlockCipher for CipherHandle {
    fn encrypt_block(&self, block: &Block) -> Block {
        dispatch!(self, c => c.encrypt_block(block))
    }

    fn decrypt_block(&self, block: &Block) -> Block {
        dispatch!(self, c => c.decrypt_block(block))
    }
}

impl ExposeRoundKeys for CipherHandle {
    fn enc_round_keys(&self) -> Option<&[u32]> {
        dispatch!(self, c => c.enc_round_keys())
    }

    fn dec_round_keys(&self) -> Option<&[u32]> {
        dispatch!(self, c => c.dec_round_keys())
    }
}

impl From<Aes128> for CipherHandle {
    fn from(cipher: Aes128) -> Self {
        CipherHandle::Aes128(cipher)
    }
}

impl From<Aes192> for CipherHandle {
    fn from(cipher: Aes192) -> Self {
        CipherHandle::Aes192(cipher)
    }
}

impl From<Aes256> for CipherHandle {
    fn from(cipher: Aes256) -> Self {
        CipherHandle::Aes256(cipher)
    }
}

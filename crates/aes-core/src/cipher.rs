//! AES block encryption/decryption driven by expanded word schedules.

use crate::access::{ExposeRoundKeys, FromRoundKeys, LayoutError};
use crate::block::{Block, BLOCK_SIZE};
use crate::key::{
    expand_encryption, invert_schedule, KeyLengthError, KeySize, ScheduleLengthError,
};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// A 128-bit block cipher.
pub trait BlockCipher {
    /// Block size in bytes.
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    /// Encrypts a single block.
    fn encrypt_block(&self, block: &Block) -> Block;

    /// Decrypts a single block.
    fn decrypt_block(&self, block: &Block) -> Block;
}

fn encrypt_words(block: &Block, enc: &[u32]) -> Block {
    let rounds = enc.len() / 4 - 1;
    let mut state = *block;

    add_round_key(&mut state, &enc[..4]);
    for round_key in enc[4..4 * rounds].chunks_exact(4) {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &enc[4 * rounds..4 * rounds + 4]);

    state
}

fn decrypt_words(block: &Block, dec: &[u32]) -> Block {
    let rounds = dec.len() / 4 - 1;
    let mut state = *block;

    add_round_key(&mut state, &dec[..4]);
    for round_key in dec[4..4 * rounds].chunks_exact(4) {
        inv_sub_bytes(&mut state);
        inv_shift_rows(&mut state);
        inv_mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }
    inv_sub_bytes(&mut state);
    inv_shift_rows(&mut state);
    add_round_key(&mut state, &dec[4 * rounds..4 * rounds + 4]);

    state
}

fn check_schedule(schedule: &[u32]) -> Result<(), ScheduleLengthError> {
    KeySize::from_schedule_words(schedule.len())
        .map(|_| ())
        .ok_or(ScheduleLengthError {
            len: schedule.len(),
        })
}

/// Encrypts a single 16-byte block with an expanded encryption schedule.
///
/// `enc` must be a 44, 52 or 60 word schedule.
pub fn encrypt_block(block: &Block, enc: &[u32]) -> Result<Block, ScheduleLengthError> {
    check_schedule(enc)?;
    Ok(encrypt_words(block, enc))
}

/// Decrypts a single 16-byte block with an equivalent-inverse-cipher schedule.
///
/// `dec` must be a 44, 52 or 60 word schedule.
pub fn decrypt_block(block: &Block, dec: &[u32]) -> Result<Block, ScheduleLengthError> {
    check_schedule(dec)?;
    Ok(decrypt_words(block, dec))
}

/// Fixed-width schedule storage behind every public AES handle.
#[derive(Clone, PartialEq, Eq)]
struct AesState<const W: usize> {
    enc: [u32; W],
    dec: [u32; W],
}

impl<const W: usize> AesState<W> {
    fn expand(key: &[u8]) -> Self {
        let mut state = Self {
            enc: [0u32; W],
            dec: [0u32; W],
        };
        expand_encryption(key, &mut state.enc);
        invert_schedule(&state.enc, &mut state.dec);
        state
    }

    fn from_tables(enc: &[u32], dec: &[u32]) -> Option<Self> {
        Some(Self {
            enc: enc.try_into().ok()?,
            dec: dec.try_into().ok()?,
        })
    }
}

macro_rules! aes_handle {
    ($name:ident, $key_len:literal, $words:literal, $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name {
            inner: AesState<$words>,
        }

        impl $name {
            /// Expands `key` into a ready-to-use cipher.
            pub fn new(key: &[u8; $key_len]) -> Self {
                Self {
                    inner: AesState::expand(key),
                }
            }

            /// Expands a key given as a slice, checking its length.
            pub fn new_from_slice(key: &[u8]) -> Result<Self, KeyLengthError> {
                let key: &[u8; $key_len] =
                    key.try_into().map_err(|_| KeyLengthError { len: key.len() })?;
                Ok(Self::new(key))
            }
        }

        impl BlockCipher for $name {
            fn encrypt_block(&self, block: &Block) -> Block {
                encrypt_words(block, &self.inner.enc)
            }

            fn decrypt_block(&self, block: &Block) -> Block {
                decrypt_words(block, &self.inner.dec)
            }
        }

        impl ExposeRoundKeys for $name {
            fn enc_round_keys(&self) -> Option<&[u32]> {
                Some(&self.inner.enc)
            }

            fn dec_round_keys(&self) -> Option<&[u32]> {
                Some(&self.inner.dec)
            }
        }

        impl FromRoundKeys for $name {
            const SCHEDULE_WORDS: usize = $words;

            fn from_round_keys(enc: &[u32], dec: &[u32]) -> Result<Self, LayoutError> {
                AesState::from_tables(enc, dec)
                    .map(|inner| Self { inner })
                    .ok_or(LayoutError {
                        expected: $words,
                        enc: enc.len(),
                        dec: dec.len(),
                    })
            }
        }

        // Round keys are key material; keep them out of debug output.
        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}

aes_handle!(Aes128, 16, 44, "AES with a 128-bit key.");
aes_handle!(Aes192, 24, 52, "AES with a 192-bit key.");
aes_handle!(Aes256, 32, 60, "AES with a 256-bit key.");

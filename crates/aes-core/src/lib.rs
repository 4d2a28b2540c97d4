//! Reference AES implementation with persistable round-key schedules.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedules for AES-128, AES-192 and AES-256 as 32-bit word tables.
//! - Single-block encryption and decryption driven only by those tables.
//! - Capability traits through which the schedules can be read out of a
//!   live cipher and written back into a fresh one.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod access;
mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::access::{ExposeRoundKeys, FromRoundKeys, LayoutError};
pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, Aes128, Aes192, Aes256, BlockCipher};
pub use crate::key::{KeyLengthError, KeySchedule, KeySize, ScheduleLengthError};
pub use crate::sbox::{inv_sbox, sbox};

//! Persist and restore the expanded round-key schedules of AES instances.
//!
//! The pipeline is:
//!
//! ```text
//! cipher --extract--> NeutralRecord --encode--> bytes
//! bytes  --decode---> NeutralRecord --inject--> cipher
//! ```
//!
//! Reconstruction takes the stored schedules as authoritative and never
//! repeats key expansion, so the original key is not needed to rebuild an
//! instance. This also means a persisted record is exactly as sensitive as the
//! key it was expanded from.
//!
//! ```
//! use aes_core::{Aes128, BlockCipher};
//! use roundkey_persist::{codec, extract, inject, CipherShape};
//!
//! let cipher = Aes128::new(&[0x2b; 16]);
//! let json = codec::encode(&extract(&cipher)?)?;
//! let restored = inject(&codec::decode(&json)?, CipherShape::Aes128)?;
//! assert_eq!(restored.encrypt_block(&[0; 16]), cipher.encrypt_block(&[0; 16]));
//! # Ok::<(), roundkey_persist::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
mod error;
mod extract;
mod handle;
mod inject;
mod record;
mod shape;

use aes_core::ExposeRoundKeys;

pub use crate::codec::CodecConfig;
pub use crate::error::{DecodeError, EncodeError, Error, ExtractionError, InjectionError, Result};
pub use crate::extract::{extract, try_extract};
pub use crate::handle::CipherHandle;
pub use crate::inject::{inject, inject_as, inject_inferred, inject_named};
pub use crate::record::{NeutralRecord, RoundKeyTable};
pub use crate::shape::CipherShape;

/// Extracts the schedules of `cipher` and serializes them as JSON.
pub fn save_json<C: ExposeRoundKeys + ?Sized>(cipher: &C, config: &CodecConfig) -> Result<Vec<u8>> {
    let record = extract(cipher)?;
    Ok(codec::encode_with(&record, config)?)
}

/// Parses a JSON record and rebuilds a cipher of `shape` from it.
pub fn load_json(bytes: &[u8], shape: CipherShape) -> Result<CipherHandle> {
    let record = codec::decode(bytes)?;
    Ok(inject(&record, shape)?)
}

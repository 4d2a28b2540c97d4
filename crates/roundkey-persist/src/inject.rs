//! Rebuilding a cipher from a neutral record.
//!
//! Injection never runs key expansion: the record's tables are taken as the
//! authoritative schedules. Table lengths are checked against the target
//! layout before anything is built, so a failed injection yields no cipher.

use aes_core::{Aes128, Aes192, Aes256, FromRoundKeys};
use tracing::{debug, warn};

use crate::error::InjectionError;
use crate::handle::CipherHandle;
use crate::record::NeutralRecord;
use crate::shape::CipherShape;

fn check_layout(record: &NeutralRecord, shape: CipherShape) -> Result<(), InjectionError> {
    let expected = shape.schedule_words();
    let (enc, dec) = (record.enc.len(), record.dec.len());
    if enc == expected && dec == expected {
        return Ok(());
    }
    warn!(%shape, expected, enc, dec, "round-key tables do not fit target layout");
    Err(InjectionError::LayoutMismatch {
        shape,
        expected,
        enc,
        dec,
    })
}

fn build<C: FromRoundKeys>(
    record: &NeutralRecord,
    shape: CipherShape,
) -> Result<C, InjectionError> {
    check_layout(record, shape)?;
    C::from_round_keys(&record.enc, &record.dec).map_err(|err| InjectionError::LayoutMismatch {
        shape,
        expected: err.expected,
        enc: err.enc,
        dec: err.dec,
    })
}

/// Rebuilds a cipher of the given shape from `record`.
pub fn inject(record: &NeutralRecord, shape: CipherShape) -> Result<CipherHandle, InjectionError> {
    let handle = match shape {
        CipherShape::Aes128 => CipherHandle::Aes128(build::<Aes128>(record, shape)?),
        CipherShape::Aes192 => CipherHandle::Aes192(build::<Aes192>(record, shape)?),
        CipherShape::Aes256 => CipherHandle::Aes256(build::<Aes256>(record, shape)?),
    };
    debug!(%shape, "injected round keys");
    Ok(handle)
}

/// Rebuilds a cipher whose shape is given by name, e.g. `"aes-256"`.
pub fn inject_named(record: &NeutralRecord, shape: &str) -> Result<CipherHandle, InjectionError> {
    inject(record, shape.parse()?)
}

/// Rebuilds a cipher whose shape is implied by the length of `record.enc`.
pub fn inject_inferred(record: &NeutralRecord) -> Result<CipherHandle, InjectionError> {
    inject(record, record.inferred_shape()?)
}

/// Rebuilds a statically-typed cipher from `record`.
///
/// `C` must use one of the supported schedule widths; any other width is
/// rejected as [`InjectionError::InvalidShape`].
pub fn inject_as<C: FromRoundKeys>(record: &NeutralRecord) -> Result<C, InjectionError> {
    let shape = CipherShape::from_schedule_len(C::SCHEDULE_WORDS)?;
    let cipher = build::<C>(record, shape)?;
    debug!(%shape, "injected round keys");
    Ok(cipher)
}

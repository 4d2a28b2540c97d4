//! Copying round-key schedules out of a live cipher.

use aes_core::ExposeRoundKeys;
use tracing::debug;

use crate::error::ExtractionError;
use crate::record::{NeutralRecord, RoundKeyTable};

fn copy_table(
    table: Option<&[u32]>,
    field: &'static str,
) -> Result<RoundKeyTable, ExtractionError> {
    match table {
        Some(words) if !words.is_empty() => Ok(RoundKeyTable::from(words)),
        _ => Err(ExtractionError::MissingField(field)),
    }
}

/// Copies the `enc` and `dec` schedules of `cipher` into a record.
///
/// Wrapper layers (`Box`, `Rc`, `Arc`, references) are looked through. The
/// record owns its tables, so it stays valid after `cipher` is dropped.
pub fn extract<C>(cipher: &C) -> Result<NeutralRecord, ExtractionError>
where
    C: ExposeRoundKeys + ?Sized,
{
    let enc = copy_table(cipher.enc_round_keys(), "enc")?;
    let dec = copy_table(cipher.dec_round_keys(), "dec")?;
    debug!(enc_words = enc.len(), dec_words = dec.len(), "extracted round keys");
    Ok(NeutralRecord { enc, dec })
}

/// Like [`extract`], but fails with [`ExtractionError::NilInput`] when no
/// cipher is supplied.
pub fn try_extract<C>(cipher: Option<&C>) -> Result<NeutralRecord, ExtractionError>
where
    C: ExposeRoundKeys + ?Sized,
{
    extract(cipher.ok_or(ExtractionError::NilInput)?)
}

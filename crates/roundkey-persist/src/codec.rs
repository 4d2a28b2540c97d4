//! Textual (JSON) and binary forms of [`NeutralRecord`].
//!
//! The text form is a JSON object with exactly two recognized fields:
//!
//! ```text
//! {"enc":[u32, ...],"dec":[u32, ...]}
//! ```
//!
//! Unknown fields are ignored. The capitalized keys `Enc` and `Dec` are
//! accepted on input for documents written by older tooling.

use std::io::{self, BufRead, Read, Write};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{DecodeError, EncodeError};
use crate::record::{NeutralRecord, RoundKeyTable};

/// Options for the stream and text codecs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Byte that ends a document in a stream. `None` reads to end-of-input.
    pub terminator: Option<u8>,
    /// Emit indented JSON.
    pub pretty: bool,
    /// Upper bound on a streamed document, terminator excluded.
    pub max_document_len: Option<usize>,
}

impl CodecConfig {
    /// Documents delimited by a NUL byte.
    pub fn nul_terminated() -> Self {
        Self::default().with_terminator(0)
    }

    /// Sets the document terminator.
    pub fn with_terminator(mut self, byte: u8) -> Self {
        self.terminator = Some(byte);
        self
    }

    /// Limits the size of a streamed document.
    pub fn with_max_document_len(mut self, len: usize) -> Self {
        self.max_document_len = Some(len);
        self
    }

    /// Enables indented output.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

#[derive(Deserialize)]
struct WireRecord {
    #[serde(default, alias = "Enc")]
    enc: Option<Vec<u32>>,
    #[serde(default, alias = "Dec")]
    dec: Option<Vec<u32>>,
}

fn required(table: Option<Vec<u32>>, field: &'static str) -> Result<RoundKeyTable, DecodeError> {
    match table {
        Some(words) if !words.is_empty() => Ok(RoundKeyTable::new(words)),
        _ => Err(DecodeError::MissingField(field)),
    }
}

fn malformed(err: impl std::fmt::Display) -> DecodeError {
    DecodeError::MalformedInput(err.to_string())
}

/// Serializes `record` as compact JSON.
pub fn encode(record: &NeutralRecord) -> Result<Vec<u8>, EncodeError> {
    encode_with(record, &CodecConfig::default())
}

/// Serializes `record` as JSON, honoring `config.pretty`.
pub fn encode_with(record: &NeutralRecord, config: &CodecConfig) -> Result<Vec<u8>, EncodeError> {
    let encoded = if config.pretty {
        serde_json::to_vec_pretty(record)
    } else {
        serde_json::to_vec(record)
    };
    encoded.map_err(|err| EncodeError::Serialize(err.to_string()))
}

/// Parses a JSON document into a record.
pub fn decode(bytes: &[u8]) -> Result<NeutralRecord, DecodeError> {
    let value: Value = serde_json::from_slice(bytes).map_err(malformed)?;
    if !value.is_object() {
        return Err(DecodeError::MalformedInput(
            "expected a JSON object with `enc` and `dec` arrays".to_owned(),
        ));
    }
    let wire: WireRecord = serde_json::from_value(value).map_err(malformed)?;
    let record = NeutralRecord {
        enc: required(wire.enc, "enc")?,
        dec: required(wire.dec, "dec")?,
    };
    debug!(
        enc_words = record.enc.len(),
        dec_words = record.dec.len(),
        "decoded round-key record"
    );
    Ok(record)
}

/// Writes `record` as JSON, followed by `config.terminator` if one is set.
pub fn encode_to_writer<W: Write>(
    mut writer: W,
    record: &NeutralRecord,
    config: &CodecConfig,
) -> Result<(), EncodeError> {
    let bytes = encode_with(record, config)?;
    writer.write_all(&bytes)?;
    if let Some(terminator) = config.terminator {
        writer.write_all(&[terminator])?;
    }
    writer.flush()?;
    Ok(())
}

// Discards input up to and including `terminator` without buffering it.
fn skip_past<R: BufRead>(reader: &mut R, terminator: u8) -> io::Result<()> {
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == terminator) {
            Some(idx) => {
                reader.consume(idx + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}

/// Reads one document from `reader` and parses it.
///
/// Consumes bytes up to and including `config.terminator`, or to
/// end-of-input when no terminator is configured (or none is found). Bytes
/// after the terminator are left in the reader, also when the document is
/// rejected for exceeding `config.max_document_len`.
pub fn decode_from_reader<R: BufRead>(
    reader: R,
    config: &CodecConfig,
) -> Result<NeutralRecord, DecodeError> {
    let cap = config
        .max_document_len
        .map_or(u64::MAX, |len| (len as u64).saturating_add(1));
    let mut limited = reader.take(cap);
    let mut buffer = Vec::new();
    let mut terminated = false;
    match config.terminator {
        Some(terminator) => {
            limited.read_until(terminator, &mut buffer)?;
            if buffer.last() == Some(&terminator) {
                buffer.pop();
                terminated = true;
            }
        }
        None => {
            limited.read_to_end(&mut buffer)?;
        }
    }
    if let Some(max) = config.max_document_len {
        if buffer.len() > max {
            if let (Some(terminator), false) = (config.terminator, terminated) {
                skip_past(&mut limited.into_inner(), terminator)?;
            }
            return Err(DecodeError::MalformedInput(format!(
                "document exceeds {max} bytes"
            )));
        }
    }
    decode(&buffer)
}

/// Serializes `record` with `bincode`.
pub fn encode_binary(record: &NeutralRecord) -> Result<Vec<u8>, EncodeError> {
    bincode::serialize(record).map_err(|err| EncodeError::Serialize(err.to_string()))
}

/// Deserializes a record produced by [`encode_binary`].
pub fn decode_binary(bytes: &[u8]) -> Result<NeutralRecord, DecodeError> {
    let record: NeutralRecord = bincode::deserialize(bytes).map_err(malformed)?;
    match record.first_empty_field() {
        Some(field) => Err(DecodeError::MissingField(field)),
        None => Ok(record),
    }
}

//! Error taxonomy for extraction, injection and the record codec.

use std::io;

use thiserror::Error;

use crate::shape::CipherShape;

/// Failures while reading round keys out of a cipher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No cipher instance was supplied.
    #[error("cipher instance is absent")]
    NilInput,

    /// The named schedule is not carried by the cipher, or is empty.
    #[error("round-key table `{0}` is missing or empty")]
    MissingField(&'static str),
}

/// Failures while rebuilding a cipher from a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectionError {
    /// The target descriptor names no supported cipher layout.
    #[error("`{0}` does not describe a supported cipher layout")]
    InvalidShape(String),

    /// Table lengths disagree with the target layout.
    #[error("{shape} expects {expected}-word tables, got enc={enc} dec={dec}")]
    LayoutMismatch {
        /// Requested target shape.
        shape: CipherShape,
        /// Schedule width the shape requires.
        expected: usize,
        /// Supplied `enc` length.
        enc: usize,
        /// Supplied `dec` length.
        dec: usize,
    },
}

/// Failures while parsing a serialized record.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Input is truncated, not a structured document, or has mistyped fields.
    #[error("malformed record: {0}")]
    MalformedInput(String),

    /// A required table is absent, `null` or empty.
    #[error("record field `{0}` is missing or empty")]
    MissingField(&'static str),

    /// Reading the underlying stream failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Failures while writing a serialized record.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The serializer rejected the record.
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// Writing the underlying stream failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Any failure produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// See [`ExtractionError`].
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// See [`InjectionError`].
    #[error(transparent)]
    Injection(#[from] InjectionError),

    /// See [`DecodeError`].
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// See [`EncodeError`].
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

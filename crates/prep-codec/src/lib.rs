//! Length-prefixed little-endian binary encoding.
//!
//! No schema travels with the data: a reader must decode the same types, in
//! the same order, that the writer encoded. Files start with a [`Header`] so
//! foreign or outdated files are rejected up front.

mod header;
mod primitives;
mod tensor;

pub use header::Header;

use std::fmt;

#[derive(Debug, PartialEq)]
pub enum DecodeError {
    UnexpectedEof,
    InvalidUtf8,
    InvalidMagic,
    UnsupportedVersion(u32),
    InvalidTensor(String),
    Inconsistent(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedEof => write!(f, "unexpected end of buffer"),
            DecodeError::InvalidUtf8 => write!(f, "invalid UTF-8 in string"),
            DecodeError::InvalidMagic => write!(f, "not a preprocessed image file"),
            DecodeError::UnsupportedVersion(v) => write!(f, "unsupported format version: {v}"),
            DecodeError::InvalidTensor(msg) => write!(f, "invalid tensor: {msg}"),
            DecodeError::Inconsistent(msg) => write!(f, "inconsistent contents: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

pub trait Codec: Sized {
    fn encode(&self, buf: &mut Vec<u8>);
    fn decode(buf: &[u8], pos: &mut usize) -> Result<Self, DecodeError>;

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode(&mut buf);
        buf
    }

    /// Decodes one value; trailing bytes are left unread.
    fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut pos = 0;
        Self::decode(bytes, &mut pos)
    }
}

/// Read exactly `n` bytes from `buf` at `pos`, advancing `pos`.
pub fn read_bytes<'a>(buf: &'a [u8], pos: &mut usize, n: usize) -> Result<&'a [u8], DecodeError> {
    let end = pos.checked_add(n).ok_or(DecodeError::UnexpectedEof)?;
    if end > buf.len() {
        return Err(DecodeError::UnexpectedEof);
    }
    let slice = &buf[*pos..end];
    *pos = end;
    Ok(slice)
}

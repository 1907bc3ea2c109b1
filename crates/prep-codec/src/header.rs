use crate::{Codec, DecodeError, read_bytes};

/// Four magic bytes followed by a `u32` format version.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    pub magic: [u8; 4],
    pub version: u32,
}

impl Header {
    pub const fn new(magic: [u8; 4], version: u32) -> Self {
        Self { magic, version }
    }

    pub fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.magic);
        self.version.encode(buf);
    }

    /// Reads a header and checks it against `self`.
    pub fn check(&self, buf: &[u8], pos: &mut usize) -> Result<(), DecodeError> {
        if read_bytes(buf, pos, self.magic.len())? != &self.magic[..] {
            return Err(DecodeError::InvalidMagic);
        }
        let version = u32::decode(buf, pos)?;
        if version != self.version {
            return Err(DecodeError::UnsupportedVersion(version));
        }
        Ok(())
    }
}

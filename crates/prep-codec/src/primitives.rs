use crate::{Codec, DecodeError, read_bytes};

// --- fixed-width numbers ---

macro_rules! impl_codec_for_numeric {
    ($($ty:ty),*) => {
        $(
            impl Codec for $ty {
                fn encode(&self, buf: &mut Vec<u8>) {
                    buf.extend_from_slice(&self.to_le_bytes());
                }

                fn decode(buf: &[u8], pos: &mut usize) -> Result<Self, DecodeError> {
                    const SIZE: usize = std::mem::size_of::<$ty>();
                    let mut bytes = [0u8; SIZE];
                    bytes.copy_from_slice(read_bytes(buf, pos, SIZE)?);
                    Ok(<$ty>::from_le_bytes(bytes))
                }
            }
        )*
    };
}

// counts, lengths, versions and tensor shapes are u32, tensor data is f32
impl_codec_for_numeric!(u32, f32);

// --- String: u32 byte length, then UTF-8 ---

impl Codec for String {
    fn encode(&self, buf: &mut Vec<u8>) {
        let bytes = self.as_bytes();
        (bytes.len() as u32).encode(buf);
        buf.extend_from_slice(bytes);
    }

    fn decode(buf: &[u8], pos: &mut usize) -> Result<Self, DecodeError> {
        let len = u32::decode(buf, pos)? as usize;
        let bytes = read_bytes(buf, pos, len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| DecodeError::InvalidUtf8)
    }
}

// --- Vec<T>: u32 item count, then items ---

impl<T: Codec> Codec for Vec<T> {
    fn encode(&self, buf: &mut Vec<u8>) {
        (self.len() as u32).encode(buf);
        for item in self {
            item.encode(buf);
        }
    }

    fn decode(buf: &[u8], pos: &mut usize) -> Result<Self, DecodeError> {
        let len = u32::decode(buf, pos)? as usize;
        // a corrupt count must not drive a huge allocation
        let capacity = len.min(buf.len().saturating_sub(*pos));
        let mut vec = Vec::with_capacity(capacity);
        for _ in 0..len {
            vec.push(T::decode(buf, pos)?);
        }
        Ok(vec)
    }
}

use crate::{Codec, DecodeError, read_bytes};
use prep_base::Tensor;
use prep_base::tensor::element_count;

const F32_SIZE: usize = std::mem::size_of::<f32>();

/// Shape as `Vec<u32>`, then the element data with no count of its own.
impl Codec for Tensor<f32> {
    fn encode(&self, buf: &mut Vec<u8>) {
        let shape: Vec<u32> = self.shape.iter().map(|&d| d as u32).collect();
        shape.encode(buf);
        buf.reserve(self.data.len() * F32_SIZE);
        for value in &self.data {
            buf.extend_from_slice(&value.to_le_bytes());
        }
    }

    fn decode(buf: &[u8], pos: &mut usize) -> Result<Self, DecodeError> {
        let shape: Vec<usize> = Vec::<u32>::decode(buf, pos)?
            .into_iter()
            .map(|d| d as usize)
            .collect();
        let count = element_count(&shape)
            .map_err(|e| DecodeError::InvalidTensor(e.to_string()))?;
        let byte_len = count
            .checked_mul(F32_SIZE)
            .ok_or_else(|| DecodeError::InvalidTensor(format!("{count} elements overflow")))?;

        let data = read_bytes(buf, pos, byte_len)?
            .chunks_exact(F32_SIZE)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Tensor::new(shape, data).map_err(|e| DecodeError::InvalidTensor(e.to_string()))
    }
}

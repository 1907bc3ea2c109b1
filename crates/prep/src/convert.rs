use prep_base::{Tensor, TensorError};
use prep_image::{CHANNELS, Raster};

/// Converts an HWC u8 raster into a `[1, 3, height, width]` tensor with values in [0, 1].
pub fn to_tensor(raster: &Raster) -> Result<Tensor<f32>, TensorError> {
    let (width, height) = (raster.width() as usize, raster.height() as usize);
    let plane = width * height;
    let hwc = raster.as_raw();

    let mut nchw = vec![0.0f32; CHANNELS * plane];
    for (i, px) in hwc.chunks_exact(CHANNELS).enumerate() {
        for (ch, &value) in px.iter().enumerate() {
            nchw[ch * plane + i] = f32::from(value) / 255.0;
        }
    }

    Tensor::new(vec![1, CHANNELS, height, width], nchw)
}

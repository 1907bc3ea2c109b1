use crate::ImageError;
use crates_image::{ImageBuffer, Rgb, RgbImage, imageops};
use prep_base::Tensor;
use prep_base::tensor::element_count;

/// Interleaved RGB channels per pixel.
pub const CHANNELS: usize = 3;

/// An 8-bit RGB raster in HWC layout: `pixels.shape == [height, width, 3]`.
///
/// Every operation returns a new raster, nothing is modified in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Tensor<u8>,
}

impl Raster {
    /// Wraps interleaved RGB bytes, row by row, top to bottom.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ImageError> {
        let shape = vec![height as usize, width as usize, CHANNELS];
        let pixels = Tensor::new(shape, data)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster where every pixel is `rgb`.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, ImageError> {
        let count = element_count(&[height as usize, width as usize])?;
        Self::new(width, height, rgb.repeat(count))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &Tensor<u8> {
        &self.pixels
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.pixels.data
    }

    pub fn into_tensor(self) -> Tensor<u8> {
        self.pixels
    }

    /// RGB value at column `x`, row `y`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = &self.pixels.data[idx..idx + CHANNELS];
        Some([px[0], px[1], px[2]])
    }

    /// Resample to `width` x `height` with a bicubic (Catmull-Rom) kernel.
    pub fn resize_bicubic(&self, width: u32, height: u32) -> Result<Raster, ImageError> {
        let view: ImageBuffer<Rgb<u8>, &[u8]> =
            ImageBuffer::from_raw(self.width, self.height, self.as_raw()).ok_or(
                ImageError::Tensor(prep_base::TensorError::ShapeMismatch {
                    expected: self.width as usize * self.height as usize * CHANNELS,
                    got: self.pixels.len(),
                }),
            )?;
        let resized = imageops::resize(&view, width, height, imageops::FilterType::CatmullRom);
        Ok(Raster::from(resized))
    }

    /// Copy of `self` with `top` drawn at column `x`, row `y`.
    ///
    /// Parts of `top` falling outside `self` are dropped.
    pub fn pasted(&self, top: &Raster, x: u32, y: u32) -> Raster {
        let mut out = self.clone();
        if x >= self.width || y >= self.height {
            return out;
        }

        let cols = top.width.min(self.width - x) as usize;
        let rows = top.height.min(self.height - y) as usize;
        let dst_stride = self.width as usize * CHANNELS;
        let src_stride = top.width as usize * CHANNELS;
        let run = cols * CHANNELS;

        for row in 0..rows {
            let dst = (y as usize + row) * dst_stride + x as usize * CHANNELS;
            let src = row * src_stride;
            out.pixels.data[dst..dst + run].copy_from_slice(&top.pixels.data[src..src + run]);
        }

        out
    }
}

impl From<RgbImage> for Raster {
    fn from(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Raster {
            width,
            height,
            pixels: Tensor {
                shape: vec![height as usize, width as usize, CHANNELS],
                data: img.into_raw(),
            },
        }
    }
}

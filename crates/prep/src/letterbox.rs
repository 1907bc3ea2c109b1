use prep_image::{ImageError, Raster};

/// Detector input size, (width, height).
pub const MODEL_INPUT_SIZE: (u32, u32) = (416, 416);

/// Fill for the area not covered by the scaled image.
pub const PAD_COLOR: [u8; 3] = [128, 128, 128];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterboxConfig {
    /// Output (width, height) in pixels.
    pub target: (u32, u32),
    pub fill: [u8; 3],
}

impl Default for LetterboxConfig {
    fn default() -> Self {
        Self {
            target: MODEL_INPUT_SIZE,
            fill: PAD_COLOR,
        }
    }
}

/// A letterboxed raster plus where the source image landed in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Letterboxed {
    pub raster: Raster,
    pub scale: f64,
    /// (width, height) of the scaled source inside `raster`.
    pub content: (u32, u32),
    /// Top-left corner of the scaled source inside `raster`.
    pub offset: (u32, u32),
}

impl Letterboxed {
    /// Whether pixel (x, y) belongs to the scaled source rather than the padding.
    pub fn in_content(&self, x: u32, y: u32) -> bool {
        let (ox, oy) = self.offset;
        let (cw, ch) = self.content;
        x >= ox && x < ox + cw && y >= oy && y < oy + ch
    }
}

/// Fits `image` into `config.target` without distorting it.
///
/// The scale is `min(w / iw, h / ih)` with no upper bound, so small images are
/// enlarged. Scaled dimensions are floored, the resize is bicubic, and the
/// result is centered with floor division: an odd remainder puts the extra
/// padding pixel on the right or bottom.
pub fn letterbox(image: &Raster, config: &LetterboxConfig) -> Result<Letterboxed, ImageError> {
    let (iw, ih) = image.dimensions();
    let (w, h) = config.target;

    let scale = (w as f64 / iw as f64).min(h as f64 / ih as f64);
    // `as` saturates, a degenerate source yields an empty content box
    let nw = ((iw as f64 * scale) as u32).min(w);
    let nh = ((ih as f64 * scale) as u32).min(h);
    let offset = ((w - nw) / 2, (h - nh) / 2);

    let canvas = Raster::filled(w, h, config.fill)?;
    let raster = if nw == 0 || nh == 0 {
        log::warn!("{iw}x{ih} image scales to nothing at {w}x{h}, output is padding only");
        canvas
    } else {
        let resized = image.resize_bicubic(nw, nh)?;
        canvas.pasted(&resized, offset.0, offset.1)
    };

    log::debug!(
        "letterboxed {iw}x{ih} -> {nw}x{nh} at ({}, {}) in {w}x{h}, scale {scale}",
        offset.0,
        offset.1
    );

    Ok(Letterboxed {
        raster,
        scale,
        content: (nw, nh),
        offset,
    })
}

use crate::PrepError;
use crate::convert::to_tensor;
use crate::letterbox::{LetterboxConfig, letterbox};
use prep_base::Tensor;
use prep_image::{Raster, decode_base64_image, decode_image, open_image};
use std::path::Path;

/// Letterboxes `raster` per `config` and converts it to a `[1, 3, h, w]` tensor.
pub fn preprocess_raster(
    raster: &Raster,
    config: &LetterboxConfig,
) -> Result<Tensor<f32>, PrepError> {
    let boxed = letterbox(raster, config)?;
    Ok(to_tensor(&boxed.raster)?)
}

/// Decodes the image at `path` into a `[1, 3, 416, 416]` tensor.
///
/// # Errors
///
/// A missing, unreadable or corrupt file is a decode failure
/// (`PrepError::is_decode_failure`).
pub fn preprocess_image_file(path: impl AsRef<Path>) -> Result<Tensor<f32>, PrepError> {
    preprocess_raster(&open_image(path)?, &LetterboxConfig::default())
}

/// Decodes a base64-encoded image into a `[1, 3, 416, 416]` tensor.
///
/// Produces exactly the tensor `preprocess_image_file` gives for the same bytes on disk.
///
/// # Errors
///
/// Malformed base64 or bytes that are not an image are decode failures.
pub fn preprocess_encoded_image(text: &str) -> Result<Tensor<f32>, PrepError> {
    preprocess_raster(&decode_base64_image(text)?, &LetterboxConfig::default())
}

/// Decodes in-memory image bytes of any supported format into a `[1, 3, 416, 416]` tensor.
///
/// # Errors
///
/// Bytes that are not a supported image are a decode failure.
pub fn preprocess_image_bytes(bytes: &[u8]) -> Result<Tensor<f32>, PrepError> {
    preprocess_raster(&decode_image(bytes)?, &LetterboxConfig::default())
}

//! Image input for the preprocessing pipeline.
//!
//! Wraps the `image` crate to decode files, raw bytes or base64 text into a
//! [`Raster`]: 8-bit RGB in HWC layout (`[height, width, 3]`). Sources with any
//! other color type are converted to RGB and lose their alpha channel.

pub mod error;
pub mod raster;

pub use error::ImageError;
pub use raster::{CHANNELS, Raster};

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use std::path::Path;

/// Standard alphabet with canonical padding; non-zero bits in the last symbol are ignored.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decodes image bytes into an RGB raster.
///
/// The format is auto-detected by the `image` crate.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is not a supported image.
pub fn decode_image(data: &[u8]) -> Result<Raster, ImageError> {
    let img = crates_image::load_from_memory(data)?;
    log::debug!(
        "decoded {}x{} {:?} image from {} bytes",
        img.width(),
        img.height(),
        img.color(),
        data.len()
    );
    Ok(Raster::from(img.into_rgb8()))
}

/// Reads and decodes the image at `path`.
///
/// # Errors
///
/// Returns `ImageError::Decode`, naming the path, if the file cannot be read
/// or does not hold a supported image.
pub fn open_image(path: impl AsRef<Path>) -> Result<Raster, ImageError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| ImageError::Decode(format!("cannot read {}: {e}", path.display())))?;

    decode_image(&bytes).map_err(|err| match err {
        ImageError::Decode(msg) => ImageError::Decode(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Decodes standard-alphabet base64 text, ignoring ASCII whitespace such as
/// the line breaks MIME encoders insert every 76 characters. Unused low bits
/// in the final symbol are dropped, so `QR==` decodes like `QQ==`.
///
/// # Errors
///
/// Returns `ImageError::Base64` on any other character outside the alphabet,
/// or on bad length or padding.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, ImageError> {
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    Ok(BASE64.decode(compact)?)
}

/// Decodes a base64-encoded image into an RGB raster.
///
/// # Errors
///
/// Returns `ImageError::Base64` for malformed text and `ImageError::Decode`
/// when the decoded bytes are not a supported image.
pub fn decode_base64_image(text: &str) -> Result<Raster, ImageError> {
    let bytes = decode_base64(text)?;
    decode_image(&bytes)
}

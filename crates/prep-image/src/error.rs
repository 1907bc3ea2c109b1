use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Decode(String),
    Base64(String),
    Tensor(prep_base::TensorError),
}

impl ImageError {
    /// True for every failure to turn input into pixels: bad path, bad base64, bad image bytes.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, ImageError::Decode(_) | ImageError::Base64(_))
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "decode error: {msg}"),
            ImageError::Base64(msg) => write!(f, "decode error: invalid base64: {msg}"),
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

impl From<base64::DecodeError> for ImageError {
    fn from(err: base64::DecodeError) -> Self {
        ImageError::Base64(err.to_string())
    }
}

impl From<prep_base::TensorError> for ImageError {
    fn from(err: prep_base::TensorError) -> Self {
        ImageError::Tensor(err)
    }
}

use prep_base::TensorError;
use prep_codec::DecodeError;
use prep_image::ImageError;
use std::fmt;

#[derive(Debug)]
pub enum PrepError {
    Image(ImageError),
    Io(String),
    Codec(DecodeError),
    Tensor(TensorError),
}

impl PrepError {
    /// True when an input could not be turned into pixels (bad path, base64 or image bytes).
    pub fn is_decode_failure(&self) -> bool {
        match self {
            PrepError::Image(err) => err.is_decode_failure(),
            _ => false,
        }
    }
}

impl fmt::Display for PrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepError::Image(err) => write!(f, "{err}"),
            PrepError::Io(msg) => write!(f, "io error: {msg}"),
            PrepError::Codec(err) => write!(f, "codec error: {err}"),
            PrepError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for PrepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrepError::Image(err) => Some(err),
            PrepError::Codec(err) => Some(err),
            PrepError::Tensor(err) => Some(err),
            PrepError::Io(_) => None,
        }
    }
}

impl From<ImageError> for PrepError {
    fn from(err: ImageError) -> Self {
        PrepError::Image(err)
    }
}

impl From<std::io::Error> for PrepError {
    fn from(err: std::io::Error) -> Self {
        PrepError::Io(err.to_string())
    }
}

impl From<DecodeError> for PrepError {
    fn from(err: DecodeError) -> Self {
        PrepError::Codec(err)
    }
}

impl From<TensorError> for PrepError {
    fn from(err: TensorError) -> Self {
        PrepError::Tensor(err)
    }
}

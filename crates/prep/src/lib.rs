//! Turns images into detector input tensors.
//!
//! Each image is letterboxed into a 416x416 gray canvas without distortion,
//! scaled to [0, 1] and laid out channel-first with a batch axis:
//! `[1, 3, 416, 416]` `f32`. A folder of `*.jpg` files can be processed in one
//! go into a single `images.pickle` file.
//!
//! ```no_run
//! # fn main() -> Result<(), prep::PrepError> {
//! let tensor = prep::preprocess_image_file("data/dog.jpg")?;
//! assert_eq!(tensor.shape, vec![1, 3, 416, 416]);
//!
//! let batch = prep::preprocess_image_folder("data", &prep::BatchConfig::default())?;
//! println!("{} images", batch.len());
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod convert;
pub mod error;
pub mod letterbox;
pub mod transform;

pub use batch::{
    BatchConfig, BatchResult, DEFAULT_DATA_FOLDER, NameRule, OUTPUT_FILE_NAME, image_name,
    load_batch, preprocess_image_folder, scan_images_folder,
};
pub use convert::to_tensor;
pub use error::PrepError;
pub use letterbox::{LetterboxConfig, Letterboxed, MODEL_INPUT_SIZE, PAD_COLOR, letterbox};
pub use transform::{
    preprocess_encoded_image, preprocess_image_bytes, preprocess_image_file, preprocess_raster,
};

use crate::PrepError;
use crate::letterbox::LetterboxConfig;
use crate::transform::preprocess_raster;
use prep_base::Tensor;
use prep_codec::{Codec, DecodeError, Header};
use prep_image::open_image;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Folder processed when none is given.
pub const DEFAULT_DATA_FOLDER: &str = "./data";

/// Written into the processed folder, replacing any previous run's output.
pub const OUTPUT_FILE_NAME: &str = "images.pickle";

const IMAGE_SUFFIX: &str = ".jpg";
const BATCH_HEADER: Header = Header::new(*b"PREP", 1);

/// How an image name is derived from its file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameRule {
    /// Trim every trailing '.', 'j', 'p' or 'g' character: `dog.jpg` becomes `do`.
    /// Names match those produced by earlier tooling built on a character-set strip.
    #[default]
    TrimChars,
    /// Remove one literal `.jpg` suffix: `dog.jpg` becomes `dog`.
    StripSuffix,
}

impl NameRule {
    pub fn apply<'a>(&self, file_name: &'a str) -> &'a str {
        match self {
            NameRule::TrimChars => file_name.trim_end_matches(&['.', 'j', 'p', 'g'][..]),
            NameRule::StripSuffix => file_name.strip_suffix(IMAGE_SUFFIX).unwrap_or(file_name),
        }
    }
}

/// Name for the image at `path`: its base name passed through `rule`.
pub fn image_name(path: &Path, rule: NameRule) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    rule.apply(&file_name).to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatchConfig {
    pub letterbox: LetterboxConfig,
    pub names: NameRule,
}

/// Image names and their tensors, index-aligned, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    pub names: Vec<String>,
    pub tensors: Vec<Tensor<f32>>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tensor<f32>)> {
        self.names.iter().map(String::as_str).zip(&self.tensors)
    }

    /// Tensor of the first image called `name`.
    pub fn get(&self, name: &str) -> Option<&Tensor<f32>> {
        self.iter().find(|(n, _)| *n == name).map(|(_, t)| t)
    }

    /// Writes the batch to `path`, truncating an existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PrepError> {
        let path = path.as_ref();
        let bytes = self.to_bytes();

        let mut file = File::create(path)
            .map_err(|e| PrepError::Io(format!("cannot create {}: {e}", path.display())))?;
        file.write_all(&bytes)
            .and_then(|()| file.flush())
            .map_err(|e| PrepError::Io(format!("cannot write {}: {e}", path.display())))?;

        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

/// Magic and version, names, then tensors.
impl Codec for BatchResult {
    fn encode(&self, buf: &mut Vec<u8>) {
        BATCH_HEADER.encode(buf);
        self.names.encode(buf);
        self.tensors.encode(buf);
    }

    fn decode(buf: &[u8], pos: &mut usize) -> Result<Self, DecodeError> {
        BATCH_HEADER.check(buf, pos)?;
        let names = Vec::<String>::decode(buf, pos)?;
        let tensors = Vec::<Tensor<f32>>::decode(buf, pos)?;
        if names.len() != tensors.len() {
            return Err(DecodeError::Inconsistent(format!(
                "{} names for {} tensors",
                names.len(),
                tensors.len()
            )));
        }
        Ok(Self { names, tensors })
    }
}

/// Reads a batch written by `preprocess_image_folder`.
pub fn load_batch(path: impl AsRef<Path>) -> Result<BatchResult, PrepError> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).map_err(|e| PrepError::Io(format!("cannot read {}: {e}", path.display())))?;
    Ok(BatchResult::from_bytes(&bytes)?)
}

/// Lists `*.jpg` files directly inside `dir` as (name, path) pairs.
///
/// Matching is case-sensitive and skips hidden files and directories. Every
/// other match is listed, including links whose target is gone, so that
/// opening it fails the batch. Order is whatever the directory listing yields.
pub fn scan_images_folder(
    dir: impl AsRef<Path>,
    rule: NameRule,
) -> Result<Vec<(String, PathBuf)>, PrepError> {
    let dir = dir.as_ref();
    log::info!("Scanning images folder {}.", dir.display());

    let entries = fs::read_dir(dir)
        .map_err(|e| PrepError::Io(format!("cannot list {}: {e}", dir.display())))?;

    let mut images = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_candidate = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .is_some_and(|n| n.ends_with(IMAGE_SUFFIX) && !n.starts_with('.'));
        if is_candidate && !path.is_dir() {
            images.push((image_name(&path, rule), path));
        }
    }

    log::debug!("found {} images in {}", images.len(), dir.display());
    Ok(images)
}

/// Preprocesses every `*.jpg` in `dir` and writes the result to `dir/images.pickle`.
///
/// The first image that fails aborts the run; nothing is written in that case.
pub fn preprocess_image_folder(
    dir: impl AsRef<Path>,
    config: &BatchConfig,
) -> Result<BatchResult, PrepError> {
    let dir = dir.as_ref();
    log::info!("Commencing data preprocessing.");

    let images = scan_images_folder(dir, config.names)?;

    let mut batch = BatchResult {
        names: Vec::with_capacity(images.len()),
        tensors: Vec::with_capacity(images.len()),
    };
    for (name, path) in images {
        log::debug!("preprocessing {}", path.display());
        let tensor = preprocess_raster(&open_image(&path)?, &config.letterbox)?;
        batch.names.push(name);
        batch.tensors.push(tensor);
    }

    batch.save(dir.join(OUTPUT_FILE_NAME))?;

    log::info!("Data preprocessing done.");
    Ok(batch)
}

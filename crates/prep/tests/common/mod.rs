#![allow(dead_code)]

use crates_image::ImageEncoder;
use std::path::PathBuf;

/// A fresh, empty directory under the system temp dir, unique per process and test.
pub fn temp_folder(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("prep-{}-{test}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Horizontal red-to-blue gradient, encoded as JPEG.
pub fn gradient_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = crates_image::RgbImage::from_fn(width, height, |x, y| {
        let r = (255 * x / width.max(1)) as u8;
        let g = (255 * y / height.max(1)) as u8;
        crates_image::Rgb([r, g, 255 - r])
    });
    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, 90)
        .encode_image(&img)
        .unwrap();
    buffer
}

/// Uniform image, encoded as PNG so the pixel values survive exactly.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = crates_image::RgbImage::from_pixel(width, height, crates_image::Rgb(rgb));
    let mut buffer = Vec::new();
    crates_image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), width, height, crates_image::ExtendedColorType::Rgb8)
        .unwrap();
    buffer
}

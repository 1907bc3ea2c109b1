mod common;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use common::{gradient_jpeg, solid_png, temp_folder};
use prep::{
    LetterboxConfig, PAD_COLOR, letterbox, preprocess_encoded_image, preprocess_image_bytes,
    preprocess_image_file, to_tensor,
};
use prep_image::decode_image;
use std::fs;

const SIDE: usize = 416;
const PAD_VALUE: f32 = 128.0 / 255.0;

#[test]
fn test_output_shape_and_range() {
    for (w, h) in [(800, 400), (300, 500), (37, 19), (416, 416), (1000, 999)] {
        let tensor = preprocess_image_bytes(&gradient_jpeg(w, h)).unwrap();

        assert_eq!(tensor.shape, vec![1, 3, SIDE, SIDE], "{w}x{h}");
        assert_eq!(tensor.len(), 3 * SIDE * SIDE);
        assert!(
            tensor.data.iter().all(|v| (0.0..=1.0).contains(v)),
            "{w}x{h} has values outside [0, 1]"
        );
    }
}

#[test]
fn test_letterbox_preserves_aspect_ratio() {
    for (w, h) in [(800u32, 400u32), (400, 800), (640, 480), (123, 457), (50, 20)] {
        let raster = decode_image(&gradient_jpeg(w, h)).unwrap();
        let boxed = letterbox(&raster, &LetterboxConfig::default()).unwrap();
        let (nw, nh) = boxed.content;

        assert!(nw <= 416 && nh <= 416, "{w}x{h} -> {nw}x{nh}");
        assert!(nw == 416 || nh == 416, "{w}x{h} -> {nw}x{nh} touches no edge");
        // both sides share one scale, each floored on its own
        let expected = (
            (w as f64 * boxed.scale) as u32,
            (h as f64 * boxed.scale) as u32,
        );
        assert_eq!((nw, nh), expected, "{w}x{h}");
        assert!(
            (nh as u64 * w as u64).abs_diff(nw as u64 * h as u64) <= w.max(h) as u64,
            "{w}x{h} -> {nw}x{nh} distorts the aspect ratio"
        );
    }
}

#[test]
fn test_800x400_example() {
    let raster = decode_image(&gradient_jpeg(800, 400)).unwrap();
    let boxed = letterbox(&raster, &LetterboxConfig::default()).unwrap();

    assert!((boxed.scale - 0.52).abs() < 1e-12);
    assert_eq!(boxed.content, (416, 208));
    assert_eq!(boxed.offset, (0, 104));
    // 104 gray rows above and below
    for x in [0, 200, 415] {
        assert_eq!(boxed.raster.pixel(x, 103), Some(PAD_COLOR));
        assert_eq!(boxed.raster.pixel(x, 312), Some(PAD_COLOR));
    }
}

#[test]
fn test_padding_is_exact_gray() {
    // black never rounds to 128, so every gray pixel is padding
    let raster = decode_image(&solid_png(300, 500, [0, 0, 0])).unwrap();
    let boxed = letterbox(&raster, &LetterboxConfig::default()).unwrap();

    for y in 0..416 {
        for x in 0..416 {
            let px = boxed.raster.pixel(x, y).unwrap();
            if boxed.in_content(x, y) {
                assert_eq!(px, [0, 0, 0], "content pixel ({x}, {y})");
            } else {
                assert_eq!(px, PAD_COLOR, "padding pixel ({x}, {y})");
            }
        }
    }
}

#[test]
fn test_tensor_padding_and_content_values() {
    // 832x416 halves to 416x208, offset 104 rows
    let tensor = preprocess_image_bytes(&solid_png(832, 416, [255, 0, 51])).unwrap();
    let plane = SIDE * SIDE;
    let at = |ch: usize, y: usize, x: usize| tensor.data[ch * plane + y * SIDE + x];

    for ch in 0..3 {
        assert_eq!(at(ch, 0, 0), PAD_VALUE);
        assert_eq!(at(ch, 103, 415), PAD_VALUE);
        assert_eq!(at(ch, 312, 0), PAD_VALUE);
    }
    assert_eq!(at(0, 200, 200), 1.0);
    assert_eq!(at(1, 200, 200), 0.0);
    assert_eq!(at(2, 200, 200), 51.0 / 255.0);
}

#[test]
fn test_file_and_base64_entry_points_agree() {
    let dir = temp_folder("entry-points");
    let bytes = gradient_jpeg(640, 360);
    let path = dir.join("street.jpg");
    fs::write(&path, &bytes).unwrap();

    let from_file = preprocess_image_file(&path).unwrap();
    let from_text = preprocess_encoded_image(&STANDARD.encode(&bytes)).unwrap();

    assert_eq!(from_file, from_text);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_to_tensor_matches_letterboxed_raster() {
    let raster = decode_image(&gradient_jpeg(200, 100)).unwrap();
    let boxed = letterbox(&raster, &LetterboxConfig::default()).unwrap();
    let tensor = to_tensor(&boxed.raster).unwrap();

    let plane = SIDE * SIDE;
    for (x, y) in [(0u32, 0u32), (10, 150), (415, 300), (208, 208)] {
        let px = boxed.raster.pixel(x, y).unwrap();
        for ch in 0..3 {
            let value = tensor.data[ch * plane + y as usize * SIDE + x as usize];
            assert_eq!(value, px[ch] as f32 / 255.0);
        }
    }
}

#[test]
fn test_malformed_base64_is_decode_failure() {
    let err = preprocess_encoded_image("@@@ not base64 @@@").unwrap_err();
    assert!(err.is_decode_failure(), "{err}");
}

#[test]
fn test_base64_of_non_image_is_decode_failure() {
    let err = preprocess_encoded_image(&STANDARD.encode(b"GIF89a but not really")).unwrap_err();
    assert!(err.is_decode_failure(), "{err}");
}

#[test]
fn test_missing_file_is_decode_failure() {
    let dir = temp_folder("missing-file");
    let err = preprocess_image_file(dir.join("nope.jpg")).unwrap_err();

    assert!(err.is_decode_failure());
    assert!(err.to_string().contains("nope.jpg"));

    fs::remove_dir_all(&dir).ok();
}

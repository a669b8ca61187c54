use std::io::Cursor;
use std::path::PathBuf;

use super::*;

fn png_bytes(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_normalization() {
    let src = RgbImage::from_raw(2, 1, vec![0u8, 128, 255, 64, 32, 16]).unwrap();
    let img = decode_image(&png_bytes(image::DynamicImage::ImageRgb8(src))).unwrap();

    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(0, 0).0, [0.0, 0.5, 255.0 / 256.0]);
    assert_eq!(img.get_pixel(1, 0).0, [0.25, 0.125, 0.0625]);
}

#[test]
fn normalized_values_stay_below_one() {
    let src = RgbImage::from_pixel(3, 3, Rgb([255, 255, 255]));
    let img = normalize_rgb8(&src);
    assert!(img.as_raw().iter().all(|&v| (0.0..1.0).contains(&v)));
}

#[test]
fn decode_image_drops_alpha_and_expands_gray() {
    let rgba = image::RgbaImage::from_raw(1, 1, vec![64, 128, 192, 7]).unwrap();
    let img = decode_image(&png_bytes(image::DynamicImage::ImageRgba8(rgba))).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0.25, 0.5, 0.75]);

    let gray = image::GrayImage::from_raw(1, 1, vec![128]).unwrap();
    let img = decode_image(&png_bytes(image::DynamicImage::ImageLuma8(gray))).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0.5, 0.5, 0.5]);
}

#[test]
fn decode_garbage_is_a_load_error() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, YbtError::Load(_)));
}

#[test]
fn load_missing_file_is_a_load_error_naming_the_path() {
    let path = PathBuf::from("target").join("decode_unit").join("missing.png");
    let err = load_image(&path).unwrap_err();
    assert!(matches!(err, YbtError::Load(_)));
    assert!(err.to_string().contains("missing.png"));
}

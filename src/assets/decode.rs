use std::path::Path;

use image::{Rgb, Rgb32FImage, RgbImage};

use crate::foundation::error::{YbtError, YbtResult};

/// Divisor mapping raw 8-bit samples into `[0, 1)`.
pub const SAMPLE_SCALE: f32 = 256.0;

/// Read and decode the image at `path` into a normalized RGB float buffer.
#[tracing::instrument]
pub fn load_image(path: &Path) -> YbtResult<Rgb32FImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| YbtError::load(format!("read '{}': {e}", path.display())))?;
    decode_image(&bytes).map_err(|e| match e {
        YbtError::Load(msg) => YbtError::load(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

/// Decode encoded image bytes (format sniffed from content) and normalize to RGB float.
///
/// Gray, alpha and 16-bit layouts are converted to RGB8 first; alpha is discarded.
pub fn decode_image(bytes: &[u8]) -> YbtResult<Rgb32FImage> {
    let dyn_img =
        image::load_from_memory(bytes).map_err(|e| YbtError::load(format!("decode image: {e}")))?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(YbtError::load(format!(
            "image has no pixels ({width}x{height})"
        )));
    }
    tracing::debug!(width, height, "decoded image");
    Ok(normalize_rgb8(&rgb))
}

/// Divide every raw sample by 256.
pub fn normalize_rgb8(rgb: &RgbImage) -> Rgb32FImage {
    Rgb32FImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        Rgb(rgb.get_pixel(x, y).0.map(|v| f32::from(v) / SAMPLE_SCALE))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

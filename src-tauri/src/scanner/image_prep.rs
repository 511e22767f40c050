//! Photo loading, resizing, and base64 encoding for the vision API.

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use tracing::info;

/// Longest edge for photos sent to the vision API; larger images are
/// downscaled to keep request sizes and API costs bounded.
pub const MAX_PHOTO_DIMENSION: u32 = 1024;

/// Shortest edge required for a usable analysis.
pub const MIN_PHOTO_DIMENSION: u32 = 200;

/// Prepare a captured photo for the vision API.
///
/// Decodes the raw bytes (JPEG, PNG, WebP, ...), rejects photos too small
/// to read a label from, downscales to [`MAX_PHOTO_DIMENSION`] preserving
/// aspect ratio, and returns base64-encoded JPEG.
pub fn prepare_photo(image_bytes: &[u8]) -> Result<String, String> {
    let img = image::load_from_memory(image_bytes)
        .map_err(|e| format!("Failed to load photo: {}. Expected JPEG/PNG/WebP.", e))?;

    let (width, height) = (img.width(), img.height());
    if width.min(height) < MIN_PHOTO_DIMENSION {
        return Err(format!(
            "Photo too small to analyze: {}x{} (minimum edge is {}px)",
            width, height, MIN_PHOTO_DIMENSION
        ));
    }

    let scaled = downscale(img, MAX_PHOTO_DIMENSION);
    info!(
        "Prepared photo: {}x{} -> {}x{}",
        width,
        height,
        scaled.width(),
        scaled.height()
    );

    let mut buffer = Cursor::new(Vec::new());
    scaled
        .write_to(&mut buffer, ImageFormat::Jpeg)
        .map_err(|e| format!("Failed to encode photo as JPEG: {}", e))?;

    Ok(STANDARD.encode(buffer.into_inner()))
}

/// Shrink the image so neither edge exceeds `max_edge`; smaller images
/// pass through untouched.
fn downscale(img: DynamicImage, max_edge: u32) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    if width <= max_edge && height <= max_edge {
        return img;
    }

    let scale = max_edge as f32 / width.max(height) as f32;
    img.resize(
        (width as f32 * scale) as u32,
        (height as f32 * scale) as u32,
        image::imageops::FilterType::Lanczos3,
    )
}

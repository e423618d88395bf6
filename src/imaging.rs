//! Pure-Rust image operations: dimension probing and center cropping.
//!
//! Built on the `image` crate. The crop math is split from the pixel work
//! ([`crop_box`] is pure) so the geometry can be unit-tested without
//! constructing images.

use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Read an image's pixel dimensions from its header, without decoding.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32), image::ImageError> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()
}

/// Decode an image file.
pub fn load(path: &Path) -> Result<DynamicImage, image::ImageError> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// The centered crop rectangle `(x, y, width, height)` that brings an image
/// of `width`x`height` to the target aspect ratio.
///
/// Wider-than-target images lose width from both sides; taller images lose
/// height from top and bottom. One dimension always survives intact.
pub fn crop_box(width: u32, height: u32, aspect: f64) -> (u32, u32, u32, u32) {
    let image_aspect = width as f64 / height as f64;

    if image_aspect > aspect {
        // Too wide: trim left and right
        let new_width = ((height as f64 * aspect) as u32).max(1);
        let left = (width - new_width) / 2;
        (left, 0, new_width, height)
    } else {
        // Too tall (or exact): trim top and bottom
        let new_height = ((width as f64 / aspect) as u32).max(1).min(height);
        let top = (height - new_height) / 2;
        (0, top, width, new_height)
    }
}

/// Center-crop an image to the target aspect ratio.
pub fn crop_to_aspect(image: &DynamicImage, aspect: f64) -> DynamicImage {
    let (x, y, width, height) = crop_box(image.width(), image.height(), aspect);
    image.crop_imm(x, y, width, height)
}

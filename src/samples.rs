//! Checkerboard test-image generator.
//!
//! Backs the `gen-samples` subcommand: writes a batch of PNG images with
//! random dimensions and random two-color checkerboard patterns, enough to
//! exercise the whole pipeline without a real photo library. The dimension
//! ranges skew landscape so a default (landscape-only) build has material
//! to work with, but portrait and square images occur too.

use image::{Rgb, RgbImage};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Checkerboard tile edge in pixels.
const TILE: u32 = 50;

/// Sample dimension ranges (min, max) for width and height.
const WIDTH_RANGE: (u32, u32) = (100, 800);
const HEIGHT_RANGE: (u32, u32) = (100, 600);

/// Generate `count` checkerboard PNGs into `output_dir` as `image_NNNN.png`.
///
/// Creates the directory if needed. Returns the written paths in order.
pub fn generate_samples<R: Rng>(
    output_dir: &Path,
    count: usize,
    rng: &mut R,
) -> Result<Vec<PathBuf>, SampleError> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(count);
    for i in 0..count {
        let width = rng.gen_range(WIDTH_RANGE.0..=WIDTH_RANGE.1);
        let height = rng.gen_range(HEIGHT_RANGE.0..=HEIGHT_RANGE.1);
        let color_a = random_color(rng);
        let color_b = random_color(rng);

        let img = checkerboard(width, height, color_a, color_b);
        let path = output_dir.join(format!("image_{i:04}.png"));
        img.save(&path)?;
        written.push(path);
    }
    Ok(written)
}

fn random_color<R: Rng>(rng: &mut R) -> Rgb<u8> {
    Rgb([rng.r#gen(), rng.r#gen(), rng.r#gen()])
}

/// Build a two-color checkerboard image with [`TILE`]-pixel squares.
fn checkerboard(width: u32, height: u32, a: Rgb<u8>, b: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x / TILE + y / TILE) % 2 == 0 { a } else { b }
    })
}

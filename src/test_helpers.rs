//! Shared test utilities for the contact-sheet test suite.
//!
//! Two kinds of helpers:
//!
//! - **On-disk fixtures**: [`write_photo`] synthesizes a real image file in
//!   a temp directory for tests that exercise filesystem stages.
//! - **In-memory entries**: [`entry`] / [`entry_with_time`] build
//!   `PhotoEntry` values directly for tests of the pure selection and
//!   formatting logic, which never need to touch disk.

use crate::metadata::{SortKey, parse_exif_datetime};
use crate::scan::PhotoEntry;
use exif::experimental::Writer;
use exif::{Field, In, Tag, Value};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Write a solid-gray image file; format follows the extension.
pub fn write_photo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_pixel(width, height, Rgb([128, 128, 128]));
    img.save(&path).unwrap();
    path
}

/// Write a JPEG carrying a real `DateTimeOriginal` EXIF tag.
///
/// The image crate does not write EXIF, so the TIFF payload is built with
/// kamadak-exif's writer and spliced into the encoded JPEG as an APP1
/// segment right after SOI. `taken` uses the EXIF datetime format
/// (`YYYY:MM:DD HH:MM:SS`).
pub fn write_photo_with_exif(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    taken: &str,
) -> PathBuf {
    let img = RgbImage::from_pixel(width, height, Rgb([128, 128, 128]));
    let mut jpeg = Vec::new();
    img.write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
        .unwrap();

    let field = Field {
        tag: Tag::DateTimeOriginal,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![taken.as_bytes().to_vec()]),
    };
    let mut writer = Writer::new();
    writer.push_field(&field);
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).unwrap();
    let tiff = tiff.into_inner();

    // APP1: marker, length (self-inclusive, marker-exclusive), Exif header
    let mut app1 = Vec::with_capacity(tiff.len() + 10);
    app1.extend_from_slice(&[0xFF, 0xE1]);
    app1.extend_from_slice(&((tiff.len() + 8) as u16).to_be_bytes());
    app1.extend_from_slice(b"Exif\0\0");
    app1.extend_from_slice(&tiff);

    let mut bytes = Vec::with_capacity(jpeg.len() + app1.len());
    bytes.extend_from_slice(&jpeg[..2]); // SOI
    bytes.extend_from_slice(&app1);
    bytes.extend_from_slice(&jpeg[2..]);

    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// A `PhotoEntry` keyed by its file name.
pub fn entry(name: &str, width: u32, height: u32) -> PhotoEntry {
    PhotoEntry {
        path: PathBuf::from(name),
        width,
        height,
        key: SortKey::FileName(name.to_string()),
    }
}

/// A `PhotoEntry` keyed by an EXIF-format capture time (`YYYY:MM:DD HH:MM:SS`).
pub fn entry_with_time(name: &str, width: u32, height: u32, taken: &str) -> PhotoEntry {
    PhotoEntry {
        path: PathBuf::from(name),
        width,
        height,
        key: SortKey::CaptureTime(parse_exif_datetime(taken).unwrap()),
    }
}

/// File names of entries, in order.
pub fn photo_names(photos: &[PhotoEntry]) -> Vec<String> {
    photos.iter().map(|p| p.file_name()).collect()
}

//! Sort key resolution: EXIF capture time, filename fallback.
//!
//! Albums read chronologically, so ordering prefers the moment a photo was
//! taken over whatever the camera or phone named the file. Resolution order:
//!
//! 1. EXIF `DateTimeOriginal` (tag 0x9003), parsed to a timestamp
//! 2. File name, compared lexically
//!
//! Timestamped photos always order before name-keyed ones. EXIF lives in a
//! leading segment of the file, so key extraction never decodes pixels.

use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Ordering key for one photo.
///
/// Variant order matters: the derived `Ord` puts every `CaptureTime` before
/// every `FileName`, so photos with EXIF dates lead the album and undated
/// photos trail in name order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// EXIF capture timestamp.
    CaptureTime(NaiveDateTime),
    /// File name of the photo (not the full path).
    FileName(String),
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::CaptureTime(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
            SortKey::FileName(name) => write!(f, "{name}"),
        }
    }
}

/// Resolve the sort key for a photo on disk.
///
/// Any failure along the way (no EXIF segment, missing tag, malformed
/// datetime) falls back to the file name — a missing key is normal for
/// scans, screenshots, and PNGs, not an error.
pub fn sort_key(path: &Path) -> SortKey {
    if let Some(taken) = capture_time(path) {
        return SortKey::CaptureTime(taken);
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    SortKey::FileName(name)
}

/// Read `DateTimeOriginal` from a photo's EXIF data, if present.
pub fn capture_time(path: &Path) -> Option<NaiveDateTime> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = Reader::new().read_from_container(&mut reader).ok()?;
    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    let ascii = match &field.value {
        Value::Ascii(v) => v.first()?,
        _ => return None,
    };
    let text = std::str::from_utf8(ascii).ok()?;
    parse_exif_datetime(text)
}

/// Parse the EXIF datetime format: `YYYY:MM:DD HH:MM:SS`.
pub fn parse_exif_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), "%Y:%m:%d %H:%M:%S").ok()
}

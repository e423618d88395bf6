//! Candidate discovery and photo metadata.
//!
//! Stage 1 of the contact-sheet pipeline. Walks the input directory (one
//! level — subdirectories are someone else's album) and produces a
//! [`PhotoEntry`] per readable image: path, pixel dimensions, orientation,
//! and sort key.
//!
//! ## Candidate Rules
//!
//! - Extensions `jpg`, `jpeg`, `png` (case-insensitive) are candidates.
//! - Dimensions come from the image header — no pixel decode at scan time.
//! - Files whose header cannot be read are skipped and reported, not fatal:
//!   a folder of photos routinely contains a half-synced file or two.
//!
//! Entries are returned sorted by file name so downstream sampling is
//! reproducible for a given seed regardless of directory-iteration order.

use crate::imaging;
use crate::metadata::{self, SortKey};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Extensions accepted as photo candidates.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Orientation derived from pixel dimensions.
///
/// Square images count as portrait: only strictly-wider-than-tall photos
/// survive a landscape-only selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// One candidate photo with everything selection and layout need.
#[derive(Debug, Clone)]
pub struct PhotoEntry {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub key: SortKey,
}

impl PhotoEntry {
    pub fn orientation(&self) -> Orientation {
        Orientation::from_dimensions(self.width, self.height)
    }

    /// File name for display. Lossy is fine — display only.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Result of scanning one directory.
#[derive(Debug)]
pub struct ScanReport {
    /// Readable candidates, sorted by file name.
    pub photos: Vec<PhotoEntry>,
    /// Candidate-extension files whose image header could not be read.
    pub skipped: Vec<PathBuf>,
}

/// Scan a directory for candidate photos.
pub fn scan(input_dir: &Path) -> Result<ScanReport, ScanError> {
    if !input_dir.is_dir() {
        return Err(ScanError::NotADirectory(input_dir.to_path_buf()));
    }

    let mut candidates: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_image_extension(p))
        .collect();
    candidates.sort();

    let mut photos = Vec::new();
    let mut skipped = Vec::new();
    for path in candidates {
        match imaging::read_dimensions(&path) {
            Ok((width, height)) => {
                let key = metadata::sort_key(&path);
                photos.push(PhotoEntry {
                    path,
                    width,
                    height,
                    key,
                });
            }
            Err(_) => skipped.push(path),
        }
    }

    Ok(ScanReport { photos, skipped })
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

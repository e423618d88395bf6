//! Photo selection and pagination.
//!
//! Stage 2 of the contact-sheet pipeline. Pure functions over
//! [`PhotoEntry`] lists:
//!
//! 1. **Filter** — drop portrait/square photos when configured.
//! 2. **Sample** — when more photos remain than the album can hold,
//!    draw a uniform random sample (shuffle + truncate).
//! 3. **Sort** — ascending by sort key, so the sampled set still reads
//!    chronologically.
//! 4. **Paginate** — row-major chunks of `rows * columns`, stopping when
//!    photos run out. The last page may be partial; there are never blank
//!    trailing pages.
//!
//! The RNG is a parameter, not an ambient global, so tests and the `--seed`
//! flag get identical behavior through the same code path.

use crate::scan::{Orientation, PhotoEntry};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Filter, sample, and sort candidates down to at most `capacity` photos.
pub fn select<R: Rng>(
    entries: Vec<PhotoEntry>,
    capacity: usize,
    landscape_only: bool,
    rng: &mut R,
) -> Vec<PhotoEntry> {
    let mut photos: Vec<PhotoEntry> = entries
        .into_iter()
        .filter(|p| !landscape_only || p.orientation() == Orientation::Landscape)
        .collect();

    if photos.len() > capacity {
        photos.shuffle(rng);
        photos.truncate(capacity);
    }

    photos.sort_by(|a, b| a.key.cmp(&b.key));
    photos
}

/// Split selected photos into per-page chunks.
///
/// `per_page` is `rows * columns`; `max_pages` caps the album length.
pub fn paginate(photos: Vec<PhotoEntry>, per_page: usize, max_pages: usize) -> Vec<Vec<PhotoEntry>> {
    if per_page == 0 || max_pages == 0 {
        return Vec::new();
    }
    photos
        .chunks(per_page)
        .take(max_pages)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// JSON-friendly view of one planned photo placement.
#[derive(Debug, Serialize)]
pub struct PlannedPhoto {
    pub source: String,
    pub width: u32,
    pub height: u32,
    pub key: String,
}

/// JSON-friendly view of one planned page.
#[derive(Debug, Serialize)]
pub struct PlannedPage {
    pub number: usize,
    pub photos: Vec<PlannedPhoto>,
}

/// Describe a page plan for the `plan --json` output.
pub fn describe_pages(pages: &[Vec<PhotoEntry>]) -> Vec<PlannedPage> {
    pages
        .iter()
        .enumerate()
        .map(|(i, photos)| PlannedPage {
            number: i + 1,
            photos: photos
                .iter()
                .map(|p| PlannedPhoto {
                    source: p.path.to_string_lossy().to_string(),
                    width: p.width,
                    height: p.height,
                    key: p.key.to_string(),
                })
                .collect(),
        })
        .collect()
}

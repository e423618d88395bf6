//! CLI output formatting.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! Photos (12 candidates)
//! 001 image_0000.png (642x310, landscape)
//! 002 image_0001.png (210x544, portrait)
//! Skipped 1 unreadable file
//! ```
//!
//! ## Plan
//!
//! ```text
//! Page 001 (6 photos)
//!     001 image_0003.png
//!         Key: 2023-05-01 14:30:00
//! ```

use crate::scan::{Orientation, PhotoEntry, ScanReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{pos:0>3}")
}

fn orientation_label(o: Orientation) -> &'static str {
    match o {
        Orientation::Landscape => "landscape",
        Orientation::Portrait => "portrait",
    }
}

/// Format the scan stage summary.
pub fn format_scan(report: &ScanReport) -> Vec<String> {
    let mut lines = vec![format!("Photos ({} candidates)", report.photos.len())];
    for (i, photo) in report.photos.iter().enumerate() {
        lines.push(format!(
            "{} {} ({}x{}, {})",
            format_index(i + 1),
            photo.file_name(),
            photo.width,
            photo.height,
            orientation_label(photo.orientation()),
        ));
    }
    match report.skipped.len() {
        0 => {}
        1 => lines.push("Skipped 1 unreadable file".to_string()),
        n => lines.push(format!("Skipped {n} unreadable files")),
    }
    lines
}

/// Format the page plan summary.
pub fn format_plan(pages: &[Vec<PhotoEntry>]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, photos) in pages.iter().enumerate() {
        lines.push(format!(
            "Page {} ({} photos)",
            format_index(i + 1),
            photos.len()
        ));
        for (j, photo) in photos.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(j + 1), photo.file_name()));
            lines.push(format!("        Key: {}", photo.key));
        }
    }
    lines
}

pub fn print_scan(report: &ScanReport) {
    for line in format_scan(report) {
        println!("{line}");
    }
}

pub fn print_plan(pages: &[Vec<PhotoEntry>]) {
    for line in format_plan(pages) {
        println!("{line}");
    }
}

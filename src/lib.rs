//! # Contact Sheet
//!
//! Arrange a folder of photos into a grid-based PDF contact sheet.
//! Your filesystem is the data source: every readable image in the input
//! directory is a candidate, capture timestamps drive the ordering, and the
//! output is a single PDF with one fixed grid layout per page.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan    directory  →  Vec<PhotoEntry>   (filesystem → structured data)
//! 2. Select  entries    →  page plan         (filter, sample, sort, paginate)
//! 3. Render  page plan  →  album.pdf         (crop, place, write document)
//! ```
//!
//! Each stage is a function over plain data, so the selection and geometry
//! logic can be unit-tested without decoding a single pixel, and `plan` can
//! show exactly which photo lands in which cell before anything is rendered.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — discovers candidate images, reads dimensions and sort keys |
//! | [`select`] | Stage 2 — landscape filter, random sampling, chronological sort, pagination |
//! | [`render`] | Stage 3 — crops photos and writes the PDF document |
//! | [`layout`] | Pure grid geometry: cells, margins, centered photo boxes |
//! | [`imaging`] | Pure-Rust image operations: dimension probing, center cropping |
//! | [`metadata`] | Sort key resolution: EXIF capture time, filename fallback |
//! | [`config`] | `album.toml` loading, validation, aspect-ratio parsing |
//! | [`samples`] | Checkerboard test-image generator (`gen-samples`) |
//! | [`output`] | CLI output formatting — scan and page-plan summaries |
//!
//! # Design Decisions
//!
//! ## PDF Output
//!
//! Pages are written with [printpdf](https://docs.rs/printpdf), pure Rust.
//! A PDF viewer is the one document reader every machine already has, and a
//! fixed A4-landscape page maps directly onto print workflows. The document
//! format is entirely printpdf's concern; this crate only computes where
//! each photo goes.
//!
//! ## Uniform Crop, Uniform Grid
//!
//! Every photo on a sheet is center-cropped to the same aspect ratio and
//! placed centered in its cell. One layout, no packing heuristics — a
//! contact sheet is a survey tool, not a magazine spread.
//!
//! ## Seedable Sampling
//!
//! When a folder holds more photos than the grid can take, a random sample
//! is drawn. The RNG is seedable (`--seed`) so an album can be reproduced
//! exactly, which also keeps the integration tests deterministic.

pub mod config;
pub mod imaging;
pub mod layout;
pub mod metadata;
pub mod output;
pub mod render;
pub mod samples;
pub mod scan;
pub mod select;

#[cfg(test)]
pub(crate) mod test_helpers;

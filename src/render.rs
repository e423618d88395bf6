//! PDF rendering.
//!
//! Stage 3 of the contact-sheet pipeline. Takes the page plan from the
//! select stage, decodes and center-crops every photo, and writes one PDF
//! page per planned page.
//!
//! printpdf 0.8 is data-oriented: a document is a list of `PdfPage`s, each
//! holding a `Vec<Op>` operation list, serialized in one `save` call. Every
//! cropped photo becomes an image XObject placed with an `XObjectTransform`
//! that scales it into its grid cell's photo box.
//!
//! ## Parallel Decode
//!
//! Decoding and cropping dominate the run time, so they happen across all
//! pages at once via [rayon](https://docs.rs/rayon); document assembly stays
//! sequential because `PdfDocument` is not.

use crate::config::AlbumConfig;
use crate::imaging;
use crate::layout::PageGeometry;
use crate::scan::PhotoEntry;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("No photos survived selection")]
    EmptyPlan,
}

/// True when no page holds a photo. Both `build` and `plan` treat this as
/// [`RenderError::EmptyPlan`] rather than producing a blank album.
pub fn is_empty_plan(pages: &[Vec<PhotoEntry>]) -> bool {
    pages.iter().all(|p| p.is_empty())
}

/// DPI at which photos are embedded. 150 is plenty for a survey sheet and
/// keeps file sizes reasonable.
const RENDER_DPI: f32 = 150.0;

/// One decoded, cropped photo waiting for placement.
struct CroppedPhoto {
    page: usize,
    slot: usize,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Render the page plan into PDF bytes.
pub fn render(pages: &[Vec<PhotoEntry>], config: &AlbumConfig) -> Result<Vec<u8>, RenderError> {
    if is_empty_plan(pages) {
        return Err(RenderError::EmptyPlan);
    }

    let geometry = PageGeometry::new(config);
    let aspect = config.crop_aspect.ratio();

    let jobs: Vec<(usize, usize, &PhotoEntry)> = pages
        .iter()
        .enumerate()
        .flat_map(|(page, photos)| {
            photos
                .iter()
                .enumerate()
                .map(move |(slot, photo)| (page, slot, photo))
        })
        .collect();

    let cropped: Vec<CroppedPhoto> = jobs
        .par_iter()
        .map(|&(page, slot, photo)| {
            let img = imaging::load(&photo.path).map_err(|source| RenderError::Decode {
                path: photo.path.clone(),
                source,
            })?;
            let rgb = imaging::crop_to_aspect(&img, aspect).into_rgb8();
            Ok(CroppedPhoto {
                page,
                slot,
                width: rgb.width(),
                height: rgb.height(),
                pixels: rgb.into_raw(),
            })
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    let page_w = Mm(geometry.page_width() as f32);
    let page_h = Mm(geometry.page_height() as f32);
    let page_h_pt = page_h.into_pt().0;
    let columns = config.grid.columns;

    let mut doc = PdfDocument::new(config.title.as_str());
    let mut page_ops: Vec<Vec<Op>> = (0..pages.len()).map(|_| Vec::new()).collect();

    for photo in cropped {
        let row = photo.slot as u32 / columns;
        let col = photo.slot as u32 % columns;
        let rect = geometry.photo_box(row, col, aspect);

        let raw = RawImage {
            pixels: RawImageData::U8(photo.pixels),
            width: photo.width as usize,
            height: photo.height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let id = doc.add_image(&raw);

        // Target rectangle in pt. Layout is top-left origin; PDF is
        // bottom-left, so y flips.
        let x_pt = Mm(rect.x as f32).into_pt().0;
        let w_pt = Mm(rect.width as f32).into_pt().0;
        let h_pt = Mm(rect.height as f32).into_pt().0;
        let y_pt = page_h_pt - Mm(rect.y as f32).into_pt().0 - h_pt;

        // Scale from the image's native size at RENDER_DPI to the box.
        let native_w_pt = photo.width as f32 / RENDER_DPI * 72.0;
        let native_h_pt = photo.height as f32 / RENDER_DPI * 72.0;

        page_ops[photo.page].push(Op::UseXobject {
            id,
            transform: XObjectTransform {
                translate_x: Some(Pt(x_pt)),
                translate_y: Some(Pt(y_pt)),
                scale_x: Some(w_pt / native_w_pt),
                scale_y: Some(h_pt / native_h_pt),
                dpi: Some(RENDER_DPI),
                rotate: None,
            },
        });
    }

    let pdf_pages: Vec<PdfPage> = page_ops
        .into_iter()
        .map(|ops| PdfPage::new(page_w, page_h, ops))
        .collect();
    doc.with_pages(pdf_pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

/// Render the plan and write the document to `output`.
pub fn write_album(
    pages: &[Vec<PhotoEntry>],
    config: &AlbumConfig,
    output: &Path,
) -> Result<(), RenderError> {
    let bytes = render(pages, config)?;
    std::fs::write(output, &bytes)?;
    Ok(())
}

//! Pure grid geometry.
//!
//! All arithmetic for placing photos on a page lives here, with no I/O and
//! no image data. Units are millimeters; the origin is the page's top-left
//! corner with y growing downward (the renderer flips into PDF coordinates).
//!
//! Two steps per photo:
//!
//! 1. [`PageGeometry::cell`] — the grid cell for a row/column, derived from
//!    the page size and outer margins.
//! 2. [`PageGeometry::photo_box`] — the centered rectangle inside that cell
//!    where the cropped photo goes: as wide as the cell's inner area allows
//!    at the crop aspect ratio, clamped to the inner height.

use crate::config::{AlbumConfig, Margins};

/// Axis-aligned rectangle in millimeters, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Grid geometry for one page layout.
///
/// Constructed once per render; `cell` and `photo_box` are then pure
/// lookups.
#[derive(Debug, Clone)]
pub struct PageGeometry {
    page_width: f64,
    page_height: f64,
    rows: u32,
    columns: u32,
    outer: Margins,
    inner: Margins,
}

impl PageGeometry {
    pub fn new(config: &AlbumConfig) -> Self {
        Self {
            page_width: config.page.width_mm,
            page_height: config.page.height_mm,
            rows: config.grid.rows,
            columns: config.grid.columns,
            outer: config.margins.outer.clone(),
            inner: config.margins.inner.clone(),
        }
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Cell width after outer margins are taken off the page.
    fn cell_width(&self) -> f64 {
        let used = self.page_width * (self.outer.left + self.outer.right);
        (self.page_width - used) / self.columns as f64
    }

    /// Cell height after outer margins are taken off the page.
    fn cell_height(&self) -> f64 {
        let used = self.page_height * (self.outer.top + self.outer.bottom);
        (self.page_height - used) / self.rows as f64
    }

    /// The grid cell at `(row, col)`, row-major from the top-left.
    pub fn cell(&self, row: u32, col: u32) -> Rect {
        debug_assert!(row < self.rows && col < self.columns);
        let w = self.cell_width();
        let h = self.cell_height();
        Rect {
            x: self.page_width * self.outer.left + col as f64 * w,
            y: self.page_height * self.outer.top + row as f64 * h,
            width: w,
            height: h,
        }
    }

    /// The centered photo rectangle inside the cell at `(row, col)`.
    ///
    /// The photo fills the cell's inner width at the crop aspect ratio; if
    /// that would overflow the inner height, height wins and width shrinks.
    /// Either way the box is centered in the cell both horizontally and
    /// vertically.
    pub fn photo_box(&self, row: u32, col: u32, aspect: f64) -> Rect {
        let cell = self.cell(row, col);
        let inner_left = cell.width * self.inner.left;
        let inner_right = cell.width * self.inner.right;
        let inner_top = cell.height * self.inner.top;
        let inner_bottom = cell.height * self.inner.bottom;

        let max_width = cell.width - inner_left - inner_right;
        let max_height = cell.height - inner_top - inner_bottom;

        let mut width = max_width;
        let mut height = width / aspect;
        if height > max_height {
            height = max_height;
            width = height * aspect;
        }

        Rect {
            x: cell.x + (cell.width - width) / 2.0,
            y: cell.y + (cell.height - height) / 2.0,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    /// A4 landscape, 2x3 grid, 5% margins everywhere.
    fn geometry() -> PageGeometry {
        PageGeometry::new(&AlbumConfig::default())
    }

    #[test]
    fn cells_tile_the_inner_page() {
        let g = geometry();
        // 297 - 2 * 14.85 = 267.3 across 3 columns; 210 - 2 * 10.5 = 189 across 2 rows
        let cell = g.cell(0, 0);
        assert_close(cell.width, 89.1);
        assert_close(cell.height, 94.5);
        assert_close(cell.x, 14.85);
        assert_close(cell.y, 10.5);
    }

    #[test]
    fn cells_advance_row_major() {
        let g = geometry();
        let c01 = g.cell(0, 1);
        assert_close(c01.x, 14.85 + 89.1);
        assert_close(c01.y, 10.5);

        let c10 = g.cell(1, 0);
        assert_close(c10.x, 14.85);
        assert_close(c10.y, 10.5 + 94.5);
    }

    #[test]
    fn last_cell_ends_at_the_right_margin() {
        let g = geometry();
        let last = g.cell(1, 2);
        assert_close(last.x + last.width, 297.0 - 14.85);
        assert_close(last.y + last.height, 210.0 - 10.5);
    }

    #[test]
    fn square_photo_fills_inner_width() {
        let g = geometry();
        // Inner width: 89.1 - 2 * 4.455 = 80.19; square fits under 85.05
        let b = g.photo_box(0, 0, 1.0);
        assert_close(b.width, 80.19);
        assert_close(b.height, 80.19);
    }

    #[test]
    fn photo_box_is_centered_in_its_cell() {
        let g = geometry();
        let cell = g.cell(0, 0);
        let b = g.photo_box(0, 0, 1.0);
        assert_close(b.x - cell.x, (cell.width - b.width) / 2.0);
        assert_close(b.y - cell.y, (cell.height - b.height) / 2.0);
    }

    #[test]
    fn tall_aspect_clamps_to_inner_height() {
        let g = geometry();
        // Aspect 1:2 wants height 160.38, inner height is 85.05
        let b = g.photo_box(0, 0, 0.5);
        assert_close(b.height, 85.05);
        assert_close(b.width, 42.525);
    }

    #[test]
    fn wide_aspect_keeps_full_inner_width() {
        let g = geometry();
        let b = g.photo_box(0, 0, 3.0);
        assert_close(b.width, 80.19);
        assert_close(b.height, 26.73);
    }

    #[test]
    fn photo_box_preserves_aspect_in_both_branches() {
        let g = geometry();
        for aspect in [0.4, 1.0, 16.0 / 9.0, 3.0] {
            let b = g.photo_box(1, 2, aspect);
            assert_close(b.width / b.height, aspect);
        }
    }

    #[test]
    fn zero_margins_tile_the_whole_page() {
        let mut config = AlbumConfig::default();
        config.margins.outer = Margins {
            top: 0.0,
            bottom: 0.0,
            left: 0.0,
            right: 0.0,
        };
        let g = PageGeometry::new(&config);
        let cell = g.cell(0, 0);
        assert_close(cell.x, 0.0);
        assert_close(cell.width, 99.0);
        assert_close(cell.height, 105.0);
    }
}

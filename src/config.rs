//! Album configuration.
//!
//! Handles loading and validating `album.toml` from the input directory.
//! Every option has a default, so the file is optional and sparse — override
//! just the values you want. CLI flags override file values (the merge lives
//! in `main`).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Contact Sheet"   # PDF title metadata
//! crop_aspect = "1:1"       # Cell aspect ratio: "W:H" or a plain number
//! landscape_only = true     # Drop portrait/square photos
//!
//! [grid]
//! rows = 2                  # Photo rows per page
//! columns = 3               # Photo columns per page
//! pages = 5                 # Maximum number of pages
//!
//! [page]
//! width_mm = 297.0          # A4 landscape
//! height_mm = 210.0
//!
//! [margins.outer]           # Fractions of the page dimension, per side
//! top = 0.05
//! bottom = 0.05
//! left = 0.05
//! right = 0.05
//!
//! [margins.inner]           # Fractions of the cell dimension, per side
//! top = 0.05
//! bottom = 0.05
//! left = 0.05
//! right = 0.05
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Config file name looked up in the input directory.
pub const CONFIG_FILE: &str = "album.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Target aspect ratio for cell cropping.
///
/// Parses both `"16:9"` and plain numeric forms (`"1.5"`), matching what
/// photographers write. Stored as the resolved width/height quotient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "toml::Value", into = "String")]
pub struct AspectRatio(f64);

impl AspectRatio {
    /// The square default.
    pub const SQUARE: AspectRatio = AspectRatio(1.0);

    /// Width divided by height.
    pub fn ratio(self) -> f64 {
        self.0
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((w, h)) = s.split_once(':') {
            let w: u32 = w
                .trim()
                .parse()
                .map_err(|_| format!("invalid aspect ratio '{s}'"))?;
            let h: u32 = h
                .trim()
                .parse()
                .map_err(|_| format!("invalid aspect ratio '{s}'"))?;
            if w == 0 || h == 0 {
                return Err(format!("aspect ratio '{s}' has a zero component"));
            }
            return Ok(AspectRatio(w as f64 / h as f64));
        }
        let value: f64 = s
            .parse()
            .map_err(|_| format!("invalid aspect ratio '{s}'"))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(format!("aspect ratio '{s}' must be a positive number"));
        }
        Ok(AspectRatio(value))
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AspectRatio> for String {
    fn from(a: AspectRatio) -> String {
        a.to_string()
    }
}

// TOML configs may write `crop_aspect = "4:3"` or `crop_aspect = 1.5`.
impl TryFrom<toml::Value> for AspectRatio {
    type Error = String;

    fn try_from(value: toml::Value) -> Result<Self, Self::Error> {
        match value {
            toml::Value::String(s) => s.parse(),
            toml::Value::Float(f) if f.is_finite() && f > 0.0 => Ok(AspectRatio(f)),
            toml::Value::Integer(i) if i > 0 => Ok(AspectRatio(i as f64)),
            other => Err(format!("invalid aspect ratio '{other}'")),
        }
    }
}

/// Album configuration loaded from `album.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlbumConfig {
    /// Title embedded in the PDF metadata.
    pub title: String,
    /// Grid shape and page count.
    pub grid: GridConfig,
    /// Aspect ratio every photo is cropped to.
    pub crop_aspect: AspectRatio,
    /// Output page dimensions in millimeters.
    pub page: PageConfig,
    /// Outer (page) and inner (cell) margin fractions.
    pub margins: MarginConfig,
    /// Keep only landscape-orientation photos.
    pub landscape_only: bool,
}

impl Default for AlbumConfig {
    fn default() -> Self {
        Self {
            title: "Contact Sheet".to_string(),
            grid: GridConfig::default(),
            crop_aspect: AspectRatio::SQUARE,
            page: PageConfig::default(),
            margins: MarginConfig::default(),
            landscape_only: true,
        }
    }
}

/// Grid shape: photos per page and the page budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub rows: u32,
    pub columns: u32,
    pub pages: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 2,
            columns: 3,
            pages: 5,
        }
    }
}

impl GridConfig {
    /// Photos that fit on one page.
    pub fn per_page(&self) -> usize {
        (self.rows * self.columns) as usize
    }

    /// Photos that fit in the whole album.
    pub fn capacity(&self) -> usize {
        self.per_page() * self.pages as usize
    }
}

/// Page dimensions in millimeters. Defaults to A4 landscape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width_mm: 297.0,
            height_mm: 210.0,
        }
    }
}

/// Per-side margin fractions.
///
/// Outer margins are fractions of the page dimension; inner margins are
/// fractions of the cell dimension. Both default to 5% per side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 0.05,
            bottom: 0.05,
            left: 0.05,
            right: 0.05,
        }
    }
}

impl Margins {
    fn sides(&self) -> [(f64, &'static str); 4] {
        [
            (self.top, "top"),
            (self.bottom, "bottom"),
            (self.left, "left"),
            (self.right, "right"),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarginConfig {
    pub outer: Margins,
    pub inner: Margins,
}

impl AlbumConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 || self.grid.columns == 0 || self.grid.pages == 0 {
            return Err(ConfigError::Validation(format!(
                "grid must be at least 1x1x1 (got {} rows, {} columns, {} pages)",
                self.grid.rows, self.grid.columns, self.grid.pages
            )));
        }
        if self.page.width_mm <= 0.0 || self.page.height_mm <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "page dimensions must be positive (got {}x{} mm)",
                self.page.width_mm, self.page.height_mm
            )));
        }
        if self.crop_aspect.ratio() <= 0.0 {
            return Err(ConfigError::Validation(
                "crop aspect ratio must be positive".to_string(),
            ));
        }
        for (margins, kind) in [(&self.margins.outer, "outer"), (&self.margins.inner, "inner")] {
            for (value, side) in margins.sides() {
                if !(0.0..0.5).contains(&value) {
                    return Err(ConfigError::Validation(format!(
                        "{kind} margin {side} must be in [0, 0.5), got {value}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Load the album config for an input directory.
///
/// Reads `album.toml` if present, otherwise returns defaults. The result is
/// validated either way.
pub fn load_config(input_dir: &Path) -> Result<AlbumConfig, ConfigError> {
    let path = input_dir.join(CONFIG_FILE);
    let config = if path.is_file() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        AlbumConfig::default()
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn aspect_ratio_colon_form() {
        let a: AspectRatio = "16:9".parse().unwrap();
        assert!((a.ratio() - 16.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn aspect_ratio_numeric_form() {
        let a: AspectRatio = "1.5".parse().unwrap();
        assert!((a.ratio() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn aspect_ratio_with_whitespace() {
        let a: AspectRatio = " 4 : 3 ".parse().unwrap();
        assert!((a.ratio() - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn aspect_ratio_rejects_zero_component() {
        assert!("3:0".parse::<AspectRatio>().is_err());
        assert!("0:3".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn aspect_ratio_rejects_nonpositive() {
        assert!("0".parse::<AspectRatio>().is_err());
        assert!("-1.5".parse::<AspectRatio>().is_err());
        assert!("banana".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn defaults_match_classic_album() {
        let c = AlbumConfig::default();
        assert_eq!(c.grid.rows, 2);
        assert_eq!(c.grid.columns, 3);
        assert_eq!(c.grid.pages, 5);
        assert_eq!(c.grid.per_page(), 6);
        assert_eq!(c.grid.capacity(), 30);
        assert!(c.landscape_only);
        assert!((c.page.width_mm - 297.0).abs() < 1e-9);
        c.validate().unwrap();
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let c = load_config(tmp.path()).unwrap();
        assert_eq!(c.grid.per_page(), 6);
    }

    #[test]
    fn load_sparse_config_overrides_only_named_keys() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            "crop_aspect = \"4:3\"\n[grid]\nrows = 3\n",
        )
        .unwrap();
        let c = load_config(tmp.path()).unwrap();
        assert_eq!(c.grid.rows, 3);
        assert_eq!(c.grid.columns, 3); // default preserved
        assert!((c.crop_aspect.ratio() - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn load_numeric_aspect_from_toml() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "crop_aspect = 1.5\n").unwrap();
        let c = load_config(tmp.path()).unwrap();
        assert!((c.crop_aspect.ratio() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "colums = 4\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    #[test]
    fn validate_rejects_zero_grid() {
        let mut c = AlbumConfig::default();
        c.grid.rows = 0;
        assert!(matches!(c.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_half_page_margin() {
        let mut c = AlbumConfig::default();
        c.margins.outer.left = 0.5;
        assert!(matches!(c.validate(), Err(ConfigError::Validation(_))));
    }
}

//! Gridfill I/O - Grid loading
//!
//! The input adapter for the segmentation core: decodes a source into a
//! [`Grid`] of cell values, rejecting malformed or unsupported input
//! before any algorithm runs.
//!
//! Supported sources:
//!
//! - **Text** (`.txt`): one row per line, one cell per character
//! - **CSV** (`.csv`): comma-separated single-character cells
//! - **PNG** (`.png`): 8-bit RGB images, cells packed as `0x00RRGGBB`
//!
//! [`read_grid`] dispatches on the file extension; the per-format
//! functions are also exported for callers with in-memory data.

pub mod error;
pub mod png;
pub mod text;

pub use error::{IoError, IoResult};
pub use png::{read_png, read_png_file};
pub use text::{grid_from_csv, grid_from_text, read_csv, read_text};

use gridfill_core::Grid;
use std::path::Path;

/// Grid source format, determined by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridFormat {
    /// Plain text, one character per cell
    Text,
    /// Comma-separated single-character cells
    Csv,
    /// 8-bit RGB PNG image
    Png,
}

impl GridFormat {
    /// Canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Png => "png",
        }
    }

    /// Determine the format from a path's extension (case-insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            "png" => Ok(Self::Png),
            other => Err(IoError::UnsupportedFormat(format!(
                "unknown grid file extension: {:?}",
                other
            ))),
        }
    }
}

/// Read a grid from a file, dispatching on the extension.
pub fn read_grid<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    match GridFormat::from_path(&path)? {
        GridFormat::Text => read_text(path),
        GridFormat::Csv => read_csv(path),
        GridFormat::Png => read_png_file(path),
    }
}

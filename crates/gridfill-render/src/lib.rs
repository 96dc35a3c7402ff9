//! Gridfill Render - Terminal output for grids and segmentations
//!
//! Rendering consumers for the segmentation core:
//!
//! - [`ansi`] - truecolor terminal painting of color grids
//! - [`charmap`] - plain-text symbol rendering (one char per color)
//! - [`gradient`] - gradient colors and progress bars
//!
//! The renderer owns the historical terminal size caps
//! ([`ansi::MAX_RENDER_WIDTH`], [`ansi::MAX_RENDER_HEIGHT`]); the
//! segmentation core itself accepts grids of any in-memory size.

pub mod ansi;
pub mod charmap;
pub mod error;
pub mod gradient;

pub use ansi::{RESET, RenderOptions, back_rgb, color_string, fore_rgb, render_color};
pub use charmap::{CharMap, render_chars, substitute};
pub use error::{RenderError, RenderResult};
pub use gradient::{BAR_CHARS, BarOptions, NamedColor, gradient_bar, gradient_color};

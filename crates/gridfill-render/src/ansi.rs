//! ANSI truecolor grid rendering
//!
//! Paints each cell as a run of background-colored spaces using 24-bit
//! SGR escape sequences. Escape codes are emitted only when the color
//! changes along a row, so uniform areas stay compact.
//!
//! The size caps here are a property of this renderer (one terminal row
//! per grid row), not of the segmentation core: the historical terminal
//! budget is 179 columns by 28 rows.

use crate::error::{RenderError, RenderResult};
use gridfill_core::{Grid, color};

/// Reset all SGR attributes.
pub const RESET: &str = "\x1b[0m";

/// Rendered width budget: `width * multiplexer` must stay below this.
pub const MAX_RENDER_WIDTH: u32 = 179;

/// Rendered height budget: grid height must stay below this.
pub const MAX_RENDER_HEIGHT: u32 = 28;

/// Escape sequence selecting a 24-bit foreground color.
pub fn fore_rgb(packed: u32) -> String {
    let (r, g, b) = color::unpack_rgb(packed);
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Escape sequence selecting a 24-bit background color.
pub fn back_rgb(packed: u32) -> String {
    let (r, g, b) = color::unpack_rgb(packed);
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

/// Wrap a string in a foreground color and a reset.
pub fn color_string(s: &str, packed: u32) -> String {
    format!("{}{}{}", fore_rgb(packed), s, RESET)
}

/// Options for [`render_color`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Spaces emitted per cell; 2 keeps cells roughly square in most
    /// terminal fonts
    pub multiplexer: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { multiplexer: 2 }
    }
}

impl RenderOptions {
    /// Set the number of spaces per cell.
    pub fn with_multiplexer(mut self, multiplexer: u32) -> Self {
        self.multiplexer = multiplexer;
        self
    }
}

/// Render a grid of packed colors as ANSI-colored terminal rows.
///
/// Each row ends with a reset and a newline, so partial output never
/// leaks a background color into subsequent terminal lines.
///
/// # Errors
///
/// Returns [`RenderError::TooWide`] / [`RenderError::TooTall`] when the
/// grid exceeds the terminal budget.
pub fn render_color(grid: &Grid, options: &RenderOptions) -> RenderResult<String> {
    let width = grid.width();
    let height = grid.height();

    if width * options.multiplexer >= MAX_RENDER_WIDTH {
        return Err(RenderError::TooWide {
            width,
            multiplexer: options.multiplexer,
            max: MAX_RENDER_WIDTH,
        });
    }
    if height >= MAX_RENDER_HEIGHT {
        return Err(RenderError::TooTall {
            height,
            max: MAX_RENDER_HEIGHT,
        });
    }

    let blank = " ".repeat(options.multiplexer as usize);
    let mut out = String::new();

    for row in grid.rows() {
        let mut old_color: Option<u32> = None;
        for &cell in row {
            if old_color != Some(cell) {
                out.push_str(&back_rgb(cell));
                old_color = Some(cell);
            }
            out.push_str(&blank);
        }
        out.push_str(RESET);
        out.push('\n');
    }

    Ok(out)
}

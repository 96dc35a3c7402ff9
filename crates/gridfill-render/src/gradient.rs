//! Gradient colors and progress bars
//!
//! Linear interpolation between two packed colors, and the colored
//! terminal progress bars built on it.

use crate::ansi::{RESET, back_rgb, fore_rgb};
use gridfill_core::color;

/// A small palette of named packed colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum NamedColor {
    Red = 0xff0000,
    Green = 0x00ff00,
    Blue = 0x0000ff,
    White = 0xffffff,
    Yellow = 0xffff00,
    Magenta = 0xff00ff,
    Black = 0x000000,
    Grey = 0x808080,
}

impl NamedColor {
    /// The packed color value.
    #[inline]
    pub fn packed(self) -> u32 {
        self as u32
    }
}

/// Symbols suitable for drawing bars, roughly ordered by visual weight.
pub const BAR_CHARS: &str = " ▮▬■⌍—…⁙⇶▥▨▭▣▦▩▮▤▧▰⋯※⁕⁘→⇨⇒⇛·∘∞▪◎◯▮●◍◉◯≡≣▶⫸";

/// Interpolate between two packed colors.
///
/// `fraction` 0.0 yields `from`, 1.0 yields `to`; each channel is
/// rounded independently.
pub fn gradient_color(from: u32, to: u32, fraction: f32) -> u32 {
    let (fr, fg, fb) = color::unpack_rgb(from);
    let (tr, tg, tb) = color::unpack_rgb(to);

    let mix = |a: u8, b: u8| -> u8 {
        (a as f32 + (b as f32 - a as f32) * fraction).round() as u8
    };

    color::pack_rgb(mix(fr, tr), mix(fg, tg), mix(fb, tb))
}

/// Options for [`gradient_bar`].
#[derive(Debug, Clone)]
pub struct BarOptions {
    /// Bar symbol; a space paints the background instead of the glyph
    pub symbol: char,
    /// Gradient start color
    pub from: u32,
    /// Gradient end color
    pub to: u32,
    /// Bar width in symbols at 100%
    pub width: u32,
    /// Color each step along the gradient; otherwise the whole bar takes
    /// the single color at `fraction`
    pub rainbow: bool,
    /// Append the percentage after the bar
    pub percent: bool,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            symbol: ' ',
            from: NamedColor::Red.packed(),
            to: NamedColor::Green.packed(),
            width: 30,
            rainbow: true,
            percent: true,
        }
    }
}

/// Render a gradient progress bar at `fraction` (0.0 to 1.0) completion.
///
/// Ends with a reset so the bar never bleeds color into following text.
pub fn gradient_bar(fraction: f32, options: &BarOptions) -> String {
    // Space draws with the background color, glyphs with the foreground
    let paint: fn(u32) -> String = if options.symbol == ' ' {
        back_rgb
    } else {
        fore_rgb
    };

    let steps = (options.width as f32 * fraction).round() as u32;
    let mut out = String::new();

    if options.rainbow {
        for w in 0..steps {
            let c = gradient_color(options.from, options.to, w as f32 / options.width as f32);
            out.push_str(&paint(c));
            out.push(options.symbol);
        }
    } else {
        out.push_str(&paint(gradient_color(options.from, options.to, fraction)));
        for _ in 0..steps {
            out.push(options.symbol);
        }
    }

    out.push_str(RESET);
    if options.percent {
        out.push_str(&format!(" {:.0}%", fraction * 100.0));
    }
    out
}

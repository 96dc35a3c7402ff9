//! Gridfill Core - Basic data structures for grid segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the gridfill library:
//!
//! - [`Grid`] - Immutable rectangular array of cell values
//! - [`Coord`] / [`Bounds`] - Cell positions and bounding rectangles
//! - [`color`] - Packed-RGB helpers
//!
//! Cell values are `u32`; for images they are packed RGB colors, but the
//! segmentation algorithms only require equality comparison.

pub mod coord;
pub mod error;
pub mod grid;

pub use coord::{Bounds, Coord};
pub use error::{Error, Result};
pub use grid::Grid;

/// Packed-RGB helper functions and channel constants.
///
/// # Cell format
///
/// Color cells are stored as `0x00RRGGBB` (red in the high byte of the
/// low 24 bits). The exact layout is an internal choice; callers should
/// rely only on equality and the `pack_rgb(unpack_rgb(c)) == c`
/// round-trip.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Extract the red component from a packed color.
    #[inline]
    pub fn red(packed: u32) -> u8 {
        ((packed >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract the green component from a packed color.
    #[inline]
    pub fn green(packed: u32) -> u8 {
        ((packed >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract the blue component from a packed color.
    #[inline]
    pub fn blue(packed: u32) -> u8 {
        ((packed >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Pack RGB channel values into a single color.
    #[inline]
    pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT)
    }

    /// Unpack a color into its RGB channel values.
    #[inline]
    pub fn unpack_rgb(packed: u32) -> (u8, u8, u8) {
        (red(packed), green(packed), blue(packed))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_pack_unpack_roundtrip() {
            for &c in &[0x000000u32, 0xffffff, 0xff0000, 0x00ff00, 0x0000ff, 0x1dccc0] {
                let (r, g, b) = unpack_rgb(c);
                assert_eq!(pack_rgb(r, g, b), c);
            }
        }

        #[test]
        fn test_channels() {
            let c = pack_rgb(0x12, 0x34, 0x56);
            assert_eq!(c, 0x123456);
            assert_eq!(red(c), 0x12);
            assert_eq!(green(c), 0x34);
            assert_eq!(blue(c), 0x56);
        }

        #[test]
        fn test_unpack_ignores_high_byte() {
            let (r, g, b) = unpack_rgb(0xff123456);
            assert_eq!((r, g, b), (0x12, 0x34, 0x56));
        }
    }
}

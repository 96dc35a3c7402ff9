//! Gridfill - Flood-fill region segmentation for 2-D color grids
//!
//! Gridfill partitions a rectangular grid of discrete colors into maximal
//! 4-connected regions of non-background cells, after inferring the
//! background as the grid's most frequent color.
//!
//! # Overview
//!
//! - Grid loading from text, CSV, and 8-bit RGB PNG sources
//! - Background color inference with a fixed, deterministic tie-break
//! - Iterative (stack-based) flood-fill segmentation with deterministic
//!   region numbering
//! - Terminal rendering: ANSI truecolor grids, symbol maps, gradient bars
//!
//! # Example
//!
//! ```
//! use gridfill::{Grid, region};
//!
//! let grid = Grid::from_rows(&[
//!     vec![0, 0, 0],
//!     vec![0, 1, 0],
//!     vec![0, 0, 0],
//! ])
//! .unwrap();
//!
//! let seg = region::segment_auto(&grid).unwrap();
//! assert_eq!(seg.background, 0);
//! assert_eq!(seg.regions.len(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use gridfill_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use gridfill_io as io;
pub use gridfill_region as region;
pub use gridfill_render as render;

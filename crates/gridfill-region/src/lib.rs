//! Gridfill Region - Background classification and region segmentation
//!
//! The two components of the segmentation core, consumed leaf-first:
//!
//! 1. [`compute_background`] - infer the grid's background color (its
//!    most frequent cell value)
//! 2. [`segment`] - partition all non-background cells into maximal
//!    4-connected regions with an iterative flood fill
//!
//! [`segment_auto`] chains the two. The algorithms are single-threaded
//! and synchronous; every run owns its visited set and work stack
//! exclusively, so independent grids can be segmented concurrently from
//! separate calls.

pub mod background;
pub mod error;
pub mod segment;

pub use background::{compute_background, count_distinct_colors};
pub use error::{RegionError, RegionResult};
pub use segment::{FIRST_REGION_ID, Region, Segmentation, segment, segment_auto};

//! Error types for gridfill-core
//!
//! Provides a unified error type for grid construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Gridfill error type
#[derive(Error, Debug)]
pub enum Error {
    /// Grid has zero width or height
    #[error("empty grid: {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    /// Rows of unequal length
    #[error("malformed grid: row {row} has length {len}, expected {expected}")]
    MalformedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Coordinate outside the grid bounds
    #[error("coordinate out of range: ({x}, {y}) in {width}x{height} grid")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for gridfill operations
pub type Result<T> = std::result::Result<T, Error>;

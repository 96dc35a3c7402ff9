//! Error types for gridfill-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gridfill_core::Error),

    /// Grid has no cells to process
    #[error("empty grid: no cells to process")]
    EmptyGrid,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

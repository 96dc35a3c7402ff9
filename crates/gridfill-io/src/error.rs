//! I/O error types
//!
//! Provides a unified error type for all grid loading operations.
//! Each format-specific module maps its underlying errors into
//! `IoError` variants so that callers only need to handle one type.

use thiserror::Error;

/// Error type for grid loading operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source format is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The source data is structurally invalid
    #[error("invalid grid data: {0}")]
    InvalidData(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An error from the core library (empty or jagged grid)
    #[error("core error: {0}")]
    Core(#[from] gridfill_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

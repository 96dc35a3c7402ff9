//! Error types for gridfill-render

use thiserror::Error;

/// Errors that can occur while rendering grids
#[derive(Debug, Error)]
pub enum RenderError {
    /// Rendered width would exceed the terminal budget
    #[error("grid too wide to render: {width} cells x {multiplexer} >= {max} columns")]
    TooWide {
        width: u32,
        multiplexer: u32,
        max: u32,
    },

    /// Rendered height would exceed the terminal budget
    #[error("grid too tall to render: {height} rows >= {max}")]
    TooTall { height: u32, max: u32 },

    /// More distinct colors than available symbols
    #[error("too many distinct colors: limit is {max}")]
    TooManyColors { max: usize },

    /// A cell color missing from the character map
    #[error("color {color:#08x} not present in the character map")]
    MissingColor { color: u32 },

    /// A symbol missing from a substitution table
    #[error("no substitution for symbol {symbol:?}")]
    UnknownSymbol { symbol: char },
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

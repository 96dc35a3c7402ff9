//! Plain-text and CSV grid formats
//!
//! The text format is one row per line, one cell per character, with no
//! separators. The CSV format separates single-character cells with
//! commas. In both, a cell's value is the character's Unicode scalar
//! value; the segmentation core only compares cells for equality, so any
//! injective encoding works.

use crate::error::{IoError, IoResult};
use gridfill_core::Grid;
use std::fs;
use std::path::Path;

/// Parse a grid from text, one row per line and one cell per character.
///
/// Trailing newlines are ignored. Jagged or empty input is rejected
/// before any cell is produced.
pub fn grid_from_text(text: &str) -> IoResult<Grid> {
    let rows: Vec<Vec<u32>> = text
        .lines()
        .map(|line| line.chars().map(|ch| ch as u32).collect())
        .collect();

    Ok(Grid::from_rows(&rows)?)
}

/// Read a text-format grid from a file.
pub fn read_text<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let text = fs::read_to_string(path)?;
    grid_from_text(&text)
}

/// Parse a grid from CSV text: comma-separated single-character cells.
pub fn grid_from_csv(text: &str) -> IoResult<Grid> {
    let mut rows: Vec<Vec<u32>> = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        for field in line.split(',') {
            let field = field.trim();
            let mut chars = field.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => row.push(ch as u32),
                _ => {
                    return Err(IoError::InvalidData(format!(
                        "row {}: cell {:?} is not a single character",
                        i, field
                    )));
                }
            }
        }
        rows.push(row);
    }

    Ok(Grid::from_rows(&rows)?)
}

/// Read a CSV-format grid from a file.
pub fn read_csv<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let text = fs::read_to_string(path)?;
    grid_from_csv(&text)
}

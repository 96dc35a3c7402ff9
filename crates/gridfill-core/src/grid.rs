//! Grid - The rectangular cell array
//!
//! `Grid` is the fundamental container of this library: an immutable
//! width x height array of `u32` cell values in row-major order. Cell
//! values are typically packed RGB colors (see [`crate::color`]) but any
//! comparable discrete value works.
//!
//! # Ownership model
//!
//! `Grid` uses `Arc` for efficient cloning (shared ownership). A grid is
//! never mutated after construction; validation happens once, up front,
//! so downstream algorithms can assume a rectangular, non-empty array.

use crate::coord::Coord;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal grid data
#[derive(Debug)]
struct GridData {
    /// Width in cells
    width: u32,
    /// Height in cells
    height: u32,
    /// Cell values, row-major, length = width * height
    cells: Vec<u32>,
}

/// Immutable rectangular array of cell values.
///
/// # Examples
///
/// ```
/// use gridfill_core::Grid;
///
/// let grid = Grid::from_rows(&[vec![0, 0, 0], vec![0, 1, 0]]).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get(1, 1), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    inner: Arc<GridData>,
}

impl Grid {
    /// Create a grid filled with a single value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if `width` or `height` is 0.
    pub fn filled(width: u32, height: u32, value: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid { width, height });
        }

        let cells = vec![value; (width as usize) * (height as usize)];
        Ok(Self {
            inner: Arc::new(GridData {
                width,
                height,
                cells,
            }),
        })
    }

    /// Create a grid from rows of cell values.
    ///
    /// Every row must have the same length. Validation happens here, once:
    /// a malformed (jagged or empty) input is rejected before any consumer
    /// can partially process it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if there are no rows or the first row
    /// is empty, and [`Error::MalformedGrid`] if any row's length differs
    /// from the first row's.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid {
                width: width as u32,
                height: height as u32,
            });
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::MalformedGrid {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
        }

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            cells.extend_from_slice(row);
        }

        Ok(Self {
            inner: Arc::new(GridData {
                width: width as u32,
                height: height as u32,
                cells,
            }),
        })
    }

    /// Create a grid from a flat row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if `width` or `height` is 0, and
    /// [`Error::MalformedGrid`] if `cells.len() != width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(Error::MalformedGrid {
                row: cells.len() / (width as usize),
                len: cells.len() % (width as usize),
                expected: width as usize,
            });
        }

        Ok(Self {
            inner: Arc::new(GridData {
                width,
                height,
                cells,
            }),
        })
    }

    /// Get the grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Total number of cells (width * height).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.cells.len()
    }

    /// Always false: a `Grid` cannot be constructed empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.cells.is_empty()
    }

    /// Get a cell value at (x, y).
    ///
    /// Returns `None` if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_unchecked(x, y))
    }

    /// Get a cell value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.cells[(y as usize) * (self.inner.width as usize) + (x as usize)]
    }

    /// Get a cell value at a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the coordinate is out of bounds.
    pub fn cell(&self, c: Coord) -> Result<u32> {
        self.get(c.x, c.y).ok_or(Error::OutOfRange {
            x: c.x,
            y: c.y,
            width: self.inner.width,
            height: self.inner.height,
        })
    }

    /// The cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = (y as usize) * w;
        &self.inner.cells[start..start + w]
    }

    /// Iterate over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        (0..self.inner.height).map(|y| self.row(y))
    }

    /// Iterate over all coordinates in row-major order (outer y, inner x).
    ///
    /// This is the canonical scan order of the library; region numbering
    /// depends on it.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let (w, h) = (self.inner.width, self.inner.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Coord { x, y }))
    }

    /// Flat row-major view of all cells.
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.inner.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(2, 1), Some(6));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_from_rows_jagged() {
        let err = Grid::from_rows(&[vec![1, 2, 3], vec![4, 5]]).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedGrid {
                row: 1,
                len: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(matches!(
            Grid::from_rows(&[]).unwrap_err(),
            Error::EmptyGrid { .. }
        ));
        assert!(matches!(
            Grid::from_rows(&[vec![]]).unwrap_err(),
            Error::EmptyGrid { .. }
        ));
    }

    #[test]
    fn test_filled() {
        let grid = Grid::filled(4, 3, 7).unwrap();
        assert!(grid.cells().iter().all(|&c| c == 7));
        assert!(Grid::filled(0, 3, 7).is_err());
        assert!(Grid::filled(4, 0, 7).is_err());
    }

    #[test]
    fn test_from_cells_length_mismatch() {
        assert!(Grid::from_cells(2, 2, vec![1, 2, 3]).is_err());
        assert!(Grid::from_cells(2, 2, vec![1, 2, 3, 4]).is_ok());
    }

    #[test]
    fn test_cell_out_of_range() {
        let grid = Grid::filled(2, 2, 0).unwrap();
        let err = grid.cell(Coord::new(2, 0)).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { x: 2, y: 0, .. }));
    }

    #[test]
    fn test_coords_row_major() {
        let grid = Grid::filled(2, 2, 0).unwrap();
        let order: Vec<(u32, u32)> = grid.coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_rows() {
        let grid = Grid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let rows: Vec<&[u32]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }
}

//! Background color classification
//!
//! The background of a grid is defined as its most frequent cell value.
//! Segmentation treats that value as "empty space"; everything else
//! belongs to some region.

use crate::error::{RegionError, RegionResult};
use gridfill_core::Grid;
use std::collections::HashMap;

/// Determine the background color of a grid.
///
/// Counts occurrences of each distinct cell value over a row-major scan
/// and returns the value with the strictly highest count. When several
/// values share the maximum count, the lowest packed value wins; the
/// tie-break is fixed so that repeated runs over the same grid always
/// classify the same background.
///
/// Pure function of the grid contents: O(width * height) time,
/// O(distinct values) auxiliary space.
///
/// # Errors
///
/// Returns [`RegionError::EmptyGrid`] if the grid has zero width or
/// height. `Grid` construction already rejects that case, so this is a
/// precondition re-check.
///
/// # Examples
///
/// ```
/// use gridfill_core::Grid;
/// use gridfill_region::compute_background;
///
/// let grid = Grid::from_rows(&[vec![0, 0, 0], vec![0, 5, 0]]).unwrap();
/// assert_eq!(compute_background(&grid).unwrap(), 0);
/// ```
pub fn compute_background(grid: &Grid) -> RegionResult<u32> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(RegionError::EmptyGrid);
    }

    let mut census: HashMap<u32, u64> = HashMap::new();
    for &cell in grid.cells() {
        *census.entry(cell).or_insert(0) += 1;
    }

    // Selection is independent of HashMap iteration order: highest count
    // wins, ties broken toward the lowest value.
    let mut best: Option<(u32, u64)> = None;
    for (&value, &count) in &census {
        match best {
            None => best = Some((value, count)),
            Some((best_value, best_count)) => {
                if count > best_count || (count == best_count && value < best_value) {
                    best = Some((value, count));
                }
            }
        }
    }

    // census is non-empty whenever the grid is
    Ok(best.map(|(value, _)| value).unwrap_or_default())
}

/// Count the number of distinct cell values in a grid.
pub fn count_distinct_colors(grid: &Grid) -> usize {
    let mut seen: std::collections::HashSet<u32> = std::collections::HashSet::new();
    seen.extend(grid.cells().iter().copied());
    seen.len()
}

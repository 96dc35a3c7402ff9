//! gridfill-test - Shared fixtures for gridfill tests
//!
//! Provides grid builders and property checkers used by the workspace's
//! integration tests:
//!
//! - [`grid_of_digits`] builds a grid from ASCII art, one hex digit per
//!   cell, so test layouts read the same as they look
//! - [`check_partition`] verifies that a segmentation result covers every
//!   cell of its grid exactly once
//!
//! # Usage
//!
//! ```
//! use gridfill_test::grid_of_digits;
//!
//! let grid = grid_of_digits(
//!     "000\n\
//!      010\n\
//!      000",
//! );
//! assert_eq!(grid.get(1, 1), Some(1));
//! ```

use gridfill_core::{Coord, Grid};
use std::collections::HashSet;

/// Build a grid from ASCII art.
///
/// Each line is a row; each character is one cell, interpreted as a hex
/// digit (`0`-`9`, `a`-`f`). Leading/trailing whitespace on a line is
/// trimmed so indented raw strings work.
///
/// # Panics
///
/// Panics on non-hex characters, jagged rows, or empty input. This is a
/// test fixture; malformed art is a bug in the test itself.
pub fn grid_of_digits(art: &str) -> Grid {
    let rows: Vec<Vec<u32>> = art
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.chars()
                .map(|ch| {
                    ch.to_digit(16)
                        .unwrap_or_else(|| panic!("not a hex digit: {:?}", ch))
                })
                .collect()
        })
        .collect();

    Grid::from_rows(&rows).expect("malformed test grid")
}

/// Verify the partition property of a segmentation result.
///
/// Every grid coordinate must appear exactly once: either in exactly one
/// region's cell list, or as a background-colored cell belonging to no
/// region. Returns an error message describing the first violation.
pub fn check_partition<'a, I>(grid: &Grid, background: u32, region_cells: I) -> Result<(), String>
where
    I: IntoIterator<Item = &'a Coord>,
{
    let mut seen: HashSet<Coord> = HashSet::new();

    for &c in region_cells {
        if grid.get(c.x, c.y).is_none() {
            return Err(format!("region cell ({}, {}) is outside the grid", c.x, c.y));
        }
        if grid.get_unchecked(c.x, c.y) == background {
            return Err(format!(
                "region cell ({}, {}) has the background color",
                c.x, c.y
            ));
        }
        if !seen.insert(c) {
            return Err(format!("cell ({}, {}) appears in two regions", c.x, c.y));
        }
    }

    for c in grid.coords() {
        let is_background = grid.get_unchecked(c.x, c.y) == background;
        match (is_background, seen.contains(&c)) {
            (false, false) => {
                return Err(format!(
                    "non-background cell ({}, {}) missing from all regions",
                    c.x, c.y
                ));
            }
            (true, true) => {
                return Err(format!(
                    "background cell ({}, {}) claimed by a region",
                    c.x, c.y
                ));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Verify that every cell of a region is reachable from its first cell
/// through 4-connected steps inside the region.
pub fn check_connectivity(cells: &[Coord]) -> Result<(), String> {
    let Some(&start) = cells.first() else {
        return Err("region has no cells".to_string());
    };

    let members: HashSet<Coord> = cells.iter().copied().collect();
    let mut reached: HashSet<Coord> = HashSet::new();
    let mut stack = vec![start];
    reached.insert(start);

    while let Some(c) = stack.pop() {
        let mut push = |n: Coord| {
            if members.contains(&n) && reached.insert(n) {
                stack.push(n);
            }
        };
        if c.x > 0 {
            push(Coord::new(c.x - 1, c.y));
        }
        push(Coord::new(c.x + 1, c.y));
        if c.y > 0 {
            push(Coord::new(c.x, c.y - 1));
        }
        push(Coord::new(c.x, c.y + 1));
    }

    if reached.len() != members.len() {
        return Err(format!(
            "region is disconnected: {} of {} cells reachable",
            reached.len(),
            members.len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_of_digits() {
        let grid = grid_of_digits("12\nab");
        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(1, 0), Some(2));
        assert_eq!(grid.get(0, 1), Some(10));
        assert_eq!(grid.get(1, 1), Some(11));
    }

    #[test]
    #[should_panic(expected = "not a hex digit")]
    fn test_grid_of_digits_rejects_non_hex() {
        grid_of_digits("1z");
    }

    #[test]
    fn test_check_connectivity_detects_split() {
        let connected = [Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)];
        assert!(check_connectivity(&connected).is_ok());

        let split = [Coord::new(0, 0), Coord::new(2, 0)];
        assert!(check_connectivity(&split).is_err());
    }

    #[test]
    fn test_check_partition() {
        let grid = grid_of_digits("010\n000");
        let cells = [Coord::new(1, 0)];
        assert!(check_partition(&grid, 0, cells.iter()).is_ok());
        // Claiming a background cell must fail
        let wrong = [Coord::new(0, 0)];
        assert!(check_partition(&grid, 0, wrong.iter()).is_err());
        // Omitting the non-background cell must fail
        let none: [Coord; 0] = [];
        assert!(check_partition(&grid, 0, none.iter()).is_err());
    }
}

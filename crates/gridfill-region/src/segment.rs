//! Flood-fill region segmentation
//!
//! Partitions all non-background cells of a grid into maximal 4-connected
//! regions. The traversal is iterative (explicit LIFO work stack); depth
//! of recursion never depends on region size.
//!
//! # Visited policy
//!
//! A cell is marked visited at the moment it is classified: background
//! cells when first examined, region cells immediately before they are
//! pushed onto the work stack. The stack therefore never holds duplicate
//! entries and every cell is appended to exactly one region.
//!
//! # Ordering contract
//!
//! The outer scan is row-major (outer loop over y, inner over x) and
//! neighbors are examined left, right, up, down. Region ids are assigned
//! in the order their seed cell is discovered by the scan, starting at
//! [`FIRST_REGION_ID`]. Consumers may rely on this ordering.

use crate::background::compute_background;
use crate::error::{RegionError, RegionResult};
use gridfill_core::{Bounds, Coord, Grid};
use std::collections::BTreeMap;

/// Id of the first region discovered by the scan.
///
/// Region ids are sequential; 0 is reserved for "background" in any
/// labeling a consumer may build from the result.
pub const FIRST_REGION_ID: u32 = 1;

/// A maximal 4-connected set of same-classified (non-background) cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Sequential id, assigned in seed-discovery order
    pub id: u32,
    /// The non-background color that seeded this region
    pub color: u32,
    /// Member coordinates, in the order the fill visited them
    pub cells: Vec<Coord>,
}

impl Region {
    /// Number of cells in the region.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A region produced by [`segment`] always has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Tight bounding rectangle of the region.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of_cells(&self.cells)
    }
}

/// Complete result of segmenting one grid: the inferred background color
/// and the region map.
///
/// This is the data-exchange shape consumed by renderers and other
/// downstream components; it carries no rendering-specific state.
#[derive(Debug, Clone)]
pub struct Segmentation {
    /// The color classified as background
    pub background: u32,
    /// Regions keyed by id, in ascending id order
    pub regions: BTreeMap<u32, Region>,
}

/// Per-run traversal state: the visited set and the work stack.
///
/// Owned by a single segmentation call; nothing is shared across runs.
struct ScanState {
    width: u32,
    visited: Vec<bool>,
    stack: Vec<Coord>,
}

impl ScanState {
    fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            visited: vec![false; grid.len()],
            stack: Vec::new(),
        }
    }

    #[inline]
    fn index(&self, c: Coord) -> usize {
        (c.y as usize) * (self.width as usize) + (c.x as usize)
    }

    #[inline]
    fn is_visited(&self, c: Coord) -> bool {
        self.visited[self.index(c)]
    }

    #[inline]
    fn mark(&mut self, c: Coord) {
        let i = self.index(c);
        self.visited[i] = true;
    }
}

/// Partition all non-background cells of a grid into 4-connected regions.
///
/// Scans the grid in row-major order. Each cell not matching `background`
/// that has not yet been classified seeds a new region, which is grown by
/// an iterative flood fill over 4-connected non-background neighbors.
///
/// Guarantees on the result:
///
/// - regions are disjoint, and their cells plus the background cells
///   cover the grid exactly once;
/// - each region contains every cell reachable from its seed through
///   4-connected non-background cells, and nothing else;
/// - ids are sequential from [`FIRST_REGION_ID`] in seed-discovery order,
///   and cell order within a region is deterministic.
///
/// # Errors
///
/// Returns [`RegionError::EmptyGrid`] if the grid has zero width or
/// height. Once the inputs are valid the scan itself cannot fail.
pub fn segment(grid: &Grid, background: u32) -> RegionResult<BTreeMap<u32, Region>> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(RegionError::EmptyGrid);
    }

    let width = grid.width();
    let height = grid.height();
    let mut state = ScanState::new(grid);
    let mut regions: BTreeMap<u32, Region> = BTreeMap::new();
    let mut next_id = FIRST_REGION_ID;

    for y in 0..height {
        for x in 0..width {
            let seed = Coord::new(x, y);
            if state.is_visited(seed) {
                continue;
            }
            state.mark(seed);

            let color = grid.get_unchecked(x, y);
            if color == background {
                continue;
            }

            let id = next_id;
            next_id += 1;
            state.stack.push(seed);
            let mut cells = Vec::new();

            while let Some(c) = state.stack.pop() {
                cells.push(c);

                // Neighbor order: left, right, up, down
                let mut neighbors = [None; 4];
                if c.x > 0 {
                    neighbors[0] = Some(Coord::new(c.x - 1, c.y));
                }
                if c.x + 1 < width {
                    neighbors[1] = Some(Coord::new(c.x + 1, c.y));
                }
                if c.y > 0 {
                    neighbors[2] = Some(Coord::new(c.x, c.y - 1));
                }
                if c.y + 1 < height {
                    neighbors[3] = Some(Coord::new(c.x, c.y + 1));
                }

                for n in neighbors.into_iter().flatten() {
                    if state.is_visited(n) {
                        continue;
                    }
                    // Classify now, so the stack never sees this cell twice
                    state.mark(n);
                    if grid.get_unchecked(n.x, n.y) != background {
                        state.stack.push(n);
                    }
                }
            }

            regions.insert(id, Region { id, color, cells });
        }
    }

    debug_assert!(state.visited.iter().all(|&v| v));

    Ok(regions)
}

/// Infer the background color of a grid, then segment it.
///
/// Equivalent to [`compute_background`] followed by [`segment`] with the
/// inferred color.
pub fn segment_auto(grid: &Grid) -> RegionResult<Segmentation> {
    let background = compute_background(grid)?;
    let regions = segment(grid, background)?;
    Ok(Segmentation {
        background,
        regions,
    })
}

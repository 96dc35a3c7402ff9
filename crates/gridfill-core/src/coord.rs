//! Grid coordinates and bounding rectangles

/// A cell position in a grid.
///
/// `(0, 0)` is the top-left cell; `x` grows rightward, `y` downward.
/// Valid coordinates satisfy `x < width` and `y < height` for the grid
/// they refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    /// Create a coordinate.
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Coord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding rectangle in grid coordinates.
///
/// `w` and `h` are always >= 1 for a rectangle produced from a non-empty
/// set of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in cells
    pub w: u32,
    /// Height in cells
    pub h: u32,
}

impl Bounds {
    /// Compute the tight bounding rectangle of a non-empty set of cells.
    ///
    /// Returns `None` for an empty slice.
    pub fn of_cells(cells: &[Coord]) -> Option<Self> {
        let first = cells.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) =
            (first.x, first.y, first.x, first.y);

        for c in &cells[1..] {
            min_x = min_x.min(c.x);
            min_y = min_y.min(c.y);
            max_x = max_x.max(c.x);
            max_y = max_y.max(c.y);
        }

        Some(Self {
            x: min_x,
            y: min_y,
            w: max_x - min_x + 1,
            h: max_y - min_y + 1,
        })
    }

    /// Check whether a coordinate lies inside the rectangle.
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= self.x && c.x < self.x + self.w && c.y >= self.y && c.y < self.y + self.h
    }
}

//! Character-map grid rendering
//!
//! Encodes each distinct color of a grid as a single symbol from a
//! 16-entry alphabet, assigned in first-encountered row-major order.
//! Useful for plain-text diffs and fixtures where ANSI color is
//! unavailable.

use crate::error::{RenderError, RenderResult};
use gridfill_core::Grid;
use std::collections::HashMap;

/// Symbols assigned to distinct colors, in order of first appearance.
pub const SYMBOLS: &str = "0123456789abcdef";

/// Mapping between packed colors and their assigned symbols.
#[derive(Debug, Clone, Default)]
pub struct CharMap {
    /// (color, symbol) in assignment order
    entries: Vec<(u32, char)>,
}

impl CharMap {
    /// Build a map from a grid, assigning symbols to colors in
    /// first-encountered row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TooManyColors`] if the grid holds more than
    /// 16 distinct colors.
    pub fn of_grid(grid: &Grid) -> RenderResult<Self> {
        let mut entries: Vec<(u32, char)> = Vec::new();
        let mut symbols = SYMBOLS.chars();

        for &cell in grid.cells() {
            if entries.iter().any(|&(c, _)| c == cell) {
                continue;
            }
            let Some(symbol) = symbols.next() else {
                return Err(RenderError::TooManyColors {
                    max: SYMBOLS.chars().count(),
                });
            };
            entries.push((cell, symbol));
        }

        Ok(Self { entries })
    }

    /// The symbol assigned to a color.
    pub fn symbol(&self, color: u32) -> Option<char> {
        self.entries
            .iter()
            .find(|&&(c, _)| c == color)
            .map(|&(_, s)| s)
    }

    /// The color a symbol was assigned to.
    pub fn color(&self, symbol: char) -> Option<u32> {
        self.entries
            .iter()
            .find(|&&(_, s)| s == symbol)
            .map(|&(c, _)| c)
    }

    /// Number of mapped colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render a grid as symbol rows using this map.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingColor`] if the grid contains a color
    /// this map was not built from.
    pub fn render(&self, grid: &Grid) -> RenderResult<String> {
        let mut out = String::with_capacity(grid.len() + grid.height() as usize);
        for row in grid.rows() {
            for &cell in row {
                let symbol = self
                    .symbol(cell)
                    .ok_or(RenderError::MissingColor { color: cell })?;
                out.push(symbol);
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// Render a grid as symbol rows with a freshly built map.
pub fn render_chars(grid: &Grid) -> RenderResult<String> {
    CharMap::of_grid(grid)?.render(grid)
}

/// Replace every symbol of a rendered grid through a substitution table.
///
/// Newlines pass through; any other character must have a table entry.
pub fn substitute(text: &str, table: &HashMap<char, char>) -> RenderResult<String> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\n' {
            out.push(ch);
            continue;
        }
        let glyph = table
            .get(&ch)
            .ok_or(RenderError::UnknownSymbol { symbol: ch })?;
        out.push(*glyph);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_assigned_in_scan_order() {
        let grid = Grid::from_rows(&[vec![0xff0000, 0x00ff00], vec![0x00ff00, 0x0000ff]]).unwrap();
        let map = CharMap::of_grid(&grid).unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.symbol(0xff0000), Some('0'));
        assert_eq!(map.symbol(0x00ff00), Some('1'));
        assert_eq!(map.symbol(0x0000ff), Some('2'));
        assert_eq!(map.color('2'), Some(0x0000ff));
    }

    #[test]
    fn test_render_chars() {
        let grid = Grid::from_rows(&[vec![7, 7, 9], vec![9, 7, 7]]).unwrap();
        assert_eq!(render_chars(&grid).unwrap(), "001\n100\n");
    }

    #[test]
    fn test_too_many_colors() {
        let row: Vec<u32> = (0..17).collect();
        let grid = Grid::from_rows(&[row]).unwrap();
        assert!(matches!(
            CharMap::of_grid(&grid),
            Err(RenderError::TooManyColors { max: 16 })
        ));
    }

    #[test]
    fn test_missing_color() {
        let known = Grid::from_rows(&[vec![1]]).unwrap();
        let map = CharMap::of_grid(&known).unwrap();
        let other = Grid::from_rows(&[vec![2]]).unwrap();
        assert!(matches!(
            map.render(&other),
            Err(RenderError::MissingColor { color: 2 })
        ));
    }

    #[test]
    fn test_substitute() {
        let table = HashMap::from([('0', '▮'), ('1', '▭')]);
        assert_eq!(substitute("101\n000\n", &table).unwrap(), "▭▮▭\n▮▮▮\n");
        assert!(matches!(
            substitute("2", &table),
            Err(RenderError::UnknownSymbol { symbol: '2' })
        ));
    }
}

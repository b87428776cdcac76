//! Tri-state raster grid.
//!
//! A [`Grid`] is a rectangular array of [`Cell`] marks produced by one
//! rasterization pass. It stores the marks and renders them to text; all shape
//! logic lives in the rasterizers.

use crate::error::{Error, Result};
use std::fmt;

/// A single grid cell mark.
///
/// Marking saturates: once a cell has been visited twice it stays
/// [`Cell::Overdrawn`] no matter how many more times it is marked. Overdrawn
/// cells exist because eightfold circle symmetry revisits cells where octant
/// halves meet; the second visit must leave a visible artifact for tests
/// rather than silently overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Never marked.
    #[default]
    Empty,
    /// Marked exactly once.
    Drawn,
    /// Marked two or more times in one rasterization pass.
    Overdrawn,
}

impl Cell {
    /// The cell state after one more mark.
    #[must_use]
    pub const fn marked(self) -> Self {
        match self {
            Self::Empty => Self::Drawn,
            Self::Drawn | Self::Overdrawn => Self::Overdrawn,
        }
    }

    /// Render symbol: `.` empty, `X` drawn, `O` overdrawn.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Drawn => 'X',
            Self::Overdrawn => 'O',
        }
    }
}

/// A rectangular grid of tri-state cell marks.
///
/// Row-major storage, `height` rows by `width` columns, both at least 1.
/// Rasterizers size the grid exactly to the bounding box of the shape they
/// draw and never mark outside it.
///
/// # Example
///
/// ```
/// use trazar::grid::{Cell, Grid};
///
/// let mut grid = Grid::new(2, 3).unwrap();
/// grid.mark(0, 2);
/// assert_eq!(grid.get(0, 2), Cell::Drawn);
/// assert_eq!(grid.to_string(), "..X\n...\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Height in rows.
    height: u32,
    /// Width in columns.
    width: u32,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells [`Cell::Empty`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if height or width is zero.
    pub fn new(height: u32, width: u32) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::InvalidDimensions { height, width });
        }

        let cells = vec![Cell::Empty; (height as usize) * (width as usize)];
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Get the height in rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the width in columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.height as usize) * (self.width as usize)
    }

    /// Get the cell at a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid. Out-of-range access is a
    /// programming error, never a recoverable condition.
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Mark the cell at a coordinate, saturating at [`Cell::Overdrawn`].
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid, same contract as
    /// [`Grid::get`].
    pub fn mark(&mut self, row: u32, col: u32) {
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].marked();
    }

    /// Render the grid as a lazy sequence of `\n`-terminated rows.
    ///
    /// Concatenating the rows reproduces the full text dump, one symbol per
    /// cell.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width as usize).map(|row| {
            let mut line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.push('\n');
            line
        })
    }

    /// Iterate over all non-empty cells as `(row, col, cell)`.
    pub fn marked_cells(&self) -> impl Iterator<Item = (u32, u32, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell != Cell::Empty)
            .map(|(i, cell)| {
                (
                    (i / self.width as usize) as u32,
                    (i % self.width as usize) as u32,
                    *cell,
                )
            })
    }

    /// Row-major index, panicking with the out-of-range contract message.
    fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "{}",
            Error::OutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            }
        );
        (row as usize) * (self.width as usize) + (col as usize)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render() {
            f.write_str(&row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.cell_count(), 28);
        assert_eq!(grid.get(3, 6), Cell::Empty);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Grid::new(0, 10).is_err());
        assert!(Grid::new(10, 0).is_err());
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn test_mark_transitions() {
        let mut grid = Grid::new(2, 2).unwrap();

        grid.mark(1, 0);
        assert_eq!(grid.get(1, 0), Cell::Drawn);

        grid.mark(1, 0);
        assert_eq!(grid.get(1, 0), Cell::Overdrawn);

        // Saturates, never wraps back to Drawn
        grid.mark(1, 0);
        assert_eq!(grid.get(1, 0), Cell::Overdrawn);
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), '.');
        assert_eq!(Cell::Drawn.symbol(), 'X');
        assert_eq!(Cell::Overdrawn.symbol(), 'O');
    }

    #[test]
    fn test_render_rows_terminated() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.mark(0, 0);
        grid.mark(1, 2);
        grid.mark(1, 2);

        let rows: Vec<String> = grid.render().collect();
        assert_eq!(rows, vec!["X..\n".to_string(), "..O\n".to_string()]);
        assert_eq!(grid.to_string(), "X..\n..O\n");
    }

    #[test]
    fn test_marked_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.mark(0, 1);
        grid.mark(2, 2);
        grid.mark(2, 2);

        let marked: Vec<(u32, u32, Cell)> = grid.marked_cells().collect();
        assert_eq!(marked, vec![(0, 1, Cell::Drawn), (2, 2, Cell::Overdrawn)]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_mark_out_of_range_panics() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.mark(2, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let grid = Grid::new(2, 2).unwrap();
        let _ = grid.get(0, 5);
    }
}

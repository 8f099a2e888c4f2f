//! Grid module - manages the 4x4 tile grid
//!
//! The grid is a 4x4 field where each cell is empty (0) or holds a power-of-two tile.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Tile, GRID_CELLS, GRID_SIZE};

/// Cells per line, as an array length
pub const LINE: usize = GRID_SIZE as usize;

/// The tile grid - 4 columns x 4 rows using flat array storage
///
/// `Copy` at 64 bytes, so operations that change the grid can take it by
/// reference and hand back a new one; the caller's pre-move grid is never
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * GRID_SIZE + x)
    cells: [Tile; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; GRID_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: u8, y: u8) -> Option<usize> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return None;
        }
        Some((y as usize) * LINE + (x as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: u8, y: u8) -> Option<Tile> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: u8, y: u8, tile: Tile) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Collect the coordinates of every empty cell, row-major order
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), GRID_CELLS> {
        let mut out = ArrayVec::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                if self.cells[(y as usize) * LINE + (x as usize)] == 0 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&tile| tile != 0)
    }

    /// Extract row y as an array, left to right
    pub fn row(&self, y: u8) -> [Tile; LINE] {
        let mut out = [0; LINE];
        let start = (y as usize) * LINE;
        out.copy_from_slice(&self.cells[start..start + LINE]);
        out
    }

    /// Write an array back into row y
    pub fn set_row(&mut self, y: u8, row: [Tile; LINE]) {
        let start = (y as usize) * LINE;
        self.cells[start..start + LINE].copy_from_slice(&row);
    }

    /// Extract column x as an array, top to bottom
    pub fn column(&self, x: u8) -> [Tile; LINE] {
        let mut out = [0; LINE];
        for (y, cell) in out.iter_mut().enumerate() {
            *cell = self.cells[y * LINE + (x as usize)];
        }
        out
    }

    /// Write an array back into column x, top to bottom
    pub fn set_column(&mut self, x: u8, column: [Tile; LINE]) {
        for (y, &tile) in column.iter().enumerate() {
            self.cells[y * LINE + (x as usize)] = tile;
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Create from a 2D array for testing
    #[cfg(test)]
    pub fn from_rows(rows: [[Tile; LINE]; LINE]) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            grid.set_row(y as u8, *row);
        }
        grid
    }

    /// Convert to a 2D array for testing/display
    #[cfg(test)]
    pub fn to_rows(&self) -> [[Tile; LINE]; LINE] {
        let mut rows = [[0; LINE]; LINE];
        for (y, row) in rows.iter_mut().enumerate() {
            *row = self.row(y as u8);
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(3, 0), Some(3));
        assert_eq!(Grid::index(0, 1), Some(4));
        assert_eq!(Grid::index(3, 3), Some(15));
        assert_eq!(Grid::index(4, 0), None);
        assert_eq!(Grid::index(0, 4), None);
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();

        grid.set(0, 0, 2);
        grid.set(3, 2, 64);

        assert_eq!(grid.get(0, 0), Some(2));
        assert_eq!(grid.get(3, 2), Some(64));
        assert_eq!(grid.get(4, 0), None);

        // Verify internal array
        assert_eq!(grid.cells[0], 2);
        assert_eq!(grid.cells[2 * 4 + 3], 64);
    }

    #[test]
    fn test_grid_from_rows_roundtrip() {
        let rows = [[2, 0, 0, 4], [0, 8, 0, 0], [0, 0, 16, 0], [32, 0, 0, 2048]];
        let grid = Grid::from_rows(rows);
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn test_empty_cells_and_is_full() {
        let mut grid = Grid::new();
        assert_eq!(grid.empty_cells().len(), 16);
        assert!(!grid.is_full());

        for y in 0..4 {
            for x in 0..4 {
                grid.set(x, y, 2);
            }
        }
        assert!(grid.empty_cells().is_empty());
        assert!(grid.is_full());

        grid.set(2, 1, 0);
        assert_eq!(grid.empty_cells().as_slice(), &[(2, 1)]);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_row_and_column_views() {
        let grid = Grid::from_rows([[2, 4, 8, 16], [0, 0, 0, 0], [32, 0, 64, 0], [0, 2, 0, 4]]);

        assert_eq!(grid.row(0), [2, 4, 8, 16]);
        assert_eq!(grid.row(2), [32, 0, 64, 0]);
        assert_eq!(grid.column(0), [2, 0, 32, 0]);
        assert_eq!(grid.column(3), [16, 0, 0, 4]);

        let mut grid = grid;
        grid.set_column(1, [1024, 512, 256, 128]);
        assert_eq!(grid.column(1), [1024, 512, 256, 128]);
        assert_eq!(grid.row(0), [2, 1024, 8, 16]);
    }
}

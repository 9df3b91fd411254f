//! Board module - the 3x3 grid
//!
//! Uses a flat array of 9 cells in row-major order, so a board is `Copy` and a
//! history snapshot is a plain value copy.
//! Index `i` maps to row `i / 3`, column `i % 3` (both 0-based).

use crate::types::{Cell, Mark, BOARD_CELLS, BOARD_SIDE};

/// The game board - 3 columns x 3 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Flat array of cells, row-major order (row * 3 + col)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Build a board from raw cells (row-major)
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// 1-based (row, col) of a flat index, as shown to the player
    pub fn position(index: usize) -> Option<(u8, u8)> {
        if index >= BOARD_CELLS {
            return None;
        }
        Some(((index / BOARD_SIDE) as u8 + 1, (index % BOARD_SIDE) as u8 + 1))
    }

    /// Get cell at index
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Set cell at index
    /// Returns false if out of bounds
    pub fn set(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Copy of this board with `mark` placed at `index`.
    ///
    /// Returns None if the index is out of bounds or the cell is taken, so a
    /// placed mark is never overwritten.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        if !self.is_empty_at(index) {
            return None;
        }
        let mut next = *self;
        next.cells[index] = Some(mark);
        Some(next)
    }

    /// Check if the index is in bounds and empty
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Check if the index is in bounds and taken
    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Some(_)))
    }

    /// Number of taken cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_one_based_row_major() {
        assert_eq!(Board::position(0), Some((1, 1)));
        assert_eq!(Board::position(5), Some((2, 3)));
        assert_eq!(Board::position(7), Some((3, 2)));
        assert_eq!(Board::position(9), None);
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let empty = Board::new();
        let next = empty.with_mark(4, Mark::X).unwrap();

        assert_eq!(empty.get(4), Some(None));
        assert_eq!(next.get(4), Some(Some(Mark::X)));
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn with_mark_refuses_taken_and_out_of_bounds_cells() {
        let board = Board::new().with_mark(0, Mark::X).unwrap();
        assert_eq!(board.with_mark(0, Mark::O), None);
        assert_eq!(board.with_mark(9, Mark::O), None);
    }
}

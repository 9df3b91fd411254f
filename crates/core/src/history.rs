//! Move history entries.

use crate::board::Board;

/// One point in the game's timeline: a board snapshot and the move that
/// produced it.
///
/// Row and column are 1-based; both are 0 for the initial entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    board: Board,
    row: u8,
    col: u8,
}

impl HistoryEntry {
    /// The entry for the empty starting board
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            row: 0,
            col: 0,
        }
    }

    /// Entry for a move played at `index` that produced `board`
    pub fn after_move(board: Board, index: usize) -> Self {
        let (row, col) = Board::position(index).unwrap_or((0, 0));
        Self { board, row, col }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// 1-based (row, col) of the move, if this entry records one
    pub fn last_move(&self) -> Option<(u8, u8)> {
        if self.col == 0 {
            None
        } else {
            Some((self.row, self.col))
        }
    }
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::initial()
    }
}

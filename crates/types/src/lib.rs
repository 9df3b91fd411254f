//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Layout
//!
//! The board is a flat array of 9 cells in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! - **Row**: `index / 3`
//! - **Column**: `index % 3`
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Mark, SortOrder, BOARD_CELLS};
//!
//! assert_eq!(Mark::X.opponent(), Mark::O);
//! assert_eq!(Mark::for_step(3), Mark::O);
//!
//! assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
//!
//! assert_eq!(BOARD_CELLS, 9);
//! ```

use std::fmt;

/// Cells per board side (3)
pub const BOARD_SIDE: usize = 3;

/// Total number of cells on the board (9)
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// Maximum history length: the empty board plus one entry per cell.
pub const MAX_HISTORY: usize = BOARD_CELLS + 1;

/// The 8 winning triples, in evaluation order:
/// rows top-to-bottom, columns left-to-right, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Whose turn it is after `step` moves. X always moves first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::Mark;
    ///
    /// assert_eq!(Mark::for_step(0), Mark::X);
    /// assert_eq!(Mark::for_step(1), Mark::O);
    /// assert_eq!(Mark::for_step(8), Mark::X);
    /// ```
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Mark)`: Cell taken by that player
pub type Cell = Option<Mark>;

/// Display order of the move list.
///
/// Only affects rendering; never the game itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Chronological: game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Intents that can be applied to the game controller.
///
/// Produced by keyboard mapping and by mouse hit testing against the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place the active symbol on a cell (0..9)
    Click(usize),
    /// Jump to a history step
    JumpTo(usize),
    /// Jump one step back in history
    StepBack,
    /// Jump one step forward in history
    StepForward,
    /// Jump to the empty board
    JumpToStart,
    /// Jump to the most recent move
    JumpToLatest,
    /// Flip the move list order
    ToggleSort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_cover_rows_columns_and_diagonals() {
        // Every cell appears in at least two lines; the center in four.
        let mut counts = [0usize; BOARD_CELLS];
        for line in LINES {
            for i in line {
                counts[i] += 1;
            }
        }
        assert_eq!(counts, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn mark_displays_as_its_symbol() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
        assert_eq!(Mark::O.as_char(), 'O');
    }
}

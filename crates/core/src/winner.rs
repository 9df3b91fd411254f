//! Winner evaluation.
//!
//! Pure function of a board: checks the 8 fixed lines in [`LINES`] order and
//! reports the first one held entirely by a single player.

use crate::board::Board;
use crate::types::{Mark, LINES};

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    /// Whether a cell index is part of this line
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Find the winner of a board, if any.
///
/// # Examples
///
/// ```
/// use tui_tictactoe_core::{calculate_winner, Board};
/// use tui_tictactoe_core::types::Mark;
///
/// let mut board = Board::new();
/// for i in [2, 4, 6] {
///     board.set(i, Some(Mark::O));
/// }
/// let line = calculate_winner(&board).unwrap();
/// assert_eq!(line.mark, Mark::O);
/// assert_eq!(line.cells, [2, 4, 6]);
/// ```
pub fn calculate_winner(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Some(mark) if cells[b] == Some(mark) && cells[c] == Some(mark) => Some(WinningLine {
            mark,
            cells: [a, b, c],
        }),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(i, m) in marks {
            board.set(i, Some(m));
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(calculate_winner(&Board::new()), None);
    }

    #[test]
    fn detects_column() {
        let board = board_of(&[(1, Mark::X), (4, Mark::X), (7, Mark::X), (0, Mark::O)]);
        let line = calculate_winner(&board).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.cells, [1, 4, 7]);
        assert!(line.contains(4));
        assert!(!line.contains(0));
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        let board = board_of(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn first_line_in_order_wins_when_several_complete() {
        // Top row and left column both X: rows come first.
        let board = board_of(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        assert_eq!(calculate_winner(&board).unwrap().cells, [0, 1, 2]);
    }
}

use arrayvec::ArrayVec;

use crate::game_state::GameStatus;
use crate::types::{Cell, Mark, SortOrder, BOARD_CELLS, MAX_HISTORY};
use crate::WinningLine;

/// Description of one move list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveLabel {
    /// Step 0
    GameStart,
    /// Step N > 0
    Move(usize),
}

impl MoveLabel {
    pub fn for_step(step: usize) -> Self {
        if step == 0 {
            MoveLabel::GameStart
        } else {
            MoveLabel::Move(step)
        }
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveLabel::GameStart => f.write_str("Go to game start"),
            MoveLabel::Move(n) => write!(f, "Go to move #{}", n),
        }
    }
}

/// Everything the renderer needs for one frame, copied out of `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [Cell; BOARD_CELLS],
    pub winning_line: Option<WinningLine>,
    pub status: GameStatus,
    pub step_number: usize,
    pub history_len: usize,
    pub sort_order: SortOrder,
    /// 1-based (row, col) of the move that produced the current board
    pub last_move: Option<(u8, u8)>,
}

impl GameSnapshot {
    /// Whether a cell should get the highlighted style
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(index))
    }

    /// Step shown at position `pos` of the move list
    pub fn move_step_at(&self, pos: usize) -> Option<usize> {
        if pos >= self.history_len {
            return None;
        }
        Some(match self.sort_order {
            SortOrder::Ascending => pos,
            SortOrder::Descending => self.history_len - 1 - pos,
        })
    }

    /// Steps in move list display order
    pub fn move_steps(&self) -> ArrayVec<usize, MAX_HISTORY> {
        (0..self.history_len.min(MAX_HISTORY))
            .filter_map(|pos| self.move_step_at(pos))
            .collect()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [None; BOARD_CELLS],
            winning_line: None,
            status: GameStatus::InPlay { next: Mark::X },
            step_number: 0,
            history_len: 1,
            sort_order: SortOrder::Ascending,
            last_move: None,
        }
    }
}

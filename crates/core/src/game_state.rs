//! Game state module - the game controller
//!
//! Owns the authoritative state: move history, current step, whose turn is
//! next, and the move list sort order. All input intents funnel through
//! [`GameState::apply_action`]; invalid intents are silently ignored.

use std::fmt;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::types::*;
use crate::{calculate_winner, Board, GameSnapshot, HistoryEntry, WinningLine};

/// Why a click did not place a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The board at the current step already has a winner
    GameOver,
    /// The cell is already taken
    Occupied,
    /// No such cell
    OutOfBounds,
}

/// Result of [`GameState::handle_click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Placed { mark: Mark, cell: usize, step: usize },
    Ignored(IgnoreReason),
}

impl ClickOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self, ClickOutcome::Placed { .. })
    }
}

/// Game status derived from the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Won(Mark),
    Draw,
    InPlay { next: Mark },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InPlay { .. })
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Won(mark) => write!(f, "Winner: {}", mark),
            GameStatus::Draw => f.write_str("Game is a draw"),
            GameStatus::InPlay { next } => write!(f, "Next player: {}", next),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Never empty; entry 0 is the empty board.
    history: ArrayVec<HistoryEntry, MAX_HISTORY>,
    step_number: usize,
    next: Mark,
    sort_order: SortOrder,
}

impl GameState {
    /// Create a new game with an empty board, X to move
    pub fn new() -> Self {
        let mut history = ArrayVec::new();
        history.push(HistoryEntry::initial());
        Self {
            history,
            step_number: 0,
            next: Mark::X,
            sort_order: SortOrder::Ascending,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn step_number(&self) -> usize {
        self.step_number
    }

    pub fn next_player(&self) -> Mark {
        self.next
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The entry at the current step
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step_number]
    }

    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Winner of the board at the current step
    pub fn winner(&self) -> Option<WinningLine> {
        calculate_winner(self.board())
    }

    /// Status text source for the current step.
    ///
    /// The draw check relies on the board having exactly 9 cells: step 9
    /// means every cell is taken.
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winner() {
            GameStatus::Won(line.mark)
        } else if self.step_number == BOARD_CELLS {
            GameStatus::Draw
        } else {
            GameStatus::InPlay { next: self.next }
        }
    }

    /// Play the active symbol on `index`.
    ///
    /// Ignored when the current board is already won or the cell is taken.
    /// Otherwise any history after the current step is discarded before the
    /// new entry is appended.
    pub fn handle_click(&mut self, index: usize) -> ClickOutcome {
        let current = *self.board();
        if calculate_winner(&current).is_some() {
            return ClickOutcome::Ignored(IgnoreReason::GameOver);
        }
        if index >= BOARD_CELLS {
            return ClickOutcome::Ignored(IgnoreReason::OutOfBounds);
        }
        let Some(board) = current.with_mark(index, self.next) else {
            return ClickOutcome::Ignored(IgnoreReason::Occupied);
        };

        // The current board holds step_number marks, so with a free cell
        // step_number < 9 and the truncated history has room for one more.
        self.history.truncate(self.step_number + 1);
        self.history.push(HistoryEntry::after_move(board, index));

        let mark = self.next;
        self.next = mark.opponent();
        self.step_number = self.history.len() - 1;

        ClickOutcome::Placed {
            mark,
            cell: index,
            step: self.step_number,
        }
    }

    /// Move the step pointer without touching history.
    ///
    /// Returns false (and changes nothing) if `step` is not a history index.
    pub fn jump_to(&mut self, step: usize) -> bool {
        if step >= self.history.len() {
            return false;
        }
        self.step_number = step;
        self.next = Mark::for_step(step);
        true
    }

    /// Flip the move list order
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Apply an input intent.
    ///
    /// Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Click(index) => {
                let outcome = self.handle_click(index);
                match outcome {
                    ClickOutcome::Placed { mark, cell, step } => {
                        debug!(%mark, cell, step, "move placed");
                    }
                    ClickOutcome::Ignored(reason) => {
                        debug!(cell = index, ?reason, "click ignored");
                    }
                }
                outcome.is_placed()
            }
            GameAction::JumpTo(step) => self.jump_logged(step),
            GameAction::StepBack => match self.step_number.checked_sub(1) {
                Some(step) => self.jump_logged(step),
                None => false,
            },
            GameAction::StepForward => self.jump_logged(self.step_number + 1),
            GameAction::JumpToStart => self.step_number != 0 && self.jump_logged(0),
            GameAction::JumpToLatest => {
                let latest = self.history.len() - 1;
                self.step_number != latest && self.jump_logged(latest)
            }
            GameAction::ToggleSort => {
                self.toggle_sort();
                debug!(order = ?self.sort_order, "move list order toggled");
                true
            }
        }
    }

    fn jump_logged(&mut self, step: usize) -> bool {
        let moved = self.jump_to(step);
        if moved {
            debug!(step, "jumped to step");
        } else {
            debug!(step, len = self.history.len(), "jump ignored");
        }
        moved
    }

    /// Copy out everything the renderer needs
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let current = self.current();
        out.board = *current.board().cells();
        out.winning_line = self.winner();
        out.status = self.status();
        out.step_number = self.step_number;
        out.history_len = self.history.len();
        out.sort_order = self.sort_order;
        out.last_move = current.last_move();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

//! Keyboard cursor over the board.
//!
//! Lets the board be played without a mouse: arrow keys (or hjkl / wasd)
//! move a cursor square, Enter or Space clicks it.

use crossterm::event::KeyCode;

use crate::types::{GameAction, BOARD_CELLS, BOARD_SIDE};

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// Tracks the keyboard cursor square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorHandler {
    cursor: usize,
    visible: bool,
}

impl CursorHandler {
    /// Cursor starts on the center square, hidden until a cursor key is used.
    pub fn new() -> Self {
        Self {
            cursor: BOARD_CELLS / 2,
            visible: false,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor square to draw, if the keyboard cursor is in use
    pub fn visible_cursor(&self) -> Option<usize> {
        self.visible.then_some(self.cursor)
    }

    /// Put the cursor on a square (e.g. after a mouse click on it).
    pub fn set_cursor(&mut self, index: usize) {
        if index < BOARD_CELLS {
            self.cursor = index;
        }
    }

    /// Handle a cursor key.
    ///
    /// Returns `Some(Click)` when the key activates the cursor square. Keys
    /// that only move the cursor return None but are still consumed; use
    /// [`CursorHandler::is_cursor_key`] to tell them apart.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.visible = true;
                Some(GameAction::Click(self.cursor))
            }
            _ => {
                if let Some(dir) = cursor_move(code) {
                    self.step(dir);
                    self.visible = true;
                }
                None
            }
        }
    }

    pub fn is_cursor_key(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter | KeyCode::Char(' ')) || cursor_move(code).is_some()
    }

    /// Move one square, stopping at the board edge.
    pub fn step(&mut self, dir: CursorMove) {
        let row = self.cursor / BOARD_SIDE;
        let col = self.cursor % BOARD_SIDE;
        let (row, col) = match dir {
            CursorMove::Up => (row.saturating_sub(1), col),
            CursorMove::Down => ((row + 1).min(BOARD_SIDE - 1), col),
            CursorMove::Left => (row, col.saturating_sub(1)),
            CursorMove::Right => (row, (col + 1).min(BOARD_SIDE - 1)),
        };
        self.cursor = row * BOARD_SIDE + col;
    }
}

impl Default for CursorHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn cursor_move(code: KeyCode) -> Option<CursorMove> {
    match code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(CursorMove::Up),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(CursorMove::Down),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(CursorMove::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(CursorMove::Right),
        _ => None,
    }
}

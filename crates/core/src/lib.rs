//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management. It has **no
//! dependencies** on terminal I/O or rendering, making it:
//!
//! - **Deterministic**: The same clicks always produce the same history
//! - **Testable**: Every rule is covered by plain unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Board and history live in fixed-size arrays
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 board stored as a flat array of cells
//! - [`winner`]: Winner evaluation over the 8 fixed lines
//! - [`history`]: Immutable per-move snapshots
//! - [`game_state`]: The game controller (click, jump, sort order, status)
//! - [`snapshot`]: Copyable render input
//!
//! # Game Rules
//!
//! - X always moves first; players alternate
//! - A click on a taken cell, or on a board that is already won, does nothing
//! - Jumping to an earlier step only moves the step pointer; the next click
//!   from there discards the later moves
//! - The game is drawn when 9 moves are on the board and nobody has won
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{GameState, GameStatus};
//! use tui_tictactoe_core::types::{GameAction, Mark};
//!
//! let mut game = GameState::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.apply_action(GameAction::Click(cell));
//! }
//!
//! assert_eq!(game.status(), GameStatus::Won(Mark::X));
//! assert_eq!(game.winner().unwrap().cells, [0, 3, 6]);
//!
//! game.apply_action(GameAction::JumpTo(2));
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

pub mod board;
pub mod game_state;
pub mod history;
pub mod snapshot;
pub mod winner;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ClickOutcome, GameState, GameStatus, IgnoreReason};
pub use history::HistoryEntry;
pub use snapshot::{GameSnapshot, MoveLabel};
pub use winner::{calculate_winner, WinningLine};

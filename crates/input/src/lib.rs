//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! and mouse events into [`crate::types::GameAction`] and keeps a keyboard
//! cursor over the board. Mouse positions are resolved against the screen
//! layout by the term crate's hit testing.

pub mod handler;
pub mod map;

pub use tui_tictactoe_types as types;

pub use handler::{CursorHandler, CursorMove};
pub use map::{handle_key_event, mouse_click, should_quit};

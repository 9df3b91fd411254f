//! Terminal "game renderer" module.
//!
//! This is a small rendering layer for terminal gameplay. It avoids widget
//! libraries and instead renders into a simple framebuffer that can be
//! flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep rendering a pure function of a `GameSnapshot` (idempotent redraws)
//! - Share one layout between drawing and mouse hit testing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Layout, SquareClass, Viewport, PANEL_WIDTH, TOGGLE_LABEL};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! TUI tic-tac-toe (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_tictactoe::{core,input,term,types}`
//! and holds the application glue: configuration, logging and the event
//! handling shared by the binary and the integration tests.

pub mod app;
pub mod config;
pub mod logging;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

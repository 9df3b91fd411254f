//! Startup configuration from environment variables.
//!
//! - `TICTACTOE_CELL_WIDTH`: board square width in columns (default 7, 3..=15)
//! - `TICTACTOE_CELL_HEIGHT`: board square height in rows (default 3, 1..=7)
//! - `TICTACTOE_ANCHOR`: vertical placement, `center` or `top` (default center)
//! - `TICTACTOE_LOG_PATH`: log file; logging is off when unset or empty
//! - `RUST_LOG`: `tracing` filter directive (default "info")
//!
//! Unparsable values fall back to the defaults.

use crate::term::game_view::{MAX_CELL_H, MAX_CELL_W};
use crate::term::{AnchorY, GameView};

pub const DEFAULT_CELL_WIDTH: u16 = 7;
pub const DEFAULT_CELL_HEIGHT: u16 = 3;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub cell_width: u16,
    pub cell_height: u16,
    pub anchor_y: AnchorY,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            anchor_y: AnchorY::Center,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let cell_width = lookup("TICTACTOE_CELL_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_CELL_WIDTH)
            .clamp(3, MAX_CELL_W);

        let cell_height = lookup("TICTACTOE_CELL_HEIGHT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_CELL_HEIGHT)
            .clamp(1, MAX_CELL_H);

        let anchor_y = lookup("TICTACTOE_ANCHOR")
            .and_then(|s| AnchorY::from_str(&s))
            .unwrap_or_default();

        let log_path = lookup("TICTACTOE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_filter = lookup("RUST_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            cell_width,
            cell_height,
            anchor_y,
            log_path,
            log_filter,
        }
    }

    /// The game view these settings describe
    pub fn view(&self) -> GameView {
        GameView::new(self.cell_width, self.cell_height).with_anchor_y(self.anchor_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("TICTACTOE_CELL_WIDTH", "9"),
            ("TICTACTOE_CELL_HEIGHT", " 5 "),
            ("TICTACTOE_ANCHOR", "top"),
            ("TICTACTOE_LOG_PATH", "/tmp/ttt.log"),
            ("RUST_LOG", "debug"),
        ]);
        assert_eq!(config.cell_width, 9);
        assert_eq!(config.cell_height, 5);
        assert_eq!(config.anchor_y, AnchorY::Top);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/ttt.log"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.view().cell_size(), (9, 5));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("TICTACTOE_CELL_WIDTH", "wide"),
            ("TICTACTOE_CELL_HEIGHT", "0"),
            ("TICTACTOE_ANCHOR", "sideways"),
            ("TICTACTOE_LOG_PATH", "   "),
            ("RUST_LOG", ""),
        ]);
        assert_eq!(config.cell_width, DEFAULT_CELL_WIDTH);
        assert_eq!(config.cell_height, 1);
        assert_eq!(config.anchor_y, AnchorY::Center);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn cell_sizes_are_clamped() {
        let config = config_from(&[("TICTACTOE_CELL_WIDTH", "1"), ("TICTACTOE_CELL_HEIGHT", "99")]);
        assert_eq!(config.cell_width, 3);
        assert_eq!(config.cell_height, MAX_CELL_H);
    }
}

//! Application configuration from environment variables.
//!
//! - `TUI_2048_SIZE`: Board dimension (default: 4)
//! - `TUI_2048_SEED`: Spawn RNG seed (default: unset, seeded from entropy)
//! - `TUI_2048_WIN_TILE`: Winning tile value (default: 2048)
//! - `TUI_2048_LOG_PATH`: Write logs to this file (default: unset, logging off)
//!
//! Unparseable values fall back to the defaults. Range checks are left to
//! [`GameConfig::validate`].

use crate::core::GameConfig;
use crate::types::{Tile, DEFAULT_SIZE, WIN_TILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub size: usize,
    pub seed: Option<u64>,
    pub win_tile: Tile,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            win_tile: WIN_TILE,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let size = var("TUI_2048_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.size);

        let seed = var("TUI_2048_SEED").and_then(|s| s.trim().parse().ok());

        let win_tile = var("TUI_2048_WIN_TILE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.win_tile);

        let log_path = var("TUI_2048_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            size,
            seed,
            win_tile,
            log_path,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_size(self.size)
            .with_win_tile(self.win_tile);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_vars(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.game_config(), GameConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = AppConfig::from_vars(lookup(&[
            ("TUI_2048_SIZE", "5"),
            ("TUI_2048_SEED", " 99 "),
            ("TUI_2048_WIN_TILE", "4096"),
            ("TUI_2048_LOG_PATH", "/tmp/2048.log"),
        ]));
        assert_eq!(config.size, 5);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.win_tile, 4096);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/2048.log"));

        let game = config.game_config();
        assert_eq!(game.size, 5);
        assert_eq!(game.seed, Some(99));
        assert_eq!(game.win_tile, 4096);
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let config = AppConfig::from_vars(lookup(&[
            ("TUI_2048_SIZE", "big"),
            ("TUI_2048_SEED", "-1"),
            ("TUI_2048_WIN_TILE", ""),
            ("TUI_2048_LOG_PATH", "   "),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}

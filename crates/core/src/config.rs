//! Engine configuration.
//!
//! The engine itself reads no environment; embedding applications build a
//! [`GameConfig`] (see the `tui-2048` binary's `AppConfig::from_env`).

use crate::error::BoardError;
use crate::types::{Tile, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, WIN_TILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board dimension (NxN), fixed for the lifetime of the game.
    pub size: usize,
    /// Tile value that ends the game with a win.
    pub win_tile: Tile,
    /// Spawn RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Starting grid. Its dimension overrides `size`.
    pub initial_grid: Option<Vec<Vec<Tile>>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            win_tile: WIN_TILE,
            seed: None,
            initial_grid: None,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_win_tile(mut self, win_tile: Tile) -> Self {
        self.win_tile = win_tile;
        self
    }

    pub fn with_initial_grid(mut self, rows: Vec<Vec<Tile>>) -> Self {
        self.initial_grid = Some(rows);
        self
    }

    /// Check the scalar parameters. Grid contents are checked by `Board::from_rows`.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.initial_grid.is_none() && self.size < MIN_SIZE {
            return Err(BoardError::TooSmall { size: self.size });
        }
        if self.initial_grid.is_none() && self.size > MAX_SIZE {
            return Err(BoardError::TooLarge { size: self.size });
        }
        if self.win_tile < 4 || !self.win_tile.is_power_of_two() {
            return Err(BoardError::InvalidWinTile(self.win_tile));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_classic() {
        let config = GameConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.win_tile, 2048);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            GameConfig::default().with_size(1).validate(),
            Err(BoardError::TooSmall { size: 1 })
        );
        assert_eq!(
            GameConfig::default().with_size(10_000).validate(),
            Err(BoardError::TooLarge { size: 10_000 })
        );
        assert_eq!(
            GameConfig::default().with_win_tile(100).validate(),
            Err(BoardError::InvalidWinTile(100))
        );
        assert_eq!(
            GameConfig::default().with_win_tile(2).validate(),
            Err(BoardError::InvalidWinTile(2))
        );
        assert!(GameConfig::default()
            .with_size(5)
            .with_win_tile(64)
            .validate()
            .is_ok());
    }
}

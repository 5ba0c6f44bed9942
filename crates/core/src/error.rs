//! Construction-time validation errors.
//!
//! Everything that can go wrong after a game is constructed (full board,
//! no empty cell to spawn into, no legal move) is a state transition, not an
//! error. Only malformed input is rejected here.

use crate::types::{Tile, MAX_SIZE, MIN_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size {size} is too small (minimum {})", MIN_SIZE)]
    TooSmall { size: usize },

    #[error("board size {size} is too large (maximum {})", MAX_SIZE)]
    TooLarge { size: usize },

    #[error("board is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("invalid tile {value} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, value: Tile },

    #[error("win tile {0} must be a power of two greater than 2")]
    InvalidWinTile(Tile),
}

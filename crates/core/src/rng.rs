//! RNG module - random tile spawning
//!
//! After every move that changes the board, one tile appears on a uniformly
//! chosen empty cell: a 2 with probability 0.9, a 4 with probability 0.1.
//!
//! The spawner owns a seedable [`StdRng`] so that games can be replayed
//! deterministically (tests, benches) or seeded from entropy (play).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::types::{Tile, SPAWN_HIGH_PROBABILITY, SPAWN_HIGH_TILE, SPAWN_LOW_TILE};

/// A tile placed by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Random tile generator
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: StdRng,
}

impl TileSpawner {
    /// Create a spawner with a fixed seed (reproducible sequence)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a spawner seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw a tile value: 2 (90%) or 4 (10%)
    pub fn next_value(&mut self) -> Tile {
        if self.rng.gen_bool(SPAWN_HIGH_PROBABILITY) {
            SPAWN_HIGH_TILE
        } else {
            SPAWN_LOW_TILE
        }
    }

    /// Place one tile on a random empty cell.
    ///
    /// Returns `None` without touching the board when it is full.
    pub fn spawn(&mut self, board: &mut Board) -> Option<SpawnedTile> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[self.rng.gen_range(0..empty.len())];
        let value = self.next_value();
        board.set(row, col, value);

        Some(SpawnedTile { row, col, value })
    }
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::from_entropy()
    }
}

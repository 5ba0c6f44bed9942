use crate::types::{GameStatus, Tile};

/// Immutable copy of everything a view needs to draw a frame.
///
/// Holding a snapshot never aliases engine state; mutating it cannot
/// corrupt the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major copy of the grid (size * size cells).
    pub cells: Vec<Tile>,
    pub score: u32,
    pub status: GameStatus,
    pub max_tile: Tile,
    pub empty_cells: usize,
    pub moves: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    pub fn rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.size.max(1)).map(<[Tile]>::to_vec).collect()
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
            score: 0,
            status: GameStatus::Idle,
            max_tile: 0,
            empty_cells: 0,
            moves: 0,
            episode_id: 0,
        }
    }
}

//! Game state module - manages the complete game state
//!
//! This module ties together the board, the tile spawner and the score, and
//! drives the game lifecycle (`idle -> playing -> win | lose`, `restart`).
//! Observers are notified synchronously after every mutation.

use log::{debug, info, trace};

use crate::board::{Board, SlideResult};
use crate::config::GameConfig;
use crate::error::BoardError;
use crate::observer::GameObserver;
use crate::rng::{SpawnedTile, TileSpawner};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// What a single `move_tiles` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the grid changed (and therefore a tile was spawned)
    pub moved: bool,
    /// Sum of the merged tile values awarded by this move
    pub score_gained: u32,
    /// Number of merges performed
    pub merges: u32,
    /// Tile placed after the move, if any
    pub spawned: Option<SpawnedTile>,
    /// Status after the move
    pub status: GameStatus,
}

impl MoveOutcome {
    fn blocked(status: GameStatus) -> Self {
        Self {
            moved: false,
            score_gained: 0,
            merges: 0,
            spawned: None,
            status,
        }
    }
}

/// Complete game state
pub struct Game {
    board: Board,
    spawner: TileSpawner,
    score: u32,
    status: GameStatus,
    win_tile: Tile,
    /// Grid-changing moves in the current episode.
    moves: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("score", &self.score)
            .field("status", &self.status)
            .field("win_tile", &self.win_tile)
            .field("moves", &self.moves)
            .field("episode_id", &self.episode_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Game {
    /// Create an idle 4x4 game with an empty board
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            spawner: TileSpawner::from_entropy(),
            score: 0,
            status: GameStatus::Idle,
            win_tile: WIN_TILE,
            moves: 0,
            episode_id: 0,
            observers: Vec::new(),
        }
    }

    /// Create an idle game from an explicit configuration
    pub fn with_config(config: GameConfig) -> Result<Self, BoardError> {
        config.validate()?;

        let board = match &config.initial_grid {
            Some(rows) => Board::from_rows(rows)?,
            None => Board::new(config.size)?,
        };
        let spawner = match config.seed {
            Some(seed) => TileSpawner::new(seed),
            None => TileSpawner::from_entropy(),
        };

        debug!(
            "new game: size={} win_tile={} seeded={}",
            board.size(),
            config.win_tile,
            config.seed.is_some()
        );

        Ok(Self {
            board,
            spawner,
            score: 0,
            status: GameStatus::Idle,
            win_tile: config.win_tile,
            moves: 0,
            episode_id: 0,
            observers: Vec::new(),
        })
    }

    /// Create an idle game starting from `rows` (deterministic testing)
    pub fn from_grid(rows: Vec<Vec<Tile>>) -> Result<Self, BoardError> {
        Self::with_config(GameConfig::default().with_initial_grid(rows))
    }

    /// Register a notification sink
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Start the game: place two tiles on the current board
    pub fn start(&mut self) {
        self.status = GameStatus::Playing;
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        debug!("game started (episode {})", self.episode_id);
        self.notify_state();
    }

    /// Reset board and score, then start again from any status
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.status = GameStatus::Playing;
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        debug!("game restarted (episode {})", self.episode_id);
        self.notify_state();
    }

    /// Slide all tiles towards `direction`.
    ///
    /// A dead board (no empty cell, no equal neighbours) ends the game and
    /// leaves the board untouched. A move that changes nothing spawns no tile
    /// and awards no score.
    pub fn move_tiles(&mut self, direction: Direction) -> MoveOutcome {
        if self.handle_game_over() {
            return MoveOutcome::blocked(self.status);
        }

        let SlideResult {
            moved,
            score_gained,
            merges,
        } = self.board.slide(direction);
        self.score = self.score.saturating_add(score_gained);

        let spawned = if moved {
            self.moves = self.moves.wrapping_add(1);
            self.spawn_tile()
        } else {
            None
        };

        trace!(
            "move {}: moved={} merges={} +{} score={}",
            direction,
            moved,
            merges,
            score_gained,
            self.score
        );

        self.notify_state();
        self.check_win();

        MoveOutcome {
            moved,
            score_gained,
            merges,
            spawned,
            status: self.status,
        }
    }

    /// Apply a game action. Returns true if the board or lifecycle changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                if self.status != GameStatus::Idle {
                    return false;
                }
                self.start();
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::MoveLeft
            | GameAction::MoveRight
            | GameAction::MoveUp
            | GameAction::MoveDown => match action.direction() {
                Some(direction) => {
                    let before = self.status;
                    let outcome = self.move_tiles(direction);
                    outcome.moved || outcome.status != before
                }
                None => false,
            },
        }
    }

    fn spawn_tile(&mut self) -> Option<SpawnedTile> {
        let spawned = self.spawner.spawn(&mut self.board);
        if let Some(tile) = spawned {
            debug!("spawned {} at ({}, {})", tile.value, tile.row, tile.col);
        }
        spawned
    }

    /// Returns true when no move is possible; enters `Lose` the first time.
    ///
    /// A won game stays won even if the board later locks up.
    fn handle_game_over(&mut self) -> bool {
        if self.board.has_moves() {
            return false;
        }
        if !self.status.is_terminal() {
            self.status = GameStatus::Lose;
            info!("game over: score={} max_tile={}", self.score, self.board.max_tile());
            self.notify_status();
        }
        true
    }

    fn check_win(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        if self.board.contains(self.win_tile) {
            self.status = GameStatus::Win;
            info!("reached {}: score={}", self.win_tile, self.score);
            self.notify_status();
        }
    }

    fn notify_state(&mut self) {
        for observer in &mut self.observers {
            observer.on_score(self.score);
            observer.on_board(&self.board);
        }
    }

    fn notify_status(&mut self) {
        for observer in &mut self.observers {
            observer.on_status(self.status);
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Defensive copy of the grid as rows
    pub fn state(&self) -> Vec<Vec<Tile>> {
        self.board.to_rows()
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn win_tile(&self) -> Tile {
        self.win_tile
    }

    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Whether `direction` would change the board (no spawn, no scoring)
    pub fn can_move(&self, direction: Direction) -> bool {
        self.board.can_slide(direction)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.score = self.score;
        out.status = self.status;
        out.max_tile = self.board.max_tile();
        out.empty_cells = self.board.empty_count();
        out.moves = self.moves;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

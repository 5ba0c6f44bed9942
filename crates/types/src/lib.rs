//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (board engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The classic board is 4x4. The size is a construction-time parameter of
//! the engine and never changes during a game.
//!
//! # Tile Values
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `EMPTY_TILE` | 0 | Value of an empty cell |
//! | `WIN_TILE` | 2048 | Reaching this tile wins the game |
//! | `MAX_TILE` | 2^31 | Largest tile; a pair of them is frozen |
//! | `SPAWN_LOW_TILE` | 2 | Spawned with probability 0.9 |
//! | `SPAWN_HIGH_TILE` | 4 | Spawned with probability 0.1 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, DEFAULT_SIZE};
//!
//! let dir: Direction = "left".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::MoveUp));
//! assert_eq!(GameStatus::Idle.as_str(), "idle");
//! assert_eq!(DEFAULT_SIZE, 4);
//! ```

use std::fmt;
use std::str::FromStr;

/// Default board dimension (4x4)
pub const DEFAULT_SIZE: usize = 4;

/// Smallest board dimension the engine accepts
pub const MIN_SIZE: usize = 2;

/// Largest board dimension the engine accepts
pub const MAX_SIZE: usize = 16;

/// Tile value that wins the game
pub const WIN_TILE: Tile = 2048;

/// Value of an empty cell
pub const EMPTY_TILE: Tile = 0;

/// Largest representable tile. Two of these never merge.
pub const MAX_TILE: Tile = 1 << 31;

/// Common spawned tile
pub const SPAWN_LOW_TILE: Tile = 2;

/// Rare spawned tile
pub const SPAWN_HIGH_TILE: Tile = 4;

/// Probability that a spawned tile is [`SPAWN_HIGH_TILE`]
pub const SPAWN_HIGH_PROBABILITY: f64 = 0.1;

/// Number of tiles placed on the board by `start` / `restart`
pub const INITIAL_TILES: usize = 2;

/// A cell on the game board
///
/// - `0`: Empty cell
/// - power of two >= 2: tile value
pub type Tile = u32;

/// Returns true if `value` is a legal cell value (empty or a power of two >= 2).
///
/// ```
/// use tui_2048_types::is_valid_tile;
///
/// assert!(is_valid_tile(0));
/// assert!(is_valid_tile(2));
/// assert!(is_valid_tile(2048));
/// assert!(!is_valid_tile(1));
/// assert!(!is_valid_tile(6));
/// assert!(is_valid_tile(1 << 31));
/// ```
pub fn is_valid_tile(value: Tile) -> bool {
    value == EMPTY_TILE || (value >= 2 && value.is_power_of_two())
}

/// Returns true if two cells merge when pushed together.
///
/// Equal non-empty tiles merge unless their sum would not fit in a [`Tile`].
pub fn can_merge(a: Tile, b: Tile) -> bool {
    a == b && a != EMPTY_TILE && a < MAX_TILE
}

/// Direction of a move
///
/// Tiles slide (and merge) towards the named edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r",
    /// "up" | "u", "down" | "d".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Whether lines along this direction are rows (left/right) or columns (up/down)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Whether tiles travel towards the high-index end of a line
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a direction name or code is out of range
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseDirectionError {
    #[error("unknown direction name: {0:?}")]
    UnknownName(String),
    #[error("direction code out of range: {0} (expected 0..=3)")]
    OutOfRange(u8),
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::from_str(s).ok_or_else(|| ParseDirectionError::UnknownName(s.to_string()))
    }
}

impl TryFrom<u8> for Direction {
    type Error = ParseDirectionError;

    /// 0 = left, 1 = right, 2 = up, 3 = down
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(value as usize)
            .copied()
            .ok_or(ParseDirectionError::OutOfRange(value))
    }
}

/// Lifecycle state of a game
///
/// ```text
/// idle --start()--> playing
/// playing --restart()--> playing   (idle/win/lose --restart()--> playing)
/// playing --move() with no legal move--> lose
/// playing --move() producing the win tile--> win
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Not started yet
    #[default]
    Idle,
    /// In progress
    Playing,
    /// A tile reached the winning value
    Win,
    /// No legal move remains
    Lose,
}

impl GameStatus {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Win => "win",
            GameStatus::Lose => "lose",
        }
    }

    /// Win or lose; only `restart` leaves these states
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::Lose)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game actions that can be applied to the engine
///
/// These actions are produced by input handlers and consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide tiles towards the left edge
    MoveLeft,
    /// Slide tiles towards the right edge
    MoveRight,
    /// Slide tiles towards the top edge
    MoveUp,
    /// Slide tiles towards the bottom edge
    MoveDown,
    /// Start a game that has not been started yet
    Start,
    /// Reset the board and score and start again
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }

    /// The move direction carried by this action, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::Start | GameAction::Restart => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
        }
    }
}

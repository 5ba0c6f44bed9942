//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the 2048 board engine: it owns the grid, the score and the
//! lifecycle status. It has **zero dependencies** on UI, terminals or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Initial grids can be injected for exact scenarios
//! - **Portable**: Renderers and input handlers plug in as observers
//!
//! # Module Structure
//!
//! - [`board`]: NxN grid with the line-collapse (slide/merge) algorithm
//! - [`game_state`]: Lifecycle state machine, scoring, win/loss detection
//! - [`rng`]: Random tile spawning (2 at 90%, 4 at 10%)
//! - [`observer`]: Render/score/status notification sinks
//! - [`snapshot`]: Detached copies of the game for views
//! - [`config`]: Construction-time parameters
//! - [`error`]: Validation errors
//!
//! # Game Rules
//!
//! - **Slide**: All tiles move as far as possible towards the chosen edge
//! - **Merge**: Two equal neighbours merge into their sum; a tile merges at
//!   most once per move, and the merged value is added to the score
//! - **Spawn**: A move that changes the board adds one tile on a random empty cell
//! - **Win**: A tile reaches 2048 (configurable)
//! - **Lose**: No empty cell and no equal horizontal/vertical neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Game, GameConfig};
//! use tui_2048_types::{Direction, GameStatus};
//!
//! let mut game = Game::with_config(
//!     GameConfig::default()
//!         .with_seed(42)
//!         .with_initial_grid(vec![
//!             vec![2, 2, 4, 0],
//!             vec![0, 0, 0, 0],
//!             vec![0, 0, 0, 0],
//!             vec![0, 0, 0, 0],
//!         ]),
//! )
//! .unwrap();
//!
//! let outcome = game.move_tiles(Direction::Left);
//! assert!(outcome.moved);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.state()[0][..2].to_vec(), vec![4, 4]);
//! assert_ne!(game.status(), GameStatus::Lose);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod observer;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{collapse_line, Board, SlideResult};
pub use config::GameConfig;
pub use error::BoardError;
pub use game_state::{Game, MoveOutcome};
pub use observer::{EventLog, GameEvent, GameObserver};
pub use rng::{SpawnedTile, TileSpawner};
pub use snapshot::GameSnapshot;

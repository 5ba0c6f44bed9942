//! Notification sinks.
//!
//! The engine pushes its authoritative state to observers synchronously,
//! right after each mutation:
//!
//! - [`GameObserver::on_board`] and [`GameObserver::on_score`] after every
//!   `start`, `restart` and completed move;
//! - [`GameObserver::on_status`] exactly once when the game enters
//!   [`GameStatus::Win`] or [`GameStatus::Lose`].
//!
//! All methods default to no-ops so a sink only implements what it renders.

use crate::board::Board;
use crate::types::GameStatus;

pub trait GameObserver {
    fn on_board(&mut self, _board: &Board) {}

    fn on_score(&mut self, _score: u32) {}

    fn on_status(&mut self, _status: GameStatus) {}
}

/// Notification recorded by [`EventLog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Board(Vec<u32>),
    Score(u32),
    Status(GameStatus),
}

/// Observer that appends every notification to a shared log.
///
/// Cloning shares the same log, so one clone can be handed to the engine
/// and the other kept by the caller.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: std::rc::Rc<std::cell::RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all events recorded so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Status signals recorded so far (not drained).
    pub fn statuses(&self) -> Vec<GameStatus> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                GameEvent::Status(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

impl GameObserver for EventLog {
    fn on_board(&mut self, board: &Board) {
        self.events
            .borrow_mut()
            .push(GameEvent::Board(board.cells().to_vec()));
    }

    fn on_score(&mut self, score: u32) {
        self.events.borrow_mut().push(GameEvent::Score(score));
    }

    fn on_status(&mut self, status: GameStatus) {
        self.events.borrow_mut().push(GameEvent::Status(status));
    }
}

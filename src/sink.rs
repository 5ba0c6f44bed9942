//! Observer wiring between the engine and the terminal loop.
//!
//! The engine pushes board/score/status notifications; the runner only
//! redraws when one of them arrived since the last frame.

use std::cell::Cell;
use std::rc::Rc;

use log::info;

use crate::core::{Board, GameObserver};
use crate::types::GameStatus;

/// Shared redraw flag plus the last status signal.
///
/// Clones share state: subscribe one clone, poll the other.
#[derive(Debug, Clone, Default)]
pub struct RedrawSignal {
    dirty: Rc<Cell<bool>>,
    score: Rc<Cell<u32>>,
    outcome: Rc<Cell<Option<GameStatus>>>,
}

impl RedrawSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a redraw (resize, first frame).
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Last score pushed by the engine.
    pub fn score(&self) -> u32 {
        self.score.get()
    }

    /// Win/lose signal received since the last restart, if any.
    pub fn outcome(&self) -> Option<GameStatus> {
        self.outcome.get()
    }

    pub fn clear_outcome(&self) {
        self.outcome.set(None);
    }
}

impl GameObserver for RedrawSignal {
    fn on_board(&mut self, _board: &Board) {
        self.dirty.set(true);
    }

    fn on_score(&mut self, score: u32) {
        self.score.set(score);
    }

    fn on_status(&mut self, status: GameStatus) {
        info!("game finished: {} with score {}", status, self.score.get());
        self.outcome.set(Some(status));
        self.dirty.set(true);
    }
}

//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. 2048 moves once
//! per key press, so there is no auto-repeat handling here; callers should
//! ignore `KeyEventKind::Repeat` and `Release`.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, resolve_start, should_quit};

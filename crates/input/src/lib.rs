//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] plus the two
//! app-level controls (scoreboard toggle, quit) that live outside the
//! game session.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit, toggles_scoreboard};

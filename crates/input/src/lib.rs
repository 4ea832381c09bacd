//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides a
//! non-blocking key source for the cooperative control loop.

pub mod map;
pub mod source;

pub use matrix_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{KeySource, ScriptedKeys, TerminalKeys};

//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on the display, the terminal, or any I/O, making it:
//!
//! - **Deterministic**: The random source is injected, so a scripted sequence replays exactly
//! - **Testable**: Unit tests next to every rule, integration tests at the workspace root
//! - **Portable**: Drives a real LED matrix, a terminal emulator, or nothing at all
//!
//! # Module Structure
//!
//! - [`glyphs`]: Piece rotation masks, digit and letter glyphs
//! - [`board`]: Grid of settled cells with fail-closed collision queries and line clearing
//! - [`piece`]: The active piece and its rotation index
//! - [`moves`]: The move validator
//! - [`rng`]: Injectable random source plus a seeded LCG and a scripted source
//! - [`config`]: Immutable game configuration
//! - [`game_state`]: The session state machine
//! - [`difficulty`]: The fall interval countdown
//!
//! # Game Rules
//!
//! - **Uniform spawn**: Each piece picks a shape and a color uniformly at random
//! - **Index rotation**: Rotating selects the next precomputed mask; no wall kicks
//! - **Gravity lock**: A piece that cannot fall on a tick locks immediately
//! - **Scoring**: 100 points per cleared line
//! - **Game over**: A new piece that does not fit at the spawn position ends the game
//!
//! # Example
//!
//! ```
//! use matrix_tetris_core::{GameConfig, GameSession, SimpleRng};
//! use matrix_tetris_types::GameAction;
//!
//! let config = GameConfig::default();
//! let mut game = GameSession::new(&config, SimpleRng::new(12345)).unwrap();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! ```

pub mod board;
pub mod config;
pub mod difficulty;
pub mod game_state;
pub mod glyphs;
pub mod moves;
pub mod piece;
pub mod rng;

pub use matrix_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use difficulty::FallTimer;
pub use game_state::{GameSession, LockOutcome, Phase, TickOutcome};
pub use glyphs::{digit_glyph, get_mask, letter_glyph, rotation_states, state_count, Mask};
pub use moves::{drop_distance, valid_move};
pub use piece::ActivePiece;
pub use rng::{RandomSource, ScriptedRng, SimpleRng};

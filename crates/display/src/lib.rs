//! Pixel matrix display module.
//!
//! This is a small rendering layer for a serpentine-wired RGB matrix. The
//! renderer only talks to the [`PixelDisplay`] trait, so the same code drives
//! an in-memory strip in tests and a terminal emulator in the binary.
//!
//! - [`mapper`]: board-to-matrix flip and serpentine strip addressing
//! - [`strip`]: the display contract and an in-memory LED strip
//! - [`sprite`]: palette-mapped sprites for `set_sprite` and `tile`
//! - [`game_view`]: board, piece and overlay rendering
//! - [`terminal`]: crossterm-backed matrix emulator

pub mod game_view;
pub mod mapper;
pub mod sprite;
pub mod strip;
pub mod terminal;

pub use matrix_tetris_core as core;
pub use matrix_tetris_types as types;

pub use game_view::{GameOverScreen, GameView};
pub use mapper::MatrixGeometry;
pub use sprite::Sprite;
pub use strip::{LedStrip, PixelDisplay};
pub use terminal::{encode_diff_into, encode_full_into, TerminalDisplay};

//! Matrix Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `matrix_tetris::{core,display,input,types}`
//! so the binary, integration tests and benches share one import path, and
//! hosts the control loop that ties them together.

pub use matrix_tetris_core as core;
pub use matrix_tetris_display as display;
pub use matrix_tetris_input as input;
pub use matrix_tetris_types as types;

pub mod game_loop;

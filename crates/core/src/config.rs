//! Game configuration - immutable settings shared by session and renderer
//!
//! Built once at startup and handed out by reference. Nothing in here changes
//! while a game is running.

use std::fmt;

use crate::types::{
    Color, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_PALETTE, LINE_CLEAR_POINTS, SPAWN_X,
    SPAWN_Y,
};

/// Static game settings
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub board_width: u8,
    pub board_height: u8,
    /// Anchor (col, row) of a freshly spawned piece's mask
    pub spawn: (i32, i32),
    /// Colors a spawned piece picks from
    pub palette: Vec<Color>,
    /// Shape library a spawned piece picks from
    pub shapes: Vec<PieceKind>,
    /// Score per cleared line
    pub line_clear_points: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            spawn: (SPAWN_X, SPAWN_Y),
            palette: DEFAULT_PALETTE.to_vec(),
            shapes: PieceKind::ALL.to_vec(),
            line_clear_points: LINE_CLEAR_POINTS,
        }
    }
}

impl GameConfig {
    pub fn with_board(mut self, width: u8, height: u8) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_palette(mut self, palette: impl Into<Vec<Color>>) -> Self {
        self.palette = palette.into();
        self
    }

    pub fn with_shapes(mut self, shapes: impl Into<Vec<PieceKind>>) -> Self {
        self.shapes = shapes.into();
        self
    }

    /// Check that spawning can always pick a shape and a color.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.shapes.is_empty() {
            return Err(ConfigError::EmptyShapeLibrary);
        }
        Ok(())
    }
}

/// Reasons a [`GameConfig`] cannot drive a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBoard,
    EmptyPalette,
    EmptyShapeLibrary,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "board must have at least one cell"),
            ConfigError::EmptyPalette => write!(f, "palette must contain at least one color"),
            ConfigError::EmptyShapeLibrary => {
                write!(f, "shape library must contain at least one piece kind")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_shipped_configuration() {
        let config = GameConfig::default();
        assert_eq!((config.board_width, config.board_height), (8, 32));
        assert_eq!(config.spawn, (2, 0));
        assert_eq!(config.palette.len(), 6);
        assert_eq!(config.shapes.len(), 7);
        assert_eq!(config.line_clear_points, 100);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_tables() {
        let config = GameConfig::default().with_palette(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::EmptyPalette));

        let config = GameConfig::default().with_shapes(Vec::new());
        assert_eq!(config.validate(), Err(ConfigError::EmptyShapeLibrary));

        let config = GameConfig::default().with_board(0, 32);
        assert_eq!(config.validate(), Err(ConfigError::EmptyBoard));
    }
}

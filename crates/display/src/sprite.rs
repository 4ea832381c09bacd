//! Palette-mapped sprites.
//!
//! A sprite is a grid of symbols plus a palette from symbol to color.
//! Symbols missing from the palette are transparent: drawing the sprite
//! leaves whatever was underneath.

use std::collections::HashMap;

use crate::types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    rows: Vec<Vec<char>>,
    palette: HashMap<char, Color>,
}

impl Sprite {
    /// Build a sprite from text rows, one symbol per character.
    ///
    /// ```
    /// use matrix_tetris_display::Sprite;
    /// use matrix_tetris_display::types::Color;
    ///
    /// let checker = Sprite::new(&["x.", ".x"], [('x', Color::WHITE)]);
    /// assert_eq!((checker.width(), checker.height()), (2, 2));
    /// assert_eq!(checker.color_at(0, 0), Some(Color::WHITE));
    /// assert_eq!(checker.color_at(0, 1), None);
    /// ```
    pub fn new(rows: &[&str], palette: impl IntoIterator<Item = (char, Color)>) -> Self {
        Self {
            rows: rows.iter().map(|row| row.chars().collect()).collect(),
            palette: palette.into_iter().collect(),
        }
    }

    /// Width of the first row; tiling steps by this.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Color at `(row, col)`, `None` where transparent or outside the sprite
    pub fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        let symbol = self.rows.get(row)?.get(col)?;
        self.palette.get(symbol).copied()
    }

    /// Opaque pixels as `(row, col, color)`
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, symbols)| {
            symbols.iter().enumerate().filter_map(move |(col, symbol)| {
                self.palette.get(symbol).map(|&color| (row, col, color))
            })
        })
    }
}

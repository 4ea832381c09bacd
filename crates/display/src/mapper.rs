//! Coordinate mapper: logical board cells to physical LED addresses.
//!
//! Two separate transforms, kept apart on purpose so each can be tested alone:
//!
//! 1. [`MatrixGeometry::board_to_physical`] turns a board `(col, row)` into a
//!    matrix `(x, y)`. Board rows run along the matrix width and are flipped,
//!    so board row 0 is the last physical column; board columns become
//!    physical rows.
//! 2. [`MatrixGeometry::serpentine_index`] turns a matrix `(x, y)` into the
//!    position on the LED strip. The strip snakes through the matrix column by
//!    column: even columns run top to bottom, odd columns bottom to top.

use crate::types::{MATRIX_HEIGHT, MATRIX_WIDTH};

/// Physical matrix dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixGeometry {
    pub width: u16,
    pub height: u16,
}

impl Default for MatrixGeometry {
    fn default() -> Self {
        Self::new(MATRIX_WIDTH, MATRIX_HEIGHT)
    }
}

impl MatrixGeometry {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of LEDs on the strip
    pub fn led_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Physical column showing board row `row`.
    ///
    /// Not bounds-checked; rows outside the board land outside the matrix and
    /// are dropped by the display.
    #[inline(always)]
    pub fn flip_row(&self, row: i32) -> i32 {
        (self.width as i32 - 1) - row
    }

    /// Matrix `(x, y)` for board `(col, row)`.
    #[inline(always)]
    pub fn board_to_physical(&self, col: i32, row: i32) -> (i32, i32) {
        (self.flip_row(row), col)
    }

    /// Strip position of matrix pixel `(x, y)`, or `None` outside the matrix.
    #[inline(always)]
    pub fn serpentine_index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        let h = self.height as usize;
        let (x, y) = (x as usize, y as usize);
        if x % 2 == 0 {
            Some(x * h + y)
        } else {
            Some((x + 1) * h - y - 1)
        }
    }

    /// Matrix `(x, y)` of strip position `index`; inverse of [`Self::serpentine_index`].
    pub fn physical_position(&self, index: usize) -> Option<(i32, i32)> {
        if index >= self.led_count() {
            return None;
        }
        let h = self.height as usize;
        let x = index / h;
        let offset = index % h;
        let y = if x % 2 == 0 { offset } else { h - 1 - offset };
        Some((x as i32, y as i32))
    }
}

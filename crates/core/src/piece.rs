//! Active piece - the falling shape and its orientation
//!
//! Rotation is a pure index change: the piece keeps an index into its kind's
//! list of rotation states and never recomputes geometry.

use crate::glyphs::{get_mask, state_count, Mask};
use crate::types::{Color, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Always in `0..state_count(kind)`
    rotation: usize,
    /// Column of the mask's top-left corner
    pub x: i32,
    /// Row of the mask's top-left corner
    pub y: i32,
    pub color: Color,
}

impl ActivePiece {
    /// Create a new piece at the spawn anchor with rotation 0
    pub fn spawn(kind: PieceKind, color: Color, (x, y): (i32, i32)) -> Self {
        Self {
            kind,
            rotation: 0,
            x,
            y,
            color,
        }
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Number of rotation states of this piece's kind
    pub fn state_count(&self) -> usize {
        state_count(self.kind)
    }

    /// Rotation index after applying `delta`, normalized into range.
    ///
    /// Negative deltas rotate backwards: with 4 states, `-1` from 0 is 3.
    pub fn rotation_after(&self, delta: i32) -> usize {
        let n = self.state_count() as i64;
        (self.rotation as i64 + delta as i64).rem_euclid(n) as usize
    }

    /// Mask for the current rotation
    pub fn mask(&self) -> &'static Mask {
        get_mask(self.kind, self.rotation)
    }

    /// Mask for the rotation `delta` states away from the current one
    pub fn mask_after(&self, delta: i32) -> &'static Mask {
        get_mask(self.kind, self.rotation_after(delta))
    }

    /// Apply a rotation delta in place
    pub fn rotate(&mut self, delta: i32) {
        self.rotation = self.rotation_after(delta);
    }

    /// Copy of the piece moved by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Absolute board cells `(col, row)` covered at a candidate transform
    pub fn cells_at(&self, dx: i32, dy: i32, drot: i32) -> impl Iterator<Item = (i32, i32)> {
        let x = self.x + dx;
        let y = self.y + dy;
        self.mask_after(drot)
            .cells()
            .map(move |(i, j)| (x + j as i32, y + i as i32))
    }

    /// Absolute board cells `(col, row)` covered right now
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        self.cells_at(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = Color::WHITE;

    #[test]
    fn test_spawn_starts_at_rotation_zero() {
        let piece = ActivePiece::spawn(PieceKind::T, WHITE, (2, 0));
        assert_eq!(piece.rotation(), 0);
        assert_eq!((piece.x, piece.y), (2, 0));
        assert_eq!(piece.color, WHITE);
    }

    #[test]
    fn test_rotation_wraps_both_directions() {
        let mut piece = ActivePiece::spawn(PieceKind::T, WHITE, (2, 0));
        assert_eq!(piece.rotation_after(1), 1);
        assert_eq!(piece.rotation_after(4), 0);
        assert_eq!(piece.rotation_after(-1), 3);
        assert_eq!(piece.rotation_after(-6), 2);

        piece.rotate(5);
        assert_eq!(piece.rotation(), 1);
        piece.rotate(-2);
        assert_eq!(piece.rotation(), 3);
    }

    #[test]
    fn test_single_state_piece_never_changes() {
        let mut piece = ActivePiece::spawn(PieceKind::O, WHITE, (2, 0));
        piece.rotate(1);
        assert_eq!(piece.rotation(), 0);
        piece.rotate(-7);
        assert_eq!(piece.rotation(), 0);
    }

    #[test]
    fn test_cells_are_offset_by_anchor() {
        let piece = ActivePiece::spawn(PieceKind::I, WHITE, (2, 0));
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(2, 2), (3, 2), (4, 2), (5, 2)]);

        let vertical: Vec<_> = piece.cells_at(0, 1, 1).collect();
        assert_eq!(vertical, vec![(2, 1), (2, 2), (2, 3), (2, 4)]);
    }

    #[test]
    fn test_shifted_keeps_rotation_and_color() {
        let mut piece = ActivePiece::spawn(PieceKind::L, WHITE, (2, 0));
        piece.rotate(1);
        let moved = piece.shifted(-1, 3);
        assert_eq!((moved.x, moved.y), (1, 3));
        assert_eq!(moved.rotation(), 1);
        assert_eq!(moved.color, WHITE);
    }
}

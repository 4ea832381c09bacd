//! Move validation - decides whether a proposed transform is legal
//!
//! A transform is `(dx, dy, drot)`: a shift in columns and rows plus a
//! rotation delta. It is legal iff every filled cell of the candidate mask
//! lands inside the board on an empty cell. Validation is read-only.

use crate::board::Board;
use crate::piece::ActivePiece;

/// Check a candidate transform against the board.
///
/// Stops at the first cell that is out of bounds or occupied.
pub fn valid_move(board: &Board, piece: &ActivePiece, dx: i32, dy: i32, drot: i32) -> bool {
    piece
        .cells_at(dx, dy, drot)
        .all(|(col, row)| !board.occupied(col, row))
}

/// Whether the piece is legal where it currently stands
pub fn fits(board: &Board, piece: &ActivePiece) -> bool {
    valid_move(board, piece, 0, 0, 0)
}

/// Number of rows the piece can fall before it rests on something
pub fn drop_distance(board: &Board, piece: &ActivePiece) -> i32 {
    let mut distance = 0;
    while valid_move(board, piece, 0, distance + 1, 0) {
        distance += 1;
    }
    distance
}

//! Board module - manages the grid of settled cells
//!
//! The board is a `width x height` grid (8 x 32 in the shipped configuration)
//! where each cell is either empty or holds the color of the piece that locked
//! there. Uses a flat vector in row-major order.
//! Coordinates: (col, row) where col grows left to right and row grows top to bottom.

use arrayvec::ArrayVec;

use crate::types::{Cell, Color};

/// The game board - flat row-major storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= self.width as i32 || row < 0 || row >= self.height as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (col, row)
    /// Returns None if out of bounds
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Whether (col, row) blocks a piece.
    ///
    /// Out-of-bounds positions are always blocked.
    pub fn occupied(&self, col: i32, row: i32) -> bool {
        !matches!(self.get(col, row), Some(None))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, col: i32, row: i32) -> bool {
        self.index(col, row).is_none()
    }

    /// Settle a colored cell at (col, row)
    /// Returns false (and writes nothing) if out of bounds
    pub fn place(&mut self, col: i32, row: i32, color: Color) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = Some(color);
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height as usize {
            return false;
        }
        let start = row * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (sorted top to bottom, indices as they were before the clear).
    ///
    /// Rows above a cleared row shift down, and empty rows are inserted at the
    /// top. A single lock can complete at most four rows, which bounds the
    /// returned list; further full rows are still cleared but not listed.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        self.compact(|row| {
            let _ = cleared_rows.try_push(row);
        });
        cleared_rows.reverse();
        cleared_rows
    }

    /// Clear all full rows and return how many were removed.
    ///
    /// Idempotent when no row is full.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut count = 0;
        self.compact(|_| count += 1);
        count
    }

    /// Two-pointer compaction from bottom to top, no allocation.
    /// `on_cleared` is called for every full row, bottom-most first.
    fn compact(&mut self, mut on_cleared: impl FnMut(usize)) {
        let width = self.width as usize;
        let mut write_row = self.height as usize;

        for read_row in (0..self.height as usize).rev() {
            if self.is_row_full(read_row) {
                on_cleared(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    let dst_start = write_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Fresh empty rows at the top
        self.cells[..write_row * width].fill(None);
    }

    /// Number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate occupied cells as `(col, row, color)`
    pub fn settled(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|color| ((idx % width) as i32, (idx / width) as i32, color))
        })
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn fill_row(board: &mut Board, row: i32, color: Color) {
        for col in 0..board.width() as i32 {
            board.place(col, row, color);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(8, 32);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(7, 0), Some(7));
        assert_eq!(board.index(0, 1), Some(8));
        assert_eq!(board.index(7, 31), Some(255));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(8, 0), None);
        assert_eq!(board.index(0, 32), None);
    }

    #[test]
    fn test_occupied_fails_closed() {
        let mut board = Board::new(8, 32);
        assert!(!board.occupied(3, 3));
        board.place(3, 3, RED);
        assert!(board.occupied(3, 3));

        assert!(board.occupied(-1, 0));
        assert!(board.occupied(0, -1));
        assert!(board.occupied(8, 0));
        assert!(board.occupied(0, 32));
    }

    #[test]
    fn test_place_out_of_bounds_is_dropped() {
        let mut board = Board::new(8, 32);
        assert!(!board.place(8, 0, RED));
        assert!(!board.place(0, -1, RED));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_clear_full_rows_reports_rows() {
        let mut board = Board::new(4, 6);
        fill_row(&mut board, 3, RED);
        fill_row(&mut board, 5, RED);
        board.place(1, 4, BLUE);
        board.place(0, 2, BLUE);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[3, 5]);

        // Row 4 fell by one (row 5 removed), row 2 fell by two.
        assert_eq!(board.get(1, 5), Some(Some(BLUE)));
        assert_eq!(board.get(0, 4), Some(Some(BLUE)));
        assert_eq!(board.occupied_count(), 2);
        assert!(board.to_rows()[..4].iter().flatten().all(|c| c.is_none()));
    }

    #[test]
    fn test_clear_full_lines_idempotent_without_full_rows() {
        let mut board = Board::new(4, 6);
        board.place(0, 5, RED);
        board.place(2, 3, BLUE);
        let before = board.clone();

        assert_eq!(board.clear_full_lines(), 0);
        assert_eq!(board, before);
        assert_eq!(board.clear_full_lines(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_settled_iterates_occupied_cells() {
        let mut board = Board::new(8, 32);
        board.place(2, 5, RED);
        board.place(7, 31, BLUE);
        let cells: Vec<_> = board.settled().collect();
        assert_eq!(cells, vec![(2, 5, RED), (7, 31, BLUE)]);
    }
}

//! Glyph module - piece shapes, digits and letters as bit masks
//!
//! Every glyph is written as rows of `'O'` (filled) and `'.'` (empty) and
//! packed into a [`Mask`] at compile time. Pieces are a list of rotation
//! states; a rotation is nothing more than picking another mask by index.
//!
//! Coordinates inside a mask are `(row, col)`, row 0 at the top.

use crate::types::PieceKind;

/// Maximum number of rows a mask can hold (letters are 5 tall)
pub const MAX_MASK_ROWS: usize = 5;

/// Maximum number of columns a mask can hold
pub const MAX_MASK_COLS: usize = 8;

/// Fixed-size grid of filled/empty cells.
///
/// Row `i` is stored as a bit set where bit `j` means column `j` is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    bits: [u8; MAX_MASK_ROWS],
    width: u8,
    height: u8,
}

impl Mask {
    /// Parse a mask from text rows.
    ///
    /// Rows shorter than the widest row are treated as padded with empty
    /// cells, so `"OO."` and `"OO.."` describe the same row.
    pub const fn parse(rows: &[&str]) -> Self {
        assert!(rows.len() <= MAX_MASK_ROWS, "mask has too many rows");

        let mut bits = [0u8; MAX_MASK_ROWS];
        let mut width = 0usize;
        let mut i = 0;
        while i < rows.len() {
            let row = rows[i].as_bytes();
            assert!(row.len() <= MAX_MASK_COLS, "mask row is too wide");
            if row.len() > width {
                width = row.len();
            }
            let mut j = 0;
            while j < row.len() {
                if row[j] == b'O' {
                    bits[i] |= 1u8 << j;
                }
                j += 1;
            }
            i += 1;
        }

        Self {
            bits,
            width: width as u8,
            height: rows.len() as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at `(row, col)` is filled. Outside the mask is empty.
    #[inline(always)]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height as usize && col < self.width as usize && self.bits[row] & (1 << col) != 0
    }

    /// Iterate filled cells as `(row, col)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |row| {
            (0..self.width as usize)
                .filter(move |&col| self.is_filled(row, col))
                .map(move |col| (row as i8, col as i8))
        })
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.bits.iter().map(|row| row.count_ones() as usize).sum()
    }
}

static I_STATES: [Mask; 2] = [
    Mask::parse(&["....", "....", "OOOO", "...."]),
    Mask::parse(&["O...", "O...", "O...", "O..."]),
];

static T_STATES: [Mask; 4] = [
    Mask::parse(&[".O..", "OOO.", "....", "...."]),
    Mask::parse(&[".O..", "OO..", ".O..", "...."]),
    Mask::parse(&["OOO.", ".O..", "....", "...."]),
    Mask::parse(&["O...", "OO..", "O...", "...."]),
];

static S_STATES: [Mask; 2] = [
    Mask::parse(&[".OO.", "OO..", "....", "...."]),
    Mask::parse(&["O...", "OO.", ".O..", "...."]),
];

static Z_STATES: [Mask; 2] = [
    Mask::parse(&["....", "OO..", ".OO", "...."]),
    Mask::parse(&[".O.", "OO..", "O...", "...."]),
];

static L_STATES: [Mask; 4] = [
    Mask::parse(&["O...", "O...", "OO..", "...."]),
    Mask::parse(&["..O.", "OOO.", "....", "...."]),
    Mask::parse(&["OO..", ".O..", ".O..", "...."]),
    Mask::parse(&["OOO.", "O...", "....", "...."]),
];

static J_STATES: [Mask; 4] = [
    Mask::parse(&["OO..", "O...", "O...", "...."]),
    Mask::parse(&["O...", "OOO.", "....", "...."]),
    Mask::parse(&[".O..", ".O..", "OO..", "...."]),
    Mask::parse(&["OOO.", "..O.", "....", "...."]),
];

static O_STATES: [Mask; 1] = [Mask::parse(&["....", "OO..", "OO..", "...."])];

/// All rotation states of a piece kind, in clockwise order
pub fn rotation_states(kind: PieceKind) -> &'static [Mask] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::O => &O_STATES,
    }
}

/// Number of distinct rotation states of a piece kind
pub fn state_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Mask for a rotation index; the index is taken modulo the state count.
pub fn get_mask(kind: PieceKind, rotation: usize) -> &'static Mask {
    let states = rotation_states(kind);
    &states[rotation % states.len()]
}

static DIGITS: [Mask; 10] = [
    Mask::parse(&["OOO", "O.O", "O.O", "O.O", "OOO"]),
    Mask::parse(&[".O.", "OO.", ".O.", ".O.", "OOO"]),
    Mask::parse(&["OOO", "..O", "OOO", "O..", "OOO"]),
    Mask::parse(&["OOO", "..O", "OOO", "..O", "OOO"]),
    Mask::parse(&["O.O", "O.O", "OOO", "..O", "..O"]),
    Mask::parse(&["OOO", "O..", "OOO", "..O", "OOO"]),
    Mask::parse(&["OOO", "O..", "OOO", "O.O", "OOO"]),
    Mask::parse(&["OOO", "..O", ".O.", ".O.", ".O."]),
    Mask::parse(&["OOO", "O.O", "OOO", "O.O", "OOO"]),
    Mask::parse(&["OOO", "O.O", "OOO", "..O", "OOO"]),
];

/// Glyph for a decimal digit (0-9)
pub fn digit_glyph(digit: u8) -> Option<&'static Mask> {
    DIGITS.get(digit as usize)
}

static LETTER_G: Mask = Mask::parse(&["OOOO.", "O....", "O.OO.", "O..O.", "OOOO."]);
static LETTER_A: Mask = Mask::parse(&["OOOO.", "O..O.", "OOOO.", "O..O.", "O..O."]);
static LETTER_M: Mask = Mask::parse(&["O...O", "OO.OO", "O.O.O", "O...O", "O...O"]);
static LETTER_E: Mask = Mask::parse(&[".OOOO", ".O...", ".OOOO", ".O...", ".OOOO"]);
static LETTER_O: Mask = Mask::parse(&["OOOO.", "O..O.", "O..O.", "O..O.", "OOOO."]);
static LETTER_V: Mask = Mask::parse(&["O...O", "O...O", "O...O", ".O.O.", "..O.."]);
static LETTER_R: Mask = Mask::parse(&[".OOO.", ".O..O", ".OOO.", ".O.O.", ".O..O"]);

/// First word of the game-over overlay
pub const GAME_WORD: &str = "GAME";

/// Second word of the game-over overlay
pub const OVER_WORD: &str = "OVER";

/// Glyph for one of the letters used by the game-over overlay (case-insensitive)
pub fn letter_glyph(letter: char) -> Option<&'static Mask> {
    match letter.to_ascii_uppercase() {
        'G' => Some(&LETTER_G),
        'A' => Some(&LETTER_A),
        'M' => Some(&LETTER_M),
        'E' => Some(&LETTER_E),
        'O' => Some(&LETTER_O),
        'V' => Some(&LETTER_V),
        'R' => Some(&LETTER_R),
        _ => None,
    }
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, matrix rendering, terminal emulation).
//!
//! # Board and Matrix Dimensions
//!
//! The playfield is a tall 8 x 32 grid, while the LED matrix it is drawn on is
//! physically 32 columns wide and 8 rows high. The two are intentionally
//! swapped: a logical board row becomes a physical matrix column.
//!
//! - **Board**: 8 columns (0-7) x 32 rows (0-31)
//! - **Matrix**: 32 columns (0-31) x 8 rows (0-7), 256 LEDs
//! - **Spawn position**: (2, 0)
//!
//! # Timing Constants
//!
//! The control loop sleeps for a fall interval that shrinks every tick and
//! wraps back to its baseline once it passes the reset threshold:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_MS` | 600 | Baseline sleep between gravity ticks |
//! | `FALL_STEP_MS` | 2 | Amount shaved off the interval each tick |
//! | `FALL_RESET_MS` | 200 | Below this the interval wraps back to baseline |
//!
//! # Examples
//!
//! ```
//! use matrix_tetris_types::{Color, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let red = Color::try_new(255, 0, 0).unwrap();
//! assert_eq!(red, Color::rgb(255, 0, 0));
//! assert!(Color::try_new(256, 0, 0).is_err());
//!
//! assert_eq!(BOARD_WIDTH, 8);
//! assert_eq!(BOARD_HEIGHT, 32);
//! ```

use std::fmt;

/// Board width in cells (8 columns)
pub const BOARD_WIDTH: u8 = 8;

/// Board height in cells (32 rows)
pub const BOARD_HEIGHT: u8 = 32;

/// Physical matrix width in pixels (32 columns)
pub const MATRIX_WIDTH: u16 = 32;

/// Physical matrix height in pixels (8 rows)
pub const MATRIX_HEIGHT: u16 = 8;

/// Number of LEDs on the strip
pub const LED_COUNT: usize = MATRIX_WIDTH as usize * MATRIX_HEIGHT as usize;

/// Spawn column of a new piece's mask anchor
pub const SPAWN_X: i32 = 2;

/// Spawn row of a new piece's mask anchor
pub const SPAWN_Y: i32 = 0;

/// Points awarded per cleared line
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Default matrix brightness (0 darkest, 255 brightest)
pub const DEFAULT_BRIGHTNESS: u8 = 10;

/// Baseline fall interval in milliseconds
pub const BASE_FALL_MS: u32 = 600;

/// Fall interval reduction per tick
pub const FALL_STEP_MS: u32 = 2;

/// Once the interval would drop below this, it wraps back to `BASE_FALL_MS`
pub const FALL_RESET_MS: u32 = 200;

/// Horizontal distance between the left edges of two "GAME"/"OVER" letters
pub const LETTER_PITCH: i32 = 5;

/// Left margin of the first game-over letter
pub const LETTER_MARGIN: i32 = 3;

/// Top row of the game-over letters
pub const LETTER_TOP: i32 = 1;

/// Blank columns between two score digits
pub const DIGIT_SPACING: i32 = 1;

/// Number of score digits per band before wrapping to the next one
pub const DIGIT_WRAP: usize = 7;

/// Vertical distance between two score digit bands
pub const DIGIT_BAND: i32 = 6;

/// Left edge of the first score digit
pub const DIGIT_LEFT: i32 = 2;

/// Top row of the first score digit band
pub const DIGIT_TOP: i32 = 1;

/// Color channel, used to report which component was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
        }
    }
}

/// A color channel value outside 0-255 was passed to [`Color::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidColorComponent {
    pub channel: Channel,
    pub value: i32,
}

impl fmt::Display for InvalidColorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} value out of range: {} (expected 0..=255)",
            self.channel.as_str(),
            self.value
        )
    }
}

impl std::error::Error for InvalidColorComponent {}

/// 24-bit RGB color.
///
/// Channels are stored as `u8`, so a constructed `Color` is always valid.
/// Values coming from wider integers go through [`Color::try_new`], which
/// rejects anything outside 0-255 instead of clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);

    /// Infallible constructor for compile-time palettes.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from arbitrary integers, failing on the first channel
    /// outside 0-255.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrix_tetris_types::{Channel, Color};
    ///
    /// assert!(Color::try_new(255, 0, 0).is_ok());
    /// let err = Color::try_new(0, -1, 0).unwrap_err();
    /// assert_eq!(err.channel, Channel::Green);
    /// ```
    pub fn try_new(r: i32, g: i32, b: i32) -> Result<Self, InvalidColorComponent> {
        Ok(Self {
            r: channel(Channel::Red, r)?,
            g: channel(Channel::Green, g)?,
            b: channel(Channel::Blue, b)?,
        })
    }

    pub fn is_black(&self) -> bool {
        *self == Color::BLACK
    }
}

fn channel(channel: Channel, value: i32) -> Result<u8, InvalidColorComponent> {
    u8::try_from(value).map_err(|_| InvalidColorComponent { channel, value })
}

pub const PURPLE1: Color = Color::rgb(86, 24, 127);
pub const PURPLE2: Color = Color::rgb(138, 38, 204);
pub const PURPLE3: Color = Color::rgb(173, 48, 255);
pub const PURPLE4: Color = Color::rgb(209, 140, 255);
pub const PURPLE5: Color = Color::rgb(218, 163, 215);

/// Piece colors; a spawned piece picks one uniformly at random.
pub const DEFAULT_PALETTE: [Color; 6] = [PURPLE1, PURPLE2, PURPLE3, PURPLE4, PURPLE5, Color::WHITE];

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell settled with the color of the piece that locked there
pub type Cell = Option<Color>;

/// The seven tetromino piece kinds
///
/// The rotation masks for each kind live in the core glyph library; this enum
/// is only the closed set of tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    S,
    Z,
    L,
    J,
    O,
}

impl PieceKind {
    /// Every piece kind, in shape-library order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
    ];

    /// Lowercase tag, used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::O => "o",
        }
    }
}

/// Player actions recognized by the game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Advance to the next rotation state
    Rotate,
    /// Drop to the lowest legal row and lock immediately
    HardDrop,
    /// Start a fresh session
    Restart,
}

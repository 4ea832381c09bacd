//! Display collaborator and an in-memory LED strip.
//!
//! [`PixelDisplay`] is the whole contract the renderer needs: clear, set a
//! pixel, flush. Sprite drawing and tiling are built on `set`. [`LedStrip`]
//! implements it over a serpentine-wired strip, keeping uncommitted writes
//! apart from what was last shown.

use anyhow::Result;

use crate::mapper::MatrixGeometry;
use crate::sprite::Sprite;
use crate::types::Color;

/// A fixed-size pixel display.
pub trait PixelDisplay {
    /// Matrix dimensions
    fn geometry(&self) -> MatrixGeometry;

    /// Set every pixel to black (not flushed)
    fn clear(&mut self);

    /// Set one pixel (not flushed). Coordinates outside the matrix are ignored.
    fn set(&mut self, x: i32, y: i32, color: Color);

    /// Flush all uncommitted changes.
    fn show(&mut self) -> Result<()>;

    /// Draw the opaque pixels of `sprite` with its top-left corner at `(x, y)`.
    fn set_sprite(&mut self, x: i32, y: i32, sprite: &Sprite) {
        for (row, col, color) in sprite.pixels() {
            self.set(x + col as i32, y + row as i32, color);
        }
    }

    /// Repeat `pattern` from `(x, y)` to the right and bottom edges.
    fn tile(&mut self, pattern: &Sprite, x: i32, y: i32) {
        let (width, height) = (pattern.width(), pattern.height());
        if width == 0 || height == 0 {
            return;
        }
        let geometry = self.geometry();
        for top in (y..geometry.height as i32).step_by(height) {
            for left in (x..geometry.width as i32).step_by(width) {
                self.set_sprite(left, top, pattern);
            }
        }
    }
}

/// A strip of LEDs snaking through a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedStrip {
    geometry: MatrixGeometry,
    brightness: u8,
    /// Written by `set`, in strip order
    pending: Vec<Color>,
    /// Copied from `pending` on `show`
    latched: Vec<Color>,
    shows: u64,
}

impl LedStrip {
    /// Create a strip for the default 32 x 8 matrix.
    ///
    /// Brightness 0 is darkest, 255 brightest.
    pub fn new(brightness: u8) -> Self {
        Self::with_geometry(MatrixGeometry::default(), brightness)
    }

    pub fn with_geometry(geometry: MatrixGeometry, brightness: u8) -> Self {
        let count = geometry.led_count();
        Self {
            geometry,
            brightness,
            pending: vec![Color::BLACK; count],
            latched: vec![Color::BLACK; count],
            shows: 0,
        }
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Fill the whole matrix with one color (not flushed)
    pub fn fill(&mut self, color: Color) {
        self.pending.fill(color);
    }

    /// Uncommitted color at strip position `index`
    pub fn pixel(&self, index: usize) -> Option<Color> {
        self.pending.get(index).copied()
    }

    /// Uncommitted color at matrix `(x, y)`
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.geometry
            .serpentine_index(x, y)
            .and_then(|idx| self.pixel(idx))
    }

    /// Colors as of the last `show`, in strip order
    pub fn latched(&self) -> &[Color] {
        &self.latched
    }

    /// Color shown at matrix `(x, y)` as of the last `show`
    pub fn latched_at(&self, x: i32, y: i32) -> Option<Color> {
        self.geometry
            .serpentine_index(x, y)
            .and_then(|idx| self.latched.get(idx).copied())
    }

    /// Number of `show` calls so far
    pub fn show_count(&self) -> u64 {
        self.shows
    }

    /// Color as the LEDs emit it at the configured brightness.
    pub fn scaled(&self, color: Color) -> Color {
        let scale = |c: u8| ((c as u16 * (self.brightness as u16 + 1)) >> 8) as u8;
        Color::rgb(scale(color.r), scale(color.g), scale(color.b))
    }
}

impl PixelDisplay for LedStrip {
    fn geometry(&self) -> MatrixGeometry {
        self.geometry
    }

    fn clear(&mut self) {
        self.fill(Color::BLACK);
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.geometry.serpentine_index(x, y) {
            self.pending[idx] = color;
        }
    }

    fn show(&mut self) -> Result<()> {
        self.latched.copy_from_slice(&self.pending);
        self.shows += 1;
        Ok(())
    }
}

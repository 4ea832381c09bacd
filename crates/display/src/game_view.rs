//! GameView: draws a game session and its overlays onto a pixel display.
//!
//! Board coordinates go through [`MatrixGeometry::board_to_physical`];
//! overlays (letters, digits) are laid out directly in matrix coordinates.

use anyhow::Result;

use crate::core::glyphs::{digit_glyph, letter_glyph, GAME_WORD, OVER_WORD};
use crate::core::{ActivePiece, Board, GameSession, Mask, RandomSource};
use crate::mapper::MatrixGeometry;
use crate::strip::PixelDisplay;
use crate::types::{
    Color, DIGIT_BAND, DIGIT_LEFT, DIGIT_SPACING, DIGIT_TOP, DIGIT_WRAP, LETTER_MARGIN,
    LETTER_PITCH, LETTER_TOP,
};

/// Which screen the game-over overlay is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverScreen {
    Game,
    Over,
    Score,
}

impl GameOverScreen {
    /// Screens cycle GAME, OVER, score on consecutive frames.
    pub fn for_frame(frame: u64) -> Self {
        match frame % 3 {
            0 => GameOverScreen::Game,
            1 => GameOverScreen::Over,
            _ => GameOverScreen::Score,
        }
    }
}

/// Renderer for the game and its overlay screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    geometry: MatrixGeometry,
    text_color: Color,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(MatrixGeometry::default())
    }
}

impl GameView {
    pub fn new(geometry: MatrixGeometry) -> Self {
        Self {
            geometry,
            text_color: Color::GREEN,
        }
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Draw one board cell.
    #[inline]
    pub fn draw_cell<D: PixelDisplay + ?Sized>(&self, display: &mut D, col: i32, row: i32, color: Color) {
        let (x, y) = self.geometry.board_to_physical(col, row);
        display.set(x, y, color);
    }

    /// Draw every settled cell.
    pub fn draw_board<D: PixelDisplay + ?Sized>(&self, display: &mut D, board: &Board) {
        for (col, row, color) in board.settled() {
            self.draw_cell(display, col, row, color);
        }
    }

    /// Draw the falling piece in its own color.
    pub fn draw_piece<D: PixelDisplay + ?Sized>(&self, display: &mut D, piece: &ActivePiece) {
        for (col, row) in piece.cells() {
            self.draw_cell(display, col, row, piece.color);
        }
    }

    /// Paint the falling piece black.
    ///
    /// Lets a caller that does not clear the whole display each frame remove
    /// the piece's previous position before drawing the next one.
    pub fn erase_piece<D: PixelDisplay + ?Sized>(&self, display: &mut D, piece: &ActivePiece) {
        for (col, row) in piece.cells() {
            self.draw_cell(display, col, row, Color::BLACK);
        }
    }

    /// Full frame: clear, settled cells, then the falling piece, then flush.
    ///
    /// Once the game is over the piece that failed to spawn is left out.
    pub fn render<R: RandomSource, D: PixelDisplay + ?Sized>(
        &self,
        display: &mut D,
        session: &GameSession<'_, R>,
    ) -> Result<()> {
        display.clear();
        self.draw_board(display, session.board());
        if !session.is_game_over() {
            self.draw_piece(display, session.active());
        }
        display.show()
    }

    /// Plot a glyph with its top-left corner at matrix `(left, top)`.
    pub fn draw_glyph<D: PixelDisplay + ?Sized>(
        &self,
        display: &mut D,
        glyph: &Mask,
        left: i32,
        top: i32,
        color: Color,
    ) {
        for (i, j) in glyph.cells() {
            display.set(left + j as i32, top + i as i32, color);
        }
    }

    /// Draw a word of overlay letters; unknown letters leave a gap.
    /// Returns the number of letters drawn.
    pub fn draw_word<D: PixelDisplay + ?Sized>(&self, display: &mut D, word: &str) -> usize {
        let mut drawn = 0;
        for (t, letter) in word.chars().enumerate() {
            if let Some(glyph) = letter_glyph(letter) {
                let left = LETTER_MARGIN + LETTER_PITCH * t as i32;
                self.draw_glyph(display, glyph, left, LETTER_TOP, self.text_color);
                drawn += 1;
            }
        }
        drawn
    }

    /// Draw a score as digit glyphs.
    ///
    /// Each digit starts one glyph width plus `DIGIT_SPACING` right of the
    /// previous one; after `DIGIT_WRAP` digits the next digit starts a new
    /// band `DIGIT_BAND` rows lower. On an 8-row matrix only the top row of
    /// that band is visible.
    pub fn draw_score<D: PixelDisplay + ?Sized>(&self, display: &mut D, score: u32) {
        // u32::MAX has 10 decimal digits; collected least significant first.
        let mut digits = [0u8; 10];
        let mut len = 0;
        let mut rest = score;
        loop {
            digits[len] = (rest % 10) as u8;
            len += 1;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }

        let mut left = DIGIT_LEFT;
        let mut top = DIGIT_TOP;
        for (i, &digit) in digits[..len].iter().rev().enumerate() {
            if i > 0 && i % DIGIT_WRAP == 0 {
                left = DIGIT_LEFT;
                top += DIGIT_BAND;
            }
            let Some(glyph) = digit_glyph(digit) else {
                continue;
            };
            self.draw_glyph(display, glyph, left, top, self.text_color);
            left += glyph.width() as i32 + DIGIT_SPACING;
        }
    }

    /// Full game-over frame for `screen`.
    pub fn render_game_over<D: PixelDisplay + ?Sized>(
        &self,
        display: &mut D,
        screen: GameOverScreen,
        score: u32,
    ) -> Result<()> {
        display.clear();
        match screen {
            GameOverScreen::Game => {
                self.draw_word(display, GAME_WORD);
            }
            GameOverScreen::Over => {
                self.draw_word(display, OVER_WORD);
            }
            GameOverScreen::Score => self.draw_score(display, score),
        }
        display.show()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::LedStrip;

    const RED: Color = Color::rgb(255, 0, 0);

    fn lit(strip: &LedStrip) -> usize {
        strip.latched().iter().filter(|c| !c.is_black()).count()
    }

    #[test]
    fn draw_cell_flips_rows_onto_columns() {
        let view = GameView::default();
        let mut strip = LedStrip::new(255);
        view.draw_cell(&mut strip, 0, 0, RED);
        view.draw_cell(&mut strip, 7, 31, RED);
        assert_eq!(strip.get(31, 0), Some(RED));
        assert_eq!(strip.get(0, 7), Some(RED));
    }

    #[test]
    fn game_over_screens_cycle() {
        assert_eq!(GameOverScreen::for_frame(0), GameOverScreen::Game);
        assert_eq!(GameOverScreen::for_frame(1), GameOverScreen::Over);
        assert_eq!(GameOverScreen::for_frame(2), GameOverScreen::Score);
        assert_eq!(GameOverScreen::for_frame(3), GameOverScreen::Game);
    }

    #[test]
    fn draw_word_places_letters_at_pitch() {
        let view = GameView::default().with_text_color(RED);
        let mut strip = LedStrip::new(255);
        assert_eq!(view.draw_word(&mut strip, "GAME"), 4);

        // Top-left pixel of G and of A.
        assert_eq!(strip.get(LETTER_MARGIN, LETTER_TOP), Some(RED));
        assert_eq!(strip.get(LETTER_MARGIN + LETTER_PITCH, LETTER_TOP), Some(RED));
        // G's blank fifth column stays dark.
        assert_eq!(strip.get(LETTER_MARGIN + 4, LETTER_TOP), Some(Color::BLACK));
    }

    #[test]
    fn draw_score_accumulates_offset() {
        let view = GameView::default().with_text_color(RED);
        let mut strip = LedStrip::new(255);
        view.draw_score(&mut strip, 11);

        // "1" has its top pixel in the middle column.
        assert_eq!(strip.get(DIGIT_LEFT + 1, DIGIT_TOP), Some(RED));
        assert_eq!(strip.get(DIGIT_LEFT + 3 + DIGIT_SPACING + 1, DIGIT_TOP), Some(RED));
        assert_eq!(strip.get(DIGIT_LEFT + 3, DIGIT_TOP), Some(Color::BLACK));
    }

    #[test]
    fn render_game_over_clears_first() {
        let view = GameView::default();
        let mut strip = LedStrip::new(255);
        strip.fill(RED);
        view.render_game_over(&mut strip, GameOverScreen::Score, 0).unwrap();
        // "0" glyph has 12 lit pixels and nothing else survives.
        assert_eq!(lit(&strip), 12);
    }
}

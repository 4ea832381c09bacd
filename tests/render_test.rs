//! Render tests - drive the game view into an in-memory LED strip
//!
//! The strip keeps the last shown frame separately from pending writes, so
//! these tests check exactly what the matrix would display.

use matrix_tetris::core::{Board, GameConfig, GameSession, ScriptedRng};
use matrix_tetris::display::{GameOverScreen, GameView, LedStrip, PixelDisplay};
use matrix_tetris::types::{Color, PieceKind};

const RED: Color = Color::rgb(255, 0, 0);

fn o_pieces() -> GameConfig {
    GameConfig::default()
        .with_shapes(vec![PieceKind::O])
        .with_palette(vec![Color::WHITE])
}

fn lit(strip: &LedStrip) -> usize {
    strip.latched().iter().filter(|c| !c.is_black()).count()
}

#[test]
fn test_active_piece_is_rendered_flipped() {
    let config = o_pieces();
    let session = GameSession::new(&config, ScriptedRng::new(vec![0])).unwrap();
    let mut strip = LedStrip::new(255);

    GameView::default().render(&mut strip, &session).unwrap();

    // O cells sit at board (2..=3, 1..=2); board row r shows in column 31 - r.
    for (x, y) in [(30, 2), (30, 3), (29, 2), (29, 3)] {
        assert_eq!(strip.latched_at(x, y), Some(Color::WHITE), "pixel ({}, {})", x, y);
    }
    assert_eq!(lit(&strip), 4);
    assert_eq!(strip.show_count(), 1);
}

#[test]
fn test_settled_cells_are_rendered() {
    let config = o_pieces();
    let mut board = Board::new(8, 32);
    board.place(0, 31, RED);
    board.place(7, 31, RED);
    let session = GameSession::with_board(&config, ScriptedRng::new(vec![0]), board).unwrap();
    let mut strip = LedStrip::new(255);

    GameView::default().render(&mut strip, &session).unwrap();

    assert_eq!(strip.latched_at(0, 0), Some(RED));
    assert_eq!(strip.latched_at(0, 7), Some(RED));
    assert_eq!(lit(&strip), 6);
}

#[test]
fn test_previous_frame_does_not_leak() {
    let config = o_pieces();
    let mut session = GameSession::new(&config, ScriptedRng::new(vec![0])).unwrap();
    let mut strip = LedStrip::new(255);
    let view = GameView::default();

    view.render(&mut strip, &session).unwrap();
    session.soft_drop();
    view.render(&mut strip, &session).unwrap();

    // The piece moved one board row down, i.e. one matrix column left.
    assert_eq!(strip.latched_at(30, 2), Some(Color::BLACK));
    assert_eq!(strip.latched_at(28, 2), Some(Color::WHITE));
    assert_eq!(lit(&strip), 4);
}

#[test]
fn test_erase_then_redraw_without_clear() {
    let config = o_pieces();
    let mut session = GameSession::new(&config, ScriptedRng::new(vec![0])).unwrap();
    let mut strip = LedStrip::new(255);
    let view = GameView::default();

    view.render(&mut strip, &session).unwrap();
    let before = *session.active();
    assert!(session.try_move(1, 1));

    view.erase_piece(&mut strip, &before);
    view.draw_piece(&mut strip, session.active());
    strip.show().unwrap();

    // Only the moved piece is lit: board rows 2-3 in columns 3-4.
    assert_eq!(lit(&strip), 4);
    for (x, y) in [(29, 3), (29, 4), (28, 3), (28, 4)] {
        assert_eq!(strip.latched_at(x, y), Some(Color::WHITE), "pixel ({}, {})", x, y);
    }
    assert_eq!(strip.latched_at(30, 2), Some(Color::BLACK));
}

#[test]
fn test_redraw_without_erase_leaves_trail() {
    let config = o_pieces();
    let mut session = GameSession::new(&config, ScriptedRng::new(vec![0])).unwrap();
    let mut strip = LedStrip::new(255);
    let view = GameView::default();

    view.render(&mut strip, &session).unwrap();
    assert!(session.soft_drop());
    view.draw_piece(&mut strip, session.active());
    strip.show().unwrap();

    // Old row 1 stays lit next to the overlapping new cells.
    assert_eq!(lit(&strip), 6);
}

#[test]
fn test_game_over_hides_failed_spawn() {
    let config = o_pieces();
    let mut board = Board::new(8, 32);
    board.place(2, 1, RED);
    let session = GameSession::with_board(&config, ScriptedRng::new(vec![0]), board).unwrap();
    assert!(session.is_game_over());

    let mut strip = LedStrip::new(255);
    GameView::default().render(&mut strip, &session).unwrap();

    assert_eq!(lit(&strip), 1);
    assert_eq!(strip.latched_at(30, 2), Some(RED));
}

#[test]
fn test_game_over_screens_cycle() {
    assert_eq!(GameOverScreen::for_frame(0), GameOverScreen::Game);
    assert_eq!(GameOverScreen::for_frame(1), GameOverScreen::Over);
    assert_eq!(GameOverScreen::for_frame(2), GameOverScreen::Score);
    assert_eq!(GameOverScreen::for_frame(3), GameOverScreen::Game);
}

#[test]
fn test_game_over_word_layout() {
    let view = GameView::default();
    let mut strip = LedStrip::new(255);

    view.render_game_over(&mut strip, GameOverScreen::Game, 0).unwrap();

    // "G" starts at the left margin, one row down.
    assert_eq!(strip.latched_at(3, 1), Some(Color::GREEN));
    assert_eq!(strip.latched_at(2, 1), Some(Color::BLACK));
    assert_eq!(strip.latched_at(3, 0), Some(Color::BLACK));
    // Nothing on the right edge past the last letter.
    for y in 0..8 {
        assert_eq!(strip.latched_at(31, y), Some(Color::BLACK));
    }
}

#[test]
fn test_game_over_score_digits() {
    let view = GameView::default().with_text_color(RED);
    let mut strip = LedStrip::new(255);

    view.render_game_over(&mut strip, GameOverScreen::Score, 200).unwrap();

    // "2" is 11 cells, each "0" is 12.
    assert_eq!(lit(&strip), 35);
    // Digits advance by glyph width plus one blank column.
    assert_eq!(strip.latched_at(2, 1), Some(RED));
    assert_eq!(strip.latched_at(5, 1), Some(Color::BLACK));
    assert_eq!(strip.latched_at(6, 1), Some(RED));
    assert_eq!(strip.latched_at(10, 1), Some(RED));
}

#[test]
fn test_eighth_digit_band_shows_only_its_top_row() {
    let view = GameView::default();
    let mut strip = LedStrip::new(255);

    view.draw_score(&mut strip, 12_345_678);
    strip.show().unwrap();

    // The eighth digit starts a new band at the left edge, row 7. Its other
    // rows fall past the matrix and are dropped.
    assert_eq!(strip.latched_at(2, 7), Some(Color::GREEN));
    for x in 0..32 {
        assert_eq!(strip.latched_at(x, 6), Some(Color::BLACK), "gap row at x = {}", x);
    }
}

#[test]
fn test_brightness_scales_emitted_color() {
    let strip = LedStrip::new(127);
    assert_eq!(strip.scaled(Color::WHITE), Color::rgb(127, 127, 127));
    assert_eq!(LedStrip::new(255).scaled(RED), RED);
    assert_eq!(LedStrip::new(0).scaled(RED), Color::BLACK);
}

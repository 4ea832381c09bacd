//! Cooperative control loop.
//!
//! One iteration polls at most one key without blocking, applies it, advances
//! gravity by one tick, renders, and sleeps for the current fall interval.
//! Once the game is over the loop cycles the overlay screens instead, and a
//! soft-drop or restart key starts a new game.
//!
//! Sleeping is handed in by the caller so the loop can run at full speed
//! under test.

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::core::{FallTimer, GameSession, RandomSource, TickOutcome};
use crate::display::{GameOverScreen, GameView, PixelDisplay};
use crate::input::{handle_key_event, should_quit, KeySource};
use crate::types::GameAction;

/// Run until a quit key is read.
pub fn run<R, D, K>(
    session: &mut GameSession<'_, R>,
    view: &GameView,
    display: &mut D,
    keys: &mut K,
    mut sleep: impl FnMut(Duration),
) -> Result<()>
where
    R: RandomSource,
    D: PixelDisplay + ?Sized,
    K: KeySource + ?Sized,
{
    let mut fall = FallTimer::default();
    let mut game_over_frame: u64 = 0;

    loop {
        let key = keys.poll_key()?;
        if key.is_some_and(should_quit) {
            info!(score = session.score(), "quit");
            return Ok(());
        }
        let action = key.and_then(handle_key_event);

        if session.is_game_over() {
            let screen = GameOverScreen::for_frame(game_over_frame);
            view.render_game_over(display, screen, session.score())?;
            game_over_frame += 1;

            if matches!(action, Some(GameAction::SoftDrop | GameAction::Restart)) {
                session.reset();
                fall.reset();
                game_over_frame = 0;
            }
            sleep(fall.interval());
            continue;
        }

        if let Some(action) = action {
            session.apply_action(action);
            view.render(display, session)?;
        }

        if let TickOutcome::Locked(outcome) = session.update() {
            if outcome.lines_cleared > 0 {
                info!(lines = outcome.lines_cleared, score = session.score(), "lines cleared");
            }
        }
        view.render(display, session)?;

        sleep(fall.tick());
    }
}

//! Game state module - the session state machine
//!
//! This module ties together the board, the active piece, the random source
//! and the score. It handles gravity ticks, player transforms, locking, line
//! clears and the game-over transition.
//!
//! States: `Falling -> (lock, line clear) -> Falling` with a new piece, or
//! `Falling -> GameOver` when a freshly spawned piece does not fit.
//! Locking and line clearing complete inside a single call and are reported
//! through [`LockOutcome`].

use tracing::{debug, info};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::moves::{drop_distance, fits, valid_move};
use crate::piece::ActivePiece;
use crate::rng::RandomSource;
use crate::types::GameAction;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A piece is falling and accepts player transforms
    Falling,
    /// Terminal until [`GameSession::reset`]; board and score are frozen
    GameOver,
}

/// Result of locking a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    pub lines_cleared: usize,
    /// Points added to the score by this lock
    pub points: u32,
    /// The next piece could not spawn
    pub game_over: bool,
}

/// Result of a gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece could not move down and was locked
    Locked(LockOutcome),
    /// The session is over; nothing happened
    Idle,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<'a, R> {
    config: &'a GameConfig,
    rng: R,
    board: Board,
    active: ActivePiece,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    phase: Phase,
}

impl<'a, R: RandomSource> GameSession<'a, R> {
    /// Start a session on an empty board and spawn the first piece
    pub fn new(config: &'a GameConfig, rng: R) -> Result<Self, ConfigError> {
        let board = Board::new(config.board_width, config.board_height);
        Self::with_board(config, rng, board)
    }

    /// Start a session on a pre-filled board.
    ///
    /// The first piece spawns against `board`, so a board whose spawn area is
    /// already blocked yields a session that is over from the start.
    pub fn with_board(config: &'a GameConfig, mut rng: R, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        let active = Self::draw_piece(config, &mut rng);
        let mut session = Self {
            config,
            rng,
            board,
            active,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            phase: Phase::Falling,
        };
        session.check_spawn();
        Ok(session)
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Pick a shape, then a color, uniformly from the configured tables
    fn draw_piece(config: &GameConfig, rng: &mut R) -> ActivePiece {
        let kind = config.shapes[rng.next_index(config.shapes.len())];
        let color = config.palette[rng.next_index(config.palette.len())];
        ActivePiece::spawn(kind, color, config.spawn)
    }

    /// Replace the active piece with a fresh one from the random source
    fn spawn_piece(&mut self) {
        self.active = Self::draw_piece(self.config, &mut self.rng);
        self.check_spawn();
    }

    /// The only game-over trigger: a new piece that does not fit
    fn check_spawn(&mut self) {
        if fits(&self.board, &self.active) {
            debug!(kind = self.active.kind.as_str(), "piece spawned");
        } else {
            self.phase = Phase::GameOver;
            info!(score = self.score, lines = self.lines, "game over");
        }
    }

    /// Ask the move validator about a transform of the active piece.
    ///
    /// Always false once the game is over.
    pub fn valid_move(&self, dx: i32, dy: i32, drot: i32) -> bool {
        !self.is_game_over() && valid_move(&self.board, &self.active, dx, dy, drot)
    }

    /// Shift the active piece if the move is legal
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if !self.valid_move(dx, dy, 0) {
            return false;
        }
        self.active = self.active.shifted(dx, dy);
        true
    }

    /// Rotate the active piece by `delta` states if legal
    pub fn try_rotate(&mut self, delta: i32) -> bool {
        if !self.valid_move(0, 0, delta) {
            return false;
        }
        self.active.rotate(delta);
        true
    }

    /// Move down one row if possible. Never locks.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Drop to the lowest legal row and lock immediately.
    ///
    /// Returns `None` when the game is already over.
    pub fn hard_drop(&mut self) -> Option<LockOutcome> {
        if self.is_game_over() {
            return None;
        }
        let distance = drop_distance(&self.board, &self.active);
        self.active = self.active.shifted(0, distance);
        Some(self.lock_piece())
    }

    /// One gravity tick: fall one row, or lock when resting on something
    pub fn update(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }
        if self.try_move(0, 1) {
            TickOutcome::Fell
        } else {
            TickOutcome::Locked(self.lock_piece())
        }
    }

    /// Stamp the active piece into the board, clear lines, score, and spawn
    /// the next piece.
    ///
    /// The last legal position already satisfies bounds and overlap, so cells
    /// are written without re-checking.
    pub fn lock_piece(&mut self) -> LockOutcome {
        let color = self.active.color;
        for (col, row) in self.active.cells() {
            self.board.place(col, row, color);
        }
        self.pieces_locked = self.pieces_locked.saturating_add(1);

        let lines_cleared = self.board.clear_full_lines();
        let points = (lines_cleared as u32).saturating_mul(self.config.line_clear_points);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared as u32);

        debug!(
            kind = self.active.kind.as_str(),
            x = self.active.x,
            y = self.active.y,
            lines_cleared,
            score = self.score,
            "piece locked"
        );

        self.spawn_piece();

        LockOutcome {
            lines_cleared,
            points,
            game_over: self.is_game_over(),
        }
    }

    /// Apply a player action.
    ///
    /// Transforms are rejected once the game is over; `Restart` always works.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.try_rotate(1),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Clear the board and score and spawn a fresh piece.
    ///
    /// The random source keeps its state, so a restarted game does not replay
    /// the previous one.
    pub fn reset(&mut self) {
        info!(score = self.score, "session reset");
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.pieces_locked = 0;
        self.phase = Phase::Falling;
        self.spawn_piece();
    }
}

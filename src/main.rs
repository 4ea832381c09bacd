//! Matrix Tetris runner (default binary).
//!
//! Plays on an emulated 32x8 LED matrix inside the terminal, reading keys
//! from the same terminal.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use matrix_tetris::core::{GameConfig, GameSession, SimpleRng};
use matrix_tetris::display::{GameView, TerminalDisplay};
use matrix_tetris::game_loop;
use matrix_tetris::input::TerminalKeys;
use matrix_tetris::types::DEFAULT_BRIGHTNESS;

#[derive(Debug, Parser)]
#[command(name = "matrix-tetris", about = "Falling blocks on an emulated LED matrix")]
struct Args {
    /// Matrix brightness, 0 (darkest) to 255 (brightest)
    #[arg(long, default_value_t = DEFAULT_BRIGHTNESS)]
    brightness: u8,

    /// Seed for piece and color selection (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    let config = GameConfig::default();
    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, brightness = args.brightness, "starting");

    let mut session = GameSession::new(&config, SimpleRng::new(seed))?;
    let mut display = TerminalDisplay::new(args.brightness);
    display.enter()?;

    let result = game_loop::run(
        &mut session,
        &GameView::default(),
        &mut display,
        &mut TerminalKeys::new(),
        thread::sleep,
    );

    // Always try to restore terminal state.
    if let Err(err) = display.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // stdout belongs to the matrix; without a file there is nowhere to log.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

//! Non-blocking key sources.
//!
//! The control loop asks for at most one key per iteration and must never
//! wait for one: "no key" is a normal answer.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Something that can be polled for a pressed key without blocking.
pub trait KeySource {
    /// Return the next pressed key, or `None` when nothing is pending.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Reads key presses from the controlling terminal via crossterm.
///
/// Requires raw mode to be enabled by the display side.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Releases and terminal auto-repeat carry no new action.
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

/// Replays a prepared list of keys, then reports "no key" forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Option<KeyEvent>>,
}

impl ScriptedKeys {
    /// `None` entries stand for loop iterations where no key was pressed.
    pub fn new(keys: impl IntoIterator<Item = Option<KeyEvent>>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.keys.is_empty()
    }
}

impl KeySource for ScriptedKeys {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.keys.pop_front().flatten())
    }
}

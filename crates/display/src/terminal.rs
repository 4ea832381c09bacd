//! TerminalDisplay: emulates the LED matrix in a real terminal.
//!
//! Pixels are written into an in-memory [`LedStrip`]. On `show` the strip is
//! latched and the latched colors are painted as two-column blocks, redrawing
//! only LEDs that changed since the previous frame.

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use crossterm::{
    cursor,
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::mapper::MatrixGeometry;
use crate::strip::{LedStrip, PixelDisplay};
use crate::types::Color;

/// Glyph used for one LED (two columns to keep pixels roughly square).
const LED: &str = "██";

pub struct TerminalDisplay {
    stdout: io::Stdout,
    strip: LedStrip,
    /// Latched colors of the previous frame, `None` forces a full redraw.
    last: Option<Vec<Color>>,
    buf: Vec<u8>,
}

impl TerminalDisplay {
    pub fn new(brightness: u8) -> Self {
        Self::with_strip(LedStrip::new(brightness))
    }

    pub fn with_strip(strip: LedStrip) -> Self {
        Self {
            stdout: io::stdout(),
            strip,
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        debug!(brightness = self.strip.brightness(), "terminal display entered");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        debug!("terminal display exited");
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl PixelDisplay for TerminalDisplay {
    fn geometry(&self) -> MatrixGeometry {
        self.strip.geometry()
    }

    fn clear(&mut self) {
        self.strip.clear();
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        self.strip.set(x, y, color);
    }

    fn show(&mut self) -> Result<()> {
        self.strip.show()?;

        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) => {
                encode_diff_into(prev, &self.strip, &mut self.buf)?;
                prev.copy_from_slice(self.strip.latched());
            }
            None => {
                encode_full_into(&self.strip, &mut self.buf)?;
                self.last = Some(self.strip.latched().to_vec());
            }
        }
        self.flush_buf()
    }
}

/// Encode a full repaint of the latched strip into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(strip: &LedStrip, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let geometry = strip.geometry();
    let mut current: Option<Color> = None;
    for y in 0..geometry.height as i32 {
        out.queue(cursor::MoveTo(0, y as u16))?;
        for x in 0..geometry.width as i32 {
            let color = strip.latched_at(x, y).unwrap_or_default();
            put_led(out, strip.scaled(color), &mut current)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the LEDs whose latched color differs from `prev` into `out`.
///
/// Returns the number of LEDs repainted.
pub fn encode_diff_into(prev: &[Color], strip: &LedStrip, out: &mut Vec<u8>) -> Result<usize> {
    let geometry = strip.geometry();
    let mut current: Option<Color> = None;
    let mut changed = 0;

    for (index, (&before, &now)) in prev.iter().zip(strip.latched()).enumerate() {
        if before == now {
            continue;
        }
        let Some((x, y)) = geometry.physical_position(index) else {
            continue;
        };
        out.queue(cursor::MoveTo(x as u16 * 2, y as u16))?;
        put_led(out, strip.scaled(now), &mut current)?;
        changed += 1;
    }

    out.queue(ResetColor)?;
    Ok(changed)
}

fn put_led(out: &mut Vec<u8>, color: Color, current: &mut Option<Color>) -> Result<()> {
    if *current != Some(color) {
        out.queue(SetForegroundColor(to_term_color(color)))?;
        *current = Some(color);
    }
    out.queue(Print(LED))?;
    Ok(())
}

fn to_term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

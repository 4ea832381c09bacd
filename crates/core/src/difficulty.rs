//! Fall interval countdown
//!
//! The control loop sleeps between gravity ticks. The sleep shrinks by a fixed
//! step every tick, and once it would fall below the reset threshold it jumps
//! back to the baseline. The thresholds are tuned values, not a formula.

use std::time::Duration;

use crate::types::{BASE_FALL_MS, FALL_RESET_MS, FALL_STEP_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallTimer {
    base_ms: u32,
    step_ms: u32,
    reset_ms: u32,
    current_ms: u32,
}

impl FallTimer {
    pub fn new(base_ms: u32, step_ms: u32, reset_ms: u32) -> Self {
        Self {
            base_ms,
            step_ms,
            reset_ms,
            current_ms: base_ms,
        }
    }

    /// Interval to sleep after the current tick
    pub fn interval_ms(&self) -> u32 {
        self.current_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.current_ms as u64)
    }

    /// Return the current interval and count down for the next tick
    pub fn tick(&mut self) -> Duration {
        let interval = self.interval();
        let next = self.current_ms.saturating_sub(self.step_ms);
        self.current_ms = if next < self.reset_ms {
            self.base_ms
        } else {
            next
        };
        interval
    }

    /// Back to the baseline interval (new game)
    pub fn reset(&mut self) {
        self.current_ms = self.base_ms;
    }
}

impl Default for FallTimer {
    fn default() -> Self {
        Self::new(BASE_FALL_MS, FALL_STEP_MS, FALL_RESET_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_by_step() {
        let mut timer = FallTimer::new(600, 50, 400);
        assert_eq!(timer.tick(), Duration::from_millis(600));
        assert_eq!(timer.tick(), Duration::from_millis(550));
        assert_eq!(timer.interval_ms(), 500);
    }

    #[test]
    fn wraps_to_baseline_below_threshold() {
        let mut timer = FallTimer::new(600, 100, 400);
        let seen: Vec<u32> = (0..5).map(|_| timer.tick().as_millis() as u32).collect();
        assert_eq!(seen, vec![600, 500, 400, 600, 500]);
    }

    #[test]
    fn never_drops_below_reset_threshold() {
        let mut timer = FallTimer::default();
        for _ in 0..2000 {
            let ms = timer.tick().as_millis() as u32;
            assert!(ms >= FALL_RESET_MS && ms <= BASE_FALL_MS);
        }
    }

    #[test]
    fn reset_restores_baseline() {
        let mut timer = FallTimer::default();
        timer.tick();
        timer.tick();
        timer.reset();
        assert_eq!(timer.interval_ms(), BASE_FALL_MS);
    }
}

//! Simulated progress while a generation request is outstanding.
//!
//! The value is user feedback only; it does not track the request.

use crate::models::ProgressConfig;
use std::time::Duration;

/// Timing and increments of the simulated progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressPolicy {
    /// Interval between increments
    pub tick: Duration,
    /// Percentage added per tick
    pub step: u8,
    /// Highest value reached before the response arrives
    pub cap: u8,
    /// Value shown once the response has arrived
    pub complete: u8,
    /// Time the final value stays visible before returning to idle
    pub reset_delay: Duration,
}

impl Default for ProgressPolicy {
    fn default() -> Self {
        Self::from_config(&ProgressConfig::default())
    }
}

impl ProgressPolicy {
    pub fn from_config(config: &ProgressConfig) -> Self {
        Self {
            tick: Duration::from_millis(config.tick_ms),
            step: config.step,
            cap: config.cap,
            complete: config.complete,
            reset_delay: Duration::from_millis(config.reset_delay_ms),
        }
    }

    /// Value after one more tick. Never exceeds `cap`, never decreases.
    pub fn advance(&self, current: u8) -> u8 {
        if current >= self.cap {
            current
        } else {
            current.saturating_add(self.step).min(self.cap)
        }
    }
}

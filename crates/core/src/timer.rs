//! Gravity timer - fixed-timestep accumulator.
//!
//! The host loop reports elapsed wall time; the timer answers how many gravity
//! ticks are due. No threads, no callbacks: a cancelled timer simply never
//! reports another tick, so nothing can fire after teardown.

use crate::types::DEFAULT_GRAVITY_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    accumulated_ms: u32,
    cancelled: bool,
}

impl GravityTimer {
    /// A running timer. Intervals below 1ms are raised to 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0,
            cancelled: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Add elapsed time and return the number of ticks now due.
    /// The remainder carries over to the next call.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.cancelled {
            return 0;
        }
        let total = self.accumulated_ms.saturating_add(elapsed_ms);
        self.accumulated_ms = total % self.interval_ms;
        total / self.interval_ms
    }

    /// Milliseconds until the next tick, `None` once cancelled.
    pub fn until_next_ms(&self) -> Option<u32> {
        if self.cancelled {
            return None;
        }
        Some(self.interval_ms - self.accumulated_ms)
    }

    /// Stop for good. Idempotent.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.accumulated_ms = 0;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Default for GravityTimer {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY_MS)
    }
}

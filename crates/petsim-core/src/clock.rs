//! Injectable time source.
//!
//! The engine never sleeps or sets timers; it asks its clock for the current
//! epoch milliseconds and processes whatever has fallen due.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Local, Timelike, Utc};

pub const MS_PER_HOUR: u64 = 60 * 60 * 1000;

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;

    /// Local hour of day (0-23) for presentation.
    fn hour_of_day(&self) -> u32 {
        ((self.now_ms() / MS_PER_HOUR) % 24) as u32
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }

    fn hour_of_day(&self) -> u32 {
        Local::now().hour()
    }
}

/// Hand-driven clock for tests and the headless harness.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();
        handle.advance(500);
        assert_eq!(clock.now_ms(), 1_500);
        clock.set(10);
        assert_eq!(handle.now_ms(), 10);
    }

    #[test]
    fn test_hour_of_day() {
        let clock = ManualClock::new(26 * MS_PER_HOUR + 5);
        assert_eq!(clock.hour_of_day(), 2);
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}

//! Repeating tasks and the order in which due work is processed.

use serde::{Deserialize, Serialize};

/// Work the engine can have pending.
///
/// The derived ordering breaks ties between jobs due at the same instant:
/// an arrival runs before a hold ends, both before the tick, the tick
/// before the refill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Job {
    TravelArrival,
    HoldEnd,
    Tick,
    AutoRefill,
}

/// A fixed-period task anchored at a start time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RepeatingTask {
    period_ms: u64,
    next_due_ms: u64,
}

impl RepeatingTask {
    /// First run is one period after `start_ms`.
    pub fn new(period_ms: u64, start_ms: u64) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms,
            next_due_ms: start_ms.saturating_add(period_ms),
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        self.next_due_ms <= now_ms
    }

    /// Move to the following period after a run.
    pub fn advance(&mut self) {
        self.next_due_ms = self.next_due_ms.saturating_add(self.period_ms);
    }
}

/// Earliest `(time, job)` among the candidates that are due by `now_ms`.
pub fn earliest_due(
    candidates: impl IntoIterator<Item = (u64, Job)>,
    now_ms: u64,
) -> Option<(u64, Job)> {
    candidates
        .into_iter()
        .filter(|(at, _)| *at <= now_ms)
        .min()
}

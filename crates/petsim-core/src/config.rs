//! Engine parameters.
//!
//! Defaults come from [`petsim_logic::constants`]; they are design values and
//! are not read from files or the environment.

use petsim_logic::constants::{
    AUTO_REFILL_PERIOD_MS, RANDOM_EVENT_PROBABILITY, SNAPSHOT_MAX_AGE_MS, TICK_PERIOD_MS,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Period of the passive tick
    pub tick_period_ms: u64,
    /// Period of the food bowl auto-refill
    pub auto_refill_period_ms: u64,
    /// Chance per tick of a random event
    pub random_event_probability: f64,
    /// Snapshots this old or older are ignored on load
    pub snapshot_max_age_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: TICK_PERIOD_MS,
            auto_refill_period_ms: AUTO_REFILL_PERIOD_MS,
            random_event_probability: RANDOM_EVENT_PROBABILITY,
            snapshot_max_age_ms: SNAPSHOT_MAX_AGE_MS,
        }
    }
}

impl SimConfig {
    /// Defaults with random events switched off.
    pub fn without_random_events() -> Self {
        Self {
            random_event_probability: 0.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        let c = SimConfig::default();
        assert_eq!(c.tick_period_ms, 10_000);
        assert_eq!(c.auto_refill_period_ms, 180_000);
        assert!((c.random_event_probability - 0.10).abs() < f64::EPSILON);
        assert_eq!(c.snapshot_max_age_ms, 86_400_000);
    }
}

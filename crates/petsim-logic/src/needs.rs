//! Passive needs: the stat half of one tick.
//!
//! Order matters: every condition sees the values left by the steps before it.
//! 1. Unconditional decay (hunger, sleepiness up; energy, hygiene down)
//! 2. Starving, exhausted, filthy, unwell penalties
//! 3. Sleep recovery, then the auto-wake check

use crate::constants::decay::*;
use crate::state::PetState;
use crate::stats::{Stat, Stats};

/// Which branches of a tick fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeedsReport {
    pub starving: bool,
    pub exhausted: bool,
    pub filthy: bool,
    pub unwell: bool,
    pub rested: bool,
    /// The pet slept enough to wake up this tick.
    pub should_wake: bool,
}

/// Apply one tick of passive decay and recovery to `stats`.
///
/// The caller performs the wake transition when `should_wake` is set.
pub fn passive_tick(stats: &mut Stats, state: PetState) -> NeedsReport {
    let mut report = NeedsReport::default();

    stats.apply_delta(Stat::Hunger, HUNGER_PER_TICK);
    stats.apply_delta(Stat::Sleepiness, SLEEPINESS_PER_TICK);
    stats.apply_delta(Stat::Energy, -ENERGY_PER_TICK);
    stats.apply_delta(Stat::Hygiene, -HYGIENE_PER_TICK);

    if stats.hunger > STARVING_ABOVE {
        stats.apply_delta(Stat::Happiness, -2.0);
        stats.apply_delta(Stat::Health, -1.0);
        report.starving = true;
    }

    if stats.sleepiness > EXHAUSTED_ABOVE && !state.is_sleeping() {
        stats.apply_delta(Stat::Happiness, -1.5);
        stats.apply_delta(Stat::Energy, -2.0);
        report.exhausted = true;
    }

    if stats.hygiene < FILTHY_BELOW {
        stats.apply_delta(Stat::Health, -2.0);
        stats.apply_delta(Stat::Happiness, -1.0);
        report.filthy = true;
    }

    if stats.health < UNWELL_BELOW {
        stats.apply_delta(Stat::Happiness, -3.0);
        report.unwell = true;
    }

    if state.is_sleeping() {
        stats.apply_delta(Stat::Energy, SLEEP_ENERGY_GAIN);
        stats.apply_delta(Stat::Sleepiness, -SLEEP_SLEEPINESS_RELIEF);
        stats.apply_delta(Stat::Health, SLEEP_HEALTH_GAIN);
        report.rested = true;
        report.should_wake = is_fully_rested(stats);
    }

    report
}

/// Auto-wake condition while sleeping.
pub fn is_fully_rested(stats: &Stats) -> bool {
    stats.energy >= WAKE_MIN_ENERGY && stats.sleepiness <= WAKE_MAX_SLEEPINESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_unconditional_decay() {
        let mut s = Stats {
            hunger: 10.0,
            sleepiness: 10.0,
            energy: 50.0,
            hygiene: 50.0,
            ..Stats::default()
        };
        let report = passive_tick(&mut s, PetState::Idle);
        assert_eq!(report, NeedsReport::default());
        assert!(approx(s.hunger, 11.5));
        assert!(approx(s.sleepiness, 11.0));
        assert!(approx(s.energy, 49.2));
        assert!(approx(s.hygiene, 49.5));
        assert!(approx(s.happiness, 100.0));
        assert!(approx(s.health, 100.0));
    }

    #[test]
    fn test_default_stats_stay_clamped() {
        let mut s = Stats::default();
        passive_tick(&mut s, PetState::Idle);
        assert!(approx(s.energy, 99.2));
        assert!(approx(s.hygiene, 99.5));
        assert!(s.in_bounds());
    }

    #[test]
    fn test_starving_penalty() {
        let mut s = Stats {
            hunger: 69.0,
            ..Stats::default()
        };
        let report = passive_tick(&mut s, PetState::Idle);
        // 69 + 1.5 crosses the threshold this tick
        assert!(report.starving);
        assert!(approx(s.happiness, 98.0));
        assert!(approx(s.health, 99.0));
    }

    #[test]
    fn test_exhaustion_only_when_awake() {
        let mut awake = Stats {
            sleepiness: 85.0,
            energy: 50.0,
            ..Stats::default()
        };
        let report = passive_tick(&mut awake, PetState::Idle);
        assert!(report.exhausted);
        assert!(approx(awake.happiness, 98.5));
        assert!(approx(awake.energy, 50.0 - 0.8 - 2.0));

        let mut asleep = Stats {
            sleepiness: 85.0,
            energy: 50.0,
            ..Stats::default()
        };
        let report = passive_tick(&mut asleep, PetState::Sleeping);
        assert!(!report.exhausted);
        assert!(report.rested);
    }

    #[test]
    fn test_filthy_then_unwell_cascade() {
        // Hygiene drop pushes health under 50, which then triggers the unwell penalty.
        let mut s = Stats {
            hygiene: 20.0,
            health: 51.0,
            ..Stats::default()
        };
        let report = passive_tick(&mut s, PetState::Idle);
        assert!(report.filthy);
        assert!(report.unwell);
        assert!(approx(s.health, 49.0));
        assert!(approx(s.happiness, 100.0 - 1.0 - 3.0));
    }

    #[test]
    fn test_sleep_recovery() {
        let mut s = Stats {
            energy: 40.0,
            sleepiness: 60.0,
            health: 70.0,
            ..Stats::default()
        };
        let report = passive_tick(&mut s, PetState::Sleeping);
        assert!(report.rested);
        assert!(!report.should_wake);
        assert!(approx(s.energy, 40.0 - 0.8 + 10.0));
        assert!(approx(s.sleepiness, 60.0 + 1.0 - 12.0));
        assert!(approx(s.health, 73.0));
    }

    #[test]
    fn test_auto_wake_condition() {
        // 90 - 0.8 + 10 = 99.2 energy, 25 + 1 - 12 = 14 sleepiness
        let mut s = Stats {
            energy: 90.0,
            sleepiness: 25.0,
            ..Stats::default()
        };
        assert!(passive_tick(&mut s, PetState::Sleeping).should_wake);

        // 80 - 0.8 + 10 = 89.2 energy: not enough
        let mut s = Stats {
            energy: 80.0,
            sleepiness: 10.0,
            ..Stats::default()
        };
        assert!(!passive_tick(&mut s, PetState::Sleeping).should_wake);

        // 40 + 1 - 12 = 29 sleepiness: still sleepy
        let mut s = Stats {
            energy: 100.0,
            sleepiness: 40.0,
            ..Stats::default()
        };
        assert!(!passive_tick(&mut s, PetState::Sleeping).should_wake);
    }

    #[test]
    fn test_never_wakes_when_awake() {
        let mut s = Stats::default();
        assert!(!passive_tick(&mut s, PetState::Idle).should_wake);
    }

    #[test]
    fn test_rested_boundaries() {
        let s = Stats {
            energy: 95.0,
            sleepiness: 20.0,
            ..Stats::default()
        };
        assert!(is_fully_rested(&s));
        let s = Stats {
            energy: 94.99,
            sleepiness: 20.0,
            ..Stats::default()
        };
        assert!(!is_fully_rested(&s));
    }
}

//! Game constants: periods, hold durations, decay rates, thresholds.
//!
//! These are fixed design parameters, not runtime settings. All durations are
//! in milliseconds of simulated time.

/// Period of the passive tick.
pub const TICK_PERIOD_MS: u64 = 10_000;

/// Period of the food bowl auto-refill timer.
pub const AUTO_REFILL_PERIOD_MS: u64 = 180_000;

/// How long the pet stays eating after the feed effect.
pub const EAT_HOLD_MS: u64 = 2_000;

/// How long the pet stays playing after the play effect.
pub const PLAY_HOLD_MS: u64 = 2_500;

/// Upper bound on a single travel leg.
pub const TRAVEL_CAP_MS: u64 = 2_000;

/// Milliseconds of travel per percentage point of distance.
pub const TRAVEL_MS_PER_POINT: f32 = 25.0;

/// The pet keeps walking in place this long after reaching its target.
pub const ARRIVAL_SETTLE_MS: u64 = 500;

/// Chance per tick that one random event fires.
pub const RANDOM_EVENT_PROBABILITY: f64 = 0.10;

/// Inner chance for the "caught a cold" event once selected.
pub const ILLNESS_PROBABILITY: f64 = 0.30;

/// Snapshots at least this old are treated as absent.
pub const SNAPSHOT_MAX_AGE_MS: u64 = 24 * 60 * 60 * 1000;

/// Default on-screen duration for a notice.
pub const NOTICE_MS: u64 = 2_500;

/// On-screen duration for the welcome notice.
pub const WELCOME_NOTICE_MS: u64 = 3_000;

/// Lower and upper bounds of every stat.
pub mod bounds {
    pub const STAT_MIN: f32 = 0.0;
    pub const STAT_MAX: f32 = 100.0;
}

/// Action guard thresholds.
pub mod guards {
    /// Feeding requires at least this much hunger.
    pub const MIN_HUNGER_TO_EAT: f32 = 15.0;
    /// Playing requires at least this much energy.
    pub const MIN_ENERGY_TO_PLAY: f32 = 25.0;
    /// Medicine is refused above this health.
    pub const MAX_HEALTH_FOR_MEDICINE: f32 = 80.0;
}

/// Passive tick rates and thresholds.
pub mod decay {
    pub const HUNGER_PER_TICK: f32 = 1.5;
    pub const SLEEPINESS_PER_TICK: f32 = 1.0;
    pub const ENERGY_PER_TICK: f32 = 0.8;
    pub const HYGIENE_PER_TICK: f32 = 0.5;

    pub const STARVING_ABOVE: f32 = 70.0;
    pub const EXHAUSTED_ABOVE: f32 = 80.0;
    pub const FILTHY_BELOW: f32 = 30.0;
    pub const UNWELL_BELOW: f32 = 50.0;

    pub const SLEEP_ENERGY_GAIN: f32 = 10.0;
    pub const SLEEP_SLEEPINESS_RELIEF: f32 = 12.0;
    pub const SLEEP_HEALTH_GAIN: f32 = 3.0;

    /// Auto-wake requires at least this much energy...
    pub const WAKE_MIN_ENERGY: f32 = 95.0;
    /// ...and at most this much sleepiness.
    pub const WAKE_MAX_SLEEPINESS: f32 = 20.0;
}

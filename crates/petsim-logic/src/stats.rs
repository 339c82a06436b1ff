//! The six bounded pet stats and clamped delta application.

use serde::{Deserialize, Serialize};

use crate::constants::bounds::{STAT_MAX, STAT_MIN};

/// Names of the six stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Happiness,
    Hunger,
    Energy,
    Sleepiness,
    Health,
    Hygiene,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Happiness,
        Stat::Hunger,
        Stat::Energy,
        Stat::Sleepiness,
        Stat::Health,
        Stat::Hygiene,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stat::Happiness => "happiness",
            Stat::Hunger => "hunger",
            Stat::Energy => "energy",
            Stat::Sleepiness => "sleepiness",
            Stat::Health => "health",
            Stat::Hygiene => "hygiene",
        }
    }

    /// Look a stat up by its persisted name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Pet wellbeing, every field in `[0, 100]`.
///
/// Missing fields deserialize to their construction defaults so a partial
/// saved document still restores what it has.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub happiness: f32,
    pub hunger: f32,
    pub energy: f32,
    pub sleepiness: f32,
    pub health: f32,
    pub hygiene: f32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            happiness: 100.0,
            hunger: 0.0,
            energy: 100.0,
            sleepiness: 0.0,
            health: 100.0,
            hygiene: 100.0,
        }
    }
}

impl Stats {
    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Happiness => self.happiness,
            Stat::Hunger => self.hunger,
            Stat::Energy => self.energy,
            Stat::Sleepiness => self.sleepiness,
            Stat::Health => self.health,
            Stat::Hygiene => self.hygiene,
        }
    }

    fn slot(&mut self, stat: Stat) -> &mut f32 {
        match stat {
            Stat::Happiness => &mut self.happiness,
            Stat::Hunger => &mut self.hunger,
            Stat::Energy => &mut self.energy,
            Stat::Sleepiness => &mut self.sleepiness,
            Stat::Health => &mut self.health,
            Stat::Hygiene => &mut self.hygiene,
        }
    }

    /// Add `delta` to one stat and clamp the result.
    pub fn apply_delta(&mut self, stat: Stat, delta: f32) {
        let value = self.slot(stat);
        *value = clamp_stat(*value + delta);
    }

    /// Name-based variant of [`Stats::apply_delta`]; unknown names are ignored.
    pub fn apply_named_delta(&mut self, name: &str, delta: f32) {
        if let Some(stat) = Stat::from_name(name) {
            self.apply_delta(stat, delta);
        }
    }

    /// Apply every field of a bundled delta, clamping each.
    pub fn apply(&mut self, delta: &StatDelta) {
        self.apply_delta(Stat::Happiness, delta.happiness);
        self.apply_delta(Stat::Hunger, delta.hunger);
        self.apply_delta(Stat::Energy, delta.energy);
        self.apply_delta(Stat::Sleepiness, delta.sleepiness);
        self.apply_delta(Stat::Health, delta.health);
        self.apply_delta(Stat::Hygiene, delta.hygiene);
    }

    /// Clamp every field, e.g. after loading untrusted values.
    pub fn clamped(self) -> Self {
        Self {
            happiness: clamp_stat(self.happiness),
            hunger: clamp_stat(self.hunger),
            energy: clamp_stat(self.energy),
            sleepiness: clamp_stat(self.sleepiness),
            health: clamp_stat(self.health),
            hygiene: clamp_stat(self.hygiene),
        }
    }

    pub fn in_bounds(&self) -> bool {
        Stat::ALL
            .iter()
            .all(|s| (STAT_MIN..=STAT_MAX).contains(&self.get(*s)))
    }
}

/// Six signed deltas, in stat order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatDelta {
    pub happiness: f32,
    pub hunger: f32,
    pub energy: f32,
    pub sleepiness: f32,
    pub health: f32,
    pub hygiene: f32,
}

impl StatDelta {
    pub const NONE: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    pub const fn new(
        happiness: f32,
        hunger: f32,
        energy: f32,
        sleepiness: f32,
        health: f32,
        hygiene: f32,
    ) -> Self {
        Self {
            happiness,
            hunger,
            energy,
            sleepiness,
            health,
            hygiene,
        }
    }
}

fn clamp_stat(value: f32) -> f32 {
    // NaN would slip through `clamp`; treat it as the floor.
    if value.is_nan() {
        STAT_MIN
    } else {
        value.clamp(STAT_MIN, STAT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Stats::default();
        assert_eq!(s.happiness, 100.0);
        assert_eq!(s.hunger, 0.0);
        assert_eq!(s.energy, 100.0);
        assert_eq!(s.sleepiness, 0.0);
        assert_eq!(s.health, 100.0);
        assert_eq!(s.hygiene, 100.0);
    }

    #[test]
    fn test_apply_delta_adds() {
        let mut s = Stats::default();
        s.apply_delta(Stat::Hunger, 42.5);
        assert!((s.hunger - 42.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_apply_delta_clamps_both_ends() {
        let mut s = Stats::default();
        s.apply_delta(Stat::Happiness, 500.0);
        assert_eq!(s.happiness, 100.0);
        s.apply_delta(Stat::Happiness, -1e9);
        assert_eq!(s.happiness, 0.0);
    }

    #[test]
    fn test_repeated_extremes_stay_in_bounds() {
        let mut s = Stats::default();
        for i in 0..200 {
            let delta = if i % 2 == 0 { f32::MAX } else { f32::MIN };
            for stat in Stat::ALL {
                s.apply_delta(stat, delta);
                assert!(s.in_bounds(), "{:?} out of bounds after {}", stat, delta);
            }
        }
    }

    #[test]
    fn test_nan_delta_clamps_to_floor() {
        let mut s = Stats::default();
        s.apply_delta(Stat::Energy, f32::NAN);
        assert_eq!(s.energy, 0.0);
    }

    #[test]
    fn test_unknown_name_is_ignored() {
        let mut s = Stats::default();
        s.apply_named_delta("charisma", 10.0);
        assert_eq!(s, Stats::default());
        s.apply_named_delta("hygiene", -10.0);
        assert_eq!(s.hygiene, 90.0);
    }

    #[test]
    fn test_bundled_delta() {
        let mut s = Stats {
            hunger: 50.0,
            happiness: 95.0,
            ..Stats::default()
        };
        s.apply(&StatDelta::new(10.0, -30.0, 5.0, 0.0, 0.0, 0.0));
        assert_eq!(s.hunger, 20.0);
        assert_eq!(s.happiness, 100.0);
        assert_eq!(s.energy, 100.0);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let s: Stats = serde_json::from_str(r#"{"hunger": 33.0}"#).unwrap();
        assert_eq!(s.hunger, 33.0);
        assert_eq!(s.happiness, 100.0);
        assert_eq!(s.hygiene, 100.0);
    }

    #[test]
    fn test_clamped() {
        let s = Stats {
            hunger: 140.0,
            health: -3.0,
            ..Stats::default()
        }
        .clamped();
        assert!(s.in_bounds());
        assert_eq!(s.hunger, 100.0);
        assert_eq!(s.health, 0.0);
    }
}

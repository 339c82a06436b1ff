//! Component definitions for the pet world.
//!
//! Components are pure data attached to entities. The pet entity carries
//! [`Pet`], [`Stats`], [`Activity`] and [`Position`]; [`Travel`] and [`Hold`]
//! are present only while those phases are pending. The food bowl is its own
//! entity carrying [`FoodBowl`].

use petsim_logic::actions::Errand;
use petsim_logic::travel::Location;
use serde::{Deserialize, Serialize};

pub use petsim_logic::state::PetState;
pub use petsim_logic::stats::Stats;

/// Marker component identifying the pet entity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Pet;

/// What the pet is doing and since when (clock ms)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Activity {
    pub state: PetState,
    pub since_ms: u64,
}

impl Activity {
    pub fn new(state: PetState, since_ms: u64) -> Self {
        Self { state, since_ms }
    }
}

/// Horizontal position in percent of the play area
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: Location::Center.position(),
        }
    }
}

/// Travel leg in progress - present only while walking
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Travel {
    pub errand: Errand,
    pub from: f32,
    pub to: f32,
    pub departed_at: u64,
    /// End of the moving part of the leg.
    pub reached_at: u64,
    /// When the errand's effect phase begins (after settling).
    pub arrives_at: u64,
}

impl Travel {
    /// Interpolated position at clock time `now_ms`.
    pub fn position_at(&self, now_ms: u64) -> f32 {
        if now_ms >= self.reached_at || self.reached_at <= self.departed_at {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.departed_at) as f32;
        let span = (self.reached_at - self.departed_at) as f32;
        self.from + (self.to - self.from) * (elapsed / span)
    }
}

/// Eating or playing hold - present until `ends_at`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hold {
    pub errand: Errand,
    pub ends_at: u64,
}

/// The food bowl
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FoodBowl {
    pub full: bool,
}

impl Default for FoodBowl {
    fn default() -> Self {
        Self { full: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_interpolation() {
        let t = Travel {
            errand: Errand::Play,
            from: 50.0,
            to: 75.0,
            departed_at: 1_000,
            reached_at: 1_625,
            arrives_at: 2_125,
        };
        assert_eq!(t.position_at(1_000), 50.0);
        assert!((t.position_at(1_312) - 62.48).abs() < 0.05);
        assert_eq!(t.position_at(1_625), 75.0);
        assert_eq!(t.position_at(2_000), 75.0);
    }

    #[test]
    fn test_zero_length_leg() {
        let t = Travel {
            errand: Errand::Eat,
            from: 50.0,
            to: 50.0,
            departed_at: 0,
            reached_at: 0,
            arrives_at: 500,
        };
        assert_eq!(t.position_at(0), 50.0);
    }

    #[test]
    fn test_defaults() {
        assert!(FoodBowl::default().full);
        assert_eq!(Position::default().x, 50.0);
        assert_eq!(Activity::default().state, PetState::Idle);
    }
}

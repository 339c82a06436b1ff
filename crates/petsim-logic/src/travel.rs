//! Named locations in the play area and travel timing.
//!
//! Positions are horizontal percentages of the play area. A travel leg lasts
//! `distance * 25ms`, capped at 2s, and is followed by a short settle while
//! the pet keeps walking in place.

use serde::{Deserialize, Serialize};

use crate::constants::{ARRIVAL_SETTLE_MS, TRAVEL_CAP_MS, TRAVEL_MS_PER_POINT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Center,
    Food,
    Toy,
    Bed,
}

impl Location {
    /// Horizontal position in percent.
    pub fn position(self) -> f32 {
        match self {
            Location::Center => 50.0,
            Location::Food => 50.0,
            Location::Toy => 75.0,
            Location::Bed => 30.0,
        }
    }
}

/// Time spent moving between two positions, before settling.
pub fn travel_duration_ms(from: f32, to: f32) -> u64 {
    let distance = (to - from).abs();
    if !distance.is_finite() {
        return TRAVEL_CAP_MS;
    }
    let ms = (distance * TRAVEL_MS_PER_POINT).round() as u64;
    ms.min(TRAVEL_CAP_MS)
}

/// Total time from departure until the errand's effect phase starts.
pub fn arrival_delay_ms(from: f32, to: f32) -> u64 {
    travel_duration_ms(from, to) + ARRIVAL_SETTLE_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let center = Location::Center.position();
        let food = Location::Food.position();
        assert_eq!(travel_duration_ms(center, food), 0);
        assert_eq!(arrival_delay_ms(center, food), ARRIVAL_SETTLE_MS);
    }

    #[test]
    fn test_proportional_to_distance() {
        // 50 -> 30 is 20 points
        assert_eq!(
            travel_duration_ms(Location::Center.position(), Location::Bed.position()),
            500
        );
        // 50 -> 75 is 25 points
        assert_eq!(
            travel_duration_ms(Location::Center.position(), Location::Toy.position()),
            625
        );
        // symmetric
        assert_eq!(travel_duration_ms(75.0, 30.0), travel_duration_ms(30.0, 75.0));
    }

    #[test]
    fn test_capped() {
        assert_eq!(travel_duration_ms(0.0, 100.0), TRAVEL_CAP_MS);
        assert_eq!(travel_duration_ms(0.0, f32::INFINITY), TRAVEL_CAP_MS);
    }
}

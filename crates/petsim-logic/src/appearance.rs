//! Presentation lookups with no simulation semantics.
//!
//! Front ends map these to their own assets.

use serde::{Deserialize, Serialize};

use crate::state::PetState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PetImage {
    Neutral,
    Happy,
    Sad,
    Sleeping,
    Walking,
}

impl PetImage {
    /// Conventional asset identifier.
    pub fn asset(self) -> &'static str {
        match self {
            PetImage::Neutral => "neutral",
            PetImage::Happy => "happy",
            PetImage::Sad => "sad",
            PetImage::Sleeping => "sleeping",
            PetImage::Walking => "walking",
        }
    }
}

/// Pick the pet image for a state and happiness level.
pub fn pet_image(state: PetState, happiness: f32) -> PetImage {
    match state {
        PetState::Sleeping => PetImage::Sleeping,
        PetState::Walking => PetImage::Walking,
        PetState::Eating | PetState::Playing => PetImage::Happy,
        PetState::Idle if happiness >= 70.0 => PetImage::Happy,
        PetState::Idle if happiness <= 30.0 => PetImage::Sad,
        PetState::Idle => PetImage::Neutral,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning 🌅",
            TimeOfDay::Afternoon => "Afternoon ☀️",
            TimeOfDay::Evening => "Evening 🌇",
            TimeOfDay::Night => "Night 🌙",
        }
    }
}

/// Label for a local hour of day (0-23).
pub fn time_of_day(hour: u32) -> TimeOfDay {
    match hour {
        5..=11 => TimeOfDay::Morning,
        12..=16 => TimeOfDay::Afternoon,
        17..=19 => TimeOfDay::Evening,
        _ => TimeOfDay::Night,
    }
}

/// Sun or moon: the sky is lit from 06:00 to 17:59.
pub fn is_daytime(hour: u32) -> bool {
    (6..18).contains(&hour)
}

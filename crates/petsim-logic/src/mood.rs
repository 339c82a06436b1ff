//! Mood evaluation: a pure, priority-ordered mapping from state and stats.
//!
//! Rules are checked top to bottom and the first match wins:
//!
//! | # | Condition | Mood |
//! |---|-----------|------|
//! | 1 | state is sleeping | Sleeping |
//! | 2 | health < 50 | Sick |
//! | 3 | happiness >= 85 | Very Happy |
//! | 4 | happiness >= 70 | Happy |
//! | 5 | happiness >= 50 | Content |
//! | 6 | happiness >= 30 | Sad |
//! | 7 | happiness >= 15 | Very Sad |
//! | 8 | otherwise | Depressed |

use serde::{Deserialize, Serialize};

use crate::state::PetState;
use crate::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Sleeping,
    Sick,
    #[serde(rename = "Very Happy")]
    VeryHappy,
    Happy,
    Content,
    Sad,
    #[serde(rename = "Very Sad")]
    VerySad,
    Depressed,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Sleeping => "Sleeping",
            Mood::Sick => "Sick",
            Mood::VeryHappy => "Very Happy",
            Mood::Happy => "Happy",
            Mood::Content => "Content",
            Mood::Sad => "Sad",
            Mood::VerySad => "Very Sad",
            Mood::Depressed => "Depressed",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Mood::Sleeping => "💤",
            Mood::Sick => "🤒",
            Mood::VeryHappy => "😄",
            Mood::Happy => "😊",
            Mood::Content => "🙂",
            Mood::Sad => "😔",
            Mood::VerySad => "😢",
            Mood::Depressed => "😭",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive the mood for a state and stat snapshot.
pub fn evaluate_mood(state: PetState, stats: &Stats) -> Mood {
    if state.is_sleeping() {
        return Mood::Sleeping;
    }
    if stats.health < 50.0 {
        return Mood::Sick;
    }
    match stats.happiness {
        h if h >= 85.0 => Mood::VeryHappy,
        h if h >= 70.0 => Mood::Happy,
        h if h >= 50.0 => Mood::Content,
        h if h >= 30.0 => Mood::Sad,
        h if h >= 15.0 => Mood::VerySad,
        _ => Mood::Depressed,
    }
}

//! Player-facing notices and transient presentation cues.

use serde::{Deserialize, Serialize};

use crate::constants::{NOTICE_MS, WELCOME_NOTICE_MS};

/// A short thought bubble shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    Welcome,
    FreshStart,

    // Rejections
    Asleep,
    BowlEmpty,
    NotHungry,
    TooTired,
    NotSick,
    BowlAlreadyFull,

    // Action results
    Eating,
    Playing,
    Goodnight,
    WokeUp,
    Petted,
    Cleaned,
    Treated,
    Medicated,
    BowlRefilled,

    // Random events
    FoundShiny,
    CaughtCold,
    LovesYou,
    Energetic,
    BowlRefilledBySomeone,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Welcome => "Hello! I'm your new pet! 🐾 Take good care of me!",
            Notice::FreshStart => "Fresh start! Let's have fun! 🌟",
            Notice::Asleep => "Zzz... I'm sleeping... 😴",
            Notice::BowlEmpty => "The food bowl is empty! Please refill! 🍽️",
            Notice::NotHungry => "I'm not hungry right now! 🍎",
            Notice::TooTired => "I'm too tired to play... 💤",
            Notice::NotSick => "I'm not sick! I feel fine! 💊",
            Notice::BowlAlreadyFull => "Food bowl is already full! 🍽️",
            Notice::Eating => "Yum! This is delicious! 🍓",
            Notice::Playing => "Yay! Playtime is fun! 🎾",
            Notice::Goodnight => "Goodnight... Time for sleep... 😴",
            Notice::WokeUp => "Good morning! I feel rested! ☀️",
            Notice::Petted => "I love when you pet me! 💕",
            Notice::Cleaned => "I feel fresh and clean! 🛁",
            Notice::Treated => "Yummy treat! Thank you! 🍪",
            Notice::Medicated => "Medicine tastes bad but I needed it... 🩹",
            Notice::BowlRefilled => "Food bowl has been refilled! 🍎",
            Notice::FoundShiny => "I found something shiny! ✨",
            Notice::CaughtCold => "I think I caught a cold... 🤧",
            Notice::LovesYou => "I love being your pet! 💖",
            Notice::Energetic => "I'm feeling energetic! Let's play! ⚡",
            Notice::BowlRefilledBySomeone => "Someone refilled my food bowl! 🎉",
        }
    }

    /// How long the notice stays on screen.
    pub fn duration_ms(self) -> u64 {
        match self {
            Notice::Welcome => WELCOME_NOTICE_MS,
            _ => NOTICE_MS,
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Short-lived visual hints for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Happy,
    Eating,
    Bouncing,
    Refilling,
}

impl Cue {
    pub fn duration_ms(self) -> u64 {
        match self {
            Cue::Happy => 1_000,
            Cue::Refilling => 500,
            // Eating and bouncing last as long as their hold.
            Cue::Eating => crate::constants::EAT_HOLD_MS,
            Cue::Bouncing => crate::constants::PLAY_HOLD_MS,
        }
    }
}

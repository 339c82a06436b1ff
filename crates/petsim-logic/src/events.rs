//! Random event catalog.
//!
//! Each tick has a 10% chance to pick one entry uniformly; the entry then
//! checks its own gate and may do nothing. Found-something-shiny is gated on
//! the pet being awake, like the illness and bowl-refill entries, while the
//! affection entry fires even during sleep.

use serde::{Deserialize, Serialize};

use crate::notice::Notice;
use crate::state::PetState;
use crate::stats::StatDelta;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RandomEvent {
    FoundShiny,
    CaughtCold,
    LovesYou,
    Energetic,
    BowlRefill,
}

/// Uniform selection order.
pub const CATALOG: [RandomEvent; 5] = [
    RandomEvent::FoundShiny,
    RandomEvent::CaughtCold,
    RandomEvent::LovesYou,
    RandomEvent::Energetic,
    RandomEvent::BowlRefill,
];

impl RandomEvent {
    /// Whether this entry draws the inner illness roll.
    pub fn needs_inner_roll(self) -> bool {
        self == RandomEvent::CaughtCold
    }
}

/// What the engine sees when resolving an event.
#[derive(Debug, Clone, Copy)]
pub struct EventContext {
    pub state: PetState,
    pub energy: f32,
    pub bowl_full: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// Gate failed; nothing happens.
    Nothing,
    /// Apply deltas and show the notice.
    Stats { delta: StatDelta, notice: Notice },
    /// Refill the bowl (with refill side effects), then show the notice.
    RefillBowl { notice: Notice },
}

/// Resolve one selected event against its gate.
///
/// `inner_roll_hit` is the result of the 30% illness roll and is ignored by
/// every other entry.
pub fn resolve_event(event: RandomEvent, ctx: &EventContext, inner_roll_hit: bool) -> EventOutcome {
    let awake = !ctx.state.is_sleeping();
    match event {
        RandomEvent::FoundShiny if awake => EventOutcome::Stats {
            delta: StatDelta::new(8.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            notice: Notice::FoundShiny,
        },
        RandomEvent::CaughtCold if inner_roll_hit && awake => EventOutcome::Stats {
            delta: StatDelta::new(0.0, 0.0, 0.0, 0.0, -25.0, 0.0),
            notice: Notice::CaughtCold,
        },
        RandomEvent::LovesYou => EventOutcome::Stats {
            delta: StatDelta::new(15.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            notice: Notice::LovesYou,
        },
        RandomEvent::Energetic if ctx.energy > 50.0 => EventOutcome::Stats {
            delta: StatDelta::new(5.0, 0.0, -10.0, 0.0, 0.0, 0.0),
            notice: Notice::Energetic,
        },
        RandomEvent::BowlRefill if !ctx.bowl_full && awake => EventOutcome::RefillBowl {
            notice: Notice::BowlRefilledBySomeone,
        },
        _ => EventOutcome::Nothing,
    }
}

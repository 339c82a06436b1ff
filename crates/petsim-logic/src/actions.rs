//! Pure action logic: guard table and stat effects.
//!
//! Guards are evaluated in table order and the first failing guard wins.
//! Travel-bearing actions (feed, play, going to sleep) additionally refuse to
//! start while another errand is in flight; that check runs after the listed
//! guards and is silent.
//!
//! | Action | Guards | Effect (hap, hun, ene, slp, hea, hyg) |
//! |--------|--------|---------------------------------------|
//! | feed | awake, bowl full, hunger >= 15 | +10 -30 +5 0 0 0, bowl empties |
//! | play | awake, energy >= 25 | +25 +15 -20 +10 0 0 |
//! | sleep toggle | asleep: wake; awake: not in flight | none until arrival |
//! | wake | - | 0 0 +40 -50 +10 0 |
//! | pet | awake | +15 0 0 -5 0 0 |
//! | clean | awake | +10 0 0 0 +5 +40 |
//! | treat | awake | +20 -10 +10 0 0 0 |
//! | medicine | awake, health <= 80 | -10 0 0 0 +50 0 |
//! | refill bowl | bowl not full | bowl fills |

use serde::{Deserialize, Serialize};

use crate::constants::guards::{MAX_HEALTH_FOR_MEDICINE, MIN_ENERGY_TO_PLAY, MIN_HUNGER_TO_EAT};
use crate::constants::{EAT_HOLD_MS, PLAY_HOLD_MS};
use crate::notice::{Cue, Notice};
use crate::state::PetState;
use crate::stats::{StatDelta, Stats};
use crate::travel::Location;

pub const FEED_EFFECT: StatDelta = StatDelta::new(10.0, -30.0, 5.0, 0.0, 0.0, 0.0);
pub const PLAY_EFFECT: StatDelta = StatDelta::new(25.0, 15.0, -20.0, 10.0, 0.0, 0.0);
pub const WAKE_EFFECT: StatDelta = StatDelta::new(0.0, 0.0, 40.0, -50.0, 10.0, 0.0);
pub const PET_EFFECT: StatDelta = StatDelta::new(15.0, 0.0, 0.0, -5.0, 0.0, 0.0);
pub const CLEAN_EFFECT: StatDelta = StatDelta::new(10.0, 0.0, 0.0, 0.0, 5.0, 40.0);
pub const TREAT_EFFECT: StatDelta = StatDelta::new(20.0, -10.0, 10.0, 0.0, 0.0, 0.0);
pub const MEDICINE_EFFECT: StatDelta = StatDelta::new(-10.0, 0.0, 0.0, 0.0, 50.0, 0.0);

/// The eight player entrypoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Feed,
    Play,
    SleepToggle,
    Pet,
    Clean,
    Treat,
    Medicine,
    RefillFoodBowl,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Feed,
        Action::Play,
        Action::SleepToggle,
        Action::Pet,
        Action::Clean,
        Action::Treat,
        Action::Medicine,
        Action::RefillFoodBowl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Feed => "feed",
            Action::Play => "play",
            Action::SleepToggle => "sleep",
            Action::Pet => "pet",
            Action::Clean => "clean",
            Action::Treat => "treat",
            Action::Medicine => "medicine",
            Action::RefillFoodBowl => "refill",
        }
    }
}

/// The effect phase a travel leg is carrying out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Errand {
    Eat,
    Play,
    Sleep,
}

impl Errand {
    pub fn destination(self) -> Location {
        match self {
            Errand::Eat => Location::Food,
            Errand::Play => Location::Toy,
            Errand::Sleep => Location::Bed,
        }
    }

    /// State entered when the pet arrives.
    pub fn arrival_state(self) -> PetState {
        match self {
            Errand::Eat => PetState::Eating,
            Errand::Play => PetState::Playing,
            Errand::Sleep => PetState::Sleeping,
        }
    }

    /// How long the arrival state is held before returning to idle.
    /// Sleep has no hold; it lasts until a wake transition.
    pub fn hold_ms(self) -> Option<u64> {
        match self {
            Errand::Eat => Some(EAT_HOLD_MS),
            Errand::Play => Some(PLAY_HOLD_MS),
            Errand::Sleep => None,
        }
    }

    /// Stats, notice and cue applied on arrival.
    pub fn effect(self) -> ActionEffect {
        match self {
            Errand::Eat => ActionEffect {
                delta: FEED_EFFECT,
                notice: Notice::Eating,
                cue: Some(Cue::Eating),
            },
            Errand::Play => ActionEffect {
                delta: PLAY_EFFECT,
                notice: Notice::Playing,
                cue: Some(Cue::Bouncing),
            },
            Errand::Sleep => ActionEffect {
                delta: StatDelta::NONE,
                notice: Notice::Goodnight,
                cue: None,
            },
        }
    }
}

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    Sleeping,
    BowlEmpty,
    NotHungry,
    TooTired,
    NotSick,
    BowlAlreadyFull,
    /// Another travel-bearing errand is still in flight.
    Busy,
}

impl Rejection {
    /// The notice to surface, if any. Busy rejections are silent.
    pub fn notice(self) -> Option<Notice> {
        match self {
            Rejection::Sleeping => Some(Notice::Asleep),
            Rejection::BowlEmpty => Some(Notice::BowlEmpty),
            Rejection::NotHungry => Some(Notice::NotHungry),
            Rejection::TooTired => Some(Notice::TooTired),
            Rejection::NotSick => Some(Notice::NotSick),
            Rejection::BowlAlreadyFull => Some(Notice::BowlAlreadyFull),
            Rejection::Busy => None,
        }
    }
}

/// Stat deltas plus what to show the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionEffect {
    pub delta: StatDelta,
    pub notice: Notice,
    pub cue: Option<Cue>,
}

/// Everything the guards look at.
#[derive(Debug, Clone, Copy)]
pub struct GuardContext {
    pub state: PetState,
    pub stats: Stats,
    pub bowl_full: bool,
    /// A travel or hold phase is pending.
    pub in_flight: bool,
}

/// What the engine should do once an action passes its guards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionPlan {
    /// Start travelling; the effect applies on arrival.
    Travel(Errand),
    /// Leave the sleeping state.
    Wake,
    /// Apply stat effects now.
    Immediate(ActionEffect),
    /// Fill the food bowl.
    RefillBowl,
}

/// Evaluate an action's guards in order and decide what it does.
pub fn plan_action(action: Action, ctx: &GuardContext) -> Result<ActionPlan, Rejection> {
    let asleep = ctx.state.is_sleeping();
    match action {
        Action::Feed => {
            if asleep {
                return Err(Rejection::Sleeping);
            }
            if !ctx.bowl_full {
                return Err(Rejection::BowlEmpty);
            }
            if ctx.stats.hunger < MIN_HUNGER_TO_EAT {
                return Err(Rejection::NotHungry);
            }
            travel(ctx, Errand::Eat)
        }
        Action::Play => {
            if asleep {
                return Err(Rejection::Sleeping);
            }
            if ctx.stats.energy < MIN_ENERGY_TO_PLAY {
                return Err(Rejection::TooTired);
            }
            travel(ctx, Errand::Play)
        }
        Action::SleepToggle => {
            if asleep {
                Ok(ActionPlan::Wake)
            } else {
                travel(ctx, Errand::Sleep)
            }
        }
        Action::Pet => awake(ctx, PET_EFFECT, Notice::Petted, Some(Cue::Happy)),
        Action::Clean => awake(ctx, CLEAN_EFFECT, Notice::Cleaned, None),
        Action::Treat => awake(ctx, TREAT_EFFECT, Notice::Treated, Some(Cue::Happy)),
        Action::Medicine => {
            if asleep {
                return Err(Rejection::Sleeping);
            }
            if ctx.stats.health > MAX_HEALTH_FOR_MEDICINE {
                return Err(Rejection::NotSick);
            }
            Ok(ActionPlan::Immediate(ActionEffect {
                delta: MEDICINE_EFFECT,
                notice: Notice::Medicated,
                cue: None,
            }))
        }
        Action::RefillFoodBowl => {
            if ctx.bowl_full {
                Err(Rejection::BowlAlreadyFull)
            } else {
                Ok(ActionPlan::RefillBowl)
            }
        }
    }
}

fn travel(ctx: &GuardContext, errand: Errand) -> Result<ActionPlan, Rejection> {
    if ctx.in_flight {
        Err(Rejection::Busy)
    } else {
        Ok(ActionPlan::Travel(errand))
    }
}

fn awake(
    ctx: &GuardContext,
    delta: StatDelta,
    notice: Notice,
    cue: Option<Cue>,
) -> Result<ActionPlan, Rejection> {
    if ctx.state.is_sleeping() {
        Err(Rejection::Sleeping)
    } else {
        Ok(ActionPlan::Immediate(ActionEffect { delta, notice, cue }))
    }
}

/// The wake transition's effect.
pub fn wake_effect() -> ActionEffect {
    ActionEffect {
        delta: WAKE_EFFECT,
        notice: Notice::WokeUp,
        cue: None,
    }
}

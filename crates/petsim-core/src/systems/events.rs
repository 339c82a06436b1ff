//! Events system - the per-tick random event roll
//!
//! The roll draws from the injected [`RandomSource`] in a fixed order:
//! the event chance, then the catalog index, then (for the illness entry
//! only) the inner chance. Tests that script the source rely on this order.

use log::debug;
use petsim_logic::constants::ILLNESS_PROBABILITY;
use petsim_logic::events::{resolve_event, EventContext, EventOutcome, RandomEvent, CATALOG};

use crate::rng::RandomSource;

/// Roll for this tick's random event.
///
/// Returns `None` when no event was selected. A selected event whose gate
/// fails comes back with [`EventOutcome::Nothing`].
pub fn roll_random_event(
    rng: &mut dyn RandomSource,
    probability: f64,
    ctx: &EventContext,
) -> Option<(RandomEvent, EventOutcome)> {
    if !rng.chance(probability) {
        return None;
    }

    let event = CATALOG[rng.pick(CATALOG.len()).min(CATALOG.len() - 1)];
    let inner_roll_hit = event.needs_inner_roll() && rng.chance(ILLNESS_PROBABILITY);
    let outcome = resolve_event(event, ctx, inner_roll_hit);
    debug!("random event {:?} -> {:?}", event, outcome);
    Some((event, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PetState;
    use crate::rng::{ScriptedRandom, SeededRandom};
    use petsim_logic::notice::Notice;

    fn ctx(state: PetState) -> EventContext {
        EventContext {
            state,
            energy: 80.0,
            bowl_full: false,
        }
    }

    #[test]
    fn test_no_event_when_chance_misses() {
        let mut rng = ScriptedRandom::new().with_chances([false]).with_picks([2]);
        assert!(roll_random_event(&mut rng, 0.1, &ctx(PetState::Idle)).is_none());
    }

    #[test]
    fn test_selected_event_resolves() {
        let mut rng = ScriptedRandom::new().with_chances([true]).with_picks([2]);
        let (event, outcome) = roll_random_event(&mut rng, 0.1, &ctx(PetState::Sleeping)).unwrap();
        assert_eq!(event, RandomEvent::LovesYou);
        assert!(matches!(outcome, EventOutcome::Stats { notice: Notice::LovesYou, .. }));
    }

    #[test]
    fn test_illness_inner_roll_drawn_while_sleeping() {
        // chance, pick=1 (cold), inner chance, then a marker draw
        let mut rng = ScriptedRandom::new()
            .with_chances([true, true, true])
            .with_picks([1]);
        let (event, outcome) = roll_random_event(&mut rng, 0.1, &ctx(PetState::Sleeping)).unwrap();
        assert_eq!(event, RandomEvent::CaughtCold);
        assert_eq!(outcome, EventOutcome::Nothing);
        // Only the marker remains, so the inner roll consumed one.
        assert!(rng.chance(0.5));
        assert!(!rng.chance(0.5));
    }

    #[test]
    fn test_other_events_skip_inner_roll() {
        let mut rng = ScriptedRandom::new().with_chances([true, true]).with_picks([0]);
        roll_random_event(&mut rng, 0.1, &ctx(PetState::Idle)).unwrap();
        assert!(rng.chance(0.5));
    }

    #[test]
    fn test_seeded_rate() {
        let mut rng = SeededRandom::new(3);
        let c = ctx(PetState::Idle);
        let fired = (0..5_000)
            .filter(|_| roll_random_event(&mut rng, 0.1, &c).is_some())
            .count();
        assert!((350..650).contains(&fired), "{} events", fired);
    }
}

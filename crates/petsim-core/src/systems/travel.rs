//! Travel system - walking to a location, then the errand's effect phase
//!
//! A travel-bearing action goes through three steps, each one driven by a
//! deadline the engine processes in time order:
//! 1. [`begin_travel`] attaches a [`Travel`] and the pet starts walking
//! 2. [`complete_arrival`] removes it, applies the errand, and attaches a
//!    [`Hold`] for eating and playing
//! 3. [`end_hold`] removes the hold and the pet goes back to idle

use hecs::{Entity, World};
use petsim_logic::actions::{ActionEffect, Errand};
use petsim_logic::travel::{arrival_delay_ms, travel_duration_ms};

use crate::components::{Hold, PetState, Travel};
use crate::systems::{apply_stat_delta, pet_state, resting_position, set_bowl, set_position, set_state};

/// What happened when the pet reached its destination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrival {
    pub errand: Errand,
    pub effect: ActionEffect,
}

pub fn pending_travel(world: &World, pet: Entity) -> Option<Travel> {
    world.get::<&Travel>(pet).ok().map(|t| *t)
}

pub fn pending_hold(world: &World, pet: Entity) -> Option<Hold> {
    world.get::<&Hold>(pet).ok().map(|h| *h)
}

/// A travel or hold phase is pending
pub fn is_in_flight(world: &World, pet: Entity) -> bool {
    pending_travel(world, pet).is_some() || pending_hold(world, pet).is_some()
}

/// Start walking toward the errand's destination.
///
/// Returns `None` without changing anything if a phase is already pending.
pub fn begin_travel(world: &mut World, pet: Entity, errand: Errand, now_ms: u64) -> Option<Travel> {
    if is_in_flight(world, pet) {
        return None;
    }

    let from = resting_position(world, pet);
    let to = errand.destination().position();
    let travel = Travel {
        errand,
        from,
        to,
        departed_at: now_ms,
        reached_at: now_ms.saturating_add(travel_duration_ms(from, to)),
        arrives_at: now_ms.saturating_add(arrival_delay_ms(from, to)),
    };

    world.insert_one(pet, travel).ok()?;
    set_state(world, pet, PetState::Walking, now_ms);
    Some(travel)
}

/// Finish the walk and run the errand's effect phase at `at_ms`.
///
/// Eating empties `bowl`. The pet passes through idle on arrival before
/// entering the errand's state.
pub fn complete_arrival(world: &mut World, pet: Entity, bowl: Entity, at_ms: u64) -> Option<Arrival> {
    let travel = world.remove_one::<Travel>(pet).ok()?;
    let errand = travel.errand;
    set_position(world, pet, travel.to);
    set_state(world, pet, PetState::Idle, at_ms);

    if errand == Errand::Eat {
        set_bowl(world, bowl, false);
    }

    let effect = errand.effect();
    set_state(world, pet, errand.arrival_state(), at_ms);
    apply_stat_delta(world, pet, &effect.delta);

    if let Some(hold_ms) = errand.hold_ms() {
        let hold = Hold {
            errand,
            ends_at: at_ms.saturating_add(hold_ms),
        };
        // The pet exists (the travel was just removed from it).
        let _ = world.insert_one(pet, hold);
    }

    Some(Arrival { errand, effect })
}

/// End the eating/playing hold. Returns the errand that finished.
pub fn end_hold(world: &mut World, pet: Entity, at_ms: u64) -> Option<Errand> {
    let hold = world.remove_one::<Hold>(pet).ok()?;
    if pet_state(world, pet) == hold.errand.arrival_state() {
        set_state(world, pet, PetState::Idle, at_ms);
    }
    Some(hold.errand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{bowl_is_full, pet_stats, spawn_food_bowl, spawn_pet};

    fn setup() -> (World, Entity, Entity) {
        let mut world = World::new();
        let pet = spawn_pet(&mut world, 0);
        let bowl = spawn_food_bowl(&mut world);
        (world, pet, bowl)
    }

    #[test]
    fn test_begin_travel_sets_walking() {
        let (mut world, pet, _) = setup();
        let t = begin_travel(&mut world, pet, Errand::Play, 1_000).unwrap();
        assert_eq!(t.from, 50.0);
        assert_eq!(t.to, 75.0);
        assert_eq!(t.reached_at, 1_625);
        assert_eq!(t.arrives_at, 2_125);
        assert_eq!(pet_state(&world, pet), PetState::Walking);
        assert!(is_in_flight(&world, pet));
    }

    #[test]
    fn test_second_travel_refused() {
        let (mut world, pet, _) = setup();
        begin_travel(&mut world, pet, Errand::Eat, 0).unwrap();
        assert!(begin_travel(&mut world, pet, Errand::Sleep, 10).is_none());
        assert_eq!(pending_travel(&world, pet).unwrap().errand, Errand::Eat);
    }

    #[test]
    fn test_eat_errand_full_cycle() {
        let (mut world, pet, bowl) = setup();
        let mut stats = pet_stats(&world, pet);
        stats.hunger = 50.0;
        crate::systems::replace_stats(&mut world, pet, stats);

        // Bowl sits at the center, so this is a zero-length walk.
        let t = begin_travel(&mut world, pet, Errand::Eat, 0).unwrap();
        assert_eq!(t.arrives_at, 500);

        let arrival = complete_arrival(&mut world, pet, bowl, t.arrives_at).unwrap();
        assert_eq!(arrival.errand, Errand::Eat);
        assert_eq!(pet_state(&world, pet), PetState::Eating);
        assert!(!bowl_is_full(&world, bowl));
        assert_eq!(pet_stats(&world, pet).hunger, 20.0);

        let hold = pending_hold(&world, pet).unwrap();
        assert_eq!(hold.ends_at, 2_500);
        assert!(is_in_flight(&world, pet));

        assert_eq!(end_hold(&mut world, pet, hold.ends_at), Some(Errand::Eat));
        assert_eq!(pet_state(&world, pet), PetState::Idle);
        assert!(!is_in_flight(&world, pet));
    }

    #[test]
    fn test_sleep_errand_has_no_hold() {
        let (mut world, pet, bowl) = setup();
        let t = begin_travel(&mut world, pet, Errand::Sleep, 0).unwrap();
        complete_arrival(&mut world, pet, bowl, t.arrives_at).unwrap();
        assert_eq!(pet_state(&world, pet), PetState::Sleeping);
        assert_eq!(resting_position(&world, pet), 30.0);
        assert!(pending_hold(&world, pet).is_none());
        assert!(!is_in_flight(&world, pet));
    }

    #[test]
    fn test_nothing_pending() {
        let (mut world, pet, bowl) = setup();
        assert!(complete_arrival(&mut world, pet, bowl, 0).is_none());
        assert!(end_hold(&mut world, pet, 0).is_none());
    }
}

//! Spawning and direct component access for the pet and the food bowl

use hecs::{Entity, World};
use petsim_logic::actions::wake_effect;
use petsim_logic::stats::StatDelta;

use crate::components::{Activity, FoodBowl, Hold, Pet, PetState, Position, Stats, Travel};

/// Spawn a pet with construction-time defaults
pub fn spawn_pet(world: &mut World, now_ms: u64) -> Entity {
    world.spawn((
        Pet,
        Stats::default(),
        Activity::new(PetState::Idle, now_ms),
        Position::default(),
    ))
}

/// Spawn a full food bowl
pub fn spawn_food_bowl(world: &mut World) -> Entity {
    world.spawn((FoodBowl::default(),))
}

/// Put a pet back to construction-time defaults, dropping any pending phase
pub fn reset_pet(world: &mut World, pet: Entity, now_ms: u64) {
    let _ = world.remove_one::<Travel>(pet);
    let _ = world.remove_one::<Hold>(pet);
    if let Ok((stats, activity, pos)) =
        world.query_one_mut::<(&mut Stats, &mut Activity, &mut Position)>(pet)
    {
        *stats = Stats::default();
        *activity = Activity::new(PetState::Idle, now_ms);
        *pos = Position::default();
    }
}

pub fn pet_stats(world: &World, pet: Entity) -> Stats {
    world
        .get::<&Stats>(pet)
        .map(|s| *s)
        .unwrap_or_default()
}

pub fn pet_state(world: &World, pet: Entity) -> PetState {
    world
        .get::<&Activity>(pet)
        .map(|a| a.state)
        .unwrap_or_default()
}

pub fn set_state(world: &mut World, pet: Entity, state: PetState, now_ms: u64) {
    if let Ok(activity) = world.query_one_mut::<&mut Activity>(pet) {
        if activity.state != state {
            *activity = Activity::new(state, now_ms);
        }
    }
}

/// Add a bundle of deltas to the pet's stats, clamping each
pub fn apply_stat_delta(world: &mut World, pet: Entity, delta: &StatDelta) {
    if let Ok(stats) = world.query_one_mut::<&mut Stats>(pet) {
        stats.apply(delta);
    }
}

/// Overwrite the pet's stats (load only); values are clamped
pub fn replace_stats(world: &mut World, pet: Entity, stats: Stats) {
    if let Ok(current) = world.query_one_mut::<&mut Stats>(pet) {
        *current = stats.clamped();
    }
}

pub fn set_position(world: &mut World, pet: Entity, x: f32) {
    if let Ok(pos) = world.query_one_mut::<&mut Position>(pet) {
        pos.x = x;
    }
}

/// Resting position, ignoring any travel in progress
pub fn resting_position(world: &World, pet: Entity) -> f32 {
    world
        .get::<&Position>(pet)
        .map(|p| p.x)
        .unwrap_or_else(|_| Position::default().x)
}

/// Leave the sleeping state and apply the wake bonus.
/// Returns false (and changes nothing) if the pet is not asleep.
pub fn wake_pet(world: &mut World, pet: Entity, now_ms: u64) -> bool {
    if !pet_state(world, pet).is_sleeping() {
        return false;
    }
    set_state(world, pet, PetState::Idle, now_ms);
    apply_stat_delta(world, pet, &wake_effect().delta);
    true
}

pub fn bowl_is_full(world: &World, bowl: Entity) -> bool {
    world
        .get::<&FoodBowl>(bowl)
        .map(|b| b.full)
        .unwrap_or(true)
}

/// Set the bowl; returns true if it changed
pub fn set_bowl(world: &mut World, bowl: Entity, full: bool) -> bool {
    match world.query_one_mut::<&mut FoodBowl>(bowl) {
        Ok(b) if b.full != full => {
            b.full = full;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_defaults() {
        let mut world = World::new();
        let pet = spawn_pet(&mut world, 7);
        let bowl = spawn_food_bowl(&mut world);

        assert_eq!(pet_stats(&world, pet), Stats::default());
        assert_eq!(pet_state(&world, pet), PetState::Idle);
        assert_eq!(resting_position(&world, pet), 50.0);
        assert!(bowl_is_full(&world, bowl));
    }

    #[test]
    fn test_wake_only_when_sleeping() {
        let mut world = World::new();
        let pet = spawn_pet(&mut world, 0);
        assert!(!wake_pet(&mut world, pet, 1));
        assert_eq!(pet_stats(&world, pet), Stats::default());

        set_state(&mut world, pet, PetState::Sleeping, 2);
        replace_stats(
            &mut world,
            pet,
            Stats {
                energy: 30.0,
                sleepiness: 70.0,
                health: 60.0,
                ..Stats::default()
            },
        );
        assert!(wake_pet(&mut world, pet, 3));
        let s = pet_stats(&world, pet);
        assert_eq!(pet_state(&world, pet), PetState::Idle);
        assert_eq!(s.energy, 70.0);
        assert_eq!(s.sleepiness, 20.0);
        assert_eq!(s.health, 70.0);
    }

    #[test]
    fn test_set_bowl_reports_change() {
        let mut world = World::new();
        let bowl = spawn_food_bowl(&mut world);
        assert!(!set_bowl(&mut world, bowl, true));
        assert!(set_bowl(&mut world, bowl, false));
        assert!(!bowl_is_full(&world, bowl));
    }

    #[test]
    fn test_reset_pet_drops_pending_phases() {
        let mut world = World::new();
        let pet = spawn_pet(&mut world, 0);
        world
            .insert_one(
                pet,
                Hold {
                    errand: petsim_logic::actions::Errand::Play,
                    ends_at: 99,
                },
            )
            .unwrap();
        set_state(&mut world, pet, PetState::Playing, 1);
        set_position(&mut world, pet, 75.0);

        reset_pet(&mut world, pet, 5);
        assert!(world.get::<&Hold>(pet).is_err());
        assert_eq!(pet_state(&world, pet), PetState::Idle);
        assert_eq!(resting_position(&world, pet), 50.0);
    }
}

//! Needs system - passive decay and recovery, once per tick

use hecs::{Entity, World};
use petsim_logic::needs::{passive_tick, NeedsReport};

use crate::components::{Activity, Pet, Stats};

/// Run one tick of passive needs on every pet.
///
/// Does not perform the wake transition; callers check `should_wake`.
pub fn needs_system(world: &mut World) -> Vec<(Entity, NeedsReport)> {
    let mut reports = Vec::with_capacity(1);
    for (entity, (_, stats, activity)) in world.query_mut::<(&Pet, &mut Stats, &Activity)>() {
        reports.push((entity, passive_tick(stats, activity.state)));
    }
    reports
}

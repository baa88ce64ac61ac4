//! Cleanup system: despawns flights that have landed or crashed.

use hecs::{Entity, World};

use atc_core::components::Flight;

/// Remove flights in a terminal status.
/// Uses a pre-allocated buffer to avoid per-step allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, flight) in world.query_mut::<&Flight>() {
        if flight.status.is_terminal() {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}

//! Cleanup system — reaps every entity flagged dead this frame.
//!
//! Runs after collision and lifetime so a flagged actor is gone before
//! the snapshot is built: it is never updated or drawn again. The
//! despawn buffer lives on the engine and is reused across frames.

use hecs::{Entity, World};

use skylance_core::components::Dead;

/// Despawn all entities carrying the death flag.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, _dead) in world.query_mut::<&Dead>() {
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

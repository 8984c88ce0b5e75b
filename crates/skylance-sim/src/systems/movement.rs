//! Movement system: position += velocity for everything that moves.
//! Velocities are per-frame displacements; there is no dt.

use hecs::World;

use skylance_core::types::{Position, Velocity};

/// Integrate all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0;
    }
}

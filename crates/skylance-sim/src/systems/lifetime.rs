//! Lifetime system — counts down shot timers and flags expiries.

use hecs::{Entity, World};

use skylance_core::components::{Dead, Lifetime};

/// Decrement every lifetime; a timer hitting exactly zero marks its
/// entity dead. The strict equality makes the flag fire once even if
/// cleanup were ever deferred a frame.
pub fn run(world: &mut World) {
    let mut expired: Vec<Entity> = Vec::new();

    for (entity, lifetime) in world.query_mut::<&mut Lifetime>() {
        lifetime.remaining_frames -= 1;
        if lifetime.remaining_frames == 0 {
            expired.push(entity);
        }
    }

    for entity in expired {
        let _ = world.insert_one(entity, Dead);
    }
}

//! Collision system — all-pairs sphere overlap over every collidable
//! actor, with layer filtering and per-kind responses.
//!
//! Bodies are gathered once at the top of the pass; every unordered pair
//! is tested exactly once via an index-ordered double loop. Responses
//! only set death flags and raise events — the gathered list is never
//! invalidated mid-pass, and the flags are acted on by the cleanup
//! system afterward.

use hecs::{Entity, World};

use skylance_core::collision::CollisionLayers;
use skylance_core::components::*;
use skylance_core::enums::ActorKind;
use skylance_core::events::GameEvent;
use skylance_core::types::Position;

/// One gathered collidable body.
struct Body {
    entity: Entity,
    kind: ActorKind,
    center: Position,
    radius: f32,
    attribute: u32,
    mask: u32,
}

/// Run the collision pass: gather, test pairs, dispatch responses.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    let mut bodies = gather(world);
    // Stable body order keeps event ordering deterministic.
    bodies.sort_by_key(|b| b.entity.to_bits());

    let mut struck: Vec<(Entity, ActorKind, Position)> = Vec::new();

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (a, b) = (&bodies[i], &bodies[j]);
            if !CollisionLayers::should_collide(a.attribute, a.mask, b.attribute, b.mask) {
                continue;
            }

            let radius_sum = a.radius + b.radius;
            if a.center.range_sq_to(&b.center) < radius_sum * radius_sum {
                struck.push((a.entity, a.kind, a.center));
                struck.push((b.entity, b.kind, b.center));
            }
        }
    }

    for (entity, kind, position) in struck {
        match kind {
            // The player registers the hit but is never despawned; the
            // host decides what a hit means.
            ActorKind::Player => events.push(GameEvent::PlayerHit),
            ActorKind::Enemy => {
                events.push(GameEvent::EnemyDestroyed { position });
                let _ = world.insert_one(entity, Dead);
            }
            ActorKind::PlayerShot | ActorKind::EnemyShot => {
                let _ = world.insert_one(entity, Dead);
            }
        }
    }
}

/// Collect every live collidable, tagged with its actor kind.
fn gather(world: &World) -> Vec<Body> {
    let mut bodies = Vec::new();

    for (entity, (_, pos, collider)) in world.query::<(&Player, &Position, &Collider)>().iter() {
        bodies.push(make_body(entity, ActorKind::Player, pos, collider));
    }
    for (entity, (_, pos, collider)) in world.query::<(&Enemy, &Position, &Collider)>().iter() {
        bodies.push(make_body(entity, ActorKind::Enemy, pos, collider));
    }
    for (entity, (_, pos, collider)) in world.query::<(&PlayerShot, &Position, &Collider)>().iter()
    {
        bodies.push(make_body(entity, ActorKind::PlayerShot, pos, collider));
    }
    for (entity, (_, pos, collider)) in world.query::<(&EnemyShot, &Position, &Collider)>().iter()
    {
        bodies.push(make_body(entity, ActorKind::EnemyShot, pos, collider));
    }

    bodies
}

fn make_body(entity: Entity, kind: ActorKind, pos: &Position, collider: &Collider) -> Body {
    Body {
        entity,
        kind,
        center: *pos,
        radius: collider.radius,
        attribute: collider.attribute,
        mask: collider.mask,
    }
}

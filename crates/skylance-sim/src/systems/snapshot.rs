//! Snapshot system: queries the world and assembles the complete
//! SceneSnapshot for the host renderer. Never mutates anything.

use hecs::{Entity, World};

use skylance_core::components::*;
use skylance_core::enums::ActorKind;
use skylance_core::events::GameEvent;
use skylance_core::state::{ActorView, PlayerView, SceneSnapshot};
use skylance_core::types::{FrameClock, Position};

/// Build a SceneSnapshot from the current world state.
pub fn build_snapshot(world: &World, clock: &FrameClock, events: Vec<GameEvent>) -> SceneSnapshot {
    SceneSnapshot {
        frame: clock.frame,
        player: build_player(world),
        actors: build_actors(world),
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &Orientation)>()
        .iter()
        .next()
        .map(|(_, (_, pos, orientation))| PlayerView {
            position: *pos,
            yaw: orientation.yaw,
        })
        .unwrap_or_default()
}

/// All live non-player actors, sorted by entity identity for a stable
/// draw order.
fn build_actors(world: &World) -> Vec<ActorView> {
    let mut tagged: Vec<(Entity, ActorView)> = Vec::new();

    collect_kind::<Enemy>(world, ActorKind::Enemy, &mut tagged);
    collect_kind::<PlayerShot>(world, ActorKind::PlayerShot, &mut tagged);
    collect_kind::<EnemyShot>(world, ActorKind::EnemyShot, &mut tagged);

    tagged.sort_by_key(|(entity, _)| entity.to_bits());
    tagged.into_iter().map(|(_, view)| view).collect()
}

fn collect_kind<M: hecs::Component>(
    world: &World,
    kind: ActorKind,
    out: &mut Vec<(Entity, ActorView)>,
) {
    for (entity, (_, pos, orientation)) in world.query::<(&M, &Position, &Orientation)>().iter() {
        out.push((
            entity,
            ActorView {
                kind,
                position: *pos,
                pitch: orientation.pitch,
                yaw: orientation.yaw,
            },
        ));
    }
}

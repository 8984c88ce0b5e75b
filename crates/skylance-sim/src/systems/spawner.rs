//! Spawner system — advances the stage script and spawns due enemies.

use hecs::World;

use skylance_core::events::GameEvent;
use skylance_core::types::Position;

use crate::script::{ScriptCursor, SpawnScript};
use crate::world_setup;

/// Step the script cursor one frame and spawn every enemy it emits.
pub fn run(
    world: &mut World,
    script: &SpawnScript,
    cursor: &mut ScriptCursor,
    events: &mut Vec<GameEvent>,
) {
    // Spawning mutates the world, so collect positions first.
    let mut due: Vec<Position> = Vec::new();
    cursor.step(script, |position| due.push(position));

    for position in due {
        world_setup::spawn_enemy(world, position);
        log::debug!("enemy spawned at {:?}", position.0);
        events.push(GameEvent::EnemySpawned { position });
    }
}

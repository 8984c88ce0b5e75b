//! Enemy AI system — drives the phase FSM and the fire interval.
//!
//! Calls the enemy FSM from skylance-ai to compute phase transitions and
//! per-phase velocity, then updates ECS components accordingly. Enemies
//! fire only during Approach, one shot per interval, aimed at the
//! player's position at the moment of firing.

use hecs::World;

use skylance_core::components::{Enemy, EnemyBehavior, Player};
use skylance_core::constants::{ENEMY_FIRE_INTERVAL_FRAMES, ENEMY_SHOT_SPEED};
use skylance_core::enums::{ActorKind, EnemyPhase};
use skylance_core::events::GameEvent;
use skylance_core::types::{Position, Velocity};

use skylance_ai::fsm::{evaluate, EnemyContext};

use crate::world_setup;

/// Run the enemy AI: evaluate the FSM per enemy, count down fire timers,
/// and spawn due shots.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    let player_pos = match find_player_position(world) {
        Some(pos) => pos,
        None => return,
    };

    // Collect updates in buffers to avoid borrow issues with hecs.
    let mut updates: Vec<(hecs::Entity, EnemyPhase, Velocity, i32)> = Vec::new();
    let mut shots: Vec<(Position, Velocity)> = Vec::new();

    {
        let mut query = world.query::<(&Enemy, &Position, &EnemyBehavior)>();
        for (entity, (_enemy, pos, behavior)) in query.iter() {
            let update = evaluate(&EnemyContext {
                phase: behavior.phase,
                position: *pos,
            });

            let mut cooldown = behavior.fire_cooldown;
            if update.new_phase == EnemyPhase::Approach {
                cooldown -= 1;
                if cooldown <= 0 {
                    shots.push((*pos, aim_at(pos, &player_pos)));
                    cooldown = ENEMY_FIRE_INTERVAL_FRAMES;
                }
            }

            updates.push((entity, update.new_phase, update.new_velocity, cooldown));
        }
    }

    for (entity, phase, velocity, cooldown) in updates {
        if let Ok(mut behavior) = world.get::<&mut EnemyBehavior>(entity) {
            behavior.phase = phase;
            behavior.fire_cooldown = cooldown;
        }
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            *vel = velocity;
        }
    }

    for (origin, velocity) in shots {
        world_setup::spawn_enemy_shot(world, origin, velocity);
        events.push(GameEvent::ShotFired {
            kind: ActorKind::EnemyShot,
        });
    }
}

/// Initial shot velocity: straight at the player at shot speed.
fn aim_at(from: &Position, target: &Position) -> Velocity {
    let to_target = target.0 - from.0;
    if to_target.length_squared() < 1e-6 {
        return Velocity::new(0.0, 0.0, -ENEMY_SHOT_SPEED);
    }
    Velocity(to_target.normalize() * ENEMY_SHOT_SPEED)
}

fn find_player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

//! Player control system — held-input movement, travel clamp, turning,
//! and edge-triggered firing.

use glam::Vec3;
use hecs::World;

use skylance_core::commands::InputFrame;
use skylance_core::components::{Orientation, Player};
use skylance_core::constants::*;
use skylance_core::enums::ActorKind;
use skylance_core::events::GameEvent;
use skylance_core::types::Position;

use crate::world_setup;

/// Apply one frame of input to the player ship.
///
/// `fire_was_held` is the engine's record of last frame's fire state;
/// a shot spawns only on the rising edge.
pub fn run(
    world: &mut World,
    input: &InputFrame,
    fire_was_held: bool,
    events: &mut Vec<GameEvent>,
) {
    let mut shot_origin: Option<(Position, f32)> = None;

    for (_entity, (_player, pos, orientation)) in
        world.query_mut::<(&Player, &mut Position, &mut Orientation)>()
    {
        let mut movement = Vec3::ZERO;
        if input.left {
            movement.x -= PLAYER_SPEED;
        } else if input.right {
            movement.x += PLAYER_SPEED;
        }
        if input.up {
            movement.y += PLAYER_SPEED;
        } else if input.down {
            movement.y -= PLAYER_SPEED;
        }

        if input.turn_left {
            orientation.yaw -= PLAYER_TURN_RATE;
        } else if input.turn_right {
            orientation.yaw += PLAYER_TURN_RATE;
        }

        // Integrate, then clamp, so the ship rests exactly on the limit.
        pos.0 += movement;
        pos.0.x = pos.0.x.clamp(-PLAYER_MOVE_LIMIT_X, PLAYER_MOVE_LIMIT_X);
        pos.0.y = pos.0.y.clamp(-PLAYER_MOVE_LIMIT_Y, PLAYER_MOVE_LIMIT_Y);

        if input.fire && !fire_was_held {
            shot_origin = Some((*pos, orientation.yaw));
        }
    }

    if let Some((position, yaw)) = shot_origin {
        world_setup::spawn_player_shot(world, position, yaw);
        events.push(GameEvent::ShotFired {
            kind: ActorKind::PlayerShot,
        });
    }
}

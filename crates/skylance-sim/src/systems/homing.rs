//! Homing system — re-aims enemy shots toward the player each frame.

use hecs::World;

use skylance_core::components::{Homing, Orientation, Player};
use skylance_core::types::{Position, Velocity};

use crate::guidance;

/// Steer every homing shot toward the player's current position and
/// refresh its facing to match the new velocity.
pub fn run(world: &mut World) {
    let player_pos = match find_player_position(world) {
        Some(pos) => pos,
        None => return,
    };

    for (_entity, (homing, pos, vel, orientation)) in
        world.query_mut::<(&Homing, &Position, &mut Velocity, &mut Orientation)>()
    {
        *vel = guidance::home_toward(pos, vel, &player_pos, homing.strength);
        let (pitch, yaw) = guidance::facing_angles(vel);
        orientation.pitch = pitch;
        orientation.yaw = yaw;
    }
}

fn find_player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

//! Entity construction — component bundles for every actor kind.

use hecs::{Entity, World};
use glam::Vec3;

use skylance_core::collision::CollisionLayers;
use skylance_core::components::*;
use skylance_core::constants::*;
use skylance_core::types::{Position, Velocity};

use crate::guidance;

/// Spawn the player ship at the origin. The control system integrates
/// its position directly, so it carries no Velocity.
pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        Player,
        Position::default(),
        Orientation::default(),
        Collider {
            radius: PLAYER_RADIUS,
            attribute: CollisionLayers::PLAYER,
            mask: CollisionLayers::ENEMY,
        },
    ))
}

/// Spawn an enemy ship at a scripted position. Enemies start in the
/// Approach phase with a full fire cooldown.
pub fn spawn_enemy(world: &mut World, position: Position) -> Entity {
    world.spawn((
        Enemy,
        position,
        Velocity(Vec3::new(0.0, 0.0, -ENEMY_SPEED)),
        Orientation::default(),
        EnemyBehavior {
            phase: Default::default(),
            fire_cooldown: ENEMY_FIRE_INTERVAL_FRAMES,
        },
        Collider {
            radius: ENEMY_RADIUS,
            attribute: CollisionLayers::ENEMY,
            mask: CollisionLayers::PLAYER,
        },
    ))
}

/// Spawn a player shot from the ship's position along its facing.
pub fn spawn_player_shot(world: &mut World, position: Position, yaw: f32) -> Entity {
    let velocity = Velocity(Vec3::new(yaw.sin(), 0.0, yaw.cos()) * PLAYER_SHOT_SPEED);
    let (pitch, yaw) = guidance::facing_angles(&velocity);
    world.spawn((
        PlayerShot,
        position,
        velocity,
        Orientation { pitch, yaw },
        Lifetime {
            remaining_frames: SHOT_LIFETIME_FRAMES,
        },
        Collider {
            radius: SHOT_RADIUS,
            attribute: CollisionLayers::PLAYER,
            mask: CollisionLayers::ENEMY,
        },
    ))
}

/// Spawn a homing enemy shot with an initial velocity.
pub fn spawn_enemy_shot(world: &mut World, position: Position, velocity: Velocity) -> Entity {
    let (pitch, yaw) = guidance::facing_angles(&velocity);
    world.spawn((
        EnemyShot,
        position,
        velocity,
        Orientation { pitch, yaw },
        Homing {
            strength: ENEMY_SHOT_HOMING_FACTOR,
        },
        Lifetime {
            remaining_frames: SHOT_LIFETIME_FRAMES,
        },
        Collider {
            radius: SHOT_RADIUS,
            attribute: CollisionLayers::ENEMY,
            mask: CollisionLayers::PLAYER,
        },
    ))
}

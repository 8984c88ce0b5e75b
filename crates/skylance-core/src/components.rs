//! ECS components for hecs entities.
//!
//! Components carry data only; behavior belongs to the systems in the
//! simulation crate.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyPhase;

/// Marks the player ship. Exactly one exists per world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks a shot fired by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShot;

/// Marks a shot fired by an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShot;

/// Death flag. Set by the collision and lifetime systems; entities
/// carrying it are reaped by the cleanup system at the end of the same
/// frame and never appear in a snapshot again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dead;

/// Facing angles for rendering (radians). Shots are oriented along their
/// velocity; the player yaws with turn input.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

/// Bounding sphere plus collision filter for the all-pairs pass.
///
/// `attribute` says what this body is; `mask` says what it may hit.
/// Two bodies interact only when each one's attribute is in the other's
/// mask.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f32,
    pub attribute: u32,
    pub mask: u32,
}

/// Remaining lifetime in frames. Reaching zero sets the death flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining_frames: i32,
}

/// Enemy behavior state: current phase and frames until the next shot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyBehavior {
    pub phase: EnemyPhase,
    pub fire_cooldown: i32,
}

/// Homing steering for enemy shots: per-frame interpolation factor
/// toward the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Homing {
    pub strength: f32,
}

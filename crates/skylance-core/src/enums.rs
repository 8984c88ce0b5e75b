//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy behavior phase. Enemies loop between the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    /// Closing on the player along -z, firing on an interval.
    #[default]
    Approach,
    /// Retreating along +z; holds fire.
    Leave,
}

/// Actor category, used to pick models/textures on the host side and to
/// tag events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Enemy,
    PlayerShot,
    EnemyShot,
}

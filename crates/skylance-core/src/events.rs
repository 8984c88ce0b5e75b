//! Events emitted by the simulation for host-side feedback
//! (audio cues, score, UI).

use serde::{Deserialize, Serialize};

use crate::enums::ActorKind;
use crate::types::Position;

/// Gameplay events raised during a frame and drained into its snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The spawn script produced a new enemy.
    EnemySpawned { position: Position },
    /// An enemy was destroyed by a collision this frame.
    EnemyDestroyed { position: Position },
    /// The player ship was struck. The ship survives; the host decides
    /// what a hit means (lives, game over, invulnerability window).
    PlayerHit,
    /// A shot was fired. `kind` is PlayerShot or EnemyShot.
    ShotFired { kind: ActorKind },
}

//! Scene snapshot — the complete drawable state handed to the host
//! renderer after each frame.

use serde::{Deserialize, Serialize};

use crate::enums::ActorKind;
use crate::events::GameEvent;
use crate::types::Position;

/// Everything the host needs to draw one frame and react to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Frame number this snapshot describes.
    pub frame: u64,
    pub player: PlayerView,
    /// All live non-player actors, sorted by spawn identity for a stable
    /// draw order.
    pub actors: Vec<ActorView>,
    /// Events raised during this frame.
    pub events: Vec<GameEvent>,
}

/// The player ship as the renderer sees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    /// Yaw from turn input (radians).
    pub yaw: f32,
}

/// One drawable actor. The host maps `kind` to its model and texture
/// handles; the simulation never touches assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub kind: ActorKind,
    pub position: Position,
    pub pitch: f32,
    pub yaw: f32,
}

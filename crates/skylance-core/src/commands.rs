//! Per-frame input injected by the host engine.
//!
//! The host samples its input devices once per frame and hands the
//! result to `tick()`. The simulation never polls devices itself.

use serde::{Deserialize, Serialize};

/// Held-key state for one frame.
///
/// Directional and turn fields are level-sampled (true while held).
/// `fire` is level-sampled too; the engine edge-detects it, so holding
/// the key down fires exactly one shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub fire: bool,
}

impl InputFrame {
    /// An idle frame: nothing held.
    pub fn idle() -> Self {
        Self::default()
    }
}

//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// World-space position in game units.
/// x = right, y = up, z = depth (away from the camera).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Per-frame displacement in game units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Simulation time tracking. The simulation is frame-stepped: the host
/// engine drives one `tick` per rendered frame at a nominal 60 Hz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Current frame number (increments by 1 each tick).
    pub frame: u64,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Distance to another position in game units.
    pub fn range_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Squared distance, for overlap tests that avoid the sqrt.
    pub fn range_sq_to(&self, other: &Position) -> f32 {
        self.0.distance_squared(other.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Displacement magnitude per frame.
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

impl FrameClock {
    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}

//! Steering math for homing shots.
//!
//! Enemy shots re-aim toward the player a little each frame: the current
//! direction is spherically interpolated toward the line-of-sight
//! direction while the shot's speed stays constant.

use glam::Vec3;

use skylance_core::types::{Position, Velocity};

/// Spherically interpolate between two unit vectors by `t`.
///
/// Near-parallel inputs return the target direction. Near-opposite
/// inputs have no unique rotation plane, so the target is bent slightly
/// off axis first; the turn then proceeds in that plane.
pub fn slerp_direction(current: Vec3, desired: Vec3, t: f32) -> Vec3 {
    let mut desired = desired;
    let mut dot = current.dot(desired).clamp(-1.0, 1.0);

    if dot < -0.9999 {
        desired = (desired + current.any_orthonormal_vector() * 1e-2).normalize();
        dot = current.dot(desired).clamp(-1.0, 1.0);
    }

    let theta = dot.acos();
    if theta < 1e-4 {
        return desired;
    }

    let sin_theta = theta.sin();
    let a = ((1.0 - t) * theta).sin() / sin_theta;
    let b = (t * theta).sin() / sin_theta;
    (current * a + desired * b).normalize_or_zero()
}

/// Re-aim a shot's velocity toward `target` by factor `t`, preserving
/// its speed. Degenerate inputs (zero velocity, shot on top of the
/// target) return the velocity unchanged.
pub fn home_toward(position: &Position, velocity: &Velocity, target: &Position, t: f32) -> Velocity {
    let speed = velocity.speed();
    if speed < 1e-6 {
        return *velocity;
    }

    let to_target = target.0 - position.0;
    if to_target.length_squared() < 1e-6 {
        return *velocity;
    }

    let current = velocity.0 / speed;
    let desired = to_target.normalize();
    let steered = slerp_direction(current, desired, t);
    Velocity(steered * speed)
}

/// Facing angles for a velocity vector: yaw about +y from +z, pitch
/// positive when diving.
pub fn facing_angles(velocity: &Velocity) -> (f32, f32) {
    let v = velocity.0;
    let horizontal = (v.x * v.x + v.z * v.z).sqrt();
    let yaw = v.x.atan2(v.z);
    let pitch = (-v.y).atan2(horizontal);
    (pitch, yaw)
}

//! Enemy phase finite state machine.
//!
//! Pure functions that compute phase transitions and per-phase velocity
//! for enemy ships based on their current phase and depth. No ECS
//! dependency — operates on plain data.

use glam::Vec3;

use skylance_core::constants::*;
use skylance_core::enums::EnemyPhase;
use skylance_core::types::{Position, Velocity};

/// Input to the enemy FSM for a single ship.
pub struct EnemyContext {
    pub phase: EnemyPhase,
    pub position: Position,
}

/// Output from the enemy FSM.
pub struct EnemyUpdate {
    pub new_phase: EnemyPhase,
    pub new_velocity: Velocity,
    pub phase_changed: bool,
}

/// Evaluate the FSM for one enemy. Returns the phase to be in next frame
/// and the velocity for that phase.
///
/// Enemies loop: Approach closes along -z until the ship crosses the
/// approach limit, Leave retreats along +z until it passes the return
/// limit, then Approach begins again.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    match ctx.phase {
        EnemyPhase::Approach => {
            if ctx.position.0.z < ENEMY_APPROACH_LIMIT_Z {
                return EnemyUpdate {
                    new_phase: EnemyPhase::Leave,
                    new_velocity: leave_velocity(),
                    phase_changed: true,
                };
            }
            EnemyUpdate {
                new_phase: EnemyPhase::Approach,
                new_velocity: approach_velocity(),
                phase_changed: false,
            }
        }
        EnemyPhase::Leave => {
            if ctx.position.0.z > ENEMY_LEAVE_LIMIT_Z {
                return EnemyUpdate {
                    new_phase: EnemyPhase::Approach,
                    new_velocity: approach_velocity(),
                    phase_changed: true,
                };
            }
            EnemyUpdate {
                new_phase: EnemyPhase::Leave,
                new_velocity: leave_velocity(),
                phase_changed: false,
            }
        }
    }
}

/// Closing velocity: straight toward the camera plane.
fn approach_velocity() -> Velocity {
    Velocity(Vec3::new(0.0, 0.0, -ENEMY_SPEED))
}

/// Retreating velocity: straight back into the scene.
fn leave_velocity() -> Velocity {
    Velocity(Vec3::new(0.0, 0.0, ENEMY_SPEED))
}

//! The simulation engine.
//!
//! `GameEngine` owns the hecs world, the stage script and its cursor,
//! and the per-frame buffers. The host calls `tick` once per rendered
//! frame with that frame's sampled input and receives the complete
//! drawable state back.

use hecs::World;

use skylance_core::commands::InputFrame;
use skylance_core::events::GameEvent;
use skylance_core::state::SceneSnapshot;
use skylance_core::types::FrameClock;

use crate::script::{ScriptCursor, SpawnScript};
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    clock: FrameClock,
    script: SpawnScript,
    cursor: ScriptCursor,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    fire_was_held: bool,
}

impl GameEngine {
    /// Create an engine for one stage. The player ship is spawned
    /// immediately; enemies arrive as the script dictates.
    pub fn new(script: SpawnScript) -> Self {
        let mut world = World::new();
        world_setup::spawn_player(&mut world);

        Self {
            world,
            clock: FrameClock::default(),
            script,
            cursor: ScriptCursor::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            fire_was_held: false,
        }
    }

    /// Advance the simulation by one frame and return the resulting
    /// snapshot.
    pub fn tick(&mut self, input: &InputFrame) -> SceneSnapshot {
        self.run_systems(input);
        self.clock.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.clock, events)
    }

    /// Current frame number.
    pub fn frame(&self) -> u64 {
        self.clock.frame
    }

    /// Whether the stage script has been fully consumed.
    pub fn script_finished(&self) -> bool {
        self.cursor.finished(&self.script)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy directly, bypassing the script (for testing).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: skylance_core::types::Position) -> hecs::Entity {
        crate::world_setup::spawn_enemy(&mut self.world, position)
    }

    /// Spawn a player shot directly (for testing).
    #[cfg(test)]
    pub fn spawn_player_shot_at(
        &mut self,
        position: skylance_core::types::Position,
        yaw: f32,
    ) -> hecs::Entity {
        crate::world_setup::spawn_player_shot(&mut self.world, position, yaw)
    }

    /// Spawn an enemy shot directly (for testing).
    #[cfg(test)]
    pub fn spawn_enemy_shot_at(
        &mut self,
        position: skylance_core::types::Position,
        velocity: skylance_core::types::Velocity,
    ) -> hecs::Entity {
        crate::world_setup::spawn_enemy_shot(&mut self.world, position, velocity)
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputFrame) {
        // 1. Scripted enemy spawning
        systems::spawner::run(
            &mut self.world,
            &self.script,
            &mut self.cursor,
            &mut self.events,
        );
        // 2. Player movement, turning, firing
        systems::player_control::run(&mut self.world, input, self.fire_was_held, &mut self.events);
        self.fire_was_held = input.fire;
        // 3. Enemy phase FSM + fire interval
        systems::enemy_ai::run(&mut self.world, &mut self.events);
        // 4. Homing shot steering
        systems::homing::run(&mut self.world);
        // 5. Position integration
        systems::movement::run(&mut self.world);
        // 6. Shot lifetimes
        systems::lifetime::run(&mut self.world);
        // 7. All-pairs sphere collision
        systems::collision::run(&mut self.world, &mut self.events);
        // 8. Reap flagged actors
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}

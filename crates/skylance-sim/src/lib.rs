//! SKYLANCE simulation engine.
//!
//! Owns the hecs ECS world, interprets the enemy spawn script, runs all
//! systems in a fixed order each frame, and produces `SceneSnapshot`s
//! for the host renderer. Completely headless (no rendering, input
//! polling, or audio), enabling deterministic testing.

pub mod engine;
pub mod guidance;
pub mod script;
pub mod systems;
pub mod world_setup;

pub use skylance_core as core;

#[cfg(test)]
mod tests;

//! Tests for the simulation engine: script-driven spawning, collision
//! filtering and response, actor lifecycle, and determinism.

use skylance_core::commands::InputFrame;
use skylance_core::components::{Enemy, EnemyShot, PlayerShot};
use skylance_core::constants::*;
use skylance_core::enums::ActorKind;
use skylance_core::events::GameEvent;
use skylance_core::types::{Position, Velocity};

use crate::engine::GameEngine;
use crate::script::SpawnScript;

fn engine_with(script: &str) -> GameEngine {
    GameEngine::new(SpawnScript::parse(script).unwrap())
}

fn enemy_count(engine: &GameEngine) -> usize {
    let mut q = engine.world().query::<&Enemy>();
    q.iter().count()
}

fn player_shot_count(engine: &GameEngine) -> usize {
    let mut q = engine.world().query::<&PlayerShot>();
    q.iter().count()
}

fn enemy_shot_count(engine: &GameEngine) -> usize {
    let mut q = engine.world().query::<&EnemyShot>();
    q.iter().count()
}

// ---- Spawn script timeline ----

#[test]
fn test_script_spawn_timeline() {
    // First enemy on the first frame, ten idle frames, then the second.
    let mut engine = engine_with("POP,0,3,40\nWAIT,10\nPOP,5,-2,40\n");

    let snap = engine.tick(&InputFrame::idle());
    assert_eq!(
        snap.events,
        vec![GameEvent::EnemySpawned {
            position: Position::new(0.0, 3.0, 40.0)
        }]
    );
    assert_eq!(enemy_count(&engine), 1);

    for _ in 0..10 {
        let snap = engine.tick(&InputFrame::idle());
        assert!(
            !snap
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::EnemySpawned { .. })),
            "no spawn may occur during the wait"
        );
    }
    assert_eq!(enemy_count(&engine), 1);

    let snap = engine.tick(&InputFrame::idle());
    assert!(snap.events.contains(&GameEvent::EnemySpawned {
        position: Position::new(5.0, -2.0, 40.0)
    }));
    assert_eq!(enemy_count(&engine), 2);
    assert!(engine.script_finished());
}

// ---- Collision filtering ----

#[test]
fn test_same_side_enemies_never_collide() {
    let mut engine = GameEngine::new(SpawnScript::empty());
    engine.spawn_enemy_at(Position::new(0.0, 0.0, 40.0));
    engine.spawn_enemy_at(Position::new(0.5, 0.0, 40.0));

    let snap = engine.tick(&InputFrame::idle());

    assert_eq!(enemy_count(&engine), 2, "overlapping allies must survive");
    assert!(
        !snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::EnemyDestroyed { .. })),
        "no collision response between same-side actors"
    );
}

#[test]
fn test_player_ignores_own_shot() {
    let mut engine = GameEngine::new(SpawnScript::empty());
    // Spawned dead-center on the player: spheres overlap, masks do not.
    engine.spawn_player_shot_at(Position::new(0.0, 0.0, 0.0), 0.0);

    let snap = engine.tick(&InputFrame::idle());

    assert!(!snap.events.contains(&GameEvent::PlayerHit));
    assert_eq!(player_shot_count(&engine), 1);
}

// ---- Collision response ----

#[test]
fn test_shot_and_enemy_destroy_each_other() {
    let mut engine = GameEngine::new(SpawnScript::empty());
    engine.spawn_enemy_at(Position::new(0.0, 0.0, 40.0));
    engine.spawn_player_shot_at(Position::new(0.0, 0.0, 39.0), 0.0);

    let snap = engine.tick(&InputFrame::idle());

    assert_eq!(enemy_count(&engine), 0);
    assert_eq!(player_shot_count(&engine), 0);
    let destroyed = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
        .count();
    assert_eq!(destroyed, 1, "one destruction event per dead enemy");
    assert!(
        snap.actors.is_empty(),
        "reaped actors must not appear in the snapshot"
    );
}

#[test]
fn test_opposing_shots_destroy_each_other() {
    let mut engine = GameEngine::new(SpawnScript::empty());
    engine.spawn_player_shot_at(Position::new(20.0, 10.0, 60.0), 0.0);
    engine.spawn_enemy_shot_at(Position::new(20.0, 10.0, 60.0), Velocity::new(0.0, 0.0, 1.0));

    let snap = engine.tick(&InputFrame::idle());

    assert_eq!(player_shot_count(&engine), 0);
    assert_eq!(enemy_shot_count(&engine), 0);
    assert!(!snap.events.contains(&GameEvent::PlayerHit));
}

#[test]
fn test_enemy_shot_strikes_player() {
    let mut engine = GameEngine::new(SpawnScript::empty());
    // One frame of travel away from point-blank.
    engine.spawn_enemy_shot_at(Position::new(0.0, 0.0, 3.5), Velocity::new(0.0, 0.0, -1.0));

    let snap = engine.tick(&InputFrame::idle());

    assert!(snap.events.contains(&GameEvent::PlayerHit));
    assert_eq!(enemy_shot_count(&engine), 0, "the shot is spent");
    // The player ship survives the hit.
    assert_eq!(snap.player.position, Position::new(0.0, 0.0, 0.0));
}

// ---- Actor lifecycle ----

#[test]
fn test_shot_lifetime_reaped() {
    let mut engine = GameEngine::new(SpawnScript::empty());
    engine.spawn_player_shot_at(Position::new(20.0, 10.0, 100.0), 0.0);

    for _ in 0..(SHOT_LIFETIME_FRAMES - 1) {
        engine.tick(&InputFrame::idle());
    }
    assert_eq!(player_shot_count(&engine), 1);

    let snap = engine.tick(&InputFrame::idle());
    assert_eq!(player_shot_count(&engine), 0);
    assert!(
        !snap.actors.iter().any(|a| a.kind == ActorKind::PlayerShot),
        "expired shot must not be drawn"
    );
}

// ---- Player control ----

#[test]
fn test_player_clamped_to_travel_limits() {
    let mut engine = GameEngine::new(SpawnScript::empty());
    let held = InputFrame {
        right: true,
        up: true,
        ..Default::default()
    };

    let mut snap = engine.tick(&held);
    for _ in 0..300 {
        snap = engine.tick(&held);
    }

    assert!((snap.player.position.0.x - PLAYER_MOVE_LIMIT_X).abs() < 1e-4);
    assert!((snap.player.position.0.y - PLAYER_MOVE_LIMIT_Y).abs() < 1e-4);
}

#[test]
fn test_fire_is_edge_triggered() {
    let mut engine = GameEngine::new(SpawnScript::empty());
    let held = InputFrame {
        fire: true,
        ..Default::default()
    };

    let mut fired = 0;
    for _ in 0..10 {
        let snap = engine.tick(&held);
        fired += snap
            .events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    GameEvent::ShotFired {
                        kind: ActorKind::PlayerShot
                    }
                )
            })
            .count();
    }
    assert_eq!(fired, 1, "holding fire must spawn exactly one shot");

    engine.tick(&InputFrame::idle());
    let snap = engine.tick(&held);
    assert!(snap.events.contains(&GameEvent::ShotFired {
        kind: ActorKind::PlayerShot
    }));
}

// ---- Enemy behavior ----

#[test]
fn test_enemy_fire_cadence() {
    let mut engine = engine_with("POP,0,0,50\n");

    let mut enemy_shots = 0;
    for _ in 0..(3 * ENEMY_FIRE_INTERVAL_FRAMES) {
        let snap = engine.tick(&InputFrame::idle());
        enemy_shots += snap
            .events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    GameEvent::ShotFired {
                        kind: ActorKind::EnemyShot
                    }
                )
            })
            .count();
    }

    assert_eq!(enemy_shots, 3, "one shot per interval while approaching");
}

#[test]
fn test_homing_shot_reaches_player() {
    let mut engine = GameEngine::new(SpawnScript::empty());
    // Launched pointing away from the player; steering must bring it
    // around before its lifetime runs out.
    engine.spawn_enemy_shot_at(Position::new(10.0, 5.0, 40.0), Velocity::new(0.0, 0.0, 1.0));

    let mut hit = false;
    for _ in 0..SHOT_LIFETIME_FRAMES {
        let snap = engine.tick(&InputFrame::idle());
        if snap.events.contains(&GameEvent::PlayerHit) {
            hit = true;
            break;
        }
    }
    assert!(hit, "homing shot never reached the player");
}

// ---- Determinism ----

fn scripted_input(frame: u64) -> InputFrame {
    InputFrame {
        right: frame % 60 < 30,
        left: frame % 60 >= 45,
        up: frame % 40 < 13,
        turn_right: frame % 90 < 20,
        fire: frame % 17 == 0,
        ..Default::default()
    }
}

#[test]
fn test_determinism_same_script_same_inputs() {
    let script = "POP,0,3,40\nWAIT,30\nPOP,5,-2,45\nWAIT,30\nPOP,-6,1,50\n";
    let mut engine_a = engine_with(script);
    let mut engine_b = engine_with(script);

    for frame in 0..240 {
        let input = scripted_input(frame);
        let snap_a = engine_a.tick(&input);
        let snap_b = engine_b.tick(&input);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged at frame {frame}");
    }
}

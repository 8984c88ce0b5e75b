//! Headless SKYLANCE runner.
//!
//! Stands in for the host engine loop during development: loads a stage
//! script, steps the simulation for a number of frames with idle input,
//! logs gameplay events, and prints the final snapshot as JSON.
//!
//! Usage: `skylance-app <script.csv> [frames]`

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use skylance_core::commands::InputFrame;
use skylance_core::events::GameEvent;
use skylance_sim::engine::GameEngine;
use skylance_sim::script::{ScriptError, SpawnScript};

/// Frames simulated when no count is given: one minute of gameplay.
const DEFAULT_FRAMES: u64 = 3600;

#[derive(Debug, Error)]
enum RunError {
    #[error("usage: skylance-app <script.csv> [frames]")]
    Usage,
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: ScriptError,
    },
    #[error("invalid frame count {value:?}")]
    BadFrameCount { value: String },
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), RunError> {
    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().ok_or(RunError::Usage)?);
    let frames = match args.next() {
        Some(value) => value
            .parse::<u64>()
            .map_err(|_| RunError::BadFrameCount { value })?,
        None => DEFAULT_FRAMES,
    };

    let text = std::fs::read_to_string(&path).map_err(|source| RunError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let script = SpawnScript::parse(&text).map_err(|source| RunError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    log::info!(
        "loaded {} ({} commands, {} spawns)",
        path.display(),
        script.len(),
        script.total_spawns()
    );

    let mut engine = GameEngine::new(script);
    let mut last = None;

    for _ in 0..frames {
        let snapshot = engine.tick(&InputFrame::idle());
        for event in &snapshot.events {
            log_event(engine.frame(), event);
        }
        last = Some(snapshot);
    }

    if let Some(snapshot) = last {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn log_event(frame: u64, event: &GameEvent) {
    match event {
        GameEvent::EnemySpawned { position } => {
            log::info!("frame {frame}: enemy spawned at {:?}", position.0)
        }
        GameEvent::EnemyDestroyed { position } => {
            log::info!("frame {frame}: enemy destroyed at {:?}", position.0)
        }
        GameEvent::PlayerHit => log::info!("frame {frame}: player hit"),
        GameEvent::ShotFired { kind } => log::debug!("frame {frame}: shot fired ({kind:?})"),
    }
}

//! Enemy spawn script — parsing and frame-stepped interpretation.
//!
//! The format is line-oriented, comma-separated:
//!
//! ```text
//! // wave one
//! POP,0,3,50
//! WAIT,60
//! POP,10,2,50
//! ```
//!
//! `POP,x,y,z` spawns an enemy at that position the frame it is
//! consumed; `WAIT,n` parks the interpreter for `n` frames; lines
//! starting with `//` and blank lines are skipped. Unrecognized command
//! words are skipped with a warning. Malformed numeric fields are
//! load-time errors.

use skylance_core::types::Position;
use thiserror::Error;

/// One parsed script command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnCommand {
    /// Spawn an enemy at this position.
    Pop { position: Position },
    /// Suspend consumption for this many frames.
    Wait { frames: u32 },
}

/// Errors raised while parsing a script. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {command} is missing field {field}")]
    MissingField {
        line: usize,
        command: &'static str,
        field: &'static str,
    },
    #[error("line {line}: invalid number {value:?} in {command}")]
    InvalidNumber {
        line: usize,
        command: &'static str,
        value: String,
    },
}

/// A fully parsed spawn script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpawnScript {
    commands: Vec<SpawnCommand>,
}

impl SpawnScript {
    /// An empty script: nothing ever spawns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse script text. The whole file is validated up front so a bad
    /// asset fails at load time, not mid-stage.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut commands = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            let mut fields = trimmed.split(',').map(str::trim);
            let word = fields.next().unwrap_or_default();

            match word {
                "POP" => {
                    let x = parse_coord(fields.next(), line, "x")?;
                    let y = parse_coord(fields.next(), line, "y")?;
                    let z = parse_coord(fields.next(), line, "z")?;
                    commands.push(SpawnCommand::Pop {
                        position: Position::new(x, y, z),
                    });
                }
                "WAIT" => {
                    let field = fields.next().ok_or(ScriptError::MissingField {
                        line,
                        command: "WAIT",
                        field: "frames",
                    })?;
                    let frames =
                        field
                            .parse::<u32>()
                            .map_err(|_| ScriptError::InvalidNumber {
                                line,
                                command: "WAIT",
                                value: field.to_string(),
                            })?;
                    commands.push(SpawnCommand::Wait { frames });
                }
                other => {
                    log::warn!("spawn script line {line}: skipping unknown command {other:?}");
                }
            }
        }

        Ok(Self { commands })
    }

    /// Number of parsed commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Total enemies this script will spawn.
    pub fn total_spawns(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SpawnCommand::Pop { .. }))
            .count()
    }

    fn get(&self, index: usize) -> Option<&SpawnCommand> {
        self.commands.get(index)
    }
}

fn parse_coord(field: Option<&str>, line: usize, name: &'static str) -> Result<f32, ScriptError> {
    let field = field.ok_or(ScriptError::MissingField {
        line,
        command: "POP",
        field: name,
    })?;
    field.parse::<f32>().map_err(|_| ScriptError::InvalidNumber {
        line,
        command: "POP",
        value: field.to_string(),
    })
}

/// Interpreter state over a parsed script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Running,
    Waiting { remaining: u32 },
}

/// Frame-stepped cursor: `Running` consumes commands until a `WAIT` or
/// end of script; `Waiting` burns one frame per step and resumes
/// consumption on the frame after the timer empties.
#[derive(Debug, Clone)]
pub struct ScriptCursor {
    index: usize,
    state: CursorState,
}

impl Default for ScriptCursor {
    fn default() -> Self {
        Self {
            index: 0,
            state: CursorState::Running,
        }
    }
}

impl ScriptCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every command has been consumed and no wait is pending.
    pub fn finished(&self, script: &SpawnScript) -> bool {
        self.state == CursorState::Running && self.index >= script.len()
    }

    /// Advance one frame, invoking `spawn` for each `POP` consumed.
    ///
    /// A `WAIT,n` with n > 0 stops consumption for exactly `n` frames;
    /// `WAIT,0` is a no-op and consumption continues within the same
    /// frame.
    pub fn step(&mut self, script: &SpawnScript, mut spawn: impl FnMut(Position)) {
        if let CursorState::Waiting { remaining } = &mut self.state {
            *remaining -= 1;
            if *remaining == 0 {
                self.state = CursorState::Running;
            }
            return;
        }

        while let Some(command) = script.get(self.index) {
            self.index += 1;
            match *command {
                SpawnCommand::Pop { position } => spawn(position),
                SpawnCommand::Wait { frames } => {
                    if frames > 0 {
                        self.state = CursorState::Waiting { remaining: frames };
                        return;
                    }
                }
            }
        }
    }
}

//! Timed enemy spawn scripts
//!
//! A script is plain text, one command per line:
//!
//! ```text
//! // comment
//! POP,3,0,50
//! WAIT,120
//! POP,-3,0,50
//! ```
//!
//! `POP` spawns an enemy at a position; `WAIT,n` stops reading for `n`
//! frames. Reading resumes on the frame after the wait runs out.

use std::path::{Path, PathBuf};

use rail_engine::foundation::math::Vec3;

/// One parsed script line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnCommand {
    /// Spawn an enemy here
    Pop(Vec3),
    /// Stop reading for this many frames
    Wait(u32),
}

/// Errors raised while loading a spawn script
#[derive(thiserror::Error, Debug)]
pub enum SpawnScriptError {
    /// The script file could not be read
    #[error("Failed to read spawn script {path}: {source}")]
    Io {
        /// Script path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// A line could not be parsed
    #[error("Spawn script line {line}: {message}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        message: String,
    },
}

/// Cursor over a parsed spawn script
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSchedule {
    commands: Vec<SpawnCommand>,
    cursor: usize,
    wait_remaining: u32,
}

impl SpawnSchedule {
    /// Parse script text
    pub fn parse(source: &str) -> Result<Self, SpawnScriptError> {
        let commands = source
            .lines()
            .enumerate()
            .filter_map(|(index, line)| parse_line(index + 1, line).transpose())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_commands(commands))
    }

    /// Load and parse a script file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SpawnScriptError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SpawnScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let schedule = Self::parse(&source)?;
        log::info!(
            "Loaded spawn script {} ({} commands)",
            path.display(),
            schedule.commands.len()
        );
        Ok(schedule)
    }

    /// Build a schedule from already parsed commands
    pub fn from_commands(commands: Vec<SpawnCommand>) -> Self {
        Self {
            commands,
            cursor: 0,
            wait_remaining: 0,
        }
    }

    /// Advance one frame, returning the positions to spawn this frame
    pub fn update(&mut self) -> Vec<Vec3> {
        let mut spawns = Vec::new();

        if self.wait_remaining > 0 {
            self.wait_remaining -= 1;
            return spawns;
        }

        while let Some(&command) = self.commands.get(self.cursor) {
            self.cursor += 1;
            match command {
                SpawnCommand::Pop(position) => spawns.push(position),
                SpawnCommand::Wait(frames) => {
                    self.wait_remaining = frames;
                    break;
                }
            }
        }
        spawns
    }

    /// Whether every command has run and no wait is pending
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.commands.len() && self.wait_remaining == 0
    }

    /// Parsed commands
    pub fn commands(&self) -> &[SpawnCommand] {
        &self.commands
    }
}

fn parse_line(line: usize, text: &str) -> Result<Option<SpawnCommand>, SpawnScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with("//") {
        return Ok(None);
    }

    let malformed = |message: String| SpawnScriptError::Malformed { line, message };
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();

    match fields.as_slice() {
        ["POP", x, y, z] => {
            let coord = |field: &str| {
                field
                    .parse::<f32>()
                    .map_err(|e| malformed(format!("bad coordinate '{field}': {e}")))
            };
            Ok(Some(SpawnCommand::Pop(Vec3::new(coord(*x)?, coord(*y)?, coord(*z)?))))
        }
        ["WAIT", frames] => frames
            .parse::<u32>()
            .map(|frames| Some(SpawnCommand::Wait(frames)))
            .map_err(|e| malformed(format!("bad frame count '{frames}': {e}"))),
        ["POP", ..] => Err(malformed(format!("POP takes 3 fields, got {}", fields.len() - 1))),
        ["WAIT", ..] => Err(malformed(format!("WAIT takes 1 field, got {}", fields.len() - 1))),
        [command, ..] => Err(malformed(format!("unknown command '{command}'"))),
        [] => Ok(None),
    }
}

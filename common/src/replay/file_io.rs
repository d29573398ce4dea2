use std::path::Path;

use crate::games::dots::DotsError;
use super::{DotsReplay, REPLAY_FILE_EXTENSION, REPLAY_VERSION};

#[derive(Debug)]
pub enum ReplayError {
    IoError(std::io::Error),
    Yaml(serde_yaml_ng::Error),
    UnsupportedVersion { found: u8, expected: u8 },
    EmptyFile,
    Engine(DotsError),
    ScoreMismatch { index: usize, recorded: u32, replayed: u32 },
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayError::IoError(e) => write!(f, "IO error: {}", e),
            ReplayError::Yaml(e) => write!(f, "YAML error: {}", e),
            ReplayError::UnsupportedVersion { found, expected } => {
                write!(f, "Unsupported replay version: found {}, expected {}", found, expected)
            }
            ReplayError::EmptyFile => write!(f, "Empty replay file"),
            ReplayError::Engine(e) => write!(f, "Engine error: {}", e),
            ReplayError::ScoreMismatch { index, recorded, replayed } => write!(
                f,
                "Path {} scored {} on replay, recorded {}",
                index, replayed, recorded
            ),
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        ReplayError::IoError(e)
    }
}

impl From<serde_yaml_ng::Error> for ReplayError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ReplayError::Yaml(e)
    }
}

impl From<DotsError> for ReplayError {
    fn from(e: DotsError) -> Self {
        ReplayError::Engine(e)
    }
}

pub fn save_replay(path: &Path, replay: &DotsReplay) -> Result<(), ReplayError> {
    let content = save_replay_to_string(replay)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn save_replay_to_string(replay: &DotsReplay) -> Result<String, ReplayError> {
    Ok(serde_yaml_ng::to_string(replay)?)
}

pub fn load_replay(path: &Path) -> Result<DotsReplay, ReplayError> {
    let content = std::fs::read_to_string(path)?;
    load_replay_from_str(&content)
}

pub fn load_replay_from_str(content: &str) -> Result<DotsReplay, ReplayError> {
    if content.trim().is_empty() {
        return Err(ReplayError::EmptyFile);
    }

    let replay: DotsReplay = serde_yaml_ng::from_str(content)?;
    if replay.format_version != REPLAY_VERSION {
        return Err(ReplayError::UnsupportedVersion {
            found: replay.format_version,
            expected: REPLAY_VERSION,
        });
    }
    Ok(replay)
}

pub fn generate_replay_filename(version: &str) -> String {
    let now = chrono::Local::now();
    let timestamp = now.format("%Y%m%d%H%M%S");
    let sanitized_version = version.replace('.', "_");

    format!("{}_DOTS_{}.{}", timestamp, sanitized_version, REPLAY_FILE_EXTENSION)
}

pub mod recorder;
pub mod file_io;
pub mod player;

use serde::{Deserialize, Serialize};

use crate::games::dots::{LuckSettings, Position};

pub use recorder::ReplayRecorder;
pub use file_io::{
    ReplayError, generate_replay_filename, load_replay, load_replay_from_str, save_replay,
    save_replay_to_string,
};
pub use player::ReplayPlayer;

pub const REPLAY_FILE_EXTENSION: &str = "dotsreplay";
pub const REPLAY_VERSION: u8 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedPath {
    pub path: Vec<Position>,
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DotsReplay {
    pub format_version: u8,
    pub engine_version: String,
    pub game_started_timestamp_ms: i64,
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub luck: LuckSettings,
    pub paths: Vec<RecordedPath>,
}

impl DotsReplay {
    pub fn total_score(&self) -> u32 {
        self.paths.iter().fold(0u32, |total, p| total.saturating_add(p.score))
    }
}

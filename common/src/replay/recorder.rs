use chrono::Utc;

use crate::games::dots::{LuckSettings, Position};
use super::{DotsReplay, RecordedPath, REPLAY_VERSION};

pub struct ReplayRecorder {
    engine_version: String,
    game_started_timestamp_ms: i64,
    seed: u64,
    width: usize,
    height: usize,
    luck: LuckSettings,
    paths: Vec<RecordedPath>,
}

impl ReplayRecorder {
    pub fn new(
        engine_version: String,
        seed: u64,
        width: usize,
        height: usize,
        luck: LuckSettings,
    ) -> Self {
        Self {
            engine_version,
            game_started_timestamp_ms: Utc::now().timestamp_millis(),
            seed,
            width,
            height,
            luck,
            paths: Vec::new(),
        }
    }

    pub fn record_path(&mut self, path: &[Position], score: u32) {
        self.paths.push(RecordedPath {
            path: path.to_vec(),
            score,
        });
    }

    pub fn recorded_paths(&self) -> usize {
        self.paths.len()
    }

    pub fn finalize(self) -> DotsReplay {
        DotsReplay {
            format_version: REPLAY_VERSION,
            engine_version: self.engine_version,
            game_started_timestamp_ms: self.game_started_timestamp_ms,
            seed: self.seed,
            width: self.width,
            height: self.height,
            luck: self.luck,
            paths: self.paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_keeps_paths_in_order() {
        let mut recorder = ReplayRecorder::new("test".to_string(), 9, 4, 5, LuckSettings::default());
        recorder.record_path(&[Position::new(0, 0), Position::new(1, 0)], 1);
        recorder.record_path(&[Position::new(2, 2), Position::new(2, 3), Position::new(2, 4)], 3);
        assert_eq!(recorder.recorded_paths(), 2);

        let replay = recorder.finalize();
        assert_eq!(replay.format_version, REPLAY_VERSION);
        assert_eq!(replay.seed, 9);
        assert_eq!((replay.width, replay.height), (4, 5));
        assert_eq!(replay.paths[0].score, 1);
        assert_eq!(replay.paths[1].path.len(), 3);
        assert_eq!(replay.total_score(), 4);
        assert!(replay.game_started_timestamp_ms > 0);
    }

    #[test]
    fn test_total_score_saturates() {
        let mut recorder = ReplayRecorder::new("test".to_string(), 1, 2, 2, LuckSettings::default());
        recorder.record_path(&[Position::new(0, 0), Position::new(1, 0)], u32::MAX);
        recorder.record_path(&[Position::new(0, 1), Position::new(1, 1)], 1);
        assert_eq!(recorder.finalize().total_score(), u32::MAX);
    }
}

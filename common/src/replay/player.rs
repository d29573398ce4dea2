use crate::games::SessionRng;
use crate::games::dots::{DotsGame, DotsListener};
use super::{DotsReplay, ReplayError};

pub struct ReplayPlayer {
    replay: DotsReplay,
}

impl ReplayPlayer {
    pub fn new(replay: DotsReplay) -> Self {
        Self { replay }
    }

    pub fn replay_ref(&self) -> &DotsReplay {
        &self.replay
    }

    pub fn seed(&self) -> u64 {
        self.replay.seed
    }

    pub fn engine_version(&self) -> &str {
        &self.replay.engine_version
    }

    pub fn total_paths(&self) -> usize {
        self.replay.paths.len()
    }

    pub fn play<L: DotsListener>(
        &self,
        listener: L,
    ) -> Result<(DotsGame<SessionRng, L>, u32), ReplayError> {
        let mut game = DotsGame::generate(
            self.replay.height,
            self.replay.width,
            self.replay.luck,
            SessionRng::new(self.replay.seed),
            listener,
        )?;

        let mut total: u32 = 0;
        for (index, recorded) in self.replay.paths.iter().enumerate() {
            let replayed = game.resolve_path(&recorded.path)?;
            if replayed != recorded.score {
                return Err(ReplayError::ScoreMismatch {
                    index,
                    recorded: recorded.score,
                    replayed,
                });
            }
            total = total.saturating_add(replayed);
        }

        Ok((game, total))
    }

    pub fn verify(&self) -> Result<u32, ReplayError> {
        self.play(()).map(|(_, total)| total)
    }
}

use crate::games::session_rng::{RollSource, SessionRng};
use crate::replay::{DotsReplay, ReplayRecorder};
use crate::{log_debug, log_warn};
use super::game_state::DotsGame;
use super::listener::DotsListener;
use super::selection::{Selection, SelectionChange};
use super::types::Position;

pub struct DotsSession<R: RollSource = SessionRng, L: DotsListener = ()> {
    game: DotsGame<R, L>,
    selection: Selection,
    total_score: u32,
    best_score: u32,
    paths_resolved: u32,
    recorder: Option<ReplayRecorder>,
}

impl<R: RollSource, L: DotsListener> DotsSession<R, L> {
    pub fn new(game: DotsGame<R, L>, best_score: u32) -> Self {
        Self {
            game,
            selection: Selection::new(),
            total_score: 0,
            best_score,
            paths_resolved: 0,
            recorder: None,
        }
    }

    pub fn with_recorder(mut self, recorder: ReplayRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn game(&self) -> &DotsGame<R, L> {
        &self.game
    }

    pub fn listener_mut(&mut self) -> &mut L {
        self.game.listener_mut()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn paths_resolved(&self) -> u32 {
        self.paths_resolved
    }

    pub fn select(&mut self, pos: Position) -> SelectionChange {
        self.selection.select(pos, &self.game)
    }

    pub fn cancel_selection(&mut self) {
        self.selection.clear();
    }

    pub fn commit(&mut self) -> u32 {
        let path = self.selection.take_path();
        if path.len() < 2 {
            return 0;
        }

        match self.game.resolve_path(&path) {
            Ok(score) => {
                self.total_score = self.total_score.saturating_add(score);
                self.paths_resolved += 1;
                if let Some(recorder) = self.recorder.as_mut() {
                    recorder.record_path(&path, score);
                }
                log_debug!("Committed {} dots for {}, total {}", path.len(), score, self.total_score);
                score
            }
            Err(e) => {
                log_warn!("Selection could not be resolved: {}", e);
                0
            }
        }
    }

    pub fn score_line(&self) -> String {
        let pending = self.selection.preview_score();
        if pending > 0 {
            format!("Score: {}+{}", self.total_score, pending)
        } else {
            format!("Score: {}", self.total_score)
        }
    }

    pub fn finish(&mut self) -> u32 {
        self.best_score = self.best_score.max(self.total_score);
        self.best_score
    }

    pub fn take_replay(&mut self) -> Option<DotsReplay> {
        self.recorder.take().map(ReplayRecorder::finalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dots::board::Board;
    use crate::games::dots::bot_controller::{BotType, calculate_path};
    use crate::games::dots::listener::EventLog;
    use crate::games::dots::luck::LuckSettings;
    use crate::games::dots::luck::tests::ScriptedRolls;
    use crate::replay::ReplayPlayer;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    fn session_from(rows: &[&str], best: u32) -> DotsSession<ScriptedRolls, EventLog> {
        let game = DotsGame::from_board(
            Board::from_rows(rows),
            LuckSettings::default(),
            ScriptedRolls::zeros(),
            EventLog::new(),
        );
        DotsSession::new(game, best)
    }

    #[test]
    fn test_commit_single_dot_does_nothing() {
        let mut session = session_from(&["RR", "GB"], 0);
        session.select(p(0, 0));
        assert_eq!(session.commit(), 0);
        assert!(session.selection().is_empty());
        assert_eq!(session.paths_resolved(), 0);
        assert!(session.game().listener().is_empty());
    }

    #[test]
    fn test_commit_square_adds_loop_score() {
        let mut session = session_from(&[
            "YYB",
            "YYG",
        ], 0);
        for pos in [p(0, 0), p(1, 0), p(1, 1), p(0, 1), p(0, 0)] {
            session.select(pos);
        }
        assert_eq!(session.score_line(), "Score: 0+20");
        assert_eq!(session.commit(), 20);
        assert_eq!(session.total_score(), 20);
        assert_eq!(session.score_line(), "Score: 20");
        assert_eq!(session.paths_resolved(), 1);
        assert!(session.game().board().is_full());
    }

    #[test]
    fn test_finish_keeps_higher_best() {
        let mut session = session_from(&["RR"], 50);
        session.select(p(0, 0));
        session.select(p(1, 0));
        session.commit();
        assert_eq!(session.finish(), 50);

        let mut session = session_from(&["RRR"], 2);
        for pos in [p(0, 0), p(1, 0), p(2, 0)] {
            session.select(pos);
        }
        session.commit();
        assert_eq!(session.finish(), 3);
    }

    #[test]
    fn test_cancel_selection() {
        let mut session = session_from(&["RR"], 0);
        session.select(p(0, 0));
        session.select(p(1, 0));
        session.cancel_selection();
        assert_eq!(session.commit(), 0);
        assert_eq!(session.game().board().render(), "RR");
    }

    #[test]
    fn test_recorded_session_replays_to_same_board() {
        let seed = 31337;
        let settings = LuckSettings::default();
        let game = DotsGame::generate(6, 6, settings, SessionRng::new(seed), ()).unwrap();
        let recorder = ReplayRecorder::new("test".to_string(), seed, 6, 6, settings);
        let mut session = DotsSession::new(game, 0).with_recorder(recorder);

        let mut bot_rng = SessionRng::new(5);
        for _ in 0..40 {
            let Some(path) = calculate_path(BotType::Greedy, session.game(), 6, &mut bot_rng) else {
                break;
            };
            // the bot never backtracks, so every dot extends or closes the chain
            for pos in path {
                session.select(pos);
            }
            session.commit();
        }

        let total = session.total_score();
        let final_board = session.game().board().clone();
        let replay = session.take_replay().unwrap();
        assert_eq!(replay.total_score(), total);

        let player = ReplayPlayer::new(replay);
        let (replayed, replayed_total) = player.play(()).unwrap();
        assert_eq!(replayed_total, total);
        assert_eq!(replayed.board(), &final_board);
    }

    #[test]
    fn test_tampered_replay_is_rejected() {
        let settings = LuckSettings::default();
        let mut bot_rng = SessionRng::new(1);
        let (seed, game, path) = (11..)
            .find_map(|seed| {
                let game = DotsGame::generate(5, 5, settings, SessionRng::new(seed), ()).ok()?;
                let path = calculate_path(BotType::Random, &game, 2, &mut bot_rng)?;
                Some((seed, game, path))
            })
            .unwrap();
        let recorder = ReplayRecorder::new("test".to_string(), seed, 5, 5, settings);
        let mut session = DotsSession::new(game, 0).with_recorder(recorder);

        for pos in path {
            session.select(pos);
        }
        assert_eq!(session.commit(), 1);

        let mut replay = session.take_replay().unwrap();
        replay.paths[0].score = 99;
        let result = ReplayPlayer::new(replay).verify();
        assert!(matches!(
            result,
            Err(crate::replay::ReplayError::ScoreMismatch { index: 0, recorded: 99, replayed: 1 })
        ));
    }
}

use common::config::DotsConfig;
use common::games::SessionRng;
use common::games::dots::{BotType, DotsError, DotsGame, DotsSession, calculate_path};
use common::replay::{DotsReplay, ReplayRecorder};
use common::version::VERSION;
use common::{log, log_debug};

use crate::logging_listener::{EventCounts, LoggingListener};

const BOT_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

pub struct RunSummary {
    pub seed: u64,
    pub total_score: u32,
    pub best_score: u32,
    pub paths_resolved: u32,
    pub events: EventCounts,
    pub replay: Option<DotsReplay>,
}

pub fn run_simulation(
    config: &DotsConfig,
    seed: u64,
    turns: u32,
    bot_type: BotType,
    best_score: u32,
) -> Result<RunSummary, DotsError> {
    let width = config.width as usize;
    let height = config.height as usize;

    let game = DotsGame::generate(
        height,
        width,
        config.luck,
        SessionRng::new(seed),
        LoggingListener::new(),
    )?;
    log!("Generated {}x{} board with seed {}", width, height, seed);
    log_debug!("\n{}", game.board().render());

    let recorder = ReplayRecorder::new(VERSION.to_string(), seed, width, height, config.luck);
    let mut session = DotsSession::new(game, best_score).with_recorder(recorder);
    let mut bot_rng = SessionRng::new(seed ^ BOT_SEED_SALT);

    for turn in 1..=turns {
        let Some(path) = calculate_path(
            bot_type,
            session.game(),
            config.max_path_len as usize,
            &mut bot_rng,
        ) else {
            log!("No connectable dots left after {} turns", turn - 1);
            break;
        };

        for pos in path {
            session.select(pos);
        }
        let closed = session.selection().is_closed();
        let dots = session.selection().len();
        log_debug!("Turn {}: {}", turn, session.score_line());

        let score = session.commit();
        log!(
            "Turn {}: {} dots{} for {} points, total {}",
            turn,
            dots,
            if closed { " (loop)" } else { "" },
            score,
            session.total_score()
        );
        log_debug!("\n{}", session.game().board().render());
    }

    let best_score = session.finish();
    let replay = session.take_replay();
    Ok(RunSummary {
        seed,
        total_score: session.total_score(),
        best_score,
        paths_resolved: session.paths_resolved(),
        events: session.game().listener().counts(),
        replay,
    })
}

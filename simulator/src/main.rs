mod logging_listener;
mod runner;

use std::path::Path;

use clap::{Parser, ValueEnum};
use common::config::{ConfigManager, DotsConfig};
use common::games::dots::BotType;
use common::logger::{self, LogLevel};
use common::replay::{ReplayPlayer, generate_replay_filename, load_replay, save_replay};
use common::version::VERSION;
use common::{log, log_warn};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotArg {
    Random,
    Greedy,
}

impl From<BotArg> for BotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Random => BotType::Random,
            BotArg::Greedy => BotType::Greedy,
        }
    }
}

#[derive(Parser)]
#[command(name = "dots_simulator", version = VERSION)]
struct Args {
    /// YAML config; defaults are used when the file does not exist
    #[arg(long, default_value = "dots_config.yaml")]
    config: String,

    /// Overrides the seed from the config
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 20)]
    turns: u32,

    #[arg(long, value_enum, default_value_t = BotArg::Greedy)]
    bot: BotArg,

    /// Best score carried in from an earlier run
    #[arg(long, default_value_t = 0)]
    best_score: u32,

    #[arg(long)]
    use_log_prefix: bool,

    /// Trace every spawn, move and removal
    #[arg(long)]
    verbose: bool,

    /// Directory to write the run's replay into
    #[arg(long)]
    replay_dir: Option<String>,

    /// Re-run a saved replay and check its scores instead of simulating
    #[arg(long)]
    verify: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Dots".to_string())
    } else {
        None
    };
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    if let Some(replay_path) = args.verify.as_deref() {
        let player = ReplayPlayer::new(load_replay(Path::new(replay_path))?);
        log!(
            "Verifying replay recorded by engine {} ({} paths)",
            player.engine_version(),
            player.total_paths()
        );
        let total = player.verify()?;
        log!("Replay verified, total score {}", total);
        return Ok(());
    }

    let config = ConfigManager::<DotsConfig>::from_yaml_file(&args.config).get_config()?;
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);

    let summary = runner::run_simulation(
        &config,
        seed,
        args.turns,
        args.bot.into(),
        args.best_score,
    )?;

    log!(
        "Seed {}: {} paths, score {}, best {}",
        summary.seed,
        summary.paths_resolved,
        summary.total_score,
        summary.best_score
    );
    log!(
        "Events: {} spawns, {} moves, {} removes",
        summary.events.spawns,
        summary.events.moves,
        summary.events.removes
    );

    if let (Some(replay_dir), Some(replay)) = (args.replay_dir.as_deref(), summary.replay) {
        let replay_dir = Path::new(replay_dir);
        if let Err(e) = std::fs::create_dir_all(replay_dir) {
            log_warn!("Failed to create replay directory: {}", e);
        } else {
            let file_path = replay_dir.join(generate_replay_filename(VERSION));
            match save_replay(&file_path, &replay) {
                Ok(()) => log!("Replay saved to: {}", file_path.display()),
                Err(e) => log_warn!("Failed to save replay: {}", e),
            }
        }
    }

    Ok(())
}

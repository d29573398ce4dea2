mod board;
mod bot_controller;
mod error;
mod game_state;
mod listener;
mod luck;
mod scoring;
mod selection;
mod session;
mod types;

pub use board::Board;
pub use bot_controller::{BotType, calculate_greedy_path, calculate_path};
pub use error::DotsError;
pub use game_state::DotsGame;
pub use listener::{DotsListener, EventLog, Landing};
pub use luck::{LuckCounter, LuckSettings};
pub use scoring::{path_score, preview_score};
pub use selection::{Selection, SelectionChange};
pub use session::DotsSession;
pub use types::{ColorSet, DEFAULT_HEIGHT, DEFAULT_WIDTH, DotColor, DotEvent, Position};

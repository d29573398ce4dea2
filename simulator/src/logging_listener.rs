use common::games::dots::{DotsListener, Position};
use common::log_debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventCounts {
    pub spawns: u64,
    pub moves: u64,
    pub removes: u64,
}

#[derive(Default)]
pub struct LoggingListener {
    counts: EventCounts,
}

impl LoggingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> EventCounts {
        self.counts
    }
}

impl DotsListener for LoggingListener {
    fn on_spawn(&mut self, pos: Position) {
        self.counts.spawns += 1;
        log_debug!("spawn {}", pos);
    }

    fn on_move(&mut self, from: Position, to: Position) {
        self.counts.moves += 1;
        log_debug!("move {} -> {}", from, to);
    }

    fn on_remove(&mut self, pos: Position) {
        self.counts.removes += 1;
        log_debug!("remove {}", pos);
    }
}

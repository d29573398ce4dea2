use crate::games::session_rng::{RollSource, SessionRng};
use crate::{log_debug, log_warn};
use super::board::Board;
use super::error::DotsError;
use super::listener::DotsListener;
use super::luck::{LuckCounter, LuckSettings};
use super::scoring::path_score;
use super::types::{DotColor, Position};

pub struct DotsGame<R: RollSource = SessionRng, L: DotsListener = ()> {
    board: Board,
    luck: LuckCounter,
    rng: R,
    listener: L,
}

impl<R: RollSource, L: DotsListener> DotsGame<R, L> {
    pub fn generate(
        height: usize,
        width: usize,
        settings: LuckSettings,
        rng: R,
        listener: L,
    ) -> Result<Self, DotsError> {
        let board = Board::new(width, height)?;
        let mut game = Self {
            board,
            luck: LuckCounter::new(settings),
            rng,
            listener,
        };

        for x in 0..width {
            for y in 0..height {
                game.spawn_dot(Position::new(x, y));
            }
        }

        log_debug!("Generated {}x{} board, luck {}", width, height, game.luck.value());
        Ok(game)
    }

    #[cfg(test)]
    pub(crate) fn from_board(board: Board, settings: LuckSettings, rng: R, listener: L) -> Self {
        Self {
            board,
            luck: LuckCounter::new(settings),
            rng,
            listener,
        }
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn luck(&self) -> i32 {
        self.luck.value()
    }

    pub fn luck_settings(&self) -> &LuckSettings {
        self.luck.settings()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn color_at(&self, pos: Position) -> Result<DotColor, DotsError> {
        self.board.check_bounds(pos)?;
        Ok(self.board.get(pos).unwrap_or_default())
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_parts(self) -> (Board, L) {
        (self.board, self.listener)
    }

    pub fn can_connect(&self, a: Position, b: Position) -> Result<bool, DotsError> {
        self.board.check_bounds(a)?;
        self.board.check_bounds(b)?;
        Ok(self.connectable(a, b))
    }

    fn connectable(&self, a: Position, b: Position) -> bool {
        if a.x.abs_diff(b.x) + a.y.abs_diff(b.y) != 1 {
            return false;
        }
        match (self.board.get(a), self.board.get(b)) {
            (Some(first), Some(second)) => !first.is_empty() && first == second,
            _ => false,
        }
    }

    // rejects the whole path before any mutation or event
    pub fn resolve_path(&mut self, path: &[Position]) -> Result<u32, DotsError> {
        if path.is_empty() {
            return Err(DotsError::EmptyPath);
        }
        for &pos in path {
            self.board.check_bounds(pos)?;
        }
        for (index, pair) in path.windows(2).enumerate() {
            if !self.connectable(pair[0], pair[1]) {
                let error = DotsError::DisconnectedPath {
                    index: index + 1,
                    from: pair[0],
                    to: pair[1],
                };
                log_warn!("Rejected path of {} dots: {}", path.len(), error);
                return Err(error);
            }
        }

        let score = path_score(path);

        let mut pending: Vec<Position> = Vec::with_capacity(path.len());
        for &pos in path {
            if !pending.contains(&pos) {
                pending.push(pos);
            }
        }

        // later cells in the same column act on the already shifted column
        for &pos in &pending {
            self.remove_dot(pos);
        }

        log_debug!(
            "Resolved path of {} dots ({} distinct) for {} points, luck {}",
            path.len(),
            pending.len(),
            score,
            self.luck.value()
        );
        Ok(score)
    }

    fn remove_dot(&mut self, pos: Position) {
        self.board.take(pos);
        self.listener.on_remove(pos);

        let mut to = pos;
        while let Some(from) = to.above() {
            let color = self.board.take(from);
            self.board.set(to, color);
            self.listener.on_move(from, to);
            to = from;
        }

        self.spawn_dot(to);
    }

    fn spawn_dot(&mut self, pos: Position) {
        let lucky = self.board.neighbour_colors(pos);
        let color = self.luck.roll(lucky, &mut self.rng);
        self.board.set(pos, color);
        self.listener.on_spawn(pos);
    }
}

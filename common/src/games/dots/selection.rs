use crate::games::session_rng::RollSource;
use super::game_state::DotsGame;
use super::listener::DotsListener;
use super::scoring::preview_score;
use super::types::Position;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectionChange {
    Started,
    Extended,
    Closed,
    Backtracked,
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct Selection {
    chain: Vec<Position>,
    closed: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select<R: RollSource, L: DotsListener>(
        &mut self,
        pos: Position,
        game: &DotsGame<R, L>,
    ) -> SelectionChange {
        if !game.board().contains(pos) {
            return SelectionChange::Ignored;
        }

        let Some(&last) = self.chain.last() else {
            self.chain.push(pos);
            return SelectionChange::Started;
        };

        if pos == last {
            return SelectionChange::Ignored;
        }

        if self.chain.len() > 1 && self.chain[self.chain.len() - 2] == pos {
            self.chain.pop();
            self.closed = false;
            return SelectionChange::Backtracked;
        }

        if self.closed || !matches!(game.can_connect(last, pos), Ok(true)) {
            return SelectionChange::Ignored;
        }

        let revisits = self.chain.contains(&pos);
        self.chain.push(pos);
        if revisits {
            self.closed = true;
            SelectionChange::Closed
        } else {
            SelectionChange::Extended
        }
    }

    pub fn path(&self) -> &[Position] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn preview_score(&self) -> u32 {
        preview_score(self.chain.len(), self.closed)
    }

    pub fn take_path(&mut self) -> Vec<Position> {
        self.closed = false;
        std::mem::take(&mut self.chain)
    }

    pub fn clear(&mut self) {
        self.chain.clear();
        self.closed = false;
    }
}

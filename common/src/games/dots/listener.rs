use std::collections::HashMap;

use super::types::{DotEvent, Position};

pub trait DotsListener {
    fn on_spawn(&mut self, pos: Position);
    fn on_move(&mut self, from: Position, to: Position);
    fn on_remove(&mut self, pos: Position);
}

impl DotsListener for () {
    fn on_spawn(&mut self, _pos: Position) {}
    fn on_move(&mut self, _from: Position, _to: Position) {}
    fn on_remove(&mut self, _pos: Position) {}
}

impl<T: DotsListener + ?Sized> DotsListener for &mut T {
    fn on_spawn(&mut self, pos: Position) {
        (**self).on_spawn(pos);
    }

    fn on_move(&mut self, from: Position, to: Position) {
        (**self).on_move(from, to);
    }

    fn on_remove(&mut self, pos: Position) {
        (**self).on_remove(pos);
    }
}

impl<T: DotsListener + ?Sized> DotsListener for Box<T> {
    fn on_spawn(&mut self, pos: Position) {
        (**self).on_spawn(pos);
    }

    fn on_move(&mut self, from: Position, to: Position) {
        (**self).on_move(from, to);
    }

    fn on_remove(&mut self, pos: Position) {
        (**self).on_remove(pos);
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Landing {
    pub origin: Option<Position>,
    pub destination: Position,
}

#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<DotEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DotEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<DotEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    // last cell of every spawned or moved token, in order of first appearance
    pub fn final_destinations(&self) -> Vec<Landing> {
        let mut tokens: Vec<(Landing, bool)> = Vec::new();
        let mut occupant: HashMap<Position, usize> = HashMap::new();

        for event in &self.events {
            match *event {
                DotEvent::Spawn(pos) => {
                    occupant.insert(pos, tokens.len());
                    tokens.push((Landing { origin: None, destination: pos }, true));
                }
                DotEvent::Move { from, to } => {
                    let id = match occupant.remove(&from) {
                        Some(id) => id,
                        None => {
                            tokens.push((Landing { origin: Some(from), destination: from }, true));
                            tokens.len() - 1
                        }
                    };
                    tokens[id].0.destination = to;
                    occupant.insert(to, id);
                }
                DotEvent::Remove(pos) => {
                    if let Some(id) = occupant.remove(&pos) {
                        tokens[id].1 = false;
                    }
                }
            }
        }

        tokens
            .into_iter()
            .filter(|(_, alive)| *alive)
            .map(|(landing, _)| landing)
            .collect()
    }
}

impl DotsListener for EventLog {
    fn on_spawn(&mut self, pos: Position) {
        self.events.push(DotEvent::Spawn(pos));
    }

    fn on_move(&mut self, from: Position, to: Position) {
        self.events.push(DotEvent::Move { from, to });
    }

    fn on_remove(&mut self, pos: Position) {
        self.events.push(DotEvent::Remove(pos));
    }
}

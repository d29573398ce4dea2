use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: usize = 6;
pub const DEFAULT_HEIGHT: usize = 6;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum DotColor {
    Red,
    Blue,
    Green,
    Purple,
    Yellow,
    #[default]
    Empty,
}

impl DotColor {
    pub const PALETTE: [DotColor; 5] = [
        DotColor::Red,
        DotColor::Blue,
        DotColor::Green,
        DotColor::Purple,
        DotColor::Yellow,
    ];

    pub fn is_empty(self) -> bool {
        self == DotColor::Empty
    }

    pub fn symbol(self) -> char {
        match self {
            DotColor::Red => 'R',
            DotColor::Blue => 'B',
            DotColor::Green => 'G',
            DotColor::Purple => 'P',
            DotColor::Yellow => 'Y',
            DotColor::Empty => '.',
        }
    }

    fn palette_index(self) -> Option<usize> {
        DotColor::PALETTE.iter().position(|&c| c == self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ColorSet(u8);

impl ColorSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, color: DotColor) {
        if let Some(index) = color.palette_index() {
            self.0 |= 1 << index;
        }
    }

    pub fn contains(&self, color: DotColor) -> bool {
        color
            .palette_index()
            .is_some_and(|index| self.0 & (1 << index) != 0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<DotColor> for ColorSet {
    fn from_iter<I: IntoIterator<Item = DotColor>>(iter: I) -> Self {
        let mut set = ColorSet::new();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn above(self) -> Option<Position> {
        self.y.checked_sub(1).map(|y| Position::new(self.x, y))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DotEvent {
    Spawn(Position),
    Move { from: Position, to: Position },
    Remove(Position),
}

use super::error::DotsError;
use super::types::{ColorSet, DotColor, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<DotColor>,
    width: usize,
    height: usize,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, DotsError> {
        if width == 0 || height == 0 {
            return Err(DotsError::InvalidDimensions { width, height });
        }
        Ok(Self {
            cells: vec![DotColor::Empty; width * height],
            width,
            height,
        })
    }

    #[cfg(test)]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|row| {
                assert_eq!(row.len(), width, "ragged test board");
                row.chars().map(|c| match c {
                    'R' => DotColor::Red,
                    'B' => DotColor::Blue,
                    'G' => DotColor::Green,
                    'P' => DotColor::Purple,
                    'Y' => DotColor::Yellow,
                    _ => DotColor::Empty,
                })
            })
            .collect();
        Self { cells, width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn check_bounds(&self, pos: Position) -> Result<(), DotsError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(DotsError::OutOfBounds {
                position: pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, pos: Position) -> Option<DotColor> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.y * self.width + pos.x).copied()
    }

    pub(crate) fn set(&mut self, pos: Position, color: DotColor) {
        debug_assert!(self.contains(pos));
        let index = pos.y * self.width + pos.x;
        self.cells[index] = color;
    }

    pub(crate) fn take(&mut self, pos: Position) -> DotColor {
        debug_assert!(self.contains(pos));
        let index = pos.y * self.width + pos.x;
        std::mem::take(&mut self.cells[index])
    }

    pub fn neighbour_colors(&self, pos: Position) -> ColorSet {
        let mut colors = ColorSet::new();
        if pos.x > 0 {
            colors.insert(self.cells[pos.y * self.width + pos.x - 1]);
        }
        if pos.y > 0 {
            colors.insert(self.cells[(pos.y - 1) * self.width + pos.x]);
        }
        if pos.x + 1 < self.width {
            colors.insert(self.cells[pos.y * self.width + pos.x + 1]);
        }
        if pos.y + 1 < self.height {
            colors.insert(self.cells[(pos.y + 1) * self.width + pos.x]);
        }
        colors
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn cells(&self) -> &[DotColor] {
        &self.cells
    }

    pub fn render(&self) -> String {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

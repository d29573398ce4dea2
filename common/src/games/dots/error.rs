use super::types::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotsError {
    InvalidDimensions { width: usize, height: usize },
    OutOfBounds { position: Position, width: usize, height: usize },
    EmptyPath,
    DisconnectedPath { index: usize, from: Position, to: Position },
}

impl std::fmt::Display for DotsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotsError::InvalidDimensions { width, height } => {
                write!(f, "Invalid board dimensions {}x{}", width, height)
            }
            DotsError::OutOfBounds { position, width, height } => {
                write!(f, "Position {} is outside the {}x{} board", position, width, height)
            }
            DotsError::EmptyPath => write!(f, "Path is empty"),
            DotsError::DisconnectedPath { index, from, to } => {
                write!(f, "Points can't be connected: {} -> {} at step {}", from, to, index)
            }
        }
    }
}

impl std::error::Error for DotsError {}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Pos;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardError {
    /// Board side length must be at least one.
    InvalidSize,
    /// `size * size` does not fit in `usize`.
    TooLarge { size: usize },
    TooManyMines { mines: usize, cells: usize },
    OutOfBounds { pos: Pos, size: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize => write!(f, "board size must be at least 1"),
            BoardError::TooLarge { size } => {
                write!(f, "a {size}x{size} board has too many cells")
            }
            BoardError::TooManyMines { mines, cells } => write!(
                f,
                "number of mines ({mines}) cannot exceed the total number of cells ({cells})"
            ),
            BoardError::OutOfBounds { pos, size } => write!(
                f,
                "position ({}, {}) is outside the {size}x{size} board",
                pos.row, pos.col
            ),
        }
    }
}

impl std::error::Error for BoardError {}

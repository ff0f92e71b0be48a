use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Visible state of a single cell.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "state")]
pub enum Cell {
    #[serde(rename = "hidden")]
    Hidden,
    #[serde(rename = "revealed")]
    Revealed { adjacent: u8 },
    #[serde(rename = "exploded")]
    Exploded,
}

impl Cell {
    /// Character used for this cell in the text grid.
    pub fn symbol(&self) -> char {
        match self {
            Cell::Hidden => '_',
            Cell::Revealed { adjacent } => char::from(b'0' + adjacent),
            Cell::Exploded => 'X',
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Cell::Hidden)
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameParams {
    pub size: usize,
    pub mines: usize,
}

impl Default for GameParams {
    fn default() -> Self {
        Self { size: 10, mines: 10 }
    }
}

impl GameParams {
    /// Total cell count, `None` if `size * size` overflows.
    pub fn cells(&self) -> Option<usize> {
        self.size.checked_mul(self.size)
    }

    /// Rejects an empty or unrepresentable board and more mines than there
    /// are cells. Returns the cell count on success.
    pub fn validate(&self) -> Result<usize, BoardError> {
        if self.size == 0 {
            return Err(BoardError::InvalidSize);
        }

        let cells = self
            .cells()
            .ok_or(BoardError::TooLarge { size: self.size })?;

        if self.mines > cells {
            return Err(BoardError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }

        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols() {
        assert_eq!(Cell::Hidden.symbol(), '_');
        assert_eq!(Cell::Exploded.symbol(), 'X');
        assert_eq!(Cell::Revealed { adjacent: 0 }.symbol(), '0');
        assert_eq!(Cell::Revealed { adjacent: 8 }.symbol(), '8');
    }

    #[test]
    fn default_params_match_classic_board() {
        let params = GameParams::default();
        assert_eq!(params.size, 10);
        assert_eq!(params.mines, 10);
        assert_eq!(params.validate(), Ok(100));
    }

    #[test]
    fn validate_rejects_bad_params() {
        assert_eq!(
            GameParams { size: 0, mines: 0 }.validate(),
            Err(BoardError::InvalidSize)
        );
        assert_eq!(
            GameParams { size: 3, mines: 10 }.validate(),
            Err(BoardError::TooManyMines { mines: 10, cells: 9 })
        );
        assert_eq!(GameParams { size: 3, mines: 9 }.validate(), Ok(9));
        assert_eq!(GameParams { size: 1, mines: 0 }.validate(), Ok(1));
    }

    #[test]
    fn validate_rejects_overflowing_size() {
        let size = usize::MAX / 2 + 1;
        assert_eq!(GameParams { size, mines: 0 }.cells(), None);
        assert_eq!(
            GameParams { size, mines: 0 }.validate(),
            Err(BoardError::TooLarge { size })
        );
        assert_eq!(
            GameParams { size: usize::MAX, mines: 1 }.validate(),
            Err(BoardError::TooLarge { size: usize::MAX })
        );
    }

    #[test]
    fn cell_serializes_with_state_tag() {
        let json = serde_json::to_string(&Cell::Revealed { adjacent: 3 }).unwrap();
        assert_eq!(json, r#"{"state":"revealed","adjacent":3}"#);

        let cell: Cell = serde_json::from_str(r#"{"state":"exploded"}"#).unwrap();
        assert_eq!(cell, Cell::Exploded);
    }

    #[test]
    fn params_fill_missing_fields_from_default() {
        let params: GameParams = serde_json::from_str(r#"{"size":4}"#).unwrap();
        assert_eq!(params, GameParams { size: 4, mines: 10 });
    }
}

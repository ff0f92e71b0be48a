use minesweeper_common::models::Cell;

/// One game's grid. Both buffers are row-major, indexed by `row * size + col`.
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) size: usize,
    pub(crate) mines: usize,
    pub(crate) revealed: usize,
    pub(crate) cells: Vec<Cell>,
    /// Fixed once the board is built.
    pub(crate) layout: Vec<bool>,
}

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use minesweeper_common::{
    BoardError,
    models::{Cell, GameParams, Pos},
    protocol::RevealOutcome,
};

use crate::data::Board;

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds Moore neighbours of `pos` on a `size` x `size` grid.
pub fn neighbours(size: usize, pos: Pos) -> impl Iterator<Item = Pos> {
    OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Pos { row, col })
    })
}

/// Rejection sampling: draw uniform coordinates until `params.mines`
/// distinct cells are marked. Expects validated params.
fn place_mines<R: Rng + ?Sized>(params: &GameParams, cells: usize, rng: &mut R) -> Vec<bool> {
    let mut layout = vec![false; cells];
    let mut placed = 0;
    let mut draws = 0usize;

    while placed < params.mines {
        let row = rng.random_range(0..params.size);
        let col = rng.random_range(0..params.size);
        draws += 1;

        let index = row * params.size + col;
        if !layout[index] {
            layout[index] = true;
            placed += 1;
        }
    }

    debug!("Placed {} mines in {} draws", placed, draws);
    layout
}

impl Board {
    /// Builds a board with mines placed by the thread-local RNG.
    pub fn new(params: GameParams) -> Result<Self, BoardError> {
        Self::with_rng(params, &mut rand::rng())
    }

    #[instrument(level = "trace", skip(rng))]
    pub fn with_rng<R: Rng + ?Sized>(params: GameParams, rng: &mut R) -> Result<Self, BoardError> {
        let cells = params.validate()?;
        info!(
            "Creating new board: {}x{} with {} mines",
            params.size, params.size, params.mines
        );

        Ok(Self {
            size: params.size,
            mines: params.mines,
            revealed: 0,
            cells: vec![Cell::Hidden; cells],
            layout: place_mines(&params, cells, rng),
        })
    }

    /// Builds a board with mines at exactly `positions`. Repeated positions
    /// count once.
    pub fn with_mines(size: usize, positions: &[Pos]) -> Result<Self, BoardError> {
        let cells = GameParams { size, mines: 0 }.validate()?;

        let mut layout = vec![false; cells];
        for &pos in positions {
            if pos.row >= size || pos.col >= size {
                return Err(BoardError::OutOfBounds { pos, size });
            }
            layout[pos.row * size + pos.col] = true;
        }

        Ok(Self {
            size,
            mines: layout.iter().filter(|mine| **mine).count(),
            revealed: 0,
            cells: vec![Cell::Hidden; cells],
            layout,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn mine_count(&self) -> usize {
        self.mines
    }

    /// Number of cells currently in the `Revealed` state.
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.validate_pos(pos).then(|| self.cells[self.index(pos)])
    }

    pub fn is_mine(&self, pos: Pos) -> Option<bool> {
        self.validate_pos(pos).then(|| self.layout[self.index(pos)])
    }

    pub fn neighbours(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        neighbours(self.size, pos)
    }

    pub fn count_adjacent_mines(&self, pos: Pos) -> u8 {
        neighbours(self.size, pos)
            .filter(|&neighbour| self.layout[self.index(neighbour)])
            .count() as u8
    }

    #[instrument(level = "trace", skip(self), fields(row = pos.row, col = pos.col))]
    pub fn reveal(&mut self, pos: Pos) -> Result<RevealOutcome, BoardError> {
        if !self.validate_pos(pos) {
            warn!("Invalid reveal position: ({}, {})", pos.row, pos.col);
            return Err(BoardError::OutOfBounds {
                pos,
                size: self.size,
            });
        }

        let index = self.index(pos);
        if !self.cells[index].is_hidden() {
            debug!("Ignoring reveal on open cell ({}, {})", pos.row, pos.col);
            return Ok(RevealOutcome::Safe);
        }

        if self.layout[index] {
            warn!("Player hit mine at ({}, {}) - game over!", pos.row, pos.col);
            self.cells[index] = Cell::Exploded;
            return Ok(RevealOutcome::Mine);
        }

        let revealed = self.flood_reveal(pos);
        debug!(
            "Revealed {} cells from ({}, {}), {} revealed in total",
            revealed, pos.row, pos.col, self.revealed
        );
        Ok(RevealOutcome::Safe)
    }

    /// Reveals `start` and cascades through zero-count cells using an explicit
    /// stack. Only neighbours of zero-count cells are pushed, so no mine is
    /// ever reached.
    fn flood_reveal(&mut self, start: Pos) -> usize {
        let mut pending = vec![start];
        let mut revealed = 0;

        while let Some(pos) = pending.pop() {
            let index = self.index(pos);
            if !self.cells[index].is_hidden() {
                continue;
            }

            let adjacent = self.count_adjacent_mines(pos);
            self.cells[index] = Cell::Revealed { adjacent };
            revealed += 1;

            if adjacent == 0 {
                pending.extend(neighbours(self.size, pos));
            }
        }

        self.revealed += revealed;
        revealed
    }

    fn validate_pos(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Pos) -> usize {
        pos.row * self.size + pos.col
    }
}

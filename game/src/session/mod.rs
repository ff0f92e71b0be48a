use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, info, instrument};

use minesweeper_common::{
    BoardError,
    models::{GameParams, Pos},
};

use crate::{Result, data::Board};

const BANNER_RULE: &str = "///////////////////////////////////////////";
const GAME_OVER_FACES: &str = "(T-T) (T-T) (T-T) (T-T)";

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player revealed a mine.
    Exploded,
    /// Input ran out before a mine was hit.
    Quit,
}

/// Interactive driver: asks for the board setup, then reads moves until a
/// mine is revealed or input ends. All validation of raw input happens here,
/// so the board only ever sees in-range coordinates.
pub struct Session<R, W, G> {
    input: R,
    output: W,
    rng: G,
    defaults: GameParams,
}

fn parse_move(line: &str, size: usize) -> Option<Pos> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;

    if parts.next().is_some() || row >= size || col >= size {
        return None;
    }

    Some(Pos { row, col })
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(input: R, output: W, rng: G, defaults: GameParams) -> Self {
        Self {
            input,
            output,
            rng,
            defaults,
        }
    }

    /// Gives back the output sink, e.g. to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        let Some(params) = self.configure()? else {
            info!("Input closed during setup");
            return Ok(SessionEnd::Quit);
        };

        let mut board = Board::with_rng(params, &mut self.rng)?;
        self.play(&mut board)
    }

    /// Offers to replace the default board. Returns `None` if input ends
    /// before a complete setup was entered.
    pub fn configure(&mut self) -> Result<Option<GameParams>> {
        let defaults = self.defaults;
        writeln!(
            self.output,
            "The default board size is {}x{} with {} mines.",
            defaults.size, defaults.size, defaults.mines
        )?;

        let Some(choice) = self.prompt(
            "Would you like to change the board dimensions or the number of mines? (y/n): ",
        )?
        else {
            return Ok(None);
        };

        if !choice.trim().eq_ignore_ascii_case("y") {
            return Ok(Some(defaults));
        }

        let size = loop {
            let Some(line) = self.prompt("Enter the board size (e.g., 10 for a 10x10 board): ")?
            else {
                return Ok(None);
            };

            match line.trim().parse::<usize>() {
                Ok(size) if (GameParams { size, mines: 0 }).validate().is_ok() => break size,
                _ => writeln!(
                    self.output,
                    "Invalid board size. Please enter a positive whole number."
                )?,
            }
        };

        writeln!(
            self.output,
            "Choose the difficulty of your game. The higher the count of the mines, the more difficult the game becomes!"
        )?;

        loop {
            let Some(line) = self.prompt("Enter the number of mines: ")? else {
                return Ok(None);
            };

            let Ok(mines) = line.trim().parse::<usize>() else {
                writeln!(
                    self.output,
                    "Invalid number of mines. Please enter a whole number."
                )?;
                continue;
            };

            let params = GameParams { size, mines };
            match params.validate() {
                Ok(_) => {
                    debug!("Player chose {}x{} with {} mines", size, size, mines);
                    return Ok(Some(params));
                }
                Err(BoardError::TooManyMines { cells, .. }) => writeln!(
                    self.output,
                    "Error: Number of mines cannot exceed the total number of cells ({cells}). Please enter a valid number of mines."
                )?,
                Err(err) => return Err(err.into()),
            }
        }
    }

    #[instrument(level = "trace", skip_all, fields(size = board.size()))]
    pub fn play(&mut self, board: &mut Board) -> Result<SessionEnd> {
        info!(
            "Starting game: {}x{} with {} mines",
            board.size(),
            board.size(),
            board.mine_count()
        );
        write!(
            self.output,
            "\n\n{BANNER_RULE}\n\n         Minesweeper Game!           \n\n\n{BANNER_RULE}\n\n"
        )?;

        let prompt = format!("Enter row and column (0-{}): ", board.size() - 1);
        let end = loop {
            write!(self.output, "{board}")?;

            let Some(line) = self.prompt(&prompt)? else {
                break SessionEnd::Quit;
            };

            let Some(pos) = parse_move(&line, board.size()) else {
                writeln!(
                    self.output,
                    "Invalid input. Please enter valid row and column values."
                )?;
                continue;
            };

            if board.reveal(pos)?.is_mine() {
                writeln!(self.output, "{GAME_OVER_FACES}")?;
                writeln!(self.output, "Game Over! You hit a mine!")?;
                writeln!(self.output, "{GAME_OVER_FACES}")?;
                break SessionEnd::Exploded;
            }
        };

        write!(self.output, "{board}")?;
        self.output.flush()?;

        info!(
            "Session ended ({:?}) with {} cells revealed",
            end,
            board.revealed_count()
        );
        Ok(end)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_in_range_numbers() {
        assert_eq!(parse_move("1 2\n", 3), Some(Pos::new(1, 2)));
        assert_eq!(parse_move("  0\t0  ", 1), Some(Pos::new(0, 0)));
    }

    #[test]
    fn rejects_malformed_moves() {
        for line in ["", "1", "a b", "1 x", "-1 0", "0 3", "3 0", "1 1 1", "1.5 0"] {
            assert_eq!(parse_move(line, 3), None, "{line:?}");
        }
    }
}

use std::fmt;

use crate::data::Board;

impl Board {
    /// Text grid with a column header and one `row | cells` line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for col in 0..self.size {
            write!(f, "{col} ")?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            write!(f, "{row} | ")?;
            for cell in cells {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

use std::fmt;

use super::{Board, Grid, Square};

/// Both grids side by side, grid one on the left. Uppercase is White,
/// lowercase Black, `.` an empty cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0 1 2 3 4 5 6 7          0 1 2 3 4 5 6 7")?;
        for row in 0..8 {
            write!(f, "{row} |")?;
            for grid in Grid::BOTH {
                for col in 0..8 {
                    let cell = self
                        .piece_at(grid, Square(row, col))
                        .map_or('.', |p| p.piece.to_display_char(p.color));
                    write!(f, " {cell}")?;
                }
                if grid == Grid::One {
                    write!(f, " |    {row} |")?;
                }
            }
            writeln!(f, " |")?;
        }
        write!(f, "{} to move", self.side_to_move)
    }
}

use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::moves::Moves;

/// Every board of a solution separated by empty lines, then the moves.
pub struct SolutionFormatter<'a> {
    boards: &'a [Board],
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(boards: &'a [Board], format: Format) -> Self {
        Self { boards, format }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for board in self.boards {
            writeln!(f, "{}", board.format(self.format))?;
        }
        match Moves::from_path(self.boards) {
            Some(moves) => {
                writeln!(f, "{}", moves)?;
                writeln!(f, "Moves: {}", moves.move_cnt())
            }
            None => writeln!(f, "Not a valid path"),
        }
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

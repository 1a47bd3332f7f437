use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::config::Format;
use crate::data::SIZE;

pub struct BoardFormatter<'a> {
    board: &'a Board,
    format: Format,
}

impl<'a> BoardFormatter<'a> {
    pub(crate) fn new(board: &'a Board, format: Format) -> Self {
        Self { board, format }
    }
}

impl Display for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cells = self.board.cells();
        match self.format {
            Format::Compact => {
                for value in cells {
                    write!(f, "{}", value)?;
                }
                writeln!(f)
            }
            Format::Grid => {
                for row in cells.chunks(usize::from(SIZE)) {
                    for (c, value) in row.iter().enumerate() {
                        if c > 0 {
                            write!(f, " ")?;
                        }
                        write!(f, "{}", value)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

impl Debug for BoardFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

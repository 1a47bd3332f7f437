use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::Dir;

/// Directions the blank traveled, `urdl` style.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Moves(Vec<Dir>);

impl Moves {
    pub fn new(moves: Vec<Dir>) -> Self {
        Moves(moves)
    }

    /// `None` unless every consecutive pair of boards is a single move apart.
    pub fn from_path(boards: &[Board]) -> Option<Moves> {
        let mut moves = Moves::default();
        for pair in boards.windows(2) {
            let from = pair[0].find_empty().ok()?;
            let to = pair[1].find_empty().ok()?;
            let dir = Dir::between(from, to)?;
            if pair[0].moved(dir).ok()? != Some(pair[1]) {
                return None;
            }
            moves.0.push(dir);
        }
        Some(moves)
    }

    pub fn move_cnt(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, Dir> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Moves {
    type Item = &'a Dir;
    type IntoIter = ::std::slice::Iter<'a, Dir>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

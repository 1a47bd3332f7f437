use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;

use crate::board_formatter::BoardFormatter;
use crate::config::Format;
use crate::data::{Dir, Pos, CELLS, DIRECTIONS, GOAL, SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    OutOfRange(u8),
    Duplicate(u8),
    NoBlank,
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::OutOfRange(v) => write!(f, "Value {} is out of range - only 0-8 allowed", v),
            BoardErr::Duplicate(v) => write!(f, "Value {} appears more than once", v),
            BoardErr::NoBlank => write!(f, "No blank (0) on the board"),
        }
    }
}

impl Error for BoardErr {}

/// A 3x3 arrangement of tiles, 0 is the blank.
///
/// Boards are plain values, two boards are equal when all cells are equal.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board([u8; CELLS]);

impl Board {
    /// Fails unless the values are a permutation of 0-8.
    pub fn new(rows: [[u8; 3]; 3]) -> Result<Board, BoardErr> {
        let board = Board::new_unchecked(rows);
        board.validate()?;
        Ok(board)
    }

    /// The search assumes the board is a permutation - if it isn't,
    /// it still terminates but the result is meaningless.
    pub fn new_unchecked(rows: [[u8; 3]; 3]) -> Board {
        let mut cells = [0; CELLS];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells[Pos::new(r as u8, c as u8).index()] = value;
            }
        }
        Board(cells)
    }

    pub(crate) fn from_cells(cells: [u8; CELLS]) -> Result<Board, BoardErr> {
        let board = Board(cells);
        board.validate()?;
        Ok(board)
    }

    pub fn goal() -> Board {
        Board(GOAL)
    }

    fn validate(&self) -> Result<(), BoardErr> {
        let mut seen = [false; CELLS];
        for &value in &self.0 {
            let i = usize::from(value);
            if i >= CELLS {
                return Err(BoardErr::OutOfRange(value));
            }
            if seen[i] {
                return Err(BoardErr::Duplicate(value));
            }
            seen[i] = true;
        }
        Ok(())
    }

    pub fn rows(&self) -> [[u8; 3]; 3] {
        let mut rows = [[0; 3]; 3];
        for (i, &value) in self.0.iter().enumerate() {
            let pos = Pos::from_index(i);
            rows[usize::from(pos.r)][usize::from(pos.c)] = value;
        }
        rows
    }

    pub(crate) fn cells(&self) -> &[u8; CELLS] {
        &self.0
    }

    pub fn is_goal(&self) -> bool {
        self.0 == GOAL
    }

    /// Sum of distances of all tiles (blank excluded) from their goal positions.
    pub fn manhattan(&self) -> u32 {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(i, &value)| Pos::from_index(i).dist(goal_pos(value)))
            .sum()
    }

    pub fn find_empty(&self) -> Result<Pos, BoardErr> {
        self.0
            .iter()
            .position(|&value| value == 0)
            .map(Pos::from_index)
            .ok_or(BoardErr::NoBlank)
    }

    /// The board after moving the blank in `dir`, `None` if it would leave the grid.
    pub fn moved(&self, dir: Dir) -> Result<Option<Board>, BoardErr> {
        let blank = self.find_empty()?;
        Ok(blank.step(dir).map(|target| self.swapped(blank, target)))
    }

    /// 2 boards for a blank in a corner, 3 on an edge, 4 in the center.
    pub fn neighbors(&self) -> Result<Vec<Board>, BoardErr> {
        let blank = self.find_empty()?;
        Ok(DIRECTIONS
            .iter()
            .filter_map(|&dir| blank.step(dir))
            .map(|target| self.swapped(blank, target))
            .collect())
    }

    /// Only half of all permutations can reach the goal.
    ///
    /// On a grid with an odd width a move never changes the parity
    /// of the number of inversions between tiles and the goal has none.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    fn inversions(&self) -> usize {
        let tiles: Vec<_> = self.0.iter().cloned().filter(|&v| v != 0).collect();
        let mut cnt = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    cnt += 1;
                }
            }
        }
        cnt
    }

    pub fn format(&self, format: Format) -> BoardFormatter<'_> {
        BoardFormatter::new(self, format)
    }

    fn swapped(&self, a: Pos, b: Pos) -> Board {
        let mut cells = self.0;
        cells.swap(a.index(), b.index());
        Board(cells)
    }
}

fn goal_pos(value: u8) -> Pos {
    // only correct for 1-8 but never panics so malformed boards still terminate
    let index = usize::from(value.wrapping_sub(1));
    Pos::new(
        (index / usize::from(SIZE)) as u8,
        (index % usize::from(SIZE)) as u8,
    )
}

impl Index<Pos> for Board {
    type Output = u8;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.0[index.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Format::Grid))
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for value in &self.0 {
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

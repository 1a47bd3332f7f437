use std::fmt::{self, Display, Formatter};

/// Rows and columns of the puzzle.
pub const SIZE: u8 = 3;

pub(crate) const CELLS: usize = (SIZE * SIZE) as usize;

pub(crate) const GOAL: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// The order in which neighbors are generated.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub(crate) fn from_index(index: usize) -> Pos {
        Pos::new(index as u8 / SIZE, index as u8 % SIZE)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.r) * usize::from(SIZE) + usize::from(self.c)
    }

    pub fn dist(self, other: Pos) -> u32 {
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u32
    }

    /// `None` if the step would leave the grid.
    pub fn step(self, dir: Dir) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        let r = i32::from(self.r) + dr;
        let c = i32::from(self.c) + dc;
        if r < 0 || c < 0 || r >= i32::from(SIZE) || c >= i32::from(SIZE) {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }
}

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }

    pub(crate) fn between(from: Pos, to: Pos) -> Option<Dir> {
        DIRECTIONS
            .iter()
            .cloned()
            .find(|&dir| from.step(dir) == Some(to))
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_stays_in_grid() {
        let corner = Pos::new(0, 0);
        assert_eq!(corner.step(Dir::Up), None);
        assert_eq!(corner.step(Dir::Left), None);
        assert_eq!(corner.step(Dir::Down), Some(Pos::new(1, 0)));
        assert_eq!(corner.step(Dir::Right), Some(Pos::new(0, 1)));

        let corner = Pos::new(2, 2);
        assert_eq!(corner.step(Dir::Down), None);
        assert_eq!(corner.step(Dir::Right), None);
    }

    #[test]
    fn indexing() {
        for i in 0..CELLS {
            assert_eq!(Pos::from_index(i).index(), i);
        }
        assert_eq!(Pos::from_index(5), Pos::new(1, 2));
    }

    #[test]
    fn directions_between() {
        let center = Pos::new(1, 1);
        assert_eq!(Dir::between(center, Pos::new(0, 1)), Some(Dir::Up));
        assert_eq!(Dir::between(center, Pos::new(1, 2)), Some(Dir::Right));
        assert_eq!(Dir::between(center, Pos::new(2, 2)), None);
        assert_eq!(center.dist(Pos::new(0, 0)), 2);
    }
}

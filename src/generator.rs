use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::data::GOAL;

/// Any permutation, half of them can't be solved.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut c = GOAL;
    c.shuffle(rng);
    Board::new_unchecked([[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]])
}

pub fn random_solvable_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    loop {
        let board = random_board(rng);
        if board.is_solvable() {
            return board;
        }
    }
}

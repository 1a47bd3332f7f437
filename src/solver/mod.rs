pub mod a_star;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, info};

use crate::board::{Board, BoardErr};
use crate::config::{Config, GoalCheck};
use crate::moves::Moves;
use crate::state::{State, StateArena, StateId};
use crate::Solve;

use self::a_star::{SearchNode, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    /// The board (or one derived from it) has no blank.
    InvariantViolation(BoardErr),
    /// Gave up after expanding this many boards.
    LimitReached(usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::InvariantViolation(ref err) => write!(f, "Invariant violation: {}", err),
            SolverErr::LimitReached(cnt) => {
                write!(f, "Gave up after expanding {} boards", cnt)
            }
        }
    }
}

impl Error for SolverErr {}

impl From<BoardErr> for SolverErr {
    fn from(err: BoardErr) -> Self {
        SolverErr::InvariantViolation(err)
    }
}

pub struct SolverOk {
    /// From the initial board to the goal, `None` if the goal can't be reached.
    pub boards: Option<Vec<Board>>,
    pub stats: Stats,
    pub(crate) goal_check: GoalCheck,
}

impl SolverOk {
    fn new(boards: Option<Vec<Board>>, stats: Stats, goal_check: GoalCheck) -> Self {
        Self {
            boards,
            stats,
            goal_check,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.boards.is_some()
    }

    pub fn moves(&self) -> Option<Moves> {
        self.boards.as_ref().and_then(|boards| Moves::from_path(boards))
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.boards {
            None => writeln!(f, "No solution")?,
            Some(ref boards) => writeln!(f, "{}: {}", self.goal_check, boards.len() - 1)?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, config: &Config) -> Result<SolverOk, SolverErr> {
        solve(*self, config)
    }
}

fn solve(board: Board, config: &Config) -> Result<SolverOk, SolverErr> {
    if config.parity_check && !board.is_solvable() {
        debug!("Parity check failed for {:?}", board);
        return Ok(SolverOk::new(None, Stats::new(), config.goal_check));
    }

    let mut arena = StateArena::new();
    let (found, stats) = search(&mut arena, board, config)?;
    let boards = found.map(|id| arena.backtrack(id));
    if let Some(ref boards) = boards {
        info!("Solved in {} moves", boards.len() - 1);
    } else {
        info!("No solution for {:?}", board);
    }
    Ok(SolverOk::new(boards, stats, config.goal_check))
}

fn search(
    arena: &mut StateArena,
    board: Board,
    config: &Config,
) -> Result<(Option<StateId>, Stats), SolverErr> {
    debug!("Search called with {}", config.goal_check);

    let mut stats = Stats::new();

    let initial = State::initial(board);
    let start = arena.alloc(initial);
    stats.add_created(0);
    if board.is_goal() {
        return Ok((Some(start), stats));
    }

    let mut to_visit = BinaryHeap::new();
    let mut visited = FnvHashSet::default();
    to_visit.push(Reverse(SearchNode::new(initial.priority(), start)));

    while let Some(Reverse(node)) = to_visit.pop() {
        let cur = arena[node.id];

        // the same board can be queued several times before it's expanded
        // the first one popped has the lowest priority
        if !visited.insert(*cur.board()) {
            stats.add_reached_duplicate(cur.moves());
            continue;
        }

        if config.goal_check == GoalCheck::Expand && cur.board().is_goal() {
            debug!("Solved, backtracking path");
            return Ok((Some(node.id), stats));
        }

        if let Some(max) = config.max_expanded {
            if stats.total_expanded() >= max {
                return Err(SolverErr::LimitReached(stats.total_expanded()));
            }
        }
        if stats.add_expanded(cur.moves()) {
            if config.print_status {
                println!("Expanded new depth: {}", cur.moves());
                println!("{:?}", stats);
            } else {
                debug!("Expanded new depth: {}", cur.moves());
            }
        }

        for neighbor in cur.neighbors(node.id)? {
            if visited.contains(neighbor.board()) {
                continue;
            }
            let id = arena.alloc(neighbor);
            stats.add_created(neighbor.moves());
            if config.goal_check == GoalCheck::Generate && neighbor.board().is_goal() {
                debug!("Solved, backtracking path");
                return Ok((Some(id), stats));
            }
            to_visit.push(Reverse(SearchNode::new(neighbor.priority(), id)));
        }
    }

    Ok((None, stats))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use fnv::FnvHashMap;

    use super::*;
    use crate::data::Pos;

    fn board(rows: [[u8; 3]; 3]) -> Board {
        Board::new(rows).unwrap()
    }

    fn solve_default(board: Board) -> SolverOk {
        board.solve(&Config::default()).unwrap()
    }

    fn expand_config() -> Config {
        Config {
            goal_check: GoalCheck::Expand,
            ..Config::default()
        }
    }

    fn assert_valid_path(boards: &[Board]) {
        assert!(boards.last().unwrap().is_goal());
        for pair in boards.windows(2) {
            let a = pair[0].find_empty().unwrap();
            let b = pair[1].find_empty().unwrap();
            assert_eq!(a.dist(b), 1);
            // the tile that moved is the only other difference
            assert_eq!(pair[0][b], pair[1][a]);
            for r in 0..3 {
                for c in 0..3 {
                    let pos = Pos::new(r, c);
                    if pos != a && pos != b {
                        assert_eq!(pair[0][pos], pair[1][pos]);
                    }
                }
            }
        }
    }

    /// True distance to the goal for every reachable board.
    fn distances_from_goal() -> FnvHashMap<Board, u32> {
        let mut dists = FnvHashMap::default();
        let mut to_visit = VecDeque::new();
        dists.insert(Board::goal(), 0);
        to_visit.push_back(Board::goal());
        while let Some(cur) = to_visit.pop_front() {
            let dist = dists[&cur];
            for neighbor in cur.neighbors().unwrap() {
                if !dists.contains_key(&neighbor) {
                    dists.insert(neighbor, dist + 1);
                    to_visit.push_back(neighbor);
                }
            }
        }
        dists
    }

    #[test]
    fn already_solved() {
        let solution = solve_default(Board::goal());
        assert_eq!(solution.boards, Some(vec![Board::goal()]));
        assert_eq!(solution.moves().unwrap().move_cnt(), 0);
        assert_eq!(solution.stats.total_expanded(), 0);
        assert_eq!(solution.stats.total_created(), 1);
    }

    #[test]
    fn one_move() {
        let start = board([[1, 2, 3], [4, 5, 0], [7, 8, 6]]);
        let solution = solve_default(start);
        assert_eq!(solution.boards, Some(vec![start, Board::goal()]));
        assert_eq!(solution.moves().unwrap().to_string(), "d");
    }

    #[test]
    fn two_moves() {
        let start = board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        for config in &[Config::default(), expand_config()] {
            let solution = start.solve(config).unwrap();
            let boards = solution.boards.unwrap();
            assert_eq!(boards.len(), 3);
            assert_eq!(boards[0], start);
            assert_valid_path(&boards);
        }
    }

    #[test]
    fn hardest_boards() {
        // the only two boards 31 moves away from the goal
        for &rows in &[[[8, 6, 7], [2, 5, 4], [3, 0, 1]], [[6, 4, 7], [8, 5, 0], [3, 2, 1]]] {
            let start = board(rows);
            let solution = solve_default(start);
            let boards = solution.boards.unwrap();
            assert_eq!(boards.len(), 32);
            assert_eq!(boards[0], start);
            assert_valid_path(&boards);
        }
    }

    #[test]
    fn swapped_tiles_are_unsolvable() {
        let start = board([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        let solution = solve_default(start);
        assert!(!solution.is_solved());
        assert_eq!(solution.moves(), None);
        // every board in the unreachable half is expanded exactly once
        assert_eq!(solution.stats.total_expanded(), 181_440);
    }

    #[test]
    fn parity_check_skips_search() {
        let start = board([[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
        let config = Config {
            parity_check: true,
            ..Config::default()
        };
        let solution = start.solve(&config).unwrap();
        assert!(!solution.is_solved());
        assert_eq!(solution.stats.total_created(), 0);

        // solvable boards are unaffected
        let start = board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        assert_eq!(start.solve(&config).unwrap().boards.unwrap().len(), 3);
    }

    #[test]
    fn limit() {
        let start = board([[8, 6, 7], [2, 5, 4], [3, 0, 1]]);
        let config = Config {
            max_expanded: Some(100),
            ..Config::default()
        };
        assert_eq!(
            start.solve(&config).unwrap_err(),
            SolverErr::LimitReached(100)
        );

        // limits only matter when they're hit
        let start = board([[1, 2, 3], [4, 5, 0], [7, 8, 6]]);
        assert!(start.solve(&config).unwrap().is_solved());
    }

    #[test]
    fn missing_blank_is_reported() {
        let broken = Board::new_unchecked([[1, 2, 3], [4, 5, 6], [7, 8, 8]]);
        assert_eq!(
            broken.solve(&Config::default()).unwrap_err(),
            SolverErr::InvariantViolation(BoardErr::NoBlank)
        );
    }

    #[test]
    fn malformed_board_terminates() {
        // two blanks - the state space is still finite
        let broken = Board::new_unchecked([[0, 2, 3], [4, 5, 6], [7, 8, 0]]);
        let solution = broken.solve(&Config::default()).unwrap();
        assert!(!solution.is_solved());
    }

    #[test]
    fn both_goal_checks_agree() {
        let start = board([[4, 1, 3], [7, 2, 6], [0, 5, 8]]);
        for config in &[Config::default(), expand_config()] {
            let mut arena = StateArena::new();
            let (found, stats) = search(&mut arena, start, config).unwrap();
            let boards = arena.backtrack(found.unwrap());
            assert_eq!(boards.len(), 7);
            assert_valid_path(&boards);
            assert_eq!(stats.max_expanded_depth(), Some(5));
        }
    }

    #[test]
    fn heuristic_is_admissible_and_solutions_optimal() {
        let dists = distances_from_goal();
        assert_eq!(dists.len(), 181_440);
        for (board, &dist) in &dists {
            assert!(board.manhattan() <= dist);
            assert!(board.is_solvable());
        }

        let mut sample: Vec<_> = dists.iter().map(|(&b, &d)| (b, d)).collect();
        sample.sort();
        for &(start, dist) in sample.iter().step_by(6_000) {
            for config in &[Config::default(), expand_config()] {
                let boards = start.solve(config).unwrap().boards.unwrap();
                assert_eq!(boards.len() as u32, dist + 1, "{:?}", start);
                assert_valid_path(&boards);
            }
        }
    }
}

use std::ops::Index;

use crate::board::{Board, BoardErr};

/// Index of a state in a `StateArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

/// A* evaluation of a state: moves so far + manhattan distance.
///
/// Only used to order the frontier, equal priority says nothing about equal boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    board: Board,
    moves: u32,
    prev: Option<StateId>,
}

impl State {
    pub fn initial(board: Board) -> State {
        State {
            board,
            moves: 0,
            prev: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn prev(&self) -> Option<StateId> {
        self.prev
    }

    pub fn priority(&self) -> Priority {
        Priority(self.moves + self.board.manhattan())
    }

    /// `id` is where this state lives in the arena, it becomes the predecessor of the neighbors.
    pub fn neighbors(&self, id: StateId) -> Result<Vec<State>, BoardErr> {
        Ok(self
            .board
            .neighbors()?
            .into_iter()
            .map(|board| State {
                board,
                moves: self.moves + 1,
                prev: Some(id),
            })
            .collect())
    }
}

/// Owns all states created during one search.
///
/// States refer to their predecessors by index so the history chains
/// don't need shared ownership.
#[derive(Debug, Default)]
pub struct StateArena {
    states: Vec<State>,
}

impl StateArena {
    pub fn new() -> Self {
        StateArena { states: Vec::new() }
    }

    pub fn alloc(&mut self, state: State) -> StateId {
        self.states.push(state);
        StateId(self.states.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Boards from the initial state to `last`, both included.
    pub fn backtrack(&self, last: StateId) -> Vec<Board> {
        let mut boards = Vec::with_capacity(self[last].moves as usize + 1);
        let mut cur = Some(last);
        while let Some(id) = cur {
            let state = &self[id];
            boards.push(state.board);
            cur = state.prev;
        }
        boards.reverse();
        boards
    }
}

impl Index<StateId> for StateArena {
    type Output = State;

    fn index(&self, index: StateId) -> &Self::Output {
        &self.states[index.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_moves_plus_manhattan() {
        let board = Board::new([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        let initial = State::initial(board);
        assert_eq!(initial.priority(), Priority(2));

        let mut arena = StateArena::new();
        let id = arena.alloc(initial);
        for neighbor in initial.neighbors(id).unwrap() {
            assert_eq!(neighbor.moves(), 1);
            assert_eq!(neighbor.prev(), Some(id));
            assert_eq!(
                neighbor.priority(),
                Priority(1 + neighbor.board().manhattan())
            );
        }
    }

    #[test]
    fn backtracking() {
        let mut arena = StateArena::new();
        assert!(arena.is_empty());

        let start = Board::new([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
        let mut id = arena.alloc(State::initial(start));
        assert_eq!(arena.backtrack(id), vec![start]);

        let mut expected = vec![start];
        for _ in 0..2 {
            let next = *arena[id].neighbors(id).unwrap().last().unwrap();
            expected.push(*next.board());
            id = arena.alloc(next);
        }

        assert_eq!(arena.len(), 3);
        assert_eq!(arena[id].moves(), 2);
        assert_eq!(arena.backtrack(id), expected);
    }
}

use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Three lines of three space separated values.
    Grid,
    /// All nine values on one line, e.g. `123456780`.
    Compact,
}

/// When the search tests whether a board is the goal.
///
/// Testing generated neighbors short-circuits one level earlier
/// and is only optimal with unit move costs and an admissible heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalCheck {
    Generate,
    Expand,
}

impl Display for GoalCheck {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            GoalCheck::Generate => write!(f, "goal-on-generate"),
            GoalCheck::Expand => write!(f, "goal-on-expand"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub goal_check: GoalCheck,
    /// Reject boards with the wrong permutation parity before searching.
    pub parity_check: bool,
    /// Give up after expanding this many boards.
    pub max_expanded: Option<usize>,
    pub print_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            goal_check: GoalCheck::Generate,
            parity_check: false,
            max_expanded: None,
            print_status: false,
        }
    }
}

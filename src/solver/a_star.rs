use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{cell, row, Table};
use separator::Separatable;

use crate::state::{Priority, StateId};

/// Frontier entry.
///
/// Ordered by priority first, ties go to the state created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct SearchNode {
    pub(crate) priority: Priority,
    pub(crate) id: StateId,
}

impl SearchNode {
    pub(crate) fn new(priority: Priority, id: StateId) -> Self {
        SearchNode { priority, id }
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    expanded_states: Vec<usize>,
    duplicate_states: Vec<usize>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_expanded(&self) -> usize {
        self.expanded_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// Deepest level where at least one board was expanded.
    pub fn max_expanded_depth(&self) -> Option<usize> {
        self.expanded_states.len().checked_sub(1)
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_expanded(&mut self, depth: u32) -> bool {
        Self::add(&mut self.expanded_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    /// Returns true if this is the first state at this depth.
    fn add(counts: &mut Vec<usize>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because duplicates can skip depths
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let expanded = self.total_expanded();
        let duplicates = self.total_reached_duplicates();
        // the goal is counted as created but never popped when checked on generation
        let left = created.saturating_sub(expanded + duplicates);
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Boards expanded total: {}", expanded.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(row!["Depth", "Created", "Expanded", "Duplicates", "Unknown (not reached)"]);
        // created_states is the longest - nothing can be popped without being created first
        for (depth, &created) in self.created_states.iter().enumerate() {
            let expanded = self.expanded_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            let left = created.saturating_sub(expanded + duplicates);
            table.add_row(row![
                format!("{}:", depth),
                created.separated_string(),
                expanded.separated_string(),
                duplicates.separated_string(),
                left.separated_string()
            ]);
        }
        write!(f, "{}", table)
    }
}

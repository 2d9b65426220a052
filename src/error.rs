//! Failure outcomes of a path query.
//!
//! A query that completes without finding a path is not an error; it yields `Ok(None)`.

use crate::Cell;
use std::fmt;

/// Typed failure of a path query: rejected endpoints or an exhausted expansion budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The start cell lies outside the grid.
    StartOutOfBounds(Cell),
    /// The goal cell lies outside the grid.
    GoalOutOfBounds(Cell),
    /// The start cell is a wall.
    StartBlocked(Cell),
    /// The goal cell is a wall.
    GoalBlocked(Cell),
    /// The search was aborted after expanding `expansions` nodes without reaching the goal.
    /// Unlike `Ok(None)` this does not prove that no path exists.
    BudgetExhausted { expansions: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(cell) => write!(f, "start {cell} lies outside the grid"),
            Self::GoalOutOfBounds(cell) => write!(f, "goal {cell} lies outside the grid"),
            Self::StartBlocked(cell) => write!(f, "start {cell} is a wall"),
            Self::GoalBlocked(cell) => write!(f, "goal {cell} is a wall"),
            Self::BudgetExhausted { expansions } => {
                write!(f, "search aborted after {expansions} expansions")
            }
        }
    }
}

impl std::error::Error for PathError {}

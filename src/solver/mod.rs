use crate::search::{astar, Outcome};
use crate::{grid::Grid, Cell, PathError};
use log::{debug, warn};

pub mod astar;
pub mod dijkstra;

/// Checks that both endpoints lie in the grid and are not walls.
pub fn validate_endpoints(grid: &Grid, start: Cell, goal: Cell) -> Result<(), PathError> {
    if !grid.in_bounds(start) {
        return Err(PathError::StartOutOfBounds(start));
    }
    if !grid.in_bounds(goal) {
        return Err(PathError::GoalOutOfBounds(goal));
    }
    if grid.contains_wall(start) {
        return Err(PathError::StartBlocked(start));
    }
    if grid.contains_wall(goal) {
        return Err(PathError::GoalBlocked(goal));
    }
    Ok(())
}

pub trait GridSolver {
    /// Estimate of the remaining cost from `p1` to `p2`.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> f64;

    /// Maximum number of expanded nodes before a search gives up, [None] for no limit.
    fn max_expansions(&self) -> Option<usize> {
        None
    }

    /// Computes a path from start to goal including both, or [None] if the walls leave no way
    /// through.
    fn find_path(
        &self,
        grid: &Grid,
        start: Cell,
        goal: Cell,
    ) -> Result<Option<Vec<Cell>>, PathError> {
        self.find_path_with_cost(grid, start, goal)
            .map(|found| found.map(|(path, _cost)| path))
    }

    /// Like [find_path](Self::find_path), also returning the cost of the path.
    fn find_path_with_cost(
        &self,
        grid: &Grid,
        start: Cell,
        goal: Cell,
    ) -> Result<Option<(Vec<Cell>, f64)>, PathError> {
        validate_endpoints(grid, start, goal)?;
        // Up to date components let unreachable goals be rejected without flood-filling
        if !grid.components_dirty() && grid.unreachable(&start, &goal) {
            debug!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        match astar(
            &start,
            |node| grid.neighbours_and_cost(node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
            self.max_expansions(),
        ) {
            Outcome::Found {
                path,
                cost,
                expansions,
            } => {
                debug!(
                    "Found path of {} cells and cost {:.3} from {} to {} after {} expansions",
                    path.len(),
                    cost,
                    start,
                    goal,
                    expansions
                );
                Ok(Some((path, cost)))
            }
            Outcome::Exhausted { expansions } => {
                if !grid.components_dirty() {
                    warn!("Reachable goal could not be pathed to, is reachable graph correct?");
                }
                debug!(
                    "No path from {} to {} after {} expansions",
                    start, goal, expansions
                );
                Ok(None)
            }
            Outcome::OverBudget { expansions } => {
                debug!(
                    "Gave up on path from {} to {} after {} expansions",
                    start, goal, expansions
                );
                Err(PathError::BudgetExhausted { expansions })
            }
        }
    }
}

//! # grid_astar
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding on a rectangular grid with
//! 8-directional movement. Cardinal steps cost [CARDINAL_COST] and diagonal steps cost
//! [DIAGONAL_COST], and the search is guided by the
//! [octile distance](https://theory.stanford.edu/~amitp/GameProgramming/Heuristics.html#diagonal-distance).
//! Diagonal steps squeezing between walls are rejected according to the [CornerRule] of the
//! [Grid].
//!
//! ```
//! use grid_astar::{find_path, Cell, Grid};
//!
//! let mut grid = Grid::new(3, 3);
//! grid.add_wall(Cell::new(1, 1));
//! let path = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.len(), 4);
//! assert_eq!(path[0], Cell::new(0, 0));
//! assert_eq!(path[3], Cell::new(2, 2));
//! ```
mod search;
pub mod error;
pub mod grid;
pub mod solver;

use itertools::Itertools;

pub use error::PathError;
pub use grid::{CornerRule, Grid};
pub use grid_util::point::Point;

use crate::solver::{astar::AstarSolver, GridSolver};

/// A discrete grid coordinate.
pub type Cell = Point;

/// Cost of a horizontal or vertical step.
pub const CARDINAL_COST: f64 = 1.0;
/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;
/// Inline capacity of neighbour lists, the size of the Moore neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Computes a minimum-cost path from `start` to `goal` using A* with the octile heuristic.
///
/// Returns `Ok(None)` if no path exists under the current walls, and an error if either endpoint
/// lies outside the grid or is itself a wall.
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Option<Vec<Cell>>, PathError> {
    AstarSolver::new().find_path(grid, start, goal)
}

/// Cost of a single step between two adjacent cells.
pub fn step_cost(from: &Cell, to: &Cell) -> f64 {
    if from.x != to.x && from.y != to.y {
        DIAGONAL_COST
    } else {
        CARDINAL_COST
    }
}

/// Total movement cost of a path, [DIAGONAL_COST] per diagonal step and [CARDINAL_COST] per
/// cardinal step.
pub fn path_cost(path: &[Cell]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(from, to)| step_cost(from, to))
        .sum()
}

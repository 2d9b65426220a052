use crate::{solver::GridSolver, Cell};

/// Uninformed search, useful as a reference for path costs.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub max_expansions: Option<usize>,
}

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver::default()
    }
}

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Cell, _: &Cell) -> f64 {
        0.0
    }

    fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}

#[cfg(test)]
mod tests {
    use grid_util::point::Point;

    use crate::grid::Grid;
    use crate::solver::astar::AstarSolver;
    use crate::PathError;

    use super::*;

    /// Without guidance the whole square around the start is searched before the far corner.
    #[test]
    fn expands_more_than_astar() {
        let grid = Grid::new(20, 20);
        let start = Point::new(0, 0);
        let goal = Point::new(19, 19);
        let astar = AstarSolver {
            max_expansions: Some(40),
            ..AstarSolver::new()
        };
        assert!(astar.find_path(&grid, start, goal).unwrap().is_some());
        let dijkstra = DijkstraSolver {
            max_expansions: Some(40),
        };
        assert!(matches!(
            dijkstra.find_path(&grid, start, goal),
            Err(PathError::BudgetExhausted { expansions: 40 })
        ));
    }

    #[test]
    fn same_cost_as_astar() {
        let mut grid = Grid::new(6, 4);
        for y in 0..3 {
            grid.add_wall(Point::new(2, y));
        }
        grid.add_wall(Point::new(4, 3));
        let start = Point::new(0, 0);
        let goal = Point::new(5, 0);
        let (_, astar_cost) = AstarSolver::new()
            .find_path_with_cost(&grid, start, goal)
            .unwrap()
            .unwrap();
        let (path, dijkstra_cost) = DijkstraSolver::new()
            .find_path_with_cost(&grid, start, goal)
            .unwrap()
            .unwrap();
        assert!((astar_cost - dijkstra_cost).abs() < 1e-9);
        assert_eq!(path.last(), Some(&goal));
    }
}

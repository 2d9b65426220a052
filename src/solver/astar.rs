use crate::{solver::GridSolver, Cell, DIAGONAL_COST};

/// Octile distance `dx + dy + (√2 - 2) * min(dx, dy)`: the cost of taking as many diagonal steps
/// as possible and going straight for the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Uses the absolute coordinate differences. Admissible and consistent.
    #[default]
    Octile,
    /// Uses the signed differences `from - to` as they are. This can underestimate wildly or go
    /// negative, in which case returned paths are not guaranteed to be optimal.
    SignedOctile,
}

impl Heuristic {
    pub fn estimate(&self, from: &Cell, to: &Cell) -> f64 {
        let (dx, dy) = match self {
            Heuristic::Octile => ((from.x - to.x).abs() as f64, (from.y - to.y).abs() as f64),
            Heuristic::SignedOctile => ((from.x - to.x) as f64, (from.y - to.y) as f64),
        };
        dx + dy + (DIAGONAL_COST - 2.0) * dx.min(dy)
    }
}

#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
    /// Scales the heuristic. Values above 1 give Weighted A*, which expands fewer nodes at the
    /// price of optimality.
    pub heuristic_factor: f64,
    pub max_expansions: Option<usize>,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic: Heuristic::Octile,
            heuristic_factor: 1.0,
            max_expansions: None,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    /// Just the octile distance times a heuristic factor.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> f64 {
        self.heuristic.estimate(p1, p2) * self.heuristic_factor
    }

    fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}

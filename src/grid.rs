use crate::{step_cost, Cell, N_SMALLVEC_SIZE};
use core::fmt;
use fxhash::FxHashSet;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Offsets of the Moore neighbourhood in the order in which neighbours are generated: the four
/// cardinal directions followed by the four diagonals.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (1, 1),
];

/// Decides when walls forbid entering a cell or taking a diagonal step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CornerRule {
    /// A cell is not enterable if both the cell below it `(x, y - 1)` and the cell to its left
    /// `(x - 1, y)` are walls, whichever direction it is entered from.
    #[default]
    FixedOffset,
    /// A diagonal step is not allowed if both cells flanking it, `(from.x, to.y)` and
    /// `(to.x, from.y)`, are walls. Every free cell is enterable.
    Directional,
}

/// [Grid] holds the walls of a fixed-size rectangular grid and answers which cells can be entered
/// and which moves are allowed under its [CornerRule]. In-bounds walls are stored in a [BoolGrid]
/// where [true] means blocked. Walls outside the grid are accepted and kept separately: they can
/// never be entered but they do take part in corner checks.
///
/// Connected components are kept in a [UnionFind] structure so that unreachable goals can be
/// rejected without searching. Any edit marks them dirty until [update](Self::update) or
/// [generate_components](Self::generate_components) is called.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    blocked: BoolGrid,
    outside_walls: FxHashSet<Cell>,
    corner_rule: CornerRule,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// Creates a grid without walls using [CornerRule::FixedOffset].
    ///
    /// Both dimensions must fit in an [i32] so every cell has a [Cell] coordinate.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid::with_corner_rule(width, height, CornerRule::default())
    }

    /// # Panics
    ///
    /// Panics if `width` or `height` exceeds [i32::MAX] or if `width * height` overflows.
    pub fn with_corner_rule(width: usize, height: usize, corner_rule: CornerRule) -> Grid {
        let fits = i32::try_from(width).is_ok() && i32::try_from(height).is_ok();
        assert!(
            fits && width.checked_mul(height).is_some(),
            "grid of {}x{} cells cannot be addressed by i32 coordinates",
            width,
            height
        );
        Grid {
            width,
            height,
            blocked: BoolGrid::new(width, height, false),
            outside_walls: FxHashSet::default(),
            corner_rule,
            components: UnionFind::new(width * height),
            components_dirty: true,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn corner_rule(&self) -> CornerRule {
        self.corner_rule
    }

    pub fn set_corner_rule(&mut self, corner_rule: CornerRule) {
        if self.corner_rule != corner_rule {
            self.corner_rule = corner_rule;
            self.components_dirty = true;
        }
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    pub fn contains_wall(&self, cell: Cell) -> bool {
        if self.in_bounds(cell) {
            self.blocked.get_point(cell)
        } else {
            self.outside_walls.contains(&cell)
        }
    }

    /// Marks a cell as a wall. Adding an existing wall does nothing.
    pub fn add_wall(&mut self, cell: Cell) {
        self.set_wall(cell, true);
    }

    /// Removes a wall. Removing a cell that is not a wall does nothing.
    pub fn remove_wall(&mut self, cell: Cell) {
        self.set_wall(cell, false);
    }

    /// Flips whether a cell is a wall and returns the new state.
    pub fn toggle_wall(&mut self, cell: Cell) -> bool {
        let blocked = !self.contains_wall(cell);
        self.set_wall(cell, blocked);
        blocked
    }

    pub fn clear_walls(&mut self) {
        self.blocked = BoolGrid::new(self.width, self.height, false);
        self.outside_walls.clear();
        self.components_dirty = true;
    }

    fn set_wall(&mut self, cell: Cell, blocked: bool) {
        let changed = if self.in_bounds(cell) {
            let changed = self.blocked.get_point(cell) != blocked;
            self.blocked.set_point(cell, blocked);
            changed
        } else if blocked {
            self.outside_walls.insert(cell)
        } else {
            self.outside_walls.remove(&cell)
        };
        if changed {
            self.components_dirty = true;
        }
    }

    /// All walls, those inside the grid first in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        iproduct!(0..self.height as i32, 0..self.width as i32)
            .map(|(y, x)| Point::new(x, y))
            .filter(|&cell| self.blocked.get_point(cell))
            .chain(self.outside_walls.iter().copied())
    }

    /// Whether a cell can be entered: it lies in the grid, is not a wall and, under
    /// [CornerRule::FixedOffset], is not boxed in by walls below and to its left.
    pub fn is_valid(&self, cell: Cell) -> bool {
        if !self.in_bounds(cell) || self.contains_wall(cell) {
            return false;
        }
        match self.corner_rule {
            CornerRule::FixedOffset => {
                !(self.contains_wall(Point::new(cell.x, cell.y - 1))
                    && self.contains_wall(Point::new(cell.x - 1, cell.y)))
            }
            CornerRule::Directional => true,
        }
    }

    /// Whether a single step from `from` to the adjacent cell `to` is allowed.
    pub fn can_move(&self, from: Cell, to: Cell) -> bool {
        if from.x.abs_diff(to.x) > 1
            || from.y.abs_diff(to.y) > 1
            || from == to
            || !self.is_valid(to)
        {
            return false;
        }
        match self.corner_rule {
            CornerRule::FixedOffset => true,
            CornerRule::Directional => {
                from.x == to.x
                    || from.y == to.y
                    || !(self.contains_wall(Point::new(from.x, to.y))
                        && self.contains_wall(Point::new(to.x, from.y)))
            }
        }
    }

    /// The cells that can be stepped to from `cell`, or [None] if there are none.
    pub fn get_neighbours(&self, cell: Cell) -> Option<SmallVec<[Cell; N_SMALLVEC_SIZE]>> {
        let neighbours = NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(cell.x.wrapping_add(dx), cell.y.wrapping_add(dy)))
            .filter(|&n| self.can_move(cell, n))
            .collect::<SmallVec<[Cell; N_SMALLVEC_SIZE]>>();
        if neighbours.is_empty() {
            None
        } else {
            Some(neighbours)
        }
    }

    pub fn neighbours_and_cost(&self, cell: &Cell) -> SmallVec<[(Cell, f64); N_SMALLVEC_SIZE]> {
        self.get_neighbours(*cell)
            .into_iter()
            .flatten()
            .map(|n| (n, step_cost(cell, &n)))
            .collect()
    }

    fn get_ix(&self, cell: &Cell) -> usize {
        cell.y as usize * self.width + cell.x as usize
    }

    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Checks if a path from start to goal exists according to the connected components.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.components_dirty {
            warn!("Connected components are outdated, call update() after editing walls");
        }
        if !self.in_bounds(*start) || !self.in_bounds(*goal) {
            return false;
        }
        if start == goal {
            return true;
        }
        if !self.is_valid(*goal) {
            return false;
        }
        // The start itself may not be enterable, so go through the cells it can step to.
        let goal_ix = self.get_ix(goal);
        self.get_neighbours(*start).is_some_and(|neighbours| {
            neighbours
                .iter()
                .any(|n| self.components.equiv(self.get_ix(n), goal_ix))
        })
    }

    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure joining every pair of enterable cells between which
    /// a step is allowed. Allowed steps between enterable cells are symmetric, so only half of
    /// the neighbourhood is visited.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.width, self.height
        );
        let mut components = UnionFind::new(self.width * self.height);
        for (y, x) in iproduct!(0..self.height as i32, 0..self.width as i32) {
            let cell = Point::new(x, y);
            if !self.is_valid(cell) {
                continue;
            }
            let parent_ix = self.get_ix(&cell);
            for (dx, dy) in [(1, 0), (0, 1), (1, 1), (1, -1)] {
                let n = Point::new(x + dx, y + dy);
                if self.can_move(cell, n) {
                    components.union(parent_ix, self.get_ix(&n));
                }
            }
        }
        self.components = components;
        self.components_dirty = false;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            let row = (0..self.width as i32)
                .map(|x| {
                    if self.blocked.get_point(Point::new(x, y)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Fuzzes the solvers by checking on many random grids that a path is found exactly when the goal
/// is reachable according to the connected components, that A* paths are as cheap as Dijkstra
/// paths, and that every path only takes legal steps. Both corner rules are tested.
use grid_astar::{
    path_cost,
    solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver},
    Cell, CornerRule, Grid,
};
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, rule: CornerRule) -> Grid {
    let mut grid = Grid::with_corner_rule(w, h, rule);
    for x in 0..w as i32 {
        for y in 0..h as i32 {
            if rng.gen_bool(0.35) {
                grid.add_wall(Cell::new(x, y));
            }
        }
    }
    grid
}

fn visualize_grid(grid: &Grid, start: &Cell, end: &Cell) {
    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let p = Cell::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.contains_wall(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn assert_legal(grid: &Grid, path: &[Cell], start: Cell, end: Cell) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));
    for pair in path.windows(2) {
        assert!(grid.can_move(pair[0], pair[1]));
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    for rule in [CornerRule::FixedOffset, CornerRule::Directional] {
        let start = Cell::new(0, 0);
        let end = Cell::new(N as i32 - 1, N as i32 - 1);
        for _ in 0..N_GRIDS {
            let mut random_grid = random_grid(N, N, &mut rng, rule);
            random_grid.remove_wall(start);
            random_grid.remove_wall(end);
            // Search on the grid with dirty components so the search itself decides
            let mut indexed = random_grid.clone();
            indexed.generate_components();
            let reachable = indexed.reachable(&start, &end);
            let path = solver.find_path(&random_grid, start, end).unwrap();
            // Show the grid if the search disagrees with the components
            if path.is_some() != reachable {
                visualize_grid(&random_grid, &start, &end);
            }
            assert_eq!(path.is_some(), reachable);
            assert_eq!(solver.find_path(&indexed, start, end).unwrap(), path);
            if let Some(path) = path {
                assert_legal(&random_grid, &path, start, end);
            }
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let astar_solver = AstarSolver::new();
    let dijkstra_solver = DijkstraSolver::new();

    for rule in [CornerRule::FixedOffset, CornerRule::Directional] {
        for _ in 0..N_GRIDS {
            let random_grid = random_grid(N, N, &mut rng, rule);
            let start = Cell::new(
                rng.gen_range(0..N as i32),
                rng.gen_range(0..N as i32),
            );
            let end = Cell::new(
                rng.gen_range(0..N as i32),
                rng.gen_range(0..N as i32),
            );
            if random_grid.contains_wall(start) || random_grid.contains_wall(end) {
                continue;
            }
            let astar = astar_solver
                .find_path_with_cost(&random_grid, start, end)
                .unwrap();
            let dijkstra = dijkstra_solver
                .find_path_with_cost(&random_grid, start, end)
                .unwrap();
            match (astar, dijkstra) {
                (Some((astar_path, astar_cost)), Some((dijkstra_path, dijkstra_cost))) => {
                    if (astar_cost - dijkstra_cost).abs() >= 1e-9 {
                        println!("Astar distance: {astar_cost}; Dijkstra distance: {dijkstra_cost}");
                        println!("Astar path: {astar_path:?}\nDijkstra path: {dijkstra_path:?}\n");
                        visualize_grid(&random_grid, &start, &end);
                    }
                    assert!((astar_cost - dijkstra_cost).abs() < 1e-9);
                    assert!((path_cost(&astar_path) - astar_cost).abs() < 1e-9);
                    assert_legal(&random_grid, &astar_path, start, end);
                }
                (None, None) => {}
                (astar, dijkstra) => panic!(
                    "solvers disagree on existence: astar {:?}, dijkstra {:?}",
                    astar.is_some(),
                    dijkstra.is_some()
                ),
            }
        }
    }
}

/// On a grid without walls the optimal cost between any two cells is their octile distance.
#[test]
fn empty_grid_costs_are_octile() {
    const N: i32 = 6;
    let grid = Grid::new(N as usize, N as usize);
    let solver = AstarSolver::new();
    for (sx, sy, gx, gy) in itertools::iproduct!(0..N, 0..N, 0..N, 0..N) {
        let start = Cell::new(sx, sy);
        let goal = Cell::new(gx, gy);
        let path = solver.find_path(&grid, start, goal).unwrap().unwrap();
        let dx = (sx - gx).abs().max((sy - gy).abs());
        let dy = (sx - gx).abs().min((sy - gy).abs());
        let octile = (dx - dy) as f64 + dy as f64 * std::f64::consts::SQRT_2;
        assert!((path_cost(&path) - octile).abs() < 1e-9);
        assert_eq!(path.len() as i32, dx + 1);
    }
}

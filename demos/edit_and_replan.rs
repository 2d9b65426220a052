use grid_astar::{
    solver::{astar::AstarSolver, GridSolver},
    Cell, Grid,
};

// Drives the grid the way an editor would: walls are toggled between searches and the path is
// recomputed each time. Components are regenerated after every edit so that a sealed-off goal is
// rejected without searching. Run with RUST_LOG=debug to see the search statistics.

const N: i32 = 12;

fn show(grid: &Grid, start: Cell, goal: Cell, path: &[Cell]) {
    for y in (0..grid.height() as i32).rev() {
        let row = (0..grid.width() as i32)
            .map(|x| {
                let p = Cell::new(x, y);
                if p == start {
                    'S'
                } else if p == goal {
                    'G'
                } else if path.contains(&p) {
                    '*'
                } else if grid.contains_wall(p) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{}", row);
    }
    println!();
}

fn replan(grid: &mut Grid, solver: &AstarSolver, start: Cell, goal: Cell) {
    grid.update();
    match solver.find_path(grid, start, goal) {
        Ok(Some(path)) => show(grid, start, goal, &path),
        Ok(None) => {
            println!("No path");
            show(grid, start, goal, &[]);
        }
        Err(err) => println!("Invalid query: {}", err),
    }
}

fn main() {
    env_logger::init();
    let mut grid = Grid::new(N as usize, N as usize);
    let solver = AstarSolver::new();
    let start = Cell::new(1, 1);
    let goal = Cell::new(N - 2, N - 2);
    replan(&mut grid, &solver, start, goal);

    for y in 0..N {
        grid.toggle_wall(Cell::new(N / 2, y));
    }
    replan(&mut grid, &solver, start, goal);

    grid.toggle_wall(Cell::new(N / 2, N - 1));
    replan(&mut grid, &solver, start, goal);

    grid.clear_walls();
    replan(&mut grid, &solver, start, goal);
}

use grid_astar::{find_path, path_cost, Cell, Grid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |  G|
// | # |
// |S  |
//  ___
// where
// - # marks a wall
// - S marks the start
// - G marks the goal
//
// Cells have an 8-neighborhood

fn main() {
    env_logger::init();
    let mut grid = Grid::new(3, 3);
    grid.add_wall(Cell::new(1, 1));
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let goal = Cell::new(2, 2);
    match find_path(&grid, start, goal) {
        Ok(Some(path)) => {
            println!("Path of cost {:.3}:", path_cost(&path));
            for p in path {
                println!("{:?}", p);
            }
        }
        Ok(None) => println!("No path from {} to {}", start, goal),
        Err(err) => println!("Invalid query: {}", err),
    }
}

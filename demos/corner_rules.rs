use grid_astar::{find_path, Cell, CornerRule, Grid};

// Compares the two corner rules on a grid where they disagree
//  ___
// |S# |
// |#G |
// |   |
//  ___
// Stepping from S to G squeezes between two walls. The fixed offset rule only looks below and to
// the left of G, finds a single wall there and lets the step through.

fn main() {
    env_logger::init();
    let start = Cell::new(0, 2);
    let goal = Cell::new(1, 1);
    for rule in [CornerRule::FixedOffset, CornerRule::Directional] {
        let mut grid = Grid::with_corner_rule(3, 3, rule);
        grid.add_wall(Cell::new(0, 1));
        grid.add_wall(Cell::new(1, 2));
        match find_path(&grid, start, goal) {
            Ok(Some(path)) => println!("{:?}: {:?}", rule, path),
            Ok(None) => println!("{:?}: no path", rule),
            Err(err) => println!("{:?}: {}", rule, err),
        }
    }
}

use grid_route::{explore_backtracking, explore_naive, CellState, RouteGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;

// Contrasts the two depth-first searches on a grid with a trap:
//  _____
// | X   |
// | X   |
// | X   |
// | X   |
// |S   E|
//  -----
// The up-first probe order sends the single-branch walk into the chimney
// on the left, where it dead-ends for good. The backtracking search tries
// the chimney too, rules it out, and commits the route along the bottom
// row instead.

fn main() {
    let start = Point::new(0, 4);
    let end = Point::new(4, 4);
    let mut grid = RouteGrid::new(5, 5, CellState::Empty);
    grid.place_start(start);
    grid.place_end(end);
    for y in 0..4 {
        grid.set(1, y, CellState::Blocked);
    }

    explore_naive(&mut grid, start);
    let arrived = [Point::new(3, 4), Point::new(4, 3)]
        .into_iter()
        .any(|p| grid.state(p) == CellState::Path);
    println!(
        "Single-branch walk {} the end:",
        if arrived { "reached" } else { "never reached" }
    );
    println!("{grid}");

    grid.reset();
    let found = explore_backtracking(&mut grid, start);
    println!(
        "Backtracking search {} a route:",
        if found { "found" } else { "did not find" }
    );
    println!("{grid}");
}

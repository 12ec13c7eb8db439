use grid_route::{step_route, CellState, RouteGrid, SearchResult};
use grid_util::grid::Grid;
use grid_util::point::Point;

// The greedy walk closes the row gap, then the column gap, marking its
// trail. On the open grid
//  _____
// |S    |
// |     |
// |    E|
//  -----
// it arrives in manhattan distance + 1 steps. Behind a wall,
//  _____
// |SX  E|
// | XXX |
// |     |
//  -----
// it cannot step around without backtracking and reports being stuck.

fn main() {
    let start = Point::new(0, 0);
    let end = Point::new(4, 4);
    let mut grid = RouteGrid::new(5, 5, CellState::Empty);
    grid.place_start(start);
    grid.place_end(end);
    match step_route(&mut grid, start, end) {
        SearchResult::Arrived { steps } => println!("Arrived in {steps} steps:"),
        SearchResult::Stuck { steps } => println!("Stuck after {steps} steps:"),
    }
    println!("{grid}");

    let start = Point::new(0, 0);
    let end = Point::new(4, 0);
    let mut walled = RouteGrid::new(5, 5, CellState::Empty);
    walled.place_start(start);
    walled.place_end(end);
    for p in [
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(2, 1),
        Point::new(3, 1),
    ] {
        walled.set(p.x as usize, p.y as usize, CellState::Blocked);
    }
    match step_route(&mut walled, start, end) {
        SearchResult::Arrived { steps } => println!("Arrived in {steps} steps:"),
        SearchResult::Stuck { steps } => println!("Stuck after {steps} steps:"),
    }
    println!("{walled}");
}

use grid_util::grid::Grid;
use grid_util::point::Point;
use log::{info, warn};

use crate::cell::CellState;
use crate::route_grid::RouteGrid;
use crate::solver::{step_toward, SearchResult};

/// Walks from `start` to `end` by closing the row gap first and the column
/// gap second, one step at a time. When the preferred axis is obstructed the
/// walk makes a single corrective step along the other axis and tries again.
/// There is no backtracking: if neither axis can be advanced the walk is
/// stuck and reports the steps it managed to take.
///
/// Every successful move counts as one step and a final arrival step is
/// added once both coordinates match, so an unobstructed route with one bend
/// costs its manhattan distance plus one. A start equal to the end
/// short-circuits to `Arrived { steps: 1 }` without touching the grid.
///
/// Cells moved through are marked [CellState::Path], landmarks excepted.
/// The walk may cross its own trail, so it carries a step budget of one per
/// grid cell; exhausting the budget counts as stuck.
pub fn step_route(grid: &mut RouteGrid, start: Point, end: Point) -> SearchResult {
    if start == end {
        return SearchResult::Arrived { steps: 1 };
    }
    let max_steps = grid.width() * grid.height();
    let mut walk = Walk {
        grid,
        pos: start,
        end,
        steps: 0,
    };

    // Close the row gap, stepping sideways around obstructions.
    while walk.pos.y != end.y {
        if walk.steps >= max_steps {
            return walk.give_up();
        }
        let dy = step_toward(walk.pos.y, end.y);
        if !walk.try_move(0, dy) {
            let dx = step_toward(walk.pos.x, end.x);
            if !walk.try_move(dx, 0) {
                return walk.stuck();
            }
        }
    }
    // Then the column gap, stepping vertically around obstructions.
    while walk.pos.x != end.x {
        if walk.steps >= max_steps {
            return walk.give_up();
        }
        let dx = step_toward(walk.pos.x, end.x);
        if !walk.try_move(dx, 0) {
            let dy = step_toward(walk.pos.y, end.y);
            if !walk.try_move(0, dy) {
                return walk.stuck();
            }
        }
    }
    // Both coordinates line up: count the arrival itself.
    walk.steps += 1;
    SearchResult::Arrived { steps: walk.steps }
}

struct Walk<'a> {
    grid: &'a mut RouteGrid,
    pos: Point,
    end: Point,
    steps: usize,
}

impl Walk<'_> {
    /// Attempts a single move by `(dx, dy)`. A finished walk never moves
    /// again; otherwise the move succeeds unless the candidate cell is off
    /// the grid or blocked. Successful moves are counted and the entered
    /// cell is marked [CellState::Path] unless it is a landmark.
    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.pos == self.end {
            return false;
        }
        let next = Point::new(self.pos.x + dx, self.pos.y + dy);
        if !self.grid.in_bounds(next.x, next.y) || self.grid.state(next).is_blocked() {
            return false;
        }
        self.pos = next;
        self.steps += 1;
        if !self.grid.state(next).is_landmark() {
            self.grid.set_state(next, CellState::Path);
        }
        true
    }

    fn stuck(&self) -> SearchResult {
        info!(
            "Greedy walk stuck at {} after {} steps",
            self.pos, self.steps
        );
        SearchResult::Stuck { steps: self.steps }
    }

    fn give_up(&self) -> SearchResult {
        warn!(
            "Greedy walk exhausted its {} step budget without reaching {}",
            self.steps, self.end
        );
        SearchResult::Stuck { steps: self.steps }
    }
}

#[cfg(test)]
mod tests {
    use grid_util::grid::Grid;

    use super::*;

    fn open_grid(n: usize, start: Point, end: Point) -> RouteGrid {
        let mut grid = RouteGrid::new(n, n, CellState::Empty);
        grid.place_start(start);
        grid.place_end(end);
        grid
    }

    #[test]
    fn start_equals_end_arrives_immediately() {
        let p = Point::new(2, 2);
        let mut grid = RouteGrid::new(5, 5, CellState::Empty);
        let result = step_route(&mut grid, p, p);
        assert_eq!(result, SearchResult::Arrived { steps: 1 });
        // No cell was touched.
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(grid.cells.get(x, y), CellState::Empty);
            }
        }
    }

    /// Corner to corner on an open 5x5 grid: four moves down, four moves
    /// right, and the arrival step.
    #[test]
    fn open_corner_walk_counts_nine_steps() {
        let start = Point::new(0, 0);
        let end = Point::new(4, 4);
        let mut grid = open_grid(5, start, end);
        assert_eq!(
            step_route(&mut grid, start, end),
            SearchResult::Arrived { steps: 9 }
        );
        // The vertical leg then the horizontal leg carry the trail; the end
        // cell itself stays a landmark.
        for y in 1..5 {
            assert_eq!(grid.state(Point::new(0, y)), CellState::Path);
        }
        for x in 1..4 {
            assert_eq!(grid.state(Point::new(x, 4)), CellState::Path);
        }
        assert_eq!(grid.state(end), CellState::End);
    }

    /// On an unobstructed grid the walk costs the manhattan distance plus
    /// the arrival step, wherever the endpoints sit.
    #[test]
    fn unobstructed_walks_cost_manhattan_plus_one() {
        for (start, end) in [
            (Point::new(1, 1), Point::new(4, 3)),
            (Point::new(5, 6), Point::new(2, 0)),
            (Point::new(0, 3), Point::new(6, 3)),
            (Point::new(3, 6), Point::new(3, 0)),
        ] {
            let mut grid = open_grid(7, start, end);
            let manhattan = ((start.x - end.x).abs() + (start.y - end.y).abs()) as usize;
            assert_eq!(
                step_route(&mut grid, start, end),
                SearchResult::Arrived {
                    steps: manhattan + 1
                }
            );
        }
    }

    /// A wall right of the start blocks the horizontal phase and the
    /// corrective vertical step leaves the grid: the walk is stuck on the
    /// spot while a detour below the wall exists.
    #[test]
    fn wall_leaves_walk_stuck() {
        // [S][X][ ][ ][E]
        // [ ][X][X][X][ ]
        // [ ][ ][ ][ ][ ]
        let start = Point::new(0, 0);
        let end = Point::new(4, 0);
        let mut grid = open_grid(5, start, end);
        for p in [
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(3, 1),
        ] {
            grid.set(p.x as usize, p.y as usize, CellState::Blocked);
        }
        assert_eq!(
            step_route(&mut grid, start, end),
            SearchResult::Stuck { steps: 0 }
        );
    }

    /// Corrective steps can bounce between two cells forever when the rows
    /// between the walk and the target are walled off. The step budget
    /// turns that into a stuck report instead of a hang.
    #[test]
    fn corrective_ping_pong_terminates_as_stuck() {
        // [ ][ ][S]
        // [X][X][X]
        // [ ][ ][E]
        let start = Point::new(2, 0);
        let end = Point::new(2, 2);
        let mut grid = open_grid(3, start, end);
        for x in 0..3 {
            grid.set(x, 1, CellState::Blocked);
        }
        let result = step_route(&mut grid, start, end);
        assert!(!result.arrived());
        assert!(result.steps() <= 9);
    }
}

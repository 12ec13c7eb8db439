//! Search strategies over a [RouteGrid](crate::route_grid::RouteGrid).
//!
//! Each strategy takes exclusive access to one grid for the duration of the
//! call and records its traversal in the cells. [greedy] walks straight at
//! the target one axis at a time, [naive] follows a single depth-first
//! branch until it dead-ends, and [backtracking] is the corrected
//! depth-first search that finds a route whenever one exists.

use grid_util::point::Point;

pub mod backtracking;
pub mod greedy;
pub mod naive;

/// Outcome of a greedy walk across the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// The walk reached the target. `steps` counts every move made plus the
    /// final arrival step.
    Arrived { steps: usize },
    /// Neither axis could be advanced before the target was reached.
    /// `steps` counts the moves made up to that point.
    Stuck { steps: usize },
}

impl SearchResult {
    pub fn arrived(&self) -> bool {
        matches!(self, SearchResult::Arrived { .. })
    }

    /// The number of steps taken, whether or not the walk arrived.
    pub fn steps(&self) -> usize {
        match self {
            SearchResult::Arrived { steps } | SearchResult::Stuck { steps } => *steps,
        }
    }
}

/// The signed unit step that closes the gap between `current` and `target`
/// along one axis: +1 if `current < target`, -1 otherwise. Total over all
/// inputs; callers with an open gap never pass equal values.
pub fn step_toward(current: i32, target: i32) -> i32 {
    if current < target {
        1
    } else {
        -1
    }
}

/// The four neighbours of `p` in the fixed probe order used by the
/// depth-first searches: up, right, down, left.
pub(crate) fn probe_order(p: Point) -> [Point; 4] {
    [
        Point::new(p.x, p.y - 1),
        Point::new(p.x + 1, p.y),
        Point::new(p.x, p.y + 1),
        Point::new(p.x - 1, p.y),
    ]
}

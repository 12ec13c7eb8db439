use grid_util::point::Point;

use crate::cell::CellState;
use crate::route_grid::RouteGrid;
use crate::solver::probe_order;

/// Single-branch depth-first walk from `pos` toward the end landmark. The
/// current cell is promoted from [CellState::Empty] through
/// [CellState::Visited] to [CellState::Path], then the walk recurses into
/// the *first* neighbour (in up-right-down-left order) that is on the grid
/// and either empty or the end. A cell with no such neighbour simply
/// returns: the branch dead-ends, nothing is unmarked, and no other branch
/// is tried — even when a route exists elsewhere. The marks left in the
/// grid are the only record of the outcome.
///
/// `pos` must be in bounds; neighbours are bounds-checked before recursing.
pub fn explore_naive(grid: &mut RouteGrid, pos: Point) {
    match grid.state(pos) {
        CellState::Blocked | CellState::Visited | CellState::Path => return,
        CellState::Empty => grid.set_state(pos, CellState::Visited),
        CellState::Start | CellState::End => {}
    }
    if grid.state(pos) == CellState::End {
        return;
    }
    if !grid.state(pos).is_landmark() {
        grid.set_state(pos, CellState::Path);
    }
    for next in probe_order(pos) {
        if grid.in_bounds(next.x, next.y)
            && matches!(grid.state(next), CellState::Empty | CellState::End)
        {
            explore_naive(grid, next);
            return;
        }
    }
}

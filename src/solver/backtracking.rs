use grid_util::point::Point;

use crate::cell::CellState;
use crate::route_grid::RouteGrid;
use crate::solver::probe_order;

/// Depth-first search from `pos` toward the end landmark, with recovery at
/// dead ends. Returns true iff the end is reachable from `pos` through
/// non-blocked cells.
///
/// Cells are marked [CellState::Visited] on entry and promoted to
/// [CellState::Path] while their branch is being explored; the search
/// recurses into all four neighbours in up-right-down-left order,
/// short-circuiting on the first success. A branch that fails in every
/// direction demotes its cell back to [CellState::Visited] before
/// returning, so ancestor cells are free to try their remaining
/// neighbours. On success the committed [CellState::Path] cells trace the
/// discovered route.
///
/// Out-of-bounds coordinates return false without touching the grid, so
/// neighbours need no pre-checking.
pub fn explore_backtracking(grid: &mut RouteGrid, pos: Point) -> bool {
    if !grid.in_bounds(pos.x, pos.y) {
        return false;
    }
    match grid.state(pos) {
        CellState::Blocked | CellState::Visited | CellState::Path => return false,
        CellState::Empty => grid.set_state(pos, CellState::Visited),
        CellState::Start | CellState::End => {}
    }
    if grid.state(pos) == CellState::End {
        return true;
    }
    let landmark = grid.state(pos).is_landmark();
    if !landmark {
        grid.set_state(pos, CellState::Path);
    }
    for next in probe_order(pos) {
        if explore_backtracking(grid, next) {
            return true;
        }
    }
    // Dead end in every direction: this cell is on no route.
    if !landmark {
        grid.set_state(pos, CellState::Visited);
    }
    false
}

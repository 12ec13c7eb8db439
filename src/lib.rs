//! # grid_route
//!
//! Route search on small fixed-size grids. Implements a greedy axis-aligned
//! stepper and two recursive depth-first reachability searches: a
//! single-branch walk that gives up at the first dead end, and a
//! backtracking variant that finds a route whenever one exists. Searches
//! record their traversal directly in the grid cells, so the outcome can be
//! rendered as-is. Connected components are pre-computed with a
//! [union-find](https://en.wikipedia.org/wiki/Disjoint-set_data_structure)
//! structure to answer reachability queries without running a search.
//!
//! Coordinates are [grid_util] points: `x` is the column and `y` the row,
//! with row 0 rendered at the top, so moving up decreases `y`.

pub mod cell;
pub mod route_grid;
pub mod solver;

pub use cell::CellState;
pub use route_grid::RouteGrid;
pub use solver::backtracking::explore_backtracking;
pub use solver::greedy::step_route;
pub use solver::naive::explore_naive;
pub use solver::SearchResult;

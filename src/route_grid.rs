use core::fmt;

use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::cell::CellState;

/// [RouteGrid] holds the [CellState] of every cell in a rectangular grid
/// together with the placed start and end landmarks. It maintains
/// connected-component information for the passable (non-blocked) cells in a
/// [UnionFind] structure, which answers whether a route can exist at all
/// without running a search. Implements [Grid] by building on [SimpleGrid];
/// the trait's `set` is the layout-editing entry point and keeps the
/// components up to date.
#[derive(Clone, Debug)]
pub struct RouteGrid {
    pub cells: SimpleGrid<CellState>,
    start: Option<Point>,
    end: Option<Point>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl RouteGrid {
    /// The state of the cell at `p`. The coordinate must be in bounds.
    pub fn state(&self, p: Point) -> CellState {
        self.cells.get(p.x as usize, p.y as usize)
    }

    /// Writes a search mark. Marks never change passability, so the
    /// component bookkeeping is left alone.
    pub(crate) fn set_state(&mut self, p: Point, state: CellState) {
        self.cells.set(p.x as usize, p.y as usize, state);
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Whether `p` lies on the grid and is not blocked.
    pub fn can_enter(&self, p: Point) -> bool {
        self.in_bounds(p.x, p.y) && !self.state(p).is_blocked()
    }

    /// Row-major cell index, used to key the [UnionFind] structure.
    fn ix(&self, p: Point) -> usize {
        p.y as usize * self.width() + p.x as usize
    }

    /// Places the start landmark, clearing a previously placed one.
    pub fn place_start(&mut self, p: Point) {
        if let Some(old) = self.start.take() {
            self.set(old.x as usize, old.y as usize, CellState::Empty);
        }
        self.set(p.x as usize, p.y as usize, CellState::Start);
        self.start = Some(p);
    }

    /// Places the end landmark, clearing a previously placed one.
    pub fn place_end(&mut self, p: Point) {
        if let Some(old) = self.end.take() {
            self.set(old.x as usize, old.y as usize, CellState::Empty);
        }
        self.set(p.x as usize, p.y as usize, CellState::End);
        self.end = Some(p);
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Reverts all search marks to [CellState::Empty], preserving the
    /// landmarks and blocks, so another strategy can run against the same
    /// base layout.
    pub fn reset(&mut self) {
        for (y, x) in iproduct!(0..self.height(), 0..self.width()) {
            if matches!(
                self.cells.get(x, y),
                CellState::Visited | CellState::Path
            ) {
                self.cells.set(x, y, CellState::Empty);
            }
        }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.ix(*point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            !self.components.equiv(self.ix(*start), self.ix(*goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable grid
    /// neighbours to the same components. Cells are 4-connected; linking
    /// each cell to its right and lower neighbour covers every edge.
    pub fn generate_components(&mut self) {
        info!("Regenerating connected components");
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for (x, y) in iproduct!(0..w as i32, 0..h as i32) {
            let point = Point::new(x, y);
            if !self.can_enter(point) {
                continue;
            }
            let parent_ix = self.ix(point);
            for neighbour in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_enter(neighbour) {
                    self.components.union(parent_ix, self.ix(neighbour));
                }
            }
        }
    }
}

impl fmt::Display for RouteGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(f, "[{}]", self.cells.get(x, y).as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid<CellState> for RouteGrid {
    fn new(width: usize, height: usize, default_value: CellState) -> Self {
        RouteGrid {
            cells: SimpleGrid::new(width, height, default_value),
            start: None,
            end: None,
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> CellState {
        self.cells.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and
    /// flags the components as dirty if they are (potentially) broken apart.
    fn set(&mut self, x: usize, y: usize, value: CellState) {
        let was_blocked = self.cells.get(x, y).is_blocked();
        if value.is_blocked() && !was_blocked {
            self.components_dirty = true;
        } else if !value.is_blocked() {
            let p = Point::new(x as i32, y as i32);
            let p_ix = self.ix(p);
            for neighbour in [
                Point::new(p.x, p.y - 1),
                Point::new(p.x + 1, p.y),
                Point::new(p.x, p.y + 1),
                Point::new(p.x - 1, p.y),
            ] {
                if self.can_enter(neighbour) {
                    self.components.union(p_ix, self.ix(neighbour));
                }
            }
        }
        self.cells.set(x, y, value);
    }
    fn width(&self) -> usize {
        self.cells.width()
    }
    fn height(&self) -> usize {
        self.cells.height()
    }
}

use core::fmt;

/// State of a single grid cell.
///
/// A populated grid has exactly one [Start](CellState::Start) and one
/// [End](CellState::End) cell. Searches write [Visited](CellState::Visited)
/// and [Path](CellState::Path) marks into the remaining cells as they go;
/// [Blocked](CellState::Blocked) cells are never overwritten.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Blocked,
    /// Ruled out for the current search.
    Visited,
    /// On (or tentatively exploring toward) a solution route.
    Path,
}

impl CellState {
    /// Character used when rendering the cell.
    pub fn as_char(self) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Blocked => 'X',
            CellState::Visited => '*',
            CellState::Path => '+',
        }
    }

    /// Start and end cells stay recognizable while a search marks up the
    /// grid around them.
    pub fn is_landmark(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }

    pub fn is_blocked(self) -> bool {
        matches!(self, CellState::Blocked)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

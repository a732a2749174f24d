use crate::Position;

/// Marking state of a single cell.
///
/// Every cell starts [`Undecided`](Self::Undecided). Players either shade a
/// cell (removing its value from row/column accounting) or keep it as part of
/// the final solution. The three states form a fixed cycle, which is how
/// repeated clicks on a cell advance it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CellState {
    /// The player has not decided about this cell yet.
    #[default]
    #[display("undecided")]
    Undecided,
    /// The cell is removed from play; its value no longer counts.
    #[display("shaded")]
    Shaded,
    /// The cell is marked as part of the final solution.
    #[display("kept")]
    Kept,
}

impl CellState {
    /// Returns the next state in the Undecided → Shaded → Kept cycle.
    ///
    /// The cycle has length 3: cycling any state three times returns it.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Undecided => Self::Shaded,
            Self::Shaded => Self::Kept,
            Self::Kept => Self::Undecided,
        }
    }

    /// Returns `true` if the cell is shaded.
    #[must_use]
    pub const fn is_shaded(self) -> bool {
        matches!(self, Self::Shaded)
    }

    /// Returns `true` if the cell is not shaded (undecided or kept).
    ///
    /// Unshaded cells are the ones that participate in row/column uniqueness
    /// and must form a single connected region.
    #[must_use]
    pub const fn is_unshaded(self) -> bool {
        !self.is_shaded()
    }

    /// Returns the single-character encoding of this state.
    ///
    /// `.` for undecided, `x` for shaded, `o` for kept.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Undecided => '.',
            Self::Shaded => 'x',
            Self::Kept => 'o',
        }
    }

    /// Parses a single-character state encoding.
    ///
    /// Returns `None` for characters that do not encode a state.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Undecided),
            'x' => Some(Self::Shaded),
            'o' => Some(Self::Kept),
            _ => None,
        }
    }
}

/// A single grid cell: a fixed positive value plus a mutable marking state.
///
/// The value is decided when the puzzle is defined and never changes during
/// play; only the state does. A cell always knows its own position, which
/// matches its location in the owning [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    value: u32,
    state: CellState,
}

impl Cell {
    pub(crate) const fn new(position: Position, value: u32, state: CellState) -> Self {
        Self {
            position,
            value,
            state,
        }
    }

    /// Returns the cell's position in its grid.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the cell's displayed number.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Returns the cell's current marking state.
    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }

    pub(crate) fn with_state(self, state: CellState) -> Self {
        Self { state, ..self }
    }
}

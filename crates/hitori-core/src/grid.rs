use crate::{Cell, CellState, Position};

/// Errors produced by grid construction and cell addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The number layout has no rows at all.
    #[display("grid layout has no rows")]
    EmptyLayout,
    /// A row's length differs from the number of rows.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of cells in the offending row.
        found: usize,
        /// Expected row length (the grid size).
        expected: usize,
    },
    /// A cell holds zero; Hitori values are positive.
    #[display("cell ({row}, {col}) must hold a positive value")]
    ZeroValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },
    /// The addressed position lies outside the grid.
    #[display("position ({row}, {col}) is outside the {size}×{size} grid")]
    OutOfBounds {
        /// Row of the addressed position.
        row: usize,
        /// Column of the addressed position.
        col: usize,
        /// Size of the grid that rejected the position.
        size: usize,
    },
}

/// A square grid of value-bearing cells.
///
/// Grids are value types. [`with_cell_state`](Self::with_cell_state) and
/// [`map_states`](Self::map_states) return a fresh grid; a grid handed to
/// another component is never changed behind its back, so callers may hold
/// old grids (for example in an undo history) indefinitely.
///
/// # Examples
///
/// ```
/// use hitori_core::{CellState, Grid, Position};
///
/// let grid = Grid::from_rows(&[vec![1, 2], vec![2, 1]])?;
/// assert_eq!(grid.size(), 2);
///
/// let shaded = grid.with_cell_state(Position::new(0, 0), CellState::Shaded)?;
/// // The original grid is untouched.
/// assert_eq!(grid.cell(Position::new(0, 0))?.state(), CellState::Undecided);
/// assert_eq!(shaded.cell(Position::new(0, 0))?.state(), CellState::Shaded);
/// # Ok::<(), hitori_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from a square number layout, all cells undecided.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyLayout`] if `rows` is empty,
    /// [`GridError::RaggedRow`] if any row's length differs from the row
    /// count, and [`GridError::ZeroValue`] if any cell holds zero.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::EmptyLayout);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(GridError::RaggedRow {
                    row,
                    found: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    return Err(GridError::ZeroValue { row, col });
                }
                cells.push(Cell::new(
                    Position::new(row, col),
                    value,
                    CellState::Undecided,
                ));
            }
        }
        Ok(Self { size, cells })
    }

    /// Builds a grid from rows already validated elsewhere.
    ///
    /// Callers guarantee the layout is square and every value positive.
    pub(crate) fn from_validated_rows(rows: &[Vec<u32>]) -> Self {
        let size = rows.len();
        debug_assert!(size > 0);
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            debug_assert_eq!(values.len(), size);
            for (col, &value) in values.iter().enumerate() {
                debug_assert_ne!(value, 0);
                cells.push(Cell::new(
                    Position::new(row, col),
                    value,
                    CellState::Undecided,
                ));
            }
        }
        Self { size, cells }
    }

    /// Returns the grid's side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        (pos.row() < self.size && pos.col() < self.size).then(|| pos.row() * self.size + pos.col())
    }

    /// Returns the cell at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|index| &self.cells[index])
    }

    /// Returns the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `pos` lies outside the grid.
    pub fn cell(&self, pos: Position) -> Result<&Cell, GridError> {
        self.get(pos).ok_or(GridError::OutOfBounds {
            row: pos.row(),
            col: pos.col(),
            size: self.size,
        })
    }

    /// Returns a new grid with the state of a single cell replaced.
    ///
    /// The receiver is left untouched; the two grids share no cell storage
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `pos` lies outside the grid.
    pub fn with_cell_state(&self, pos: Position, state: CellState) -> Result<Self, GridError> {
        let index = self.index_of(pos).ok_or(GridError::OutOfBounds {
            row: pos.row(),
            col: pos.col(),
            size: self.size,
        })?;
        let mut next = self.clone();
        next.cells[index] = next.cells[index].with_state(state);
        Ok(next)
    }

    /// Returns a new grid whose every cell state is recomputed by `f`.
    ///
    /// Values and positions carry over unchanged.
    #[must_use]
    pub fn map_states(&self, mut f: impl FnMut(&Cell) -> CellState) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|cell| cell.with_state(f(cell)))
            .collect();
        Self {
            size: self.size,
            cells,
        }
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size * size).map(move |index| Position::new(index / size, index % size))
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterates the cells of one row, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in `0..size`.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        assert!(row < self.size);
        self.cells[row * self.size..(row + 1) * self.size].iter()
    }

    /// Iterates the cells of one column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in `0..size`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Cell> {
        assert!(col < self.size);
        self.cells[col..].iter().step_by(self.size)
    }

    /// Counts the cells that are not shaded.
    #[must_use]
    pub fn unshaded_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.state().is_unshaded())
            .count()
    }

    /// Encodes the cell states as one string per row.
    ///
    /// Uses the [`CellState`] character encoding (`.`, `x`, `o`); values are
    /// not part of the encoding, they live on the puzzle definition.
    #[must_use]
    pub fn state_rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| self.row(row).map(|cell| cell.state().as_char()).collect())
            .collect()
    }
}

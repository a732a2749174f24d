use hitori_core::{Cell, CellState, Grid, Position};

/// The generator's reference solution: which cells end up shaded.
///
/// A shading is produced and validated before it is exposed, and it never
/// travels with the public [`Puzzle`](hitori_core::Puzzle) definition —
/// players only ever see the numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shading {
    size: usize,
    shaded: Vec<bool>,
}

impl Shading {
    /// Reads a shading off a marked grid: shaded cells become `true`.
    pub(crate) fn from_grid(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            shaded: grid.cells().map(|cell| cell.state().is_shaded()).collect(),
        }
    }

    /// Returns the side length of the shading.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns whether the cell at `pos` is shaded.
    ///
    /// Out-of-bounds positions read as unshaded.
    #[must_use]
    pub fn is_shaded(&self, pos: Position) -> bool {
        pos.row() < self.size
            && pos.col() < self.size
            && self.shaded[pos.row() * self.size + pos.col()]
    }

    /// Counts the shaded cells.
    #[must_use]
    pub fn shaded_count(&self) -> usize {
        self.shaded.iter().filter(|&&shaded| shaded).count()
    }

    /// Iterates the shaded positions in row-major order.
    pub fn shaded_positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        self.shaded
            .iter()
            .enumerate()
            .filter_map(move |(index, &shaded)| {
                shaded.then(|| Position::new(index / size, index % size))
            })
    }

    /// Marks a play grid with this shading.
    ///
    /// Shaded cells become [`CellState::Shaded`], everything else
    /// [`CellState::Kept`] — the fully decided form of the solution, ready
    /// for rule checking.
    #[must_use]
    pub fn apply_to(&self, grid: &Grid) -> Grid {
        grid.map_states(|cell: &Cell| {
            if self.is_shaded(cell.position()) {
                CellState::Shaded
            } else {
                CellState::Kept
            }
        })
    }
}

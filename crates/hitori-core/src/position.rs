/// Zero-based cell coordinates within a square grid.
///
/// Positions are plain values; whether a position is inside a particular grid
/// is decided by that grid (see [`Grid::get`](crate::Grid::get)).
///
/// # Examples
///
/// ```
/// use hitori_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
/// assert_eq!(pos.to_string(), "(2, 3)");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position directly above, if any.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.row == 0 {
            None
        } else {
            Some(Self::new(self.row - 1, self.col))
        }
    }

    /// Returns the position directly below, if it is inside a grid of `size`.
    #[must_use]
    pub const fn down(self, size: usize) -> Option<Self> {
        if self.row + 1 >= size {
            None
        } else {
            Some(Self::new(self.row + 1, self.col))
        }
    }

    /// Returns the position directly to the left, if any.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.col == 0 {
            None
        } else {
            Some(Self::new(self.row, self.col - 1))
        }
    }

    /// Returns the position directly to the right, if it is inside a grid of `size`.
    #[must_use]
    pub const fn right(self, size: usize) -> Option<Self> {
        if self.col + 1 >= size {
            None
        } else {
            Some(Self::new(self.row, self.col + 1))
        }
    }

    /// Returns the in-bounds orthogonal neighbors for a grid of `size`.
    ///
    /// Neighbors are yielded in a fixed up, down, left, right order; rule
    /// checks and hint strategies rely on that order being stable.
    pub fn orthogonal_neighbors(self, size: usize) -> impl Iterator<Item = Self> {
        [self.up(), self.down(size), self.left(), self.right(size)]
            .into_iter()
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let neighbors: Vec<_> = Position::new(1, 1).orthogonal_neighbors(3).collect();
        assert_eq!(
            neighbors,
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn corner_neighbors_are_clipped() {
        let neighbors: Vec<_> = Position::new(0, 0).orthogonal_neighbors(2).collect();
        assert_eq!(neighbors, vec![Position::new(1, 0), Position::new(0, 1)]);

        let neighbors: Vec<_> = Position::new(1, 1).orthogonal_neighbors(2).collect();
        assert_eq!(neighbors, vec![Position::new(0, 1), Position::new(1, 0)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(Position::new(0, 0).orthogonal_neighbors(1).count(), 0);
    }
}

use hitori_core::{CellState, Grid};

use super::{BoxedStrategy, Strategy};
use crate::{Hint, HintReason};

const NAME: &str = "adjacent shaded resolution";

/// A strategy that breaks up touching shaded cells.
///
/// Cells are scanned in row-major order; for each shaded cell its four
/// orthogonal neighbors are checked in a fixed up, down, left, right order,
/// and the first shaded neighbor found is proposed to be set back to
/// undecided. Isolated shaded cells are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdjacentShadedResolution;

impl AdjacentShadedResolution {
    /// Creates a new `AdjacentShadedResolution` strategy.
    #[must_use]
    pub const fn new() -> Self {
        AdjacentShadedResolution
    }
}

impl Strategy for AdjacentShadedResolution {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Hint> {
        for cell in grid.cells() {
            if !cell.state().is_shaded() {
                continue;
            }
            for neighbor in cell.position().orthogonal_neighbors(grid.size()) {
                if grid
                    .get(neighbor)
                    .is_some_and(|cell| cell.state().is_shaded())
                {
                    return Some(Hint::new(
                        neighbor,
                        CellState::Undecided,
                        HintReason::SeparateShadedPair,
                    ));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use hitori_core::Position;

    use super::*;

    fn grid_with_shaded(size: usize, shaded: &[(usize, usize)]) -> Grid {
        let rows: Vec<Vec<u32>> = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| u32::try_from((row + col) % size).unwrap() + 1)
                    .collect()
            })
            .collect();
        let grid = Grid::from_rows(&rows).unwrap();
        shaded.iter().fold(grid, |grid, &(row, col)| {
            grid.with_cell_state(Position::new(row, col), CellState::Shaded)
                .unwrap()
        })
    }

    #[test]
    fn no_hint_without_touching_shaded_cells() {
        let grid = grid_with_shaded(3, &[(0, 0), (1, 1), (2, 0)]);
        assert_eq!(AdjacentShadedResolution::new().find(&grid), None);
    }

    #[test]
    fn proposes_clearing_the_first_shaded_neighbor() {
        let grid = grid_with_shaded(3, &[(1, 1), (2, 1)]);
        let hint = AdjacentShadedResolution::new().find(&grid).unwrap();

        // (1, 1) is reached first in row-major order; its down neighbor is
        // the shaded partner.
        assert_eq!(hint.position(), Position::new(2, 1));
        assert_eq!(hint.suggested_state(), CellState::Undecided);
        assert_eq!(hint.reason(), HintReason::SeparateShadedPair);
    }

    #[test]
    fn down_neighbor_is_checked_before_right() {
        // (0, 1) is the first shaded cell and touches shaded cells below and
        // to the right; the fixed neighbor order picks the one below.
        let grid = grid_with_shaded(3, &[(0, 1), (1, 1), (0, 2)]);
        let hint = AdjacentShadedResolution::new().find(&grid).unwrap();
        assert_eq!(hint.position(), Position::new(1, 1));
    }

    #[test]
    fn scan_passes_over_isolated_shaded_cells() {
        // (0, 0) is shaded but isolated; the pair further down still yields
        // a hint.
        let grid = grid_with_shaded(4, &[(0, 0), (2, 2), (2, 3)]);
        let hint = AdjacentShadedResolution::new().find(&grid).unwrap();
        assert_eq!(hint.position(), Position::new(2, 3));
    }
}

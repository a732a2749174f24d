use std::collections::VecDeque;

use super::{RuleReport, Violation};
use crate::{Cell, Grid, Position};

/// Checks that the unshaded cells form one connected region.
///
/// Connectivity is over 4-neighbor adjacency among unshaded cells only.
/// Grids with zero or one unshaded cell are trivially connected. Otherwise a
/// breadth-first search runs from the first unshaded cell in row-major
/// order; if it does not reach every unshaded cell, one violation is
/// reported listing every unreached unshaded cell.
#[must_use]
pub fn check_connectivity(grid: &Grid) -> RuleReport {
    let unshaded: Vec<Position> = grid
        .cells()
        .filter(|cell| cell.state().is_unshaded())
        .map(Cell::position)
        .collect();

    let mut report = RuleReport::default();
    if unshaded.len() <= 1 {
        return report;
    }

    let size = grid.size();
    let mut visited = vec![false; size * size];
    let mut queue = VecDeque::new();
    let start = unshaded[0];
    visited[start.row() * size + start.col()] = true;
    queue.push_back(start);
    let mut reached = 1;

    while let Some(pos) = queue.pop_front() {
        for neighbor in pos.orthogonal_neighbors(size) {
            let index = neighbor.row() * size + neighbor.col();
            if visited[index] {
                continue;
            }
            if grid
                .get(neighbor)
                .is_some_and(|cell| cell.state().is_unshaded())
            {
                visited[index] = true;
                reached += 1;
                queue.push_back(neighbor);
            }
        }
    }

    if reached < unshaded.len() {
        let cells = unshaded
            .into_iter()
            .filter(|pos| !visited[pos.row() * size + pos.col()])
            .collect();
        report.push(Violation::Disconnected { cells });
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellState;

    fn grid_with_shaded(size: usize, shaded: &[(usize, usize)]) -> Grid {
        let rows: Vec<Vec<u32>> = (0..size).map(|_| vec![1; size]).collect();
        let grid = Grid::from_rows(&rows).unwrap();
        shaded.iter().fold(grid, |grid, &(row, col)| {
            grid.with_cell_state(Position::new(row, col), CellState::Shaded)
                .unwrap()
        })
    }

    #[test]
    fn fully_unshaded_grid_is_connected() {
        assert!(check_connectivity(&grid_with_shaded(4, &[])).ok());
    }

    #[test]
    fn zero_or_one_unshaded_cell_is_trivially_connected() {
        let all = grid_with_shaded(2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert!(check_connectivity(&all).ok());

        let all_but_one = grid_with_shaded(2, &[(0, 0), (0, 1), (1, 0)]);
        assert!(check_connectivity(&all_but_one).ok());
    }

    #[test]
    fn shaded_middle_column_splits_a_3x3_grid() {
        let grid = grid_with_shaded(3, &[(0, 1), (1, 1), (2, 1)]);
        let report = check_connectivity(&grid);

        // One violation listing the three unreached cells: the search starts
        // at (0, 0), so the right column is cut off.
        assert_eq!(
            report.violations(),
            &[Violation::Disconnected {
                cells: vec![
                    Position::new(0, 2),
                    Position::new(1, 2),
                    Position::new(2, 2),
                ],
            }]
        );

        // Unshading the middle cell reconnects the halves.
        let grid = grid
            .with_cell_state(Position::new(1, 1), CellState::Undecided)
            .unwrap();
        assert!(check_connectivity(&grid).ok());
    }

    #[test]
    fn kept_cells_connect_like_undecided_ones() {
        let grid = grid_with_shaded(3, &[(0, 1), (2, 1)]);
        let grid = grid
            .with_cell_state(Position::new(1, 1), CellState::Kept)
            .unwrap();
        assert!(check_connectivity(&grid).ok());
    }

    #[test]
    fn diagonal_only_contact_does_not_connect() {
        let grid = grid_with_shaded(2, &[(0, 1), (1, 0)]);
        let report = check_connectivity(&grid);
        assert_eq!(
            report.violations(),
            &[Violation::Disconnected {
                cells: vec![Position::new(1, 1)],
            }]
        );
    }
}

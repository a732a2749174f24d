use super::{RuleReport, Violation};
use crate::{Cell, Grid, Position};

/// Checks that no value repeats among the unshaded cells of any row or
/// column.
///
/// Shaded cells are excluded from the accounting entirely: shading is
/// exactly how the player removes a duplicate. Every offending value group
/// is reported as one violation carrying all member positions, so rows with
/// several distinct repeated values produce several violations. Rows are
/// checked before columns.
#[must_use]
pub fn check_row_column_uniqueness(grid: &Grid) -> RuleReport {
    let mut report = RuleReport::default();
    for row in 0..grid.size() {
        collect_line_duplicates(grid.row(row), &mut report, |value, cells| {
            Violation::RowDuplicate { row, value, cells }
        });
    }
    for col in 0..grid.size() {
        collect_line_duplicates(grid.column(col), &mut report, |value, cells| {
            Violation::ColumnDuplicate { col, value, cells }
        });
    }
    report
}

fn collect_line_duplicates<'a>(
    line: impl Iterator<Item = &'a Cell>,
    report: &mut RuleReport,
    mut violation: impl FnMut(u32, Vec<Position>) -> Violation,
) {
    // Groups keep the order their value was first seen in the line.
    let mut groups: Vec<(u32, Vec<Position>)> = Vec::new();
    for cell in line {
        if cell.state().is_shaded() {
            continue;
        }
        match groups.iter_mut().find(|(value, _)| *value == cell.value()) {
            Some((_, cells)) => cells.push(cell.position()),
            None => groups.push((cell.value(), vec![cell.position()])),
        }
    }
    for (value, cells) in groups {
        if cells.len() > 1 {
            report.push(violation(value, cells));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellState;

    fn with_shaded(grid: Grid, shaded: &[(usize, usize)]) -> Grid {
        shaded.iter().fold(grid, |grid, &(row, col)| {
            grid.with_cell_state(Position::new(row, col), CellState::Shaded)
                .unwrap()
        })
    }

    #[test]
    fn reports_row_and_column_duplicates_with_all_members() {
        let grid = Grid::from_rows(&[vec![2, 2, 2], vec![1, 3, 2], vec![3, 1, 2]]).unwrap();
        let report = check_row_column_uniqueness(&grid);

        assert_eq!(
            report.violations(),
            &[
                Violation::RowDuplicate {
                    row: 0,
                    value: 2,
                    cells: vec![
                        Position::new(0, 0),
                        Position::new(0, 1),
                        Position::new(0, 2),
                    ],
                },
                Violation::ColumnDuplicate {
                    col: 2,
                    value: 2,
                    cells: vec![
                        Position::new(0, 2),
                        Position::new(1, 2),
                        Position::new(2, 2),
                    ],
                },
            ]
        );
    }

    #[test]
    fn shaded_cells_do_not_count_as_duplicates() {
        let grid = Grid::from_rows(&[vec![2, 2, 2], vec![1, 3, 2], vec![3, 1, 2]]).unwrap();
        let grid = with_shaded(grid, &[(0, 0), (0, 2), (2, 2)]);
        let report = check_row_column_uniqueness(&grid);
        assert!(report.ok(), "violations: {:?}", report.violations());
    }

    #[test]
    fn kept_cells_still_count_as_duplicates() {
        let grid = Grid::from_rows(&[vec![1, 1], vec![2, 3]]).unwrap();
        let grid = grid
            .with_cell_state(Position::new(0, 0), CellState::Kept)
            .unwrap();
        let report = check_row_column_uniqueness(&grid);
        assert_eq!(report.violations().len(), 1);
    }

    #[test]
    fn several_values_in_one_line_yield_separate_violations() {
        let grid = Grid::from_rows(&[
            vec![1, 1, 2, 2],
            vec![2, 3, 4, 1],
            vec![3, 4, 1, 3],
            vec![4, 2, 3, 4],
        ])
        .unwrap();
        let report = check_row_column_uniqueness(&grid);

        // Row 0 repeats both 1 and 2; they come out as two violations, in
        // first-seen value order.
        let row0: Vec<_> = report
            .violations()
            .iter()
            .filter_map(|violation| match violation {
                Violation::RowDuplicate { row: 0, value, .. } => Some(*value),
                _ => None,
            })
            .collect();
        assert_eq!(row0, vec![1, 2]);
    }

    #[test]
    fn clean_latin_rows_report_nothing() {
        let grid = Grid::from_rows(&[vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]]).unwrap();
        assert!(check_row_column_uniqueness(&grid).ok());
    }
}

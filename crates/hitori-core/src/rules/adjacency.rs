use super::{RuleReport, Violation};
use crate::Grid;

/// Checks that no two shaded cells touch orthogonally.
///
/// Each shaded pair is reported exactly once: pairs are visited in canonical
/// order by only looking down and right from each shaded cell during a
/// row-major scan. Diagonal contact is allowed and never reported.
#[must_use]
pub fn check_no_adjacent_shaded(grid: &Grid) -> RuleReport {
    let mut report = RuleReport::default();
    for cell in grid.cells() {
        if !cell.state().is_shaded() {
            continue;
        }
        let pos = cell.position();
        for neighbor in [pos.down(grid.size()), pos.right(grid.size())]
            .into_iter()
            .flatten()
        {
            if grid.get(neighbor).is_some_and(|cell| cell.state().is_shaded()) {
                report.push(Violation::AdjacentShaded {
                    cells: [pos, neighbor],
                });
            }
        }
    }
    report
}

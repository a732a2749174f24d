//! Rule checks for Hitori grids.
//!
//! Three independent checks cover the three Hitori constraints:
//!
//! - [`check_row_column_uniqueness`] — no value may repeat among the
//!   unshaded cells of a row or column.
//! - [`check_no_adjacent_shaded`] — shaded cells may not touch
//!   orthogonally.
//! - [`check_connectivity`] — the unshaded cells must form a single
//!   connected region.
//!
//! Each check is a pure function: it inspects the grid it is given,
//! recomputes from scratch, and returns a fresh [`RuleReport`]. Nothing is
//! cached across calls. [`check_all`] runs the three in order, and
//! [`is_solved`] — the sole win condition — is simply its `ok` flag.

use crate::{Grid, Position};

pub use self::{
    adjacency::check_no_adjacent_shaded, connectivity::check_connectivity,
    uniqueness::check_row_column_uniqueness,
};

mod adjacency;
mod connectivity;
mod uniqueness;

/// A single rule violation, with every cell that participates in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two or more unshaded cells in one row share a value.
    RowDuplicate {
        /// Index of the offending row.
        row: usize,
        /// The repeated value.
        value: u32,
        /// All unshaded cells in the row holding that value, left to right.
        cells: Vec<Position>,
    },
    /// Two or more unshaded cells in one column share a value.
    ColumnDuplicate {
        /// Index of the offending column.
        col: usize,
        /// The repeated value.
        value: u32,
        /// All unshaded cells in the column holding that value, top to bottom.
        cells: Vec<Position>,
    },
    /// Two shaded cells touch orthogonally.
    AdjacentShaded {
        /// The pair, in canonical (row-major) order. Each pair is reported
        /// exactly once.
        cells: [Position; 2],
    },
    /// The unshaded cells split into more than one region.
    Disconnected {
        /// Every unshaded cell not reachable from the search start, in
        /// row-major order.
        cells: Vec<Position>,
    },
}

impl Violation {
    /// Returns the cells implicated in this violation.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        match self {
            Self::RowDuplicate { cells, .. }
            | Self::ColumnDuplicate { cells, .. }
            | Self::Disconnected { cells } => cells,
            Self::AdjacentShaded { cells } => cells,
        }
    }
}

/// Outcome of running one or more rule checks over a grid.
///
/// Reports are built fresh on every check call and never cached across grid
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleReport {
    violations: Vec<Violation>,
}

impl RuleReport {
    /// Returns `true` when no violations were found.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations in the order they were found.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the report, yielding its violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Appends the violations of another report.
    pub fn merge(&mut self, other: Self) {
        self.violations.extend(other.violations);
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

/// Runs all three rule checks and combines their reports.
///
/// Violations are ordered: row/column duplicates first (rows before
/// columns), then adjacent shaded pairs, then connectivity.
///
/// # Examples
///
/// ```
/// use hitori_core::{Grid, rules};
///
/// let grid = Grid::from_rows(&[vec![1, 1], vec![2, 2]])?;
/// let report = rules::check_all(&grid);
/// assert!(!report.ok());
/// assert_eq!(report.violations().len(), 2); // rows 0 and 1 each repeat a value
/// # Ok::<(), hitori_core::GridError>(())
/// ```
#[must_use]
pub fn check_all(grid: &Grid) -> RuleReport {
    let mut report = check_row_column_uniqueness(grid);
    report.merge(check_no_adjacent_shaded(grid));
    report.merge(check_connectivity(grid));
    report
}

/// Returns whether the grid satisfies all three rules at once.
///
/// This is the sole win condition; no other signal marks a puzzle solved.
#[must_use]
pub fn is_solved(grid: &Grid) -> bool {
    check_all(grid).ok()
}

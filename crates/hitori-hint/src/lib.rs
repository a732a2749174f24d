//! Deduction-based hints for Hitori grids.
//!
//! The hint engine looks at a grid and proposes a single safe next move, or
//! nothing. It is intentionally shallow: it applies the strategies in
//! [`strategy`] in a strict priority order and returns the first match — it
//! is not a solver and never chains deductions.
//!
//! Hints are pure values; applying one is the caller's job (usually by
//! setting the suggested state on the target cell).
//!
//! # Examples
//!
//! ```
//! use hitori_core::{CellState, Grid, Position};
//! use hitori_hint::{HintEngine, HintReason};
//!
//! // Row 0 repeats 1, and its left copy is already kept, so the other copy
//! // must be shaded.
//! let grid = Grid::from_rows(&[vec![1, 1], vec![2, 1]])?
//!     .with_cell_state(Position::new(0, 0), CellState::Kept)?;
//!
//! let hint = HintEngine::with_all_strategies()
//!     .find_hint(&grid)
//!     .expect("a duplicate hint exists");
//! assert_eq!(hint.position(), Position::new(0, 1));
//! assert_eq!(hint.suggested_state(), CellState::Shaded);
//! assert!(matches!(hint.reason(), HintReason::ShadeDuplicate { .. }));
//! # Ok::<(), hitori_core::GridError>(())
//! ```

pub use self::{engine::HintEngine, hint::*};
use hitori_core::Grid;

mod engine;
mod hint;
pub mod strategy;

/// Finds a hint using every built-in strategy in priority order.
///
/// Convenience for [`HintEngine::with_all_strategies`] followed by
/// [`HintEngine::find_hint`]. Returns `None` when no strategy applies;
/// that is a normal outcome, not an error.
#[must_use]
pub fn find_hint(grid: &Grid) -> Option<Hint> {
    HintEngine::with_all_strategies().find_hint(grid)
}

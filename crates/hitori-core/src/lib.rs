//! Core data structures and rule checks for Hitori puzzles.
//!
//! This crate provides the value objects shared by the generation, hint, and
//! game-session components:
//!
//! 1. **Grid model** — [`Position`], [`CellState`], [`Cell`], and [`Grid`]:
//!    a square grid of positive numbers where each cell carries a marking
//!    state ([`CellState::Undecided`], [`CellState::Shaded`], or
//!    [`CellState::Kept`]). Grids are value types: updates such as
//!    [`Grid::with_cell_state`] return a new grid and never touch the
//!    original.
//! 2. **Puzzle definitions** — [`Puzzle`] and [`Difficulty`]: the immutable
//!    description of a puzzle (numbers plus metadata) that play sessions are
//!    instantiated from.
//! 3. **Rule checks** — the [`rules`] module: pure functions that inspect a
//!    grid against the three Hitori constraints and report every violation
//!    with the cells involved.
//!
//! # Examples
//!
//! ```
//! use hitori_core::{CellState, Grid, Position, rules};
//!
//! // Both cells in row 0 hold a 1, so the grid starts out in violation.
//! let grid = Grid::from_rows(&[vec![1, 1], vec![2, 1]])?;
//! assert!(!rules::check_all(&grid).ok());
//!
//! // Shading one of the duplicates resolves every rule at once.
//! let grid = grid.with_cell_state(Position::new(0, 1), CellState::Shaded)?;
//! assert!(rules::is_solved(&grid));
//! # Ok::<(), hitori_core::GridError>(())
//! ```

pub use self::{cell::*, grid::*, position::*, puzzle::*};

mod cell;
mod grid;
mod position;
mod puzzle;
pub mod rules;

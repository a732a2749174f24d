//! Play sessions over Hitori puzzles.
//!
//! A [`PlayState`] binds a shared [`Puzzle`](hitori_core::Puzzle) definition
//! to an owned play grid, a move counter, and elapsed time. Every mutating
//! operation returns a **new** state value and leaves the receiver
//! untouched; this is the contract host applications rely on when they stash
//! old states in an undo/redo history — the engine itself keeps no history.
//!
//! Sessions can be persisted through [`Snapshot`], a small serde-friendly
//! carrier that round-trips the cell-state matrix, move count, and elapsed
//! time against an externally stored puzzle definition.
//!
//! # Examples
//!
//! ```
//! use hitori_core::{CellState, Difficulty, Position, Puzzle};
//! use hitori_game::PlayState;
//!
//! let puzzle = Puzzle::new(
//!     "demo-2x2",
//!     Difficulty::Easy,
//!     vec![vec![1, 1], vec![2, 1]],
//! )?;
//! let state = PlayState::new(puzzle);
//!
//! // Cycling walks Undecided → Shaded → Kept; each click is a move.
//! let next = state.cycle_cell_state(Position::new(0, 1))?;
//! assert_eq!(next.moves(), 1);
//! assert!(next.is_solved());
//!
//! // The original state is unaffected.
//! assert_eq!(state.moves(), 0);
//! assert!(!state.is_solved());
//! # Ok::<(), hitori_core::GridError>(())
//! ```

pub use self::{play_state::PlayState, snapshot::*};

mod play_state;
mod snapshot;

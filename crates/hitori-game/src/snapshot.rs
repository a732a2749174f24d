use std::{sync::Arc, time::Duration};

use hitori_core::{CellState, Puzzle};
use serde::{Deserialize, Serialize};

use crate::PlayState;

/// A persistable snapshot of a play session.
///
/// Snapshots carry everything the puzzle definition does not: the cell-state
/// matrix (one string per row, using the `.`/`x`/`o` encoding), the move
/// counter, and elapsed play time. They deliberately do **not** embed the
/// numbers — the definition they were taken against is the single source of
/// truth for values and must be supplied again on restore.
///
/// The field set is a persistence format: hosts may store snapshots across
/// runs, so changing it is a breaking change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Identifier of the puzzle the snapshot was taken from.
    pub puzzle_id: String,
    /// Side length of that puzzle.
    pub size: usize,
    /// Cell states, one string per row.
    pub states: Vec<String>,
    /// Move counter at snapshot time.
    pub moves: u32,
    /// Elapsed play time at snapshot time, in milliseconds.
    pub elapsed_ms: u64,
}

/// Errors produced when restoring a play state from a snapshot.
///
/// All of these mean the snapshot is incompatible with the supplied puzzle
/// or corrupt. The recommended recovery is to discard the snapshot and start
/// a fresh session from the definition — not to attempt partial repair.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    /// The snapshot was taken from a different puzzle (id or size differ).
    #[display(
        "snapshot belongs to puzzle `{found_id}` ({found_size}×{found_size}), \
         not `{expected_id}` ({expected_size}×{expected_size})"
    )]
    PuzzleMismatch {
        /// Id of the puzzle being restored into.
        expected_id: String,
        /// Id stored in the snapshot.
        found_id: String,
        /// Size of the puzzle being restored into.
        expected_size: usize,
        /// Size stored in the snapshot.
        found_size: usize,
    },
    /// The stored state matrix does not have the puzzle's dimensions.
    #[display("snapshot state matrix is malformed: expected {expected} rows of {expected} cells")]
    DimensionMismatch {
        /// The required row count and row length.
        expected: usize,
    },
    /// The stored state matrix contains a character that is not a state.
    #[display("snapshot contains unknown cell state `{ch}`")]
    UnknownCellState {
        /// The offending character.
        ch: char,
    },
}

impl PlayState {
    /// Captures the session as a [`Snapshot`].
    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            puzzle_id: self.puzzle().id().to_owned(),
            size: self.puzzle().size(),
            states: self.grid().state_rows(),
            moves: self.moves(),
            elapsed_ms: u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Restores a session from a snapshot taken against `puzzle`.
    ///
    /// The restored state reproduces the snapshot's cell-state matrix, move
    /// counter, and elapsed time exactly; the session start time is re-based
    /// on the restore moment.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::PuzzleMismatch`] if the snapshot names a
    /// different puzzle id or size, [`SnapshotError::DimensionMismatch`] if
    /// the stored matrix is not `size × size`, and
    /// [`SnapshotError::UnknownCellState`] on undecodable state characters.
    pub fn from_snapshot(
        puzzle: impl Into<Arc<Puzzle>>,
        snapshot: &Snapshot,
    ) -> Result<Self, SnapshotError> {
        let puzzle = puzzle.into();
        if snapshot.puzzle_id != puzzle.id() || snapshot.size != puzzle.size() {
            return Err(SnapshotError::PuzzleMismatch {
                expected_id: puzzle.id().to_owned(),
                found_id: snapshot.puzzle_id.clone(),
                expected_size: puzzle.size(),
                found_size: snapshot.size,
            });
        }

        let size = puzzle.size();
        if snapshot.states.len() != size {
            return Err(SnapshotError::DimensionMismatch { expected: size });
        }
        let mut states: Vec<Vec<CellState>> = Vec::with_capacity(size);
        for row in &snapshot.states {
            let decoded: Vec<CellState> = row
                .chars()
                .map(|ch| CellState::from_char(ch).ok_or(SnapshotError::UnknownCellState { ch }))
                .collect::<Result<_, _>>()?;
            if decoded.len() != size {
                return Err(SnapshotError::DimensionMismatch { expected: size });
            }
            states.push(decoded);
        }

        let grid = puzzle
            .to_grid()
            .map_states(|cell| states[cell.position().row()][cell.position().col()]);
        Ok(Self::from_parts(
            puzzle,
            grid,
            snapshot.moves,
            Duration::from_millis(snapshot.elapsed_ms),
        ))
    }
}

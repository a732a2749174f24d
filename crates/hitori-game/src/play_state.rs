use std::{
    sync::Arc,
    time::{Duration, SystemTime},
};

use hitori_core::{
    CellState, Grid, GridError, Position, Puzzle,
    rules::{self, RuleReport},
};
use hitori_hint::Hint;

/// A live play session over a fixed puzzle.
///
/// The puzzle definition is shared (other sessions and the catalogue may
/// hold it too); the play grid is owned. States are values: mutating
/// operations return a fresh `PlayState` and never change the receiver, so
/// any number of old states may be kept around and restored at will.
#[derive(Debug, Clone)]
pub struct PlayState {
    puzzle: Arc<Puzzle>,
    grid: Grid,
    moves: u32,
    started_at: SystemTime,
    elapsed: Duration,
}

impl PlayState {
    /// Starts a fresh session: every cell undecided, zero moves.
    #[must_use]
    pub fn new(puzzle: impl Into<Arc<Puzzle>>) -> Self {
        let puzzle = puzzle.into();
        let grid = puzzle.to_grid();
        Self {
            puzzle,
            grid,
            moves: 0,
            started_at: SystemTime::now(),
            elapsed: Duration::ZERO,
        }
    }

    pub(crate) fn from_parts(
        puzzle: Arc<Puzzle>,
        grid: Grid,
        moves: u32,
        elapsed: Duration,
    ) -> Self {
        let started_at = SystemTime::now()
            .checked_sub(elapsed)
            .unwrap_or(SystemTime::UNIX_EPOCH);
        Self {
            puzzle,
            grid,
            moves,
            started_at,
            elapsed,
        }
    }

    /// Returns the shared puzzle definition.
    #[must_use]
    pub fn puzzle(&self) -> &Arc<Puzzle> {
        &self.puzzle
    }

    /// Returns the current play grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns how many state-setting operations produced this state.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns when this session started.
    #[must_use]
    pub const fn started_at(&self) -> SystemTime {
        self.started_at
    }

    /// Returns the play time accumulated so far.
    ///
    /// The engine has no clock of its own; the host advances this via
    /// [`with_elapsed`](Self::with_elapsed).
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns a state with the accumulated play time replaced.
    ///
    /// Not a move: the counter is unchanged.
    #[must_use]
    pub fn with_elapsed(&self, elapsed: Duration) -> Self {
        let mut next = self.clone();
        next.elapsed = elapsed;
        next
    }

    /// Returns a new state with one cell set to `state` and `moves`
    /// incremented.
    ///
    /// The increment is unconditional: writing a cell's current state back
    /// still counts as a move. That is a deliberate behavioral choice — a
    /// no-op click is still a click.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `pos` lies outside the grid.
    pub fn set_cell_state(&self, pos: Position, state: CellState) -> Result<Self, GridError> {
        let grid = self.grid.with_cell_state(pos, state)?;
        Ok(Self {
            puzzle: Arc::clone(&self.puzzle),
            grid,
            moves: self.moves + 1,
            started_at: self.started_at,
            elapsed: self.elapsed,
        })
    }

    /// Returns a new state with one cell advanced along the
    /// Undecided → Shaded → Kept cycle.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `pos` lies outside the grid.
    pub fn cycle_cell_state(&self, pos: Position) -> Result<Self, GridError> {
        let current = self.grid.cell(pos)?.state();
        self.set_cell_state(pos, current.cycled())
    }

    /// Runs all three rule checks over the current grid.
    ///
    /// The report is computed fresh on every call; nothing is cached across
    /// state changes.
    #[must_use]
    pub fn check_all(&self) -> RuleReport {
        rules::check_all(&self.grid)
    }

    /// Returns whether the session satisfies all three rules.
    ///
    /// This is the sole win condition.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        rules::is_solved(&self.grid)
    }

    /// Proposes a single safe next move, if any strategy finds one.
    ///
    /// Delegates to the hint engine's full strategy list. The state is not
    /// modified; apply the hint by setting the target cell.
    #[must_use]
    pub fn find_hint(&self) -> Option<Hint> {
        hitori_hint::find_hint(&self.grid)
    }
}

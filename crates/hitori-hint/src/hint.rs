use hitori_core::{CellState, Position};

/// A row or column, as referenced by hint reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Line {
    /// A row identified by its index.
    #[display("row {index}")]
    Row {
        /// Row index (0-based).
        index: usize,
    },
    /// A column identified by its index.
    #[display("column {index}")]
    Column {
        /// Column index (0-based).
        index: usize,
    },
}

/// Why a hint proposes its move.
///
/// The display text is suitable for showing to players verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HintReason {
    /// The value already has a kept copy in this line; the target is a
    /// redundant duplicate.
    #[display("{value} appears more than once in {line}; this copy can be shaded")]
    ShadeDuplicate {
        /// The line holding the duplicate group.
        line: Line,
        /// The repeated value.
        value: u32,
    },
    /// Every other copy of the value in this line is shaded; the target is
    /// the forced survivor.
    #[display("every other {value} in {line} is shaded; this one must stay")]
    KeepSurvivor {
        /// The line holding the duplicate group.
        line: Line,
        /// The repeated value.
        value: u32,
    },
    /// The target is one of two touching shaded cells.
    #[display("shaded cells may not touch; this one has to be cleared")]
    SeparateShadedPair,
}

/// A proposed next move: one cell and the state it should be set to.
///
/// Hints never mutate anything; the caller applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    position: Position,
    suggested_state: CellState,
    reason: HintReason,
}

impl Hint {
    pub(crate) const fn new(
        position: Position,
        suggested_state: CellState,
        reason: HintReason,
    ) -> Self {
        Self {
            position,
            suggested_state,
            reason,
        }
    }

    /// Returns the cell the hint targets.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the state the targeted cell should be set to.
    #[must_use]
    pub const fn suggested_state(&self) -> CellState {
        self.suggested_state
    }

    /// Returns why the move is safe.
    #[must_use]
    pub const fn reason(&self) -> HintReason {
        self.reason
    }
}

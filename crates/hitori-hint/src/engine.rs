use hitori_core::Grid;

use crate::{
    Hint,
    strategy::{self, BoxedStrategy},
};

/// Runs hint strategies against a grid in strict priority order.
///
/// The engine holds an ordered strategy list and returns the first hint any
/// of them produces. It is stateless between calls: every
/// [`find_hint`](Self::find_hint) re-reads the grid from scratch.
///
/// # Examples
///
/// ```
/// use hitori_core::Grid;
/// use hitori_hint::HintEngine;
///
/// let engine = HintEngine::with_all_strategies();
/// let grid = Grid::from_rows(&[vec![1, 2], vec![2, 1]])?;
/// // A conflict-free, untouched grid offers nothing to deduce.
/// assert!(engine.find_hint(&grid).is_none());
/// # Ok::<(), hitori_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HintEngine {
    strategies: Vec<BoxedStrategy>,
}

impl HintEngine {
    /// Creates an engine from an ordered strategy list.
    ///
    /// Earlier strategies take precedence; an empty list never hints.
    #[must_use]
    pub fn new(strategies: Vec<BoxedStrategy>) -> Self {
        Self { strategies }
    }

    /// Creates an engine with every built-in strategy in priority order.
    #[must_use]
    pub fn with_all_strategies() -> Self {
        Self::new(strategy::all_strategies())
    }

    /// Returns the engine's strategies in priority order.
    #[must_use]
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Returns the first hint any strategy finds, or `None`.
    ///
    /// "No hint available" is a normal outcome for grids without matching
    /// patterns, not an error.
    #[must_use]
    pub fn find_hint(&self, grid: &Grid) -> Option<Hint> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.find(grid))
    }
}

impl Default for HintEngine {
    fn default() -> Self {
        Self::with_all_strategies()
    }
}

#[cfg(test)]
mod tests {
    use hitori_core::{CellState, Position};

    use super::*;
    use crate::HintReason;

    #[test]
    fn duplicate_hints_outrank_adjacency_hints() {
        // Both patterns exist: row 1 holds a touching shaded pair, and row 0
        // has a kept duplicate. The duplicate hint must win.
        let grid = Grid::from_rows(&[vec![3, 3, 3], vec![1, 2, 3], vec![2, 1, 2]]).unwrap();
        let grid = grid
            .with_cell_state(Position::new(0, 0), CellState::Kept)
            .unwrap()
            .with_cell_state(Position::new(1, 0), CellState::Shaded)
            .unwrap()
            .with_cell_state(Position::new(1, 1), CellState::Shaded)
            .unwrap();

        let engine = HintEngine::with_all_strategies();
        let hint = engine.find_hint(&grid).unwrap();
        assert!(matches!(
            hint.reason(),
            HintReason::ShadeDuplicate { value: 3, .. }
        ));

        // Dropping the duplicate strategy surfaces the adjacency hint.
        let engine = HintEngine::new(vec![Box::new(
            crate::strategy::AdjacentShadedResolution::new(),
        )]);
        let hint = engine.find_hint(&grid).unwrap();
        assert_eq!(hint.reason(), HintReason::SeparateShadedPair);
        assert_eq!(hint.position(), Position::new(1, 1));
    }

    #[test]
    fn empty_engine_never_hints() {
        let grid = Grid::from_rows(&[vec![1, 1], vec![1, 1]]).unwrap();
        assert!(HintEngine::new(Vec::new()).find_hint(&grid).is_none());
    }

    #[test]
    fn adjacency_hint_fires_when_no_duplicate_shape_matches() {
        let grid = Grid::from_rows(&[vec![1, 2], vec![2, 1]]).unwrap();
        let grid = grid
            .with_cell_state(Position::new(0, 0), CellState::Shaded)
            .unwrap()
            .with_cell_state(Position::new(0, 1), CellState::Shaded)
            .unwrap();

        let hint = HintEngine::with_all_strategies().find_hint(&grid).unwrap();
        assert_eq!(hint.reason(), HintReason::SeparateShadedPair);
        assert_eq!(hint.position(), Position::new(0, 1));
        assert_eq!(hint.suggested_state(), CellState::Undecided);
    }
}

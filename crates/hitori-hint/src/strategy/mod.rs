//! Hint strategies.
//!
//! Each strategy implements the [`Strategy`] trait and inspects a grid for
//! one kind of safe move. Strategies are tried in the order returned by
//! [`all_strategies`]; the ordering is part of the engine's contract —
//! resolving numeric conflicts is logically prior to adjacency cleanup, so
//! duplicate hints always win when both exist.

use std::fmt::Debug;

use hitori_core::Grid;

pub use self::{
    adjacent_shaded::AdjacentShadedResolution, duplicate_resolution::DuplicateResolution,
};
use crate::Hint;

mod adjacent_shaded;
mod duplicate_resolution;

/// Returns every built-in strategy, highest priority first.
///
/// # Examples
///
/// ```
/// use hitori_hint::strategy;
///
/// let strategies = strategy::all_strategies();
/// assert_eq!(strategies.len(), 2);
/// assert_eq!(strategies[0].name(), "duplicate resolution");
/// ```
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(DuplicateResolution::new()),
        Box::new(AdjacentShadedResolution::new()),
    ]
}

/// A single hint strategy.
pub trait Strategy: Debug {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Searches the grid for this strategy's pattern.
    ///
    /// Returns the first matching hint in the strategy's fixed scan order,
    /// or `None` when the pattern does not occur. Never mutates the grid.
    fn find(&self, grid: &Grid) -> Option<Hint>;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

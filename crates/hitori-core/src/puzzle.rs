use std::str::FromStr;

use crate::{Grid, GridError};

/// Play difficulty of a puzzle.
///
/// For generated puzzles the difficulty decides how much of the grid the
/// generator tries to shade; for catalogue puzzles it is descriptive
/// metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Difficulty {
    /// Few shaded cells; conflicts are sparse.
    #[display("easy")]
    Easy,
    /// The default experience.
    #[display("medium")]
    Medium,
    /// Dense shading with overlapping conflicts.
    #[display("hard")]
    Hard,
    /// As dense as the adjacency rule allows.
    #[display("expert")]
    Expert,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];
}

/// Error returned when parsing a [`Difficulty`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty `{name}`")]
pub struct ParseDifficultyError {
    /// The text that failed to parse.
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.to_string() == s)
            .ok_or_else(|| ParseDifficultyError { name: s.to_owned() })
    }
}

/// An immutable puzzle definition.
///
/// The definition is the single source of truth for cell values: play grids
/// are instantiated from it via [`to_grid`](Self::to_grid) and never feed
/// anything back. Definitions come from the generator or from a puzzle
/// catalogue and are never modified once created.
///
/// # Examples
///
/// ```
/// use hitori_core::{Difficulty, Puzzle};
///
/// let puzzle = Puzzle::new(
///     "demo-3x3",
///     Difficulty::Easy,
///     vec![vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]],
/// )?;
/// assert_eq!(puzzle.size(), 3);
/// assert_eq!(puzzle.to_grid().size(), 3);
/// # Ok::<(), hitori_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    id: String,
    size: usize,
    numbers: Vec<Vec<u32>>,
    difficulty: Difficulty,
    has_unique_solution: bool,
}

impl Puzzle {
    /// Creates a puzzle definition from a square number layout.
    ///
    /// The layout is validated with the same rules as
    /// [`Grid::from_rows`](crate::Grid::from_rows). `has_unique_solution`
    /// starts out `false`; the engine never computes it (no uniqueness
    /// solver exists), so it stays informational.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Grid::from_rows`](crate::Grid::from_rows)
    /// for empty, ragged, or zero-valued layouts.
    pub fn new(
        id: impl Into<String>,
        difficulty: Difficulty,
        numbers: Vec<Vec<u32>>,
    ) -> Result<Self, GridError> {
        // Validation only; the grid itself is rebuilt on demand.
        let grid = Grid::from_rows(&numbers)?;
        Ok(Self {
            id: id.into(),
            size: grid.size(),
            numbers,
            difficulty,
            has_unique_solution: false,
        })
    }

    /// Returns the puzzle identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the side length of the puzzle.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the puzzle's difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the number layout, row by row.
    #[must_use]
    pub fn numbers(&self) -> &[Vec<u32>] {
        &self.numbers
    }

    /// Returns whether the puzzle is known to have a unique solution.
    ///
    /// Always `false` for generated puzzles; the generator does not run a
    /// uniqueness solver.
    #[must_use]
    pub const fn has_unique_solution(&self) -> bool {
        self.has_unique_solution
    }

    /// Instantiates a fresh play grid, every cell undecided.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        Grid::from_validated_rows(&self.numbers)
    }
}

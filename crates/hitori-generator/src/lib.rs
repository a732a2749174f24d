//! Procedural Hitori puzzle generation.
//!
//! The generator builds a valid puzzle and its reference solution from
//! scratch in three stages:
//!
//! 1. **Base layout** — a cyclic Latin square, so every row and column
//!    starts with each value exactly once.
//! 2. **Shading search** — cells are visited in random order and
//!    tentatively shaded; a candidate survives only if the shaded cells
//!    stay non-adjacent and the unshaded region stays connected, checked
//!    with the same rule primitives the game uses. The search stops at a
//!    difficulty-dependent target density.
//! 3. **Conflict injection** — every shaded cell's displayed value is
//!    overwritten with the value of a random unshaded cell from its row or
//!    column, manufacturing the duplicates that justify shading it.
//!
//! Generation is deterministic per [`GeneratorSeed`]: the same seed, size,
//! and difficulty always produce the same puzzle, which also makes parallel
//! pre-generation trivial — give every run its own seed and share nothing.
//!
//! # Examples
//!
//! ```
//! use hitori_core::{Difficulty, rules};
//! use hitori_generator::PuzzleGenerator;
//!
//! let generated = PuzzleGenerator::new().generate(7, Difficulty::Medium)?;
//! assert_eq!(generated.puzzle.size(), 7);
//! assert!(generated.solution.shaded_count() >= 1);
//!
//! // The reference solution satisfies every rule.
//! let solved = generated.solution.apply_to(&generated.puzzle.to_grid());
//! assert!(rules::check_all(&solved).ok());
//! # Ok::<(), hitori_generator::GeneratorError>(())
//! ```

pub use self::{
    generator::{GeneratedPuzzle, GeneratorError, PuzzleGenerator},
    seed::{GeneratorSeed, ParseSeedError},
    shading::Shading,
};

mod generator;
mod seed;
mod shading;

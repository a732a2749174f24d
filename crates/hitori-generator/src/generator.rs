use hitori_core::{Cell, CellState, Difficulty, Grid, Position, Puzzle, rules};
use log::debug;
use rand::{
    Rng,
    seq::{IndexedRandom as _, SliceRandom as _},
};
use sha2::{Digest as _, Sha256};

use crate::{GeneratorSeed, Shading};

/// Errors produced by puzzle generation.
///
/// These are caller errors: they are surfaced immediately and never retried
/// or recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The requested size lies outside the supported range.
    #[display("puzzle size {size} is not supported (expected 2..=32)")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
}

/// A puzzle produced by the generator, together with its reference solution.
///
/// The solution shading is generator output only; it is never part of the
/// public [`Puzzle`] definition handed to players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The public puzzle definition.
    pub puzzle: Puzzle,
    /// The shading the generator built the numbers around.
    pub solution: Shading,
    /// The seed that reproduces this puzzle.
    pub seed: GeneratorSeed,
}

/// Procedural Hitori puzzle generator.
///
/// Construction-based: the generator assembles a consistent puzzle directly
/// instead of searching and rejecting whole candidates, so it terminates in
/// one pass for every supported size and difficulty.
///
/// # Examples
///
/// ```
/// use hitori_core::Difficulty;
/// use hitori_generator::PuzzleGenerator;
///
/// let generated = PuzzleGenerator::new().generate(5, Difficulty::Easy)?;
/// assert_eq!(generated.puzzle.difficulty(), Difficulty::Easy);
/// # Ok::<(), hitori_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Smallest supported puzzle size.
    pub const MIN_SIZE: usize = 2;
    /// Largest supported puzzle size.
    pub const MAX_SIZE: usize = 32;

    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        PuzzleGenerator
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidSize`] when `size` lies outside
    /// [`MIN_SIZE`](Self::MIN_SIZE)..=[`MAX_SIZE`](Self::MAX_SIZE).
    pub fn generate(
        &self,
        size: usize,
        difficulty: Difficulty,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(size, difficulty, GeneratorSeed::random())
    }

    /// Generates a puzzle definition alone, from a fresh random seed.
    ///
    /// Convenience for callers that only hand the puzzle to a player and
    /// never need the reference solution.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidSize`] when `size` lies outside
    /// [`MIN_SIZE`](Self::MIN_SIZE)..=[`MAX_SIZE`](Self::MAX_SIZE).
    pub fn generate_puzzle(
        &self,
        size: usize,
        difficulty: Difficulty,
    ) -> Result<Puzzle, GeneratorError> {
        self.generate(size, difficulty)
            .map(|generated| generated.puzzle)
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// Deterministic: the same seed, size, and difficulty always yield the
    /// same puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidSize`] when `size` lies outside
    /// [`MIN_SIZE`](Self::MIN_SIZE)..=[`MAX_SIZE`](Self::MAX_SIZE).
    ///
    /// # Panics
    ///
    /// Panics if the constructed numbers contradict the constructed shading.
    /// That would be a bug in the construction itself, not an input problem,
    /// and must not be caught and ignored.
    pub fn generate_with_seed(
        &self,
        size: usize,
        difficulty: Difficulty,
        seed: GeneratorSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(GeneratorError::InvalidSize { size });
        }
        let mut rng = seed.rng();

        let base = Grid::from_rows(&latin_square(size))
            .expect("a cyclic Latin square is a well-formed layout");

        let target = target_count(size, difficulty);
        let marked = search_shading(base, target, &mut rng);
        let shading = Shading::from_grid(&marked);
        debug!(
            "shaded {} of {} cells (target {target}, difficulty {difficulty})",
            shading.shaded_count(),
            size * size,
        );

        let numbers = inject_conflicts(&marked, &mut rng);

        // Defensive re-validation of the finished construction. The search
        // and the injection rules guarantee this holds; a failure here is an
        // internal invariant violation.
        let solved = shading.apply_to(
            &Grid::from_rows(&numbers).expect("conflict injection keeps the layout well-formed"),
        );
        let report = rules::check_all(&solved);
        assert!(
            report.ok(),
            "generated numbers contradict the reference shading: {:?}",
            report.violations()
        );

        let id = puzzle_id(size, difficulty, seed);
        let puzzle = Puzzle::new(id, difficulty, numbers)
            .expect("conflict injection keeps the layout well-formed");
        Ok(GeneratedPuzzle {
            puzzle,
            solution: shading,
            seed,
        })
    }
}

/// Builds the cyclic Latin square `value(row, col) = ((row + col) mod n) + 1`.
///
/// Every row and column contains each value exactly once, which is the
/// uniqueness baseline the shading search starts from.
fn latin_square(size: usize) -> Vec<Vec<u32>> {
    let size_u32 = u32::try_from(size).expect("size is bounded by MAX_SIZE");
    (0..size_u32)
        .map(|row| (0..size_u32).map(|col| (row + col) % size_u32 + 1).collect())
        .collect()
}

fn shaded_ratio(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 0.20,
        Difficulty::Medium => 0.30,
        Difficulty::Hard => 0.40,
        Difficulty::Expert => 0.45,
    }
}

fn target_count(size: usize, difficulty: Difficulty) -> usize {
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let target = (shaded_ratio(difficulty) * (size * size) as f64).round() as usize;
    target.max(1)
}

/// Shades cells in random visit order, keeping only legal candidates.
///
/// A candidate is legal when shading it creates no adjacent shaded pair and
/// leaves the unshaded region connected — the same primitives the game's
/// rule checks use. The scan repeats from scratch if it somehow shades
/// nothing, so the result always has at least one shaded cell.
fn search_shading<R: Rng>(grid: Grid, target: usize, rng: &mut R) -> Grid {
    let mut order: Vec<Position> = grid.positions().collect();
    let mut grid = grid;
    loop {
        order.shuffle(rng);
        let mut shaded = 0;
        for &pos in &order {
            if shaded >= target {
                break;
            }
            let candidate = grid
                .with_cell_state(pos, CellState::Shaded)
                .expect("visit order only holds in-bounds positions");
            if rules::check_no_adjacent_shaded(&candidate).ok()
                && rules::check_connectivity(&candidate).ok()
            {
                grid = candidate;
                shaded += 1;
            }
        }
        if shaded > 0 {
            return grid;
        }
        debug!("shading pass produced no shaded cells, rescanning");
    }
}

/// Overwrites every shaded cell's value with that of a random unshaded cell
/// in its row or column.
///
/// This manufactures the duplicates that justify shading those cells in the
/// finished puzzle. A shaded cell with no unshaded row or column peer (a
/// degenerate case) keeps its Latin-square value.
fn inject_conflicts<R: Rng>(marked: &Grid, rng: &mut R) -> Vec<Vec<u32>> {
    let size = marked.size();
    let mut numbers: Vec<Vec<u32>> = (0..size)
        .map(|row| marked.row(row).map(Cell::value).collect())
        .collect();

    for cell in marked.cells() {
        if !cell.state().is_shaded() {
            continue;
        }
        let pos = cell.position();
        let candidates: Vec<u32> = marked
            .row(pos.row())
            .chain(marked.column(pos.col()))
            .filter(|peer| peer.state().is_unshaded())
            .map(Cell::value)
            .collect();
        if let Some(&value) = candidates.choose(rng) {
            numbers[pos.row()][pos.col()] = value;
        }
    }
    numbers
}

fn puzzle_id(size: usize, difficulty: Difficulty, seed: GeneratorSeed) -> String {
    let mut hasher = Sha256::new();
    hasher.update(size.to_le_bytes());
    hasher.update(difficulty.to_string().as_bytes());
    hasher.update(seed.as_bytes());
    let digest = hasher.finalize();
    let suffix: String = digest.iter().take(4).map(|byte| format!("{byte:02x}")).collect();
    format!("hitori-{size}x{size}-{difficulty}-{suffix}")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn seed() -> GeneratorSeed {
        GeneratorSeed::from_str(SEED).unwrap()
    }

    #[test]
    fn latin_square_has_unique_rows_and_columns() {
        let grid = Grid::from_rows(&latin_square(5)).unwrap();
        assert!(rules::check_row_column_uniqueness(&grid).ok());
        for cell in grid.cells() {
            assert!((1..=5).contains(&cell.value()));
        }
    }

    #[test]
    fn rejects_sizes_outside_the_supported_range() {
        let generator = PuzzleGenerator::new();
        for size in [0, 1, 33, 100] {
            assert_eq!(
                generator.generate(size, Difficulty::Easy),
                Err(GeneratorError::InvalidSize { size })
            );
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let generator = PuzzleGenerator::new();
        let a = generator
            .generate_with_seed(8, Difficulty::Hard, seed())
            .unwrap();
        let b = generator
            .generate_with_seed(8, Difficulty::Hard, seed())
            .unwrap();
        assert_eq!(a, b);

        let c = generator
            .generate_with_seed(8, Difficulty::Easy, seed())
            .unwrap();
        assert_ne!(a.puzzle.id(), c.puzzle.id());
    }

    #[test]
    fn id_names_size_and_difficulty() {
        let generated = PuzzleGenerator::new()
            .generate_with_seed(9, Difficulty::Expert, seed())
            .unwrap();
        let id = generated.puzzle.id();
        assert!(id.starts_with("hitori-9x9-expert-"), "unexpected id {id}");
        assert!(!generated.puzzle.has_unique_solution());
    }

    #[test]
    fn harder_difficulties_ask_for_more_shading() {
        assert!(target_count(9, Difficulty::Easy) < target_count(9, Difficulty::Medium));
        assert!(target_count(9, Difficulty::Medium) < target_count(9, Difficulty::Hard));
        assert!(target_count(9, Difficulty::Hard) <= target_count(9, Difficulty::Expert));
        // Even the smallest board targets at least one shaded cell.
        assert_eq!(target_count(2, Difficulty::Easy), 1);
    }

    #[test]
    fn solution_satisfies_every_rule() {
        let generated = PuzzleGenerator::new()
            .generate_with_seed(9, Difficulty::Medium, seed())
            .unwrap();
        let solved = generated.solution.apply_to(&generated.puzzle.to_grid());

        assert!(rules::check_row_column_uniqueness(&solved).ok());
        assert!(rules::check_no_adjacent_shaded(&solved).ok());
        assert!(rules::check_connectivity(&solved).ok());
        assert!(generated.solution.shaded_count() >= 1);
    }

    #[test]
    fn shaded_cells_conflict_with_their_row_or_column() {
        let generated = PuzzleGenerator::new()
            .generate_with_seed(7, Difficulty::Medium, seed())
            .unwrap();
        let grid = generated.puzzle.to_grid();

        // Every shaded cell with an unshaded peer shares its (injected)
        // value with some unshaded cell in its row or column.
        for pos in generated.solution.shaded_positions() {
            let value = grid.cell(pos).unwrap().value();
            let conflicts = grid
                .row(pos.row())
                .chain(grid.column(pos.col()))
                .filter(|peer| peer.position() != pos)
                .filter(|peer| !generated.solution.is_shaded(peer.position()))
                .any(|peer| peer.value() == value);
            assert!(conflicts, "shaded cell at {pos} justifies nothing");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn generated_puzzles_validate(
            size in 2_usize..12,
            difficulty_index in 0_usize..4,
            seed_bytes in any::<[u8; 32]>(),
        ) {
            let difficulty = Difficulty::ALL[difficulty_index];
            let generated = PuzzleGenerator::new()
                .generate_with_seed(size, difficulty, GeneratorSeed::from_bytes(seed_bytes))
                .unwrap();

            prop_assert_eq!(generated.puzzle.size(), size);
            prop_assert_eq!(generated.puzzle.numbers().len(), size);
            prop_assert!(generated.solution.shaded_count() >= 1);

            let max = u32::try_from(size).unwrap();
            for row in generated.puzzle.numbers() {
                prop_assert_eq!(row.len(), size);
                for &value in row {
                    prop_assert!((1..=max).contains(&value));
                }
            }

            let solved = generated.solution.apply_to(&generated.puzzle.to_grid());
            prop_assert!(rules::check_all(&solved).ok());
        }
    }
}

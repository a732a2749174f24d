//! Example demonstrating Hitori puzzle generation.
//!
//! This example shows how to:
//! - Generate a puzzle for a given size and difficulty
//! - Reproduce a puzzle from a hex seed
//! - Sample several puzzles in parallel and keep the densest shading
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate
//! ```
//!
//! Pick a size and difficulty:
//!
//! ```sh
//! cargo run --example generate -- --size 12 --difficulty hard
//! ```
//!
//! Reproduce a specific puzzle:
//!
//! ```sh
//! cargo run --example generate -- --seed <64-hex-chars>
//! ```
//!
//! Sample 50 puzzles and print the one with the most shaded cells:
//!
//! ```sh
//! cargo run --example generate -- --samples 50
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use hitori_core::Difficulty;
use hitori_generator::{GeneratedPuzzle, GeneratorSeed, PuzzleGenerator};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length (2-32).
    #[arg(long, value_name = "SIZE", default_value_t = 9)]
    size: usize,

    /// Puzzle difficulty.
    #[arg(long, value_enum, default_value = "medium")]
    difficulty: DifficultyArg,

    /// Hex seed for reproducible output. Overrides --samples.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Number of puzzles to sample; the densest shading is kept.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new();
    let difficulty = Difficulty::from(args.difficulty);

    if let Some(seed) = &args.seed {
        let seed: GeneratorSeed = match seed.parse() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        };
        match generator.generate_with_seed(args.size, difficulty, seed) {
            Ok(generated) => print_puzzle(&generated),
            Err(err) => {
                eprintln!("Generation failed: {err}");
                process::exit(1);
            }
        }
        return;
    }

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.samples)
        .into_par_iter()
        .map(|_| generator.generate(args.size, difficulty))
        .collect::<Result<Vec<_>, _>>()
        .map(|puzzles| {
            puzzles
                .into_iter()
                .max_by_key(|generated| generated.solution.shaded_count())
        });

    match best {
        Ok(Some(generated)) => print_puzzle(&generated),
        Ok(None) => unreachable!("samples is at least 1"),
        Err(err) => {
            eprintln!("Generation failed: {err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    println!("Id:");
    println!("  {}", generated.puzzle.id());
    println!();
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Numbers:");
    for row in generated.puzzle.numbers() {
        let line: Vec<String> = row.iter().map(|value| format!("{value:>2}")).collect();
        println!("  {}", line.join(" "));
    }
    println!();

    println!(
        "Solution ({} shaded):",
        generated.solution.shaded_count()
    );
    let grid = generated.puzzle.to_grid();
    let solved = generated.solution.apply_to(&grid);
    for line in solved.state_rows() {
        let line: String = line
            .chars()
            .map(|ch| if ch == 'x' { '#' } else { '.' })
            .collect();
        println!("  {line}");
    }
}

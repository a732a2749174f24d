//! Benchmarks for Hitori puzzle generation.
//!
//! Measures the complete generation pipeline — Latin square base, shading
//! search, conflict injection, and self-validation — at several sizes.
//!
//! Uses three fixed seeds so runs are reproducible while still covering
//! multiple shading searches per size.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::str::FromStr as _;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hitori_core::Difficulty;
use hitori_generator::{GeneratorSeed, PuzzleGenerator};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for size in [5_usize, 9, 15] {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = GeneratorSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generate_{size}x{size}_medium"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter(|| {
                        generator
                            .generate_with_seed(size, Difficulty::Medium, *seed)
                            .unwrap()
                    });
                },
            );
        }
    }
}

fn bench_generate_difficulties(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();
    let seed = GeneratorSeed::from_str(SEEDS[0]).unwrap();

    for difficulty in Difficulty::ALL {
        c.bench_with_input(
            BenchmarkId::new("generate_9x9", difficulty.to_string()),
            &seed,
            |b, seed| {
                b.iter(|| generator.generate_with_seed(9, difficulty, *seed).unwrap());
            },
        );
    }
}

criterion_group!(benches, bench_generate, bench_generate_difficulties);
criterion_main!(benches);

#![allow(missing_docs)]
//! Criterion benchmarks for the prefix comparison strategies.
//!
//! Each benchmark mutates a shared sample pair and then runs one strategy,
//! the same loop the built-in suite times, so Criterion's statistics can be
//! compared with the suite's ranking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prefix_bench::{SamplePair, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark every strategy against a randomly mutated pair.
fn benchmark_mutated_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutated_input");

    for strategy in Strategy::ALL {
        group.bench_function(BenchmarkId::from_parameter(strategy), |b| {
            let mut rng = StdRng::seed_from_u64(0x5eed);
            let mut pair = SamplePair::generate(&mut rng);

            b.iter(|| {
                pair.mutate(&mut rng);
                strategy.matches(black_box(pair.subject()), black_box(pair.prefix()))
            });
        });
    }

    group.finish();
}

/// Benchmark every strategy on fixed inputs, where nothing defeats caching.
fn benchmark_fixed_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_input");
    let subject = "The quick brown fox jumps over the lazy dog";
    let cases = [
        ("match", "The quick brown"),
        ("mismatch_last", "The quick browN"),
        ("too_long", "The quick brown fox jumps over the lazy dog!"),
    ];

    for (label, prefix) in cases {
        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), label),
                &prefix,
                |b, prefix| b.iter(|| strategy.matches(black_box(subject), black_box(prefix))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_mutated_input, benchmark_fixed_input);
criterion_main!(benches);

//! Benchmarks for the stable matching engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- full_run
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_match::{MatchingEngine, Registry, ShuffledPreferences};

// ============================================================================
// HELPER FUNCTIONS - Deterministic profiles
// ============================================================================

/// Registry with seeded random rankings on both sides
fn random_registry(n: usize, seed: u64) -> Registry {
    Registry::new(
        n,
        ShuffledPreferences::new(ChaCha8Rng::seed_from_u64(seed)),
        ShuffledPreferences::new(ChaCha8Rng::seed_from_u64(seed + 1)),
    )
    .expect("shuffled rankings are always valid")
}

/// Every proposer and every responder share the same ranking `0..n`.
///
/// Proposer k is rejected k times, the quadratic worst case for offers.
fn identical_registry(n: usize) -> Registry {
    let ranking: Vec<usize> = (0..n).collect();
    Registry::from_profile(vec![ranking.clone(); n], vec![ranking; n])
        .expect("identity rankings are valid")
}

// ============================================================================
// BENCHMARK: Full run on random profiles
// ============================================================================

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.measurement_time(Duration::from_secs(10));

    for size in [10, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("random", size), &size, |b, &size| {
            let registry = random_registry(size, 42);
            b.iter_batched(
                || MatchingEngine::with_registry(registry.clone()),
                |engine| black_box(engine.run()),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Worst case
// ============================================================================

fn bench_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("worst_case");
    group.sample_size(20);

    for size in [100, 500] {
        group.bench_with_input(BenchmarkId::new("identical", size), &size, |b, &size| {
            let registry = identical_registry(size);
            b.iter_batched(
                || MatchingEngine::with_registry(registry.clone()),
                |engine| black_box(engine.run()),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Construction
// ============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("registry_1k", |b| {
        b.iter(|| black_box(random_registry(1_000, 7)));
    });

    group.finish();
}

criterion_group!(benches, bench_full_run, bench_worst_case, bench_construction);
criterion_main!(benches);

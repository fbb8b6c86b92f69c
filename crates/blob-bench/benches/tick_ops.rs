//! Criterion benchmarks for full colony ticks.

use std::hint::black_box;

use blob_bench::{reference_profile, stress_profile};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_tick_10k(c: &mut Criterion) {
    let mut colony = reference_profile(42).unwrap();
    // Warm up: let the colony spread a little.
    for _ in 0..50 {
        colony.step();
    }

    c.bench_function("tick_10k", |b| {
        b.iter(|| {
            black_box(colony.step());
        });
    });
}

fn bench_tick_100k(c: &mut Criterion) {
    let mut colony = stress_profile(42).unwrap();
    for _ in 0..50 {
        colony.step();
    }

    c.bench_function("tick_100k", |b| {
        b.iter(|| {
            black_box(colony.step());
        });
    });
}

fn bench_100_ticks_10k(c: &mut Criterion) {
    c.bench_function("100_ticks_10k", |b| {
        b.iter(|| {
            let mut colony = reference_profile(42).unwrap();
            for _ in 0..100 {
                black_box(colony.step());
            }
        });
    });
}

criterion_group!(benches, bench_tick_10k, bench_tick_100k, bench_100_ticks_10k);
criterion_main!(benches);

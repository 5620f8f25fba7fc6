//! Performance benchmarks for sieve_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sieve_core::partition::{block_size, plan_blocks};
use sieve_core::{summarize, ParallelSieve, SieveConfig};

fn bench_marking_phase(c: &mut Criterion) {
    let mut group = c.benchmark_group("marking_phase");
    group.sample_size(10);
    for workers in [1, 2, 4, 8] {
        let config = SieveConfig::default()
            .with_limit(10_000_000)
            .with_workers(workers);
        let sieve = ParallelSieve::new(config).expect("sieve should build");
        group.bench_function(BenchmarkId::from_parameter(workers), |b| {
            b.iter(|| black_box(sieve.run().expect("sieve should run").1));
        });
    }
    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let sieve = ParallelSieve::new(SieveConfig::default().with_limit(10_000_000))
        .expect("sieve should build");
    let (store, _) = sieve.run().expect("sieve should run");

    c.bench_function("summarize_10m", |b| {
        b.iter(|| black_box(summarize(&store)));
    });
}

fn bench_partition_planning(c: &mut Criterion) {
    let limit = 100_000_000;
    let small = block_size(limit, 3, 8);
    c.bench_function("plan_blocks_small_prime", |b| {
        b.iter(|| black_box(plan_blocks(3, small, limit)));
    });

    let large = block_size(limit, 9_973, 8);
    c.bench_function("plan_blocks_large_prime", |b| {
        b.iter(|| black_box(plan_blocks(9_973, large, limit)));
    });
}

criterion_group!(
    benches,
    bench_marking_phase,
    bench_aggregation,
    bench_partition_planning
);
criterion_main!(benches);

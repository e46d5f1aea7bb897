//! Identifier-array kernel benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Elementwise throughput (10K to 10M elements, both widths)
//! - Relabeling of graph edge lists (few vs. many distinct ids)
//! - Mask-to-index extraction (sparse and dense masks)
//! - Construction and concatenation
//!
//! For serial execution, use `FASTIDARRAY_MODE=serial cargo bench`.
//! For parallel execution, use `FASTIDARRAY_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastIdArray::prelude::*;
use rand::prelude::*;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTIDARRAY_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

fn kernel(parallel: bool) -> Kernel {
    IdKernel::new().parallel(parallel).build().unwrap()
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate uniformly distributed ids in `[0, n_ids)`.
fn generate_ids(size: usize, n_ids: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..n_ids)).collect()
}

/// Generate a 0/1 mask with the given density of ones.
fn generate_mask(size: usize, density: f64, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| i32::from(rng.random_bool(density)))
        .collect()
}

/// Generate the source and destination arrays of a random edge list.
fn generate_edges(n_edges: usize, n_nodes: i64, seed: u64) -> (IdArray, IdArray) {
    let src = generate_ids(n_edges, n_nodes, seed);
    let dst = generate_ids(n_edges, n_nodes, seed + 1);
    (IdArray::from_vec(src), IdArray::from_vec(dst))
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_elementwise(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let k = kernel(use_parallel);
    let mut group = c.benchmark_group(format!("elementwise_{}", mode_name));
    group.sample_size(50);

    for size in [10_000, 100_000, 1_000_000, 10_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        let a = IdArray::from_vec(generate_ids(size, 1 << 30, 42));
        let b = IdArray::from_vec(generate_ids(size, 1 << 30, 43));

        group.bench_with_input(BenchmarkId::new("add_i64", size), &size, |bench, _| {
            bench.iter(|| k.binary(Add, black_box(&a), black_box(&b)).unwrap())
        });

        let a32 = k.as_num_bits(a.clone(), 32).unwrap();
        group.bench_with_input(BenchmarkId::new("lt_scalar_i32", size), &size, |bench, _| {
            bench.iter(|| k.binary_scalar(LT, black_box(&a32), 1_i32 << 29).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("as_num_bits", size), &size, |bench, _| {
            bench.iter(|| k.as_num_bits(black_box(a.clone()), 32).unwrap())
        });
    }

    group.finish();
}

fn bench_relabel(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let k = kernel(use_parallel);
    let mut group = c.benchmark_group(format!("relabel_{}", mode_name));
    group.sample_size(20);

    let n_edges = 1_000_000;
    group.throughput(Throughput::Elements(2 * n_edges as u64));
    for n_nodes in [1_000_i64, 100_000, 10_000_000] {
        let (src, dst) = generate_edges(n_edges, n_nodes, 7);
        group.bench_with_input(
            BenchmarkId::new("edge_list", n_nodes),
            &n_nodes,
            |bench, _| {
                bench.iter_batched(
                    || vec![src.clone(), dst.clone()],
                    |mut arrays| k.relabel(black_box(&mut arrays)).unwrap(),
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_nonzero(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let k = kernel(use_parallel);
    let mut group = c.benchmark_group(format!("nonzero_{}", mode_name));
    group.sample_size(50);

    let size = 5_000_000;
    group.throughput(Throughput::Elements(size as u64));
    for density in [0.001, 0.1, 0.5, 0.99] {
        let mask = IdArray::from_vec(generate_mask(size, density, 11));
        group.bench_with_input(
            BenchmarkId::new("mask", density),
            &density,
            |bench, _| bench.iter(|| k.nonzero(black_box(&mask)).unwrap()),
        );
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let k = kernel(use_parallel);
    let mut group = c.benchmark_group(format!("construction_{}", mode_name));
    group.sample_size(50);

    for size in [100_000_i64, 10_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("range", size), &size, |bench, &size| {
            bench.iter(|| k.range(0_i64, black_box(size)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("full", size), &size, |bench, &size| {
            bench.iter(|| k.full(-1_i64, black_box(size as usize)).unwrap())
        });

        let half = k.range(0_i64, size / 2).unwrap();
        group.bench_with_input(BenchmarkId::new("hstack", size), &size, |bench, _| {
            bench.iter(|| k.hstack(black_box(&half), black_box(&half)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_elementwise,
    bench_relabel,
    bench_nonzero,
    bench_construction,
);

criterion_main!(benches);

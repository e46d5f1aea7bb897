#![cfg(all(feature = "dev", feature = "cpu"))]
//! Consistency tests between parallel and sequential passes.
//!
//! These tests verify that every parallel pass produces exactly the output of
//! its sequential counterpart, on inputs large enough to be split into many
//! chunks:
//! - Elementwise passes for every operator
//! - Width conversion, fill, sequence and concatenation
//! - Two-phase relabel
//! - Count/scan/fill nonzero
//!
//! ## Test Organization
//!
//! 1. **Elementwise** - binary, scalar and unary passes
//! 2. **Construction and Structural** - cast, fill, iota, hstack
//! 3. **Relabel** - map and rewritten arrays
//! 4. **NonZero** - dense, sparse, empty and chunk-boundary masks
//! 5. **Kernel** - parallel kernel vs sequential kernel end to end

use proptest::prelude::*;

use fastIdArray::internals::api::ParallelKernelBuilder;
use fastIdArray::internals::engine::executor::{
    MIN_CHUNK_SIZE, binary_pass_parallel, cast_pass_parallel, chunk_size, fill_pass_parallel,
    hstack_pass_parallel, iota_pass_parallel, nonzero_pass_parallel, relabel_pass_parallel,
    scalar_pass_parallel, unary_pass_parallel,
};
use idarray::internals::algorithms::construction::{fill_pass, iota_pass};
use idarray::internals::algorithms::elementwise::{
    ScalarSide, binary_pass, scalar_pass, unary_pass,
};
use idarray::internals::algorithms::nonzero::nonzero_pass;
use idarray::internals::algorithms::relabel::relabel_pass;
use idarray::internals::algorithms::structural::{cast_pass, hstack_pass};
use idarray::internals::api::KernelBuilder;
use idarray::internals::math::arith::{BinaryOp, UnaryOp};
use idarray::internals::primitives::array::IdArray;

// ============================================================================
// Helper Functions
// ============================================================================

const N: usize = 50_000;

/// Deterministic pseudo-random values (64-bit LCG), reduced modulo `modulus`.
fn lcg_values(n: usize, seed: u64, modulus: i64) -> Vec<i64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as i64 % modulus) - modulus / 2
        })
        .collect()
}

fn lcg_i32(n: usize, seed: u64, modulus: i64) -> Vec<i32> {
    lcg_values(n, seed, modulus)
        .into_iter()
        .map(|v| v as i32)
        .collect()
}

// ============================================================================
// Elementwise Tests
// ============================================================================

/// Test every binary operator on i64 inputs.
#[test]
fn test_binary_pass_matches_sequential() {
    let a = lcg_values(N, 1, 1 << 40);
    // Non-zero divisors only
    let b: Vec<i64> = lcg_values(N, 2, 1000)
        .into_iter()
        .map(|v| if v == 0 { 7 } else { v })
        .collect();

    for op in BinaryOp::ALL {
        let mut seq = vec![0; N];
        let mut par = vec![0; N];
        binary_pass(&a, &b, op, &mut seq);
        binary_pass_parallel(&a, &b, op, &mut par);
        assert_eq!(seq, par, "{}", op.name());
    }
}

/// Test scalar passes on both sides, on i32 inputs.
#[test]
fn test_scalar_pass_matches_sequential() {
    let a = lcg_i32(N, 3, 1 << 20);
    for side in [ScalarSide::Left, ScalarSide::Right] {
        for op in [BinaryOp::Sub, BinaryOp::Mul, BinaryOp::LT, BinaryOp::NE] {
            let mut seq = vec![0; N];
            let mut par = vec![0; N];
            scalar_pass(&a, 17, side, op, &mut seq);
            scalar_pass_parallel(&a, 17, side, op, &mut par);
            assert_eq!(seq, par, "{} {:?}", op.name(), side);
        }
    }
}

/// Test the unary pass.
#[test]
fn test_unary_pass_matches_sequential() {
    let mut a = lcg_i32(N, 4, 1 << 30);
    a[0] = i32::MIN;
    let mut seq = vec![0; N];
    let mut par = vec![0; N];
    unary_pass(&a, UnaryOp::Neg, &mut seq);
    unary_pass_parallel(&a, UnaryOp::Neg, &mut par);
    assert_eq!(seq, par);
}

// ============================================================================
// Construction and Structural Tests
// ============================================================================

/// Test width conversion in both directions.
#[test]
fn test_cast_pass_matches_sequential() {
    let wide = lcg_values(N, 5, i64::MAX);
    let mut seq = vec![0_i32; N];
    let mut par = vec![0_i32; N];
    cast_pass(&wide, &mut seq);
    cast_pass_parallel(&wide, &mut par);
    assert_eq!(seq, par);

    let mut seq = vec![0_i64; N];
    let mut par = vec![0_i64; N];
    cast_pass(&par_source(), &mut seq);
    cast_pass_parallel(&par_source(), &mut par);
    assert_eq!(seq, par);
}

fn par_source() -> Vec<i32> {
    lcg_i32(N, 6, 1 << 31)
}

/// Test fill and sequence passes.
#[test]
fn test_fill_and_iota_match_sequential() {
    let mut seq = vec![0_i64; N];
    let mut par = vec![0_i64; N];
    fill_pass(-3, &mut seq);
    fill_pass_parallel(-3, &mut par);
    assert_eq!(seq, par);

    iota_pass(-1000, &mut seq);
    iota_pass_parallel(-1000, &mut par);
    assert_eq!(seq, par);
    assert_eq!(par[N - 1], -1000 + (N as i64 - 1));
}

/// Test concatenation with unequal halves.
#[test]
fn test_hstack_pass_matches_sequential() {
    let first = lcg_i32(N, 7, 1000);
    let second = lcg_i32(N / 3, 8, 1000);
    let len = first.len() + second.len();
    let mut seq = vec![0; len];
    let mut par = vec![0; len];
    hstack_pass(&first, &second, &mut seq);
    hstack_pass_parallel(&first, &second, &mut par);
    assert_eq!(seq, par);
}

// ============================================================================
// Relabel Tests
// ============================================================================

/// Test that the two-phase relabel matches the single-pass one.
#[test]
fn test_relabel_pass_matches_sequential() {
    let originals = vec![
        lcg_values(N, 9, 5000),
        lcg_values(10, 10, 5000),
        Vec::new(),
        lcg_values(N / 2, 11, 100_000),
    ];

    let mut seq = originals.clone();
    let mut seq_views: Vec<&mut [i64]> = seq.iter_mut().map(|v| v.as_mut_slice()).collect();
    let seq_map = relabel_pass(&mut seq_views);

    let mut par = originals.clone();
    let mut par_views: Vec<&mut [i64]> = par.iter_mut().map(|v| v.as_mut_slice()).collect();
    let par_map = relabel_pass_parallel(&mut par_views);

    assert_eq!(seq_map, par_map);
    assert_eq!(seq, par);
}

// ============================================================================
// NonZero Tests
// ============================================================================

/// Test masks of varying density.
#[test]
fn test_nonzero_pass_matches_sequential() {
    for modulus in [2_i64, 3, 50] {
        let mask = lcg_values(N, 12, modulus);
        assert_eq!(nonzero_pass(&mask), nonzero_pass_parallel(&mask));
    }
}

/// Test all-zero, all-one and empty masks.
#[test]
fn test_nonzero_pass_degenerate_masks() {
    assert!(nonzero_pass_parallel(&vec![0_i32; N]).is_empty());
    assert!(nonzero_pass_parallel::<i64>(&[]).is_empty());

    let ones = nonzero_pass_parallel(&vec![1_i32; N]);
    assert_eq!(ones.len(), N);
    assert!(ones.iter().enumerate().all(|(i, &v)| v == i as i32));
}

/// Test hits placed exactly on chunk boundaries.
#[test]
fn test_nonzero_pass_chunk_boundaries() {
    let chunk = chunk_size(N);
    assert!(chunk >= MIN_CHUNK_SIZE);
    let mut mask = vec![0_i64; N];
    let mut expected = Vec::new();
    let mut i = 0;
    while i < N {
        mask[i] = 1;
        expected.push(i as i64);
        if i + chunk - 1 < N {
            mask[i + chunk - 1] = 1;
            expected.push((i + chunk - 1) as i64);
        }
        i += chunk;
    }
    assert_eq!(nonzero_pass_parallel(&mask), expected);
}

// ============================================================================
// Kernel Tests
// ============================================================================

/// Test that the parallel kernel reports its configuration.
#[test]
fn test_parallel_kernel_configuration() {
    let kernel = ParallelKernelBuilder::new().build().unwrap();
    assert!(kernel.is_parallel());
    assert_eq!(kernel.parallel_threshold(), 4096);

    let sequential = ParallelKernelBuilder::new().parallel(false).build().unwrap();
    assert!(!sequential.is_parallel());
}

/// Test end-to-end agreement between the two kernels.
#[test]
fn test_parallel_kernel_matches_sequential_kernel() {
    let par = ParallelKernelBuilder::new()
        .parallel_threshold(1)
        .build()
        .unwrap();
    let seq = KernelBuilder::new().build().unwrap();

    let a = IdArray::from_vec(lcg_values(N, 13, 1 << 16));
    let b = IdArray::from_vec(lcg_values(N, 14, 1 << 16));

    assert_eq!(
        par.binary(BinaryOp::Mul, &a, &b).unwrap(),
        seq.binary(BinaryOp::Mul, &a, &b).unwrap()
    );
    assert_eq!(
        par.as_num_bits(a.clone(), 32).unwrap(),
        seq.as_num_bits(a.clone(), 32).unwrap()
    );
    assert_eq!(par.hstack(&a, &b).unwrap(), seq.hstack(&a, &b).unwrap());
    assert_eq!(
        par.range(-5_i32, 70_000_i32).unwrap(),
        seq.range(-5_i32, 70_000_i32).unwrap()
    );

    let mask = par.binary_scalar(BinaryOp::GT, &a, 0_i64).unwrap();
    assert_eq!(par.nonzero(&mask).unwrap(), seq.nonzero(&mask).unwrap());

    let mut par_arrays = vec![a.clone(), b.clone()];
    let mut seq_arrays = vec![a, b];
    assert_eq!(
        par.relabel(&mut par_arrays).unwrap(),
        seq.relabel(&mut seq_arrays).unwrap()
    );
    assert_eq!(par_arrays, seq_arrays);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn parallel_nonzero_matches(v in prop::collection::vec(-1_i32..2, 0..5000)) {
        prop_assert_eq!(nonzero_pass_parallel(&v), nonzero_pass(&v));
    }

    #[test]
    fn parallel_relabel_matches(
        batch in prop::collection::vec(prop::collection::vec(0_i64..300, 0..3000), 1..4)
    ) {
        let mut seq = batch.clone();
        let mut views: Vec<&mut [i64]> = seq.iter_mut().map(|v| v.as_mut_slice()).collect();
        let seq_map = relabel_pass(&mut views);

        let mut par = batch;
        let mut views: Vec<&mut [i64]> = par.iter_mut().map(|v| v.as_mut_slice()).collect();
        let par_map = relabel_pass_parallel(&mut views);

        prop_assert_eq!(seq_map, par_map);
        prop_assert_eq!(seq, par);
    }
}

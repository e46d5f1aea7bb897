//! Parallel execution passes for identifier-array kernels.
//!
//! ## Purpose
//!
//! This module provides the rayon-based passes that are injected into the
//! `idarray` crate's execution engine. Each one is a drop-in replacement for
//! the sequential pass of the same name and produces bit-identical output.
//!
//! ## Design notes
//!
//! * **Chunked fork-join**: Elementwise, cast, fill, sequence and
//!   concatenation passes split the output into chunks and run the sequential
//!   pass on each chunk; rayon joins every task before the pass returns.
//! * **Two-phase relabel**: The id map is built by one sequential scan (the
//!   assignment order depends on every earlier id), then frozen and shared by
//!   a parallel rewrite of every array.
//! * **Count, scan, fill**: `nonzero` counts hits per chunk in parallel, carves
//!   the output at the prefix sums of those counts, and fills every segment in
//!   parallel.
//! * **Generics**: Every pass is generic over `T: IdType` (`i32` or `i64`).
//!
//! ## Key concepts
//!
//! * **Chunk Size**: Inputs are split into roughly one chunk per worker
//!   thread, never smaller than [`MIN_CHUNK_SIZE`].
//! * **Integration**: [`parallel_passes`] builds the `PassTable` installed by
//!   `ParallelKernelBuilder::build`.
//!
//! ## Invariants
//!
//! * Output buffers are allocated by the caller with the exact output length.
//! * `nonzero` output is strictly increasing regardless of thread count.
//!
//! ## Non-goals
//!
//! * This module does not validate operands (handled by `idarray::validator`).
//! * This module does not decide when to run in parallel (handled by the
//!   `idarray` executor's threshold).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
#[cfg(feature = "cpu")]
use num_traits::Zero;

// Export dependencies from idarray crate
use idarray::internals::algorithms::construction::{fill_pass, iota_pass};
use idarray::internals::algorithms::elementwise::{
    ScalarSide, binary_pass, scalar_pass, unary_pass,
};
use idarray::internals::algorithms::nonzero::{count_nonzero, fill_nonzero};
use idarray::internals::algorithms::relabel::{build_map, rewrite_pass};
use idarray::internals::algorithms::structural::cast_pass;
use idarray::internals::engine::executor::PassTable;
use idarray::internals::math::arith::{BinaryOp, UnaryOp};
use idarray::internals::primitives::width::IdType;

/// Smallest chunk handed to a single rayon task.
pub const MIN_CHUNK_SIZE: usize = 1024;

/// Chunk length for splitting `n` elements across the rayon pool.
#[cfg(feature = "cpu")]
#[inline]
pub fn chunk_size(n: usize) -> usize {
    let per_thread = n.div_ceil(rayon::current_num_threads().max(1));
    per_thread.max(MIN_CHUNK_SIZE)
}

// ============================================================================
// Elementwise Passes
// ============================================================================

/// Parallel array-array pass.
#[cfg(feature = "cpu")]
pub fn binary_pass_parallel<T: IdType>(lhs: &[T], rhs: &[T], op: BinaryOp, out: &mut [T]) {
    let chunk = chunk_size(out.len());
    out.par_chunks_mut(chunk)
        .zip(lhs.par_chunks(chunk))
        .zip(rhs.par_chunks(chunk))
        .for_each(|((o, a), b)| binary_pass(a, b, op, o));
}

/// Parallel array-scalar pass.
#[cfg(feature = "cpu")]
pub fn scalar_pass_parallel<T: IdType>(
    arr: &[T],
    scalar: T,
    side: ScalarSide,
    op: BinaryOp,
    out: &mut [T],
) {
    let chunk = chunk_size(out.len());
    out.par_chunks_mut(chunk)
        .zip(arr.par_chunks(chunk))
        .for_each(|(o, a)| scalar_pass(a, scalar, side, op, o));
}

/// Parallel unary pass.
#[cfg(feature = "cpu")]
pub fn unary_pass_parallel<T: IdType>(arr: &[T], op: UnaryOp, out: &mut [T]) {
    let chunk = chunk_size(out.len());
    out.par_chunks_mut(chunk)
        .zip(arr.par_chunks(chunk))
        .for_each(|(o, a)| unary_pass(a, op, o));
}

// ============================================================================
// Construction and Structural Passes
// ============================================================================

/// Parallel width conversion.
#[cfg(feature = "cpu")]
pub fn cast_pass_parallel<T: IdType>(src: &[T], out: &mut [T::Other]) {
    let chunk = chunk_size(out.len());
    out.par_chunks_mut(chunk)
        .zip(src.par_chunks(chunk))
        .for_each(|(o, s)| cast_pass(s, o));
}

/// Parallel constant fill.
#[cfg(feature = "cpu")]
pub fn fill_pass_parallel<T: IdType>(value: T, out: &mut [T]) {
    let chunk = chunk_size(out.len());
    out.par_chunks_mut(chunk)
        .for_each(|o| fill_pass(value, o));
}

/// Parallel arithmetic sequence; each chunk starts at `low + chunk_index * chunk`.
#[cfg(feature = "cpu")]
pub fn iota_pass_parallel<T: IdType>(low: T, out: &mut [T]) {
    let chunk = chunk_size(out.len());
    out.par_chunks_mut(chunk)
        .enumerate()
        .for_each(|(ci, o)| iota_pass(low.wrapping_add(&T::from_index(ci * chunk)), o));
}

/// Parallel concatenation; both halves are copied concurrently.
#[cfg(feature = "cpu")]
pub fn hstack_pass_parallel<T: IdType>(first: &[T], second: &[T], out: &mut [T]) {
    let chunk = chunk_size(out.len());
    let (head, tail) = out.split_at_mut(first.len());
    rayon::join(
        || {
            head.par_chunks_mut(chunk)
                .zip(first.par_chunks(chunk))
                .for_each(|(o, s)| o.copy_from_slice(s))
        },
        || {
            tail.par_chunks_mut(chunk)
                .zip(second.par_chunks(chunk))
                .for_each(|(o, s)| o.copy_from_slice(s))
        },
    );
}

// ============================================================================
// Relabel and NonZero Passes
// ============================================================================

/// Two-phase relabel: sequential map construction, then a parallel rewrite.
#[cfg(feature = "cpu")]
pub fn relabel_pass_parallel<T: IdType>(arrays: &mut [&mut [T]]) -> Vec<T> {
    // Phase 1: first-occurrence order is inherently sequential
    let map = build_map(arrays);

    // Phase 2: the map is read-only from here on
    let total: usize = arrays.iter().map(|a| a.len()).sum();
    let chunk = chunk_size(total);
    arrays.par_iter_mut().for_each(|arr| {
        arr.par_chunks_mut(chunk)
            .for_each(|part| rewrite_pass(part, &map));
    });

    map.into_order()
}

/// Count-then-fill index extraction.
#[cfg(feature = "cpu")]
pub fn nonzero_pass_parallel<T: IdType>(mask: &[T]) -> Vec<T> {
    let chunk = chunk_size(mask.len());

    // Phase 1: per-chunk hit counts
    let counts: Vec<usize> = mask.par_chunks(chunk).map(count_nonzero::<T>).collect();
    let total: usize = counts.iter().sum();

    // Phase 2: carve the output at the prefix sums of the counts
    let mut out = vec![<T as Zero>::zero(); total];
    let mut segments: Vec<&mut [T]> = Vec::with_capacity(counts.len());
    let mut rest = out.as_mut_slice();
    for &count in &counts {
        let (segment, tail) = std::mem::take(&mut rest).split_at_mut(count);
        segments.push(segment);
        rest = tail;
    }

    // Phase 3: every chunk fills its own segment
    mask.par_chunks(chunk)
        .zip(segments.into_par_iter())
        .enumerate()
        .for_each(|(ci, (part, segment))| fill_nonzero(part, ci * chunk, segment));

    out
}

// ============================================================================
// Pass Table
// ============================================================================

/// The parallel pass table for one element type.
#[cfg(feature = "cpu")]
pub fn parallel_passes<T: IdType>() -> PassTable<T> {
    PassTable {
        binary: binary_pass_parallel::<T>,
        scalar: scalar_pass_parallel::<T>,
        unary: unary_pass_parallel::<T>,
        cast: cast_pass_parallel::<T>,
        fill: fill_pass_parallel::<T>,
        iota: iota_pass_parallel::<T>,
        hstack: hstack_pass_parallel::<T>,
        relabel: relabel_pass_parallel::<T>,
        nonzero: nonzero_pass_parallel::<T>,
    }
}

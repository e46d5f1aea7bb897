//! Mask-to-index extraction.
//!
//! ## Purpose
//!
//! This module returns the ascending positions of the non-zero elements of a
//! mask array.
//!
//! ## Design notes
//!
//! * **Count then fill**: The output is sized exactly by a counting scan and
//!   then filled by a second scan. A parallel driver runs the same two
//!   functions per chunk, carving the output at the prefix sums of the counts.
//!
//! ## Invariants
//!
//! * Output indices are strictly increasing.
//! * Output length equals the number of non-zero mask elements.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::width::IdType;

/// Number of non-zero elements in `mask`.
#[inline]
pub fn count_nonzero<T: IdType>(mask: &[T]) -> usize {
    mask.iter().filter(|v| !v.is_zero()).count()
}

/// Write `base + i` for each non-zero `mask[i]` into `out`, in order.
///
/// `out` must hold exactly `count_nonzero(mask)` slots.
#[inline]
pub fn fill_nonzero<T: IdType>(mask: &[T], base: usize, out: &mut [T]) {
    let mut slots = out.iter_mut();
    for (i, v) in mask.iter().enumerate() {
        if !v.is_zero() {
            if let Some(slot) = slots.next() {
                *slot = T::from_index(base + i);
            }
        }
    }
}

/// Ascending indices of the non-zero elements of `mask`.
pub fn nonzero_pass<T: IdType>(mask: &[T]) -> Vec<T> {
    let mut out = vec![T::zero(); count_nonzero(mask)];
    fill_nonzero(mask, 0, &mut out);
    out
}

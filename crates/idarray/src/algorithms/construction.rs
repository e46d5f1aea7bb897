//! Constant-fill and arithmetic-sequence construction.
//!
//! ## Purpose
//!
//! This module fills freshly allocated buffers for `full` (every element the
//! same value) and `range` (the half-open sequence `low, low + 1, ...`).
//!
//! ## Invariants
//!
//! * `iota_pass(low, out)` writes `out[i] = low + i`.
//! * A range is valid iff `high >= low`; `low == high` is an empty range.

// Internal dependencies
use crate::primitives::errors::IdArrayError;
use crate::primitives::width::IdType;

/// Write `value` into every slot of `out`.
#[inline]
pub fn fill_pass<T: IdType>(value: T, out: &mut [T]) {
    out.fill(value);
}

/// Write `low, low + 1, ...` into `out`.
#[inline]
pub fn iota_pass<T: IdType>(low: T, out: &mut [T]) {
    let mut next = low;
    for o in out.iter_mut() {
        *o = next;
        next = next.wrapping_add(&T::one());
    }
}

/// Number of elements in `[low, high)`.
pub fn range_len<T: IdType>(low: T, high: T) -> Result<usize, IdArrayError> {
    if high < low {
        return Err(IdArrayError::InvalidRange {
            low: low.widen(),
            high: high.widen(),
        });
    }
    // Difference of two i64 values can exceed i64::MAX but always fits i128.
    let len = high.widen() as i128 - low.widen() as i128;
    usize::try_from(len).map_err(|_| IdArrayError::InvalidRange {
        low: low.widen(),
        high: high.widen(),
    })
}

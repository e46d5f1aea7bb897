//! Concatenation and width conversion.
//!
//! ## Purpose
//!
//! This module implements `hstack` (ordered concatenation of two arrays of
//! the same width) and the element conversion behind `as_num_bits`.
//!
//! ## Design notes
//!
//! * **Widening** sign-extends and preserves every value.
//! * **Narrowing** truncates to the low 32 bits, exactly as an `as` cast does.
//!
//! ## Invariants
//!
//! * `hstack_pass` writes `first` to `out[..first.len()]` and `second` after it.
//!
//! ## Non-goals
//!
//! * Saturating or checked narrowing.

// Internal dependencies
use crate::primitives::width::IdType;

/// Copy `first` then `second` into `out`.
#[inline]
pub fn hstack_pass<T: IdType>(first: &[T], second: &[T], out: &mut [T]) {
    let (head, tail) = out.split_at_mut(first.len());
    head.copy_from_slice(first);
    tail.copy_from_slice(second);
}

/// Convert every element of `src` to the other width.
#[inline]
pub fn cast_pass<T: IdType>(src: &[T], out: &mut [T::Other]) {
    for (o, &v) in out.iter_mut().zip(src) {
        *o = v.cast_other();
    }
}

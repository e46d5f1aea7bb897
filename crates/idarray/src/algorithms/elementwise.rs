//! Sequential elementwise passes.
//!
//! ## Purpose
//!
//! This module computes `out[i] = op(lhs[i], rhs[i])` and its scalar and
//! unary variants over caller-provided output slices. These are the
//! reference passes; extension crates replace them with parallel ones that
//! must produce identical output.
//!
//! ## Design notes
//!
//! * **Caller allocates**: Passes write into `out` and never allocate, so a
//!   parallel driver can hand each worker a disjoint sub-slice.
//! * **Operator resolved once**: The operator is turned into a `fn` before the loop.
//!
//! ## Invariants
//!
//! * `out.len()` equals the input length (checked by the engine, not here).
//! * Output element `i` depends only on input element(s) `i`.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths or widths.

// Internal dependencies
use crate::math::arith::{BinaryOp, UnaryOp};
use crate::primitives::width::IdType;

/// Which side of a binary operator the scalar operand sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarSide {
    /// `op(scalar, array[i])`.
    Left,

    /// `op(array[i], scalar)`.
    Right,
}

/// Array-array pass: `out[i] = op(lhs[i], rhs[i])`.
#[inline]
pub fn binary_pass<T: IdType>(lhs: &[T], rhs: &[T], op: BinaryOp, out: &mut [T]) {
    let f = op.kernel::<T>();
    for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = f(a, b);
    }
}

/// Array-scalar pass, with the scalar on the given side.
#[inline]
pub fn scalar_pass<T: IdType>(arr: &[T], scalar: T, side: ScalarSide, op: BinaryOp, out: &mut [T]) {
    let f = op.kernel::<T>();
    match side {
        ScalarSide::Right => {
            for (o, &a) in out.iter_mut().zip(arr) {
                *o = f(a, scalar);
            }
        }
        ScalarSide::Left => {
            for (o, &b) in out.iter_mut().zip(arr) {
                *o = f(scalar, b);
            }
        }
    }
}

/// Unary pass: `out[i] = op(arr[i])`.
#[inline]
pub fn unary_pass<T: IdType>(arr: &[T], op: UnaryOp, out: &mut [T]) {
    let f = op.kernel::<T>();
    for (o, &a) in out.iter_mut().zip(arr) {
        *o = f(a);
    }
}

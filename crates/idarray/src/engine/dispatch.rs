//! Width dispatch from array handles to typed passes.
//!
//! ## Purpose
//!
//! This module is the routing layer between width-tagged [`IdArray`] handles
//! and the generic executor. Each function validates its operands, matches
//! the runtime width tag to the `i32` or `i64` instantiation, and wraps the
//! typed result back into a handle.
//!
//! ## Design notes
//!
//! * **Closed switch**: Every match covers exactly the two buffer variants; a
//!   width tag that is neither 32 nor 64 bits is rejected by `Width::from_bits`
//!   before any dispatch happens. Nothing defaults silently to either width.
//! * **Stateless**: All state lives in the executor's configuration.
//!
//! ## Invariants
//!
//! * Results carry the width of their operands (or the requested width).
//! * Results of operations on an array carry that array's context.
//!
//! ## Non-goals
//!
//! * This module does not implement any pass itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::algorithms::construction::range_len;
use crate::algorithms::elementwise::ScalarSide;
use crate::engine::executor::{KernelExecutor, PassSelect};
use crate::engine::validator::Validator;
use crate::math::arith::{BinaryOp, UnaryOp};
use crate::primitives::array::{IdArray, IdBuffer};
use crate::primitives::context::DeviceContext;
use crate::primitives::errors::IdArrayError;
use crate::primitives::width::{Scalar, Width};

// ============================================================================
// Width Conversion
// ============================================================================

/// Convert `arr` to `bits`-wide storage, returning it unchanged if it already is.
pub fn as_num_bits(
    exec: &KernelExecutor,
    arr: IdArray,
    bits: u8,
) -> Result<IdArray, IdArrayError> {
    let target = Width::from_bits(bits)?;
    Validator::validate_context(&arr)?;
    if arr.width() == target {
        return Ok(arr);
    }

    let ctx = arr.context();
    let shape = arr.shape().to_vec();
    let data = match arr.buffer() {
        IdBuffer::I32(values) => IdBuffer::I64(exec.cast(values)),
        IdBuffer::I64(values) => IdBuffer::I32(exec.cast(values)),
    };
    IdArray::from_buffer(data, ctx).reshape(&shape)
}

// ============================================================================
// Elementwise
// ============================================================================

/// Array-array elementwise operation.
pub fn binary(
    exec: &KernelExecutor,
    op: BinaryOp,
    lhs: &IdArray,
    rhs: &IdArray,
) -> Result<IdArray, IdArrayError> {
    Validator::validate_binary(lhs, rhs)?;
    let data = match (lhs.buffer(), rhs.buffer()) {
        (IdBuffer::I32(a), IdBuffer::I32(b)) => IdBuffer::I32(exec.binary(a, b, op)),
        (IdBuffer::I64(a), IdBuffer::I64(b)) => IdBuffer::I64(exec.binary(a, b, op)),
        _ => {
            return Err(IdArrayError::WidthMismatch {
                expected: lhs.width(),
                got: rhs.width(),
            });
        }
    };
    like(data, lhs)
}

/// Array-scalar elementwise operation with the scalar on `side`.
pub fn scalar(
    exec: &KernelExecutor,
    op: BinaryOp,
    arr: &IdArray,
    value: Scalar,
    side: ScalarSide,
) -> Result<IdArray, IdArrayError> {
    Validator::validate_context(arr)?;
    Validator::validate_width(arr.width(), value.width())?;
    let data = match (arr.buffer(), value) {
        (IdBuffer::I32(a), Scalar::I32(s)) => IdBuffer::I32(exec.scalar(a, s, side, op)),
        (IdBuffer::I64(a), Scalar::I64(s)) => IdBuffer::I64(exec.scalar(a, s, side, op)),
        _ => {
            return Err(IdArrayError::WidthMismatch {
                expected: arr.width(),
                got: value.width(),
            });
        }
    };
    like(data, arr)
}

/// Unary elementwise operation.
pub fn unary(exec: &KernelExecutor, op: UnaryOp, arr: &IdArray) -> Result<IdArray, IdArrayError> {
    Validator::validate_context(arr)?;
    let data = match arr.buffer() {
        IdBuffer::I32(a) => IdBuffer::I32(exec.unary(a, op)),
        IdBuffer::I64(a) => IdBuffer::I64(exec.unary(a, op)),
    };
    like(data, arr)
}

/// Wrap elementwise output with the shape and context of its input.
fn like(data: IdBuffer, arr: &IdArray) -> Result<IdArray, IdArrayError> {
    IdArray::from_buffer(data, arr.context()).reshape(arr.shape())
}

// ============================================================================
// Structural
// ============================================================================

/// `first` followed by `second`; both must share a width.
pub fn hstack(
    exec: &KernelExecutor,
    first: &IdArray,
    second: &IdArray,
) -> Result<IdArray, IdArrayError> {
    Validator::validate_context(first)?;
    Validator::validate_context(second)?;
    let data = match (first.buffer(), second.buffer()) {
        (IdBuffer::I32(a), IdBuffer::I32(b)) => IdBuffer::I32(exec.hstack(a, b)),
        (IdBuffer::I64(a), IdBuffer::I64(b)) => IdBuffer::I64(exec.hstack(a, b)),
        _ => {
            return Err(IdArrayError::WidthMismatch {
                expected: first.width(),
                got: second.width(),
            });
        }
    };
    Ok(IdArray::from_buffer(data, first.context()))
}

// ============================================================================
// Construction
// ============================================================================

/// `length` copies of `value`, in the width of `value`.
pub fn full(
    exec: &KernelExecutor,
    value: Scalar,
    length: usize,
    ctx: DeviceContext,
) -> Result<IdArray, IdArrayError> {
    ctx.ensure_cpu()?;
    let data = match value {
        Scalar::I32(v) => IdBuffer::I32(exec.fill(v, length)),
        Scalar::I64(v) => IdBuffer::I64(exec.fill(v, length)),
    };
    Ok(IdArray::from_buffer(data, ctx))
}

/// The half-open sequence `[low, high)`; bounds must share a width.
pub fn range(
    exec: &KernelExecutor,
    low: Scalar,
    high: Scalar,
    ctx: DeviceContext,
) -> Result<IdArray, IdArrayError> {
    ctx.ensure_cpu()?;
    let data = match (low, high) {
        (Scalar::I32(lo), Scalar::I32(hi)) => IdBuffer::I32(typed_range(exec, lo, hi)?),
        (Scalar::I64(lo), Scalar::I64(hi)) => IdBuffer::I64(typed_range(exec, lo, hi)?),
        _ => {
            return Err(IdArrayError::WidthMismatch {
                expected: low.width(),
                got: high.width(),
            });
        }
    };
    Ok(IdArray::from_buffer(data, ctx))
}

fn typed_range<T: PassSelect>(exec: &KernelExecutor, low: T, high: T) -> Result<Vec<T>, IdArrayError> {
    let len = range_len(low, high)?;
    Ok(exec.iota(low, len))
}

// ============================================================================
// Relabel and NonZero
// ============================================================================

/// Relabel `arrays` in place; returns the compaction map on the host.
pub fn relabel(exec: &KernelExecutor, arrays: &mut [IdArray]) -> Result<IdArray, IdArrayError> {
    let width = Validator::validate_batch(arrays)?;
    let data = match width {
        Width::W32 => IdBuffer::I32(typed_relabel::<i32>(exec, arrays)?),
        Width::W64 => IdBuffer::I64(typed_relabel::<i64>(exec, arrays)?),
    };
    Ok(IdArray::from_buffer(data, DeviceContext::cpu()))
}

fn typed_relabel<T: PassSelect>(
    exec: &KernelExecutor,
    arrays: &mut [IdArray],
) -> Result<Vec<T>, IdArrayError> {
    let mut views = Vec::with_capacity(arrays.len());
    for arr in arrays.iter_mut() {
        let got = arr.width();
        let view = arr.as_mut_slice::<T>().ok_or(IdArrayError::WidthMismatch {
            expected: T::WIDTH,
            got,
        })?;
        views.push(view);
    }
    Ok(exec.relabel(&mut views))
}

/// Ascending indices of the non-zero elements of a 1-D mask, in `bits` width.
pub fn nonzero(exec: &KernelExecutor, mask: &IdArray, bits: u8) -> Result<IdArray, IdArrayError> {
    let target = Width::from_bits(bits)?;
    Validator::validate_context(mask)?;
    Validator::validate_one_dimensional(mask)?;
    let indices = match mask.buffer() {
        IdBuffer::I32(m) => IdBuffer::I32(exec.nonzero(m)),
        IdBuffer::I64(m) => IdBuffer::I64(exec.nonzero(m)),
    };
    let indices = IdArray::from_buffer(indices, mask.context());
    if indices.width() == target {
        return Ok(indices);
    }
    as_num_bits(exec, indices, target.bits())
}

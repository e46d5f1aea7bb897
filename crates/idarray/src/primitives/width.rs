//! Element width tags and the width-polymorphic element trait.
//!
//! ## Purpose
//!
//! This module defines the two storage widths an identifier array can have
//! and the sealed [`IdType`] trait that every algorithm is written against.
//! Each operation is implemented once over `T: IdType` and instantiated for
//! exactly `i32` and `i64`.
//!
//! ## Design notes
//!
//! * **Closed set**: `IdType` is sealed; no third width can be plugged in.
//! * **Runtime tag**: [`Width`] is the runtime mirror of `IdType::WIDTH`.
//! * **Conversions**: Width changes use native `as` semantics (sign-extend or truncate).
//!
//! ## Invariants
//!
//! * `Width::from_bits` accepts exactly 32 and 64.
//! * `<T::Other as IdType>::Other == T`.
//!
//! ## Non-goals
//!
//! * This module does not support unsigned, floating-point or boolean storage.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter};
use core::hash::Hash;
use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};

// Internal dependencies
use crate::primitives::array::IdBuffer;
use crate::primitives::errors::IdArrayError;

// ============================================================================
// Width Tag
// ============================================================================

/// Storage width of an identifier array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 32-bit signed integers.
    W32,

    /// 64-bit signed integers.
    W64,
}

impl Width {
    /// Resolve a runtime bit count to a width tag.
    pub fn from_bits(bits: u8) -> Result<Self, IdArrayError> {
        match bits {
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            other => Err(IdArrayError::InvalidWidth(other)),
        }
    }

    /// Number of bits per element.
    #[inline]
    pub const fn bits(&self) -> u8 {
        match self {
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Type name of the element.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Width::W32 => "int32",
            Width::W64 => "int64",
        }
    }
}

impl Display for Width {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Element Trait
// ============================================================================

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Integer element type of an identifier array.
///
/// Implemented for `i32` and `i64` only.
pub trait IdType:
    PrimInt
    + Signed
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + WrappingNeg
    + Hash
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    /// Runtime tag of this element type.
    const WIDTH: Width;

    /// The element type of the other width.
    type Other: IdType<Other = Self>;

    /// Native `as` conversion to the other width.
    fn cast_other(self) -> Self::Other;

    /// Sign-extend to 64 bits.
    fn widen(self) -> i64;

    /// Native `as` conversion from 64 bits (truncates for `i32`).
    fn truncate_from(value: i64) -> Self;

    /// Native `as` conversion from an index (truncates when out of range).
    fn from_index(index: usize) -> Self;

    /// `1` if `flag` else `0`.
    fn from_bool(flag: bool) -> Self;

    /// Two's-complement quotient; panics on a zero divisor.
    fn wrapping_quotient(self, rhs: Self) -> Self;

    /// Wrap an owned vector in the matching buffer variant.
    fn into_buffer(values: Vec<Self>) -> IdBuffer;

    /// Borrow the buffer as `&[Self]` if the variant matches.
    fn view(buffer: &IdBuffer) -> Option<&[Self]>;

    /// Borrow the buffer as `&mut [Self]` if the variant matches.
    fn view_mut(buffer: &mut IdBuffer) -> Option<&mut [Self]>;
}

impl IdType for i32 {
    const WIDTH: Width = Width::W32;
    type Other = i64;

    #[inline]
    fn cast_other(self) -> i64 {
        self as i64
    }

    #[inline]
    fn widen(self) -> i64 {
        self as i64
    }

    #[inline]
    fn truncate_from(value: i64) -> Self {
        value as i32
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        index as i32
    }

    #[inline]
    fn from_bool(flag: bool) -> Self {
        flag as i32
    }

    #[inline]
    fn wrapping_quotient(self, rhs: Self) -> Self {
        self.wrapping_div(rhs)
    }

    fn into_buffer(values: Vec<Self>) -> IdBuffer {
        IdBuffer::I32(values)
    }

    fn view(buffer: &IdBuffer) -> Option<&[Self]> {
        match buffer {
            IdBuffer::I32(values) => Some(values),
            IdBuffer::I64(_) => None,
        }
    }

    fn view_mut(buffer: &mut IdBuffer) -> Option<&mut [Self]> {
        match buffer {
            IdBuffer::I32(values) => Some(values),
            IdBuffer::I64(_) => None,
        }
    }
}

impl IdType for i64 {
    const WIDTH: Width = Width::W64;
    type Other = i32;

    #[inline]
    fn cast_other(self) -> i32 {
        self as i32
    }

    #[inline]
    fn widen(self) -> i64 {
        self
    }

    #[inline]
    fn truncate_from(value: i64) -> Self {
        value
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        index as i64
    }

    #[inline]
    fn from_bool(flag: bool) -> Self {
        flag as i64
    }

    #[inline]
    fn wrapping_quotient(self, rhs: Self) -> Self {
        self.wrapping_div(rhs)
    }

    fn into_buffer(values: Vec<Self>) -> IdBuffer {
        IdBuffer::I64(values)
    }

    fn view(buffer: &IdBuffer) -> Option<&[Self]> {
        match buffer {
            IdBuffer::I64(values) => Some(values),
            IdBuffer::I32(_) => None,
        }
    }

    fn view_mut(buffer: &mut IdBuffer) -> Option<&mut [Self]> {
        match buffer {
            IdBuffer::I64(values) => Some(values),
            IdBuffer::I32(_) => None,
        }
    }
}

// ============================================================================
// Scalar Operand
// ============================================================================

/// A single integer whose width is the width of its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    /// 32-bit value.
    I32(i32),

    /// 64-bit value.
    I64(i64),
}

impl Scalar {
    /// Build a scalar of the given width, truncating `value` when narrowing.
    pub fn truncating(value: i64, width: Width) -> Self {
        match width {
            Width::W32 => Scalar::I32(value as i32),
            Width::W64 => Scalar::I64(value),
        }
    }

    /// Width of the stored value.
    #[inline]
    pub const fn width(&self) -> Width {
        match self {
            Scalar::I32(_) => Width::W32,
            Scalar::I64(_) => Width::W64,
        }
    }

    /// Value sign-extended to 64 bits.
    #[inline]
    pub const fn widen(&self) -> i64 {
        match self {
            Scalar::I32(v) => *v as i64,
            Scalar::I64(v) => *v,
        }
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::I32(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::I64(value)
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Scalar::I32(v) => write!(f, "{v}_i32"),
            Scalar::I64(v) => write!(f, "{v}_i64"),
        }
    }
}

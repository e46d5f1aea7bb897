//! Scalar operator catalog for elementwise passes.
//!
//! ## Purpose
//!
//! This module defines the closed set of operators an elementwise pass can
//! apply and resolves each one to a pure scalar function for a concrete
//! element type.
//!
//! ## Design notes
//!
//! * **Resolve once**: [`BinaryOp::kernel`] returns a plain `fn(T, T) -> T`, so
//!   the operator is matched once per pass, not once per element.
//! * **Wrapping arithmetic**: Add/Sub/Mul/Neg/Div use two's-complement wrapping,
//!   giving identical results in debug and release builds.
//! * **Comparisons**: Return `1` or `0` encoded in the operand width.
//!
//! ## Invariants
//!
//! * Every operator is a pure function of its operands.
//! * Output width equals operand width.
//!
//! ## Non-goals
//!
//! * Division by zero is not checked; it panics like native integer division.

// Internal dependencies
use crate::primitives::width::IdType;

// ============================================================================
// Binary Operators
// ============================================================================

/// Binary elementwise operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum BinaryOp {
    /// `a + b` (wrapping).
    Add,

    /// `a - b` (wrapping).
    Sub,

    /// `a * b` (wrapping).
    Mul,

    /// `a / b`, truncated toward zero (wrapping on `MIN / -1`).
    Div,

    /// `a > b`.
    GT,

    /// `a < b`.
    LT,

    /// `a >= b`.
    GE,

    /// `a <= b`.
    LE,

    /// `a == b`.
    EQ,

    /// `a != b`.
    NE,
}

impl BinaryOp {
    /// Every binary operator, in catalog order.
    pub const ALL: [BinaryOp; 10] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::GT,
        BinaryOp::LT,
        BinaryOp::GE,
        BinaryOp::LE,
        BinaryOp::EQ,
        BinaryOp::NE,
    ];

    /// Get the name of the operator.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "Add",
            BinaryOp::Sub => "Sub",
            BinaryOp::Mul => "Mul",
            BinaryOp::Div => "Div",
            BinaryOp::GT => "GT",
            BinaryOp::LT => "LT",
            BinaryOp::GE => "GE",
            BinaryOp::LE => "LE",
            BinaryOp::EQ => "EQ",
            BinaryOp::NE => "NE",
        }
    }

    /// Whether the operator yields a 0/1 mask.
    #[inline]
    pub const fn is_comparison(&self) -> bool {
        !matches!(
            self,
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div
        )
    }

    /// Resolve the operator to a scalar function over `T`.
    #[inline]
    pub fn kernel<T: IdType>(self) -> fn(T, T) -> T {
        match self {
            BinaryOp::Add => add::<T>,
            BinaryOp::Sub => sub::<T>,
            BinaryOp::Mul => mul::<T>,
            BinaryOp::Div => div::<T>,
            BinaryOp::GT => gt::<T>,
            BinaryOp::LT => lt::<T>,
            BinaryOp::GE => ge::<T>,
            BinaryOp::LE => le::<T>,
            BinaryOp::EQ => eq::<T>,
            BinaryOp::NE => ne::<T>,
        }
    }

    /// Apply the operator to a single pair of operands.
    #[inline]
    pub fn apply<T: IdType>(self, lhs: T, rhs: T) -> T {
        (self.kernel::<T>())(lhs, rhs)
    }
}

// ============================================================================
// Unary Operators
// ============================================================================

/// Unary elementwise operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-a` (wrapping).
    Neg,
}

impl UnaryOp {
    /// Get the name of the operator.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "Neg",
        }
    }

    /// Resolve the operator to a scalar function over `T`.
    #[inline]
    pub fn kernel<T: IdType>(self) -> fn(T) -> T {
        match self {
            UnaryOp::Neg => neg::<T>,
        }
    }

    /// Apply the operator to a single operand.
    #[inline]
    pub fn apply<T: IdType>(self, value: T) -> T {
        (self.kernel::<T>())(value)
    }
}

// ============================================================================
// Scalar Functions
// ============================================================================

#[inline]
fn add<T: IdType>(a: T, b: T) -> T {
    a.wrapping_add(&b)
}

#[inline]
fn sub<T: IdType>(a: T, b: T) -> T {
    a.wrapping_sub(&b)
}

#[inline]
fn mul<T: IdType>(a: T, b: T) -> T {
    a.wrapping_mul(&b)
}

#[inline]
fn div<T: IdType>(a: T, b: T) -> T {
    a.wrapping_quotient(b)
}

#[inline]
fn gt<T: IdType>(a: T, b: T) -> T {
    T::from_bool(a > b)
}

#[inline]
fn lt<T: IdType>(a: T, b: T) -> T {
    T::from_bool(a < b)
}

#[inline]
fn ge<T: IdType>(a: T, b: T) -> T {
    T::from_bool(a >= b)
}

#[inline]
fn le<T: IdType>(a: T, b: T) -> T {
    T::from_bool(a <= b)
}

#[inline]
fn eq<T: IdType>(a: T, b: T) -> T {
    T::from_bool(a == b)
}

#[inline]
fn ne<T: IdType>(a: T, b: T) -> T {
    T::from_bool(a != b)
}

#[inline]
fn neg<T: IdType>(a: T) -> T {
    a.wrapping_neg()
}

//! Error types for identifier-array operations.
//!
//! ## Purpose
//!
//! This module defines the failure conditions of the kernel: invalid width
//! tags, operand disagreements, malformed ranges and shapes, unsupported
//! execution contexts, and kernel configuration mistakes.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, widths, bounds).
//! * **Fail-fast**: Every variant aborts the current call; nothing is retried.
//! * **No-std**: Formatting goes through `core::fmt`; no allocation is needed.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Width validation**: Only 32- and 64-bit integer storage exists.
//! 2. **Operand agreement**: Binary operations need equal lengths and widths.
//! 3. **Shape validation**: Index extraction requires 1-dimensional input.
//! 4. **Configuration**: Builder parameters are validated on `build()`.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Integer division by zero is never reported here; it keeps native semantics.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::context::DeviceType;
use crate::primitives::width::Width;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for identifier-array operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdArrayError {
    /// Requested bit width is not 32 or 64.
    InvalidWidth(u8),

    /// Array-array operation given operands of unequal length.
    ShapeMismatch {
        /// Number of elements in the left operand.
        lhs_len: usize,
        /// Number of elements in the right operand.
        rhs_len: usize,
    },

    /// Operands (or a scalar and an array) are stored with different widths.
    WidthMismatch {
        /// Width required by the first operand.
        expected: Width,
        /// Width actually supplied.
        got: Width,
    },

    /// `range` called with `high < low`.
    InvalidRange {
        /// Lower (inclusive) bound.
        low: i64,
        /// Upper (exclusive) bound.
        high: i64,
    },

    /// Operation requires a 1-dimensional array.
    InvalidShape {
        /// Number of dimensions of the offending array.
        ndim: usize,
    },

    /// Declared shape does not cover exactly the stored elements.
    ShapeElementMismatch {
        /// Product of the declared shape.
        shape_elems: usize,
        /// Number of stored elements.
        len: usize,
    },

    /// Relabeling requires at least one array.
    EmptyInput,

    /// Only CPU execution is implemented.
    UnsupportedDevice(DeviceType),

    /// Parallel threshold must be at least 1.
    InvalidParallelThreshold(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for IdArrayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidWidth(bits) => {
                write!(f, "Invalid number of integer bits: {bits} (must be 32 or 64)")
            }
            Self::ShapeMismatch { lhs_len, rhs_len } => {
                write!(
                    f,
                    "Length mismatch: lhs has {lhs_len} elements, rhs has {rhs_len}"
                )
            }
            Self::WidthMismatch { expected, got } => {
                write!(f, "Width mismatch: expected {expected}, got {got}")
            }
            Self::InvalidRange { low, high } => {
                write!(f, "Invalid range: high ({high}) must not be less than low ({low})")
            }
            Self::InvalidShape { ndim } => {
                write!(f, "Invalid shape: expected a 1-dimensional array, got {ndim} dimensions")
            }
            Self::ShapeElementMismatch { shape_elems, len } => {
                write!(
                    f,
                    "Shape covers {shape_elems} elements but the buffer holds {len}"
                )
            }
            Self::EmptyInput => write!(f, "Relabel requires at least one array"),
            Self::UnsupportedDevice(device) => {
                write!(f, "Unsupported device: {device:?} (only CPU is available)")
            }
            Self::InvalidParallelThreshold(threshold) => {
                write!(f, "Invalid parallel_threshold: {threshold} (must be >= 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for IdArrayError {}

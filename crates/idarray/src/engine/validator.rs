//! Precondition checks for kernel operations and configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before any pass
//! executes: device, width and length agreement of operands, shape checks
//! and builder parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; none touch elements.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair inputs.

// Internal dependencies
use crate::primitives::array::IdArray;
use crate::primitives::context::DeviceContext;
use crate::primitives::errors::IdArrayError;
use crate::primitives::width::Width;

/// Validation utility for kernel inputs and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Operand Validation
    // ========================================================================

    /// Validate that an array lives on a supported device.
    pub fn validate_context(arr: &IdArray) -> Result<(), IdArrayError> {
        arr.context().ensure_cpu()
    }

    /// Validate that two widths agree.
    pub fn validate_width(expected: Width, got: Width) -> Result<(), IdArrayError> {
        if expected != got {
            return Err(IdArrayError::WidthMismatch { expected, got });
        }
        Ok(())
    }

    /// Validate a pair of array operands for an elementwise operation.
    pub fn validate_binary(lhs: &IdArray, rhs: &IdArray) -> Result<(), IdArrayError> {
        Self::validate_context(lhs)?;
        Self::validate_context(rhs)?;
        Self::validate_width(lhs.width(), rhs.width())?;
        if lhs.len() != rhs.len() {
            return Err(IdArrayError::ShapeMismatch {
                lhs_len: lhs.len(),
                rhs_len: rhs.len(),
            });
        }
        Ok(())
    }

    /// Validate that an array is 1-dimensional.
    pub fn validate_one_dimensional(arr: &IdArray) -> Result<(), IdArrayError> {
        if arr.ndim() != 1 {
            return Err(IdArrayError::InvalidShape { ndim: arr.ndim() });
        }
        Ok(())
    }

    /// Validate a batch of arrays for relabeling and return their shared width.
    pub fn validate_batch(arrays: &[IdArray]) -> Result<Width, IdArrayError> {
        let first = arrays.first().ok_or(IdArrayError::EmptyInput)?;
        let width = first.width();
        for arr in arrays {
            Self::validate_context(arr)?;
            Self::validate_width(width, arr.width())?;
        }
        Ok(width)
    }

    // ========================================================================
    // Configuration Validation
    // ========================================================================

    /// Validate the minimum length at which parallel passes are used.
    pub fn validate_parallel_threshold(threshold: usize) -> Result<(), IdArrayError> {
        if threshold == 0 {
            return Err(IdArrayError::InvalidParallelThreshold(threshold));
        }
        Ok(())
    }

    /// Validate the kernel's own execution context.
    pub fn validate_kernel_context(ctx: DeviceContext) -> Result<(), IdArrayError> {
        ctx.ensure_cpu()
    }

    /// Report a parameter that was set more than once.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), IdArrayError> {
        if let Some(parameter) = duplicate {
            return Err(IdArrayError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

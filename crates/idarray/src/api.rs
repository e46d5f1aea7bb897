//! High-level API for identifier-array kernels.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring execution (context, parallel hints, custom
//! passes) and the [`Kernel`] that exposes the operation catalog.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated once, when `.build()` is called.
//! * **Immutable**: A built [`Kernel`] holds no mutable state and can be shared.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KernelBuilder`] via `IdKernel::new()`.
//! 2. Chain configuration methods (`.context()`, `.parallel_threshold()`, etc.).
//! 3. Call `.build()` to obtain a [`Kernel`].
//!
//! ### Operation Catalog
//!
//! | Operation            | Method                                 |
//! |----------------------|----------------------------------------|
//! | Width cast           | [`Kernel::as_num_bits`]                |
//! | Array-array          | [`Kernel::binary`]                     |
//! | Array-scalar         | [`Kernel::binary_scalar`]              |
//! | Scalar-array         | [`Kernel::scalar_binary`]              |
//! | Unary                | [`Kernel::unary`]                      |
//! | Concatenation        | [`Kernel::hstack`]                     |
//! | Constant fill        | [`Kernel::full`]                       |
//! | Half-open sequence   | [`Kernel::range`]                      |
//! | Dense relabeling     | [`Kernel::relabel`]                    |
//! | Mask to indices      | [`Kernel::nonzero`]                    |

// Internal dependencies
use crate::algorithms::elementwise::ScalarSide;
use crate::engine::dispatch;
use crate::engine::executor::{
    DEFAULT_PARALLEL_THRESHOLD, KernelConfig, KernelExecutor, PassTable,
};
use crate::engine::validator::Validator;
use crate::primitives::width::Width;

// Publicly re-exported types
pub use crate::math::arith::{BinaryOp, UnaryOp};
pub use crate::primitives::array::{IdArray, IdBuffer};
pub use crate::primitives::context::{DeviceContext, DeviceType};
pub use crate::primitives::errors::IdArrayError;
pub use crate::primitives::width::{IdType, Scalar};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Kernel`].
#[derive(Debug, Clone, Default)]
pub struct KernelBuilder {
    /// Context assigned to constructed arrays (default: CPU 0).
    pub context: Option<DeviceContext>,

    /// Minimum element count for parallel passes (default: 4096).
    pub parallel_threshold: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom passes for 32-bit arrays.
    #[doc(hidden)]
    pub custom_passes_i32: Option<PassTable<i32>>,

    /// Custom passes for 64-bit arrays.
    #[doc(hidden)]
    pub custom_passes_i64: Option<PassTable<i64>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl KernelBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            context: None,
            parallel_threshold: None,
            custom_passes_i32: None,
            custom_passes_i64: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the context assigned to arrays built by `full` and `range`.
    pub fn context(mut self, ctx: DeviceContext) -> Self {
        if self.context.is_some() {
            self.duplicate_param = Some("context");
        }
        self.context = Some(ctx);
        self
    }

    /// Set the minimum element count at which parallel passes are used.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        if self.parallel_threshold.is_some() {
            self.duplicate_param = Some("parallel_threshold");
        }
        self.parallel_threshold = Some(threshold);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set custom passes for 32-bit arrays (only for dev)
    #[doc(hidden)]
    pub fn custom_passes_i32(mut self, passes: PassTable<i32>) -> Self {
        self.custom_passes_i32 = Some(passes);
        self
    }

    /// Set custom passes for 64-bit arrays (only for dev)
    #[doc(hidden)]
    pub fn custom_passes_i64(mut self, passes: PassTable<i64>) -> Self {
        self.custom_passes_i64 = Some(passes);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the kernel.
    pub fn build(self) -> Result<Kernel, IdArrayError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let context = self.context.unwrap_or_default();
        Validator::validate_kernel_context(context)?;

        let parallel_threshold = self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD);
        Validator::validate_parallel_threshold(parallel_threshold)?;

        let config = KernelConfig {
            context,
            parallel_threshold,
            custom_passes_i32: self.custom_passes_i32,
            custom_passes_i64: self.custom_passes_i64,
            parallel: self.parallel.unwrap_or(false),
        };

        Ok(Kernel {
            executor: KernelExecutor::new(config),
        })
    }
}

// ============================================================================
// Kernel
// ============================================================================

/// A configured identifier-array kernel.
#[derive(Debug, Clone, Default)]
pub struct Kernel {
    executor: KernelExecutor,
}

impl Kernel {
    /// Context assigned to constructed arrays.
    pub fn context(&self) -> DeviceContext {
        self.executor.config().context
    }

    /// Whether parallel passes are installed and enabled.
    pub fn is_parallel(&self) -> bool {
        let config = self.executor.config();
        config.parallel
            && (config.custom_passes_i32.is_some() || config.custom_passes_i64.is_some())
    }

    /// Minimum element count at which parallel passes are used.
    pub fn parallel_threshold(&self) -> usize {
        self.executor.config().parallel_threshold
    }

    // ========================================================================
    // Width Conversion
    // ========================================================================

    /// Convert `arr` to `bits`-wide storage.
    ///
    /// Returns `arr` itself when it already has that width. Narrowing
    /// truncates each element to its low 32 bits.
    #[tracing::instrument(level = "debug", skip_all, fields(from = arr.bits(), to = bits, len = arr.len()))]
    pub fn as_num_bits(&self, arr: IdArray, bits: u8) -> Result<IdArray, IdArrayError> {
        dispatch::as_num_bits(&self.executor, arr, bits)
    }

    // ========================================================================
    // Elementwise
    // ========================================================================

    /// `op(lhs[i], rhs[i])` for every `i`.
    ///
    /// Operands must have equal length (`ShapeMismatch`) and width (`WidthMismatch`).
    #[tracing::instrument(level = "debug", skip_all, fields(op = op.name(), width = lhs.bits(), len = lhs.len()))]
    pub fn binary(
        &self,
        op: BinaryOp,
        lhs: &IdArray,
        rhs: &IdArray,
    ) -> Result<IdArray, IdArrayError> {
        dispatch::binary(&self.executor, op, lhs, rhs)
    }

    /// `op(arr[i], scalar)` for every `i`; the scalar must share the array width.
    #[tracing::instrument(level = "debug", skip_all, fields(op = op.name(), width = arr.bits(), len = arr.len()))]
    pub fn binary_scalar(
        &self,
        op: BinaryOp,
        arr: &IdArray,
        scalar: impl Into<Scalar>,
    ) -> Result<IdArray, IdArrayError> {
        dispatch::scalar(&self.executor, op, arr, scalar.into(), ScalarSide::Right)
    }

    /// `op(scalar, arr[i])` for every `i`; the scalar must share the array width.
    #[tracing::instrument(level = "debug", skip_all, fields(op = op.name(), width = arr.bits(), len = arr.len()))]
    pub fn scalar_binary(
        &self,
        op: BinaryOp,
        scalar: impl Into<Scalar>,
        arr: &IdArray,
    ) -> Result<IdArray, IdArrayError> {
        dispatch::scalar(&self.executor, op, arr, scalar.into(), ScalarSide::Left)
    }

    /// `op(arr[i])` for every `i`.
    #[tracing::instrument(level = "debug", skip_all, fields(op = op.name(), width = arr.bits(), len = arr.len()))]
    pub fn unary(&self, op: UnaryOp, arr: &IdArray) -> Result<IdArray, IdArrayError> {
        dispatch::unary(&self.executor, op, arr)
    }

    // ========================================================================
    // Structural
    // ========================================================================

    /// All of `first` followed by all of `second`.
    #[tracing::instrument(level = "debug", skip_all, fields(width = first.bits(), len = first.len() + second.len()))]
    pub fn hstack(&self, first: &IdArray, second: &IdArray) -> Result<IdArray, IdArrayError> {
        dispatch::hstack(&self.executor, first, second)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// `length` copies of `value`, stored in the width of `value`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = length))]
    pub fn full(&self, value: impl Into<Scalar>, length: usize) -> Result<IdArray, IdArrayError> {
        dispatch::full(&self.executor, value.into(), length, self.context())
    }

    /// `length` copies of `value` stored in `bits`-wide integers.
    ///
    /// `value` is truncated when `bits` is 32.
    pub fn full_with_width(
        &self,
        value: i64,
        length: usize,
        bits: u8,
    ) -> Result<IdArray, IdArrayError> {
        let width = Width::from_bits(bits)?;
        self.full(Scalar::truncating(value, width), length)
    }

    /// The half-open sequence `[low, high)`.
    ///
    /// Fails with `InvalidRange` if `high < low`; `low == high` is empty.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn range(
        &self,
        low: impl Into<Scalar>,
        high: impl Into<Scalar>,
    ) -> Result<IdArray, IdArrayError> {
        let (low, high) = (low.into(), high.into());
        tracing::debug!(low = low.widen(), high = high.widen(), "range bounds");
        dispatch::range(&self.executor, low, high, self.context())
    }

    /// The half-open sequence `[low, high)` stored in `bits`-wide integers.
    pub fn range_with_width(&self, low: i64, high: i64, bits: u8) -> Result<IdArray, IdArrayError> {
        let width = Width::from_bits(bits)?;
        self.range(
            Scalar::truncating(low, width),
            Scalar::truncating(high, width),
        )
    }

    // ========================================================================
    // Relabel and NonZero
    // ========================================================================

    /// Rewrite `arrays` in place to dense ids `0..n` and return the map.
    ///
    /// Ids are assigned in first-occurrence order, array by array and element
    /// by element. The returned array satisfies `map[new_id] == original_id`.
    #[tracing::instrument(level = "debug", skip_all, fields(arrays = arrays.len()))]
    pub fn relabel(&self, arrays: &mut [IdArray]) -> Result<IdArray, IdArrayError> {
        dispatch::relabel(&self.executor, arrays)
    }

    /// Ascending indices of the non-zero elements of a 1-D mask.
    ///
    /// Indices are stored in the width of the mask.
    #[tracing::instrument(level = "debug", skip_all, fields(width = mask.bits(), len = mask.len()))]
    pub fn nonzero(&self, mask: &IdArray) -> Result<IdArray, IdArrayError> {
        dispatch::nonzero(&self.executor, mask, mask.bits())
    }

    /// Ascending indices of the non-zero elements of a 1-D mask, in `bits` width.
    #[tracing::instrument(level = "debug", skip_all, fields(width = bits, len = mask.len()))]
    pub fn nonzero_as(&self, mask: &IdArray, bits: u8) -> Result<IdArray, IdArrayError> {
        dispatch::nonzero(&self.executor, mask, bits)
    }
}

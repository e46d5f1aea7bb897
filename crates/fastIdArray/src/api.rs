//! High-level API for identifier-array kernels with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of `fastIdArray`. It
//! extends the `idarray` builder so that the kernel it builds runs large
//! arrays on all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `idarray` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Transparent**: The built kernel is the ordinary `idarray::Kernel`.
//!
//! ## Key concepts
//!
//! * **Parallel Support**: Uses `rayon` for fork-join execution.
//! * **Threshold**: Arrays shorter than `parallel_threshold` stay sequential.
//! * **Feature-Gated**: Parallelism is configurable via the `cpu` feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelKernelBuilder`] via `IdKernel::new()`.
//! 2. Chain configuration methods (`.parallel_threshold()`, `.parallel()`, etc.).
//! 3. Call `.build()` to obtain a kernel with the parallel passes installed.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::parallel_passes;

// Export dependencies from idarray crate
use idarray::internals::api::KernelBuilder;

// Publicly re-exported types
pub use idarray::internals::api::{
    BinaryOp, DeviceContext, DeviceType, IdArray, IdArrayError, IdBuffer, IdType, Kernel,
    Scalar, UnaryOp,
};
pub use idarray::internals::primitives::width::Width;

// ============================================================================
// Parallel Kernel Builder
// ============================================================================

/// Builder for an identifier-array kernel with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelKernelBuilder {
    /// Base builder from the idarray crate
    pub base: KernelBuilder,
}

impl Default for ParallelKernelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelKernelBuilder {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from idarray KernelBuilder
    /// * parallel: true (fastIdArray extension)
    pub fn new() -> Self {
        let base = KernelBuilder::new().parallel(true); // Default to parallel in fastIdArray
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the context assigned to arrays built by `full` and `range`.
    pub fn context(mut self, ctx: DeviceContext) -> Self {
        self.base = self.base.context(ctx);
        self
    }

    /// Set the minimum element count at which parallel passes are used.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.base = self.base.parallel_threshold(threshold);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Install the parallel passes and build the kernel.
    pub fn build(self) -> Result<Kernel, IdArrayError> {
        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder
                    .custom_passes_i32(parallel_passes::<i32>())
                    .custom_passes_i64(parallel_passes::<i64>());
            } else {
                builder.custom_passes_i32 = None;
                builder.custom_passes_i64 = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_passes_i32 = None;
            builder.custom_passes_i64 = None;
        }

        let kernel = builder.build()?;
        tracing::debug!(
            parallel = kernel.is_parallel(),
            threshold = kernel.parallel_threshold(),
            "built parallel kernel"
        );
        Ok(kernel)
    }
}

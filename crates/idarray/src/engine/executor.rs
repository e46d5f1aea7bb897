//! Execution engine for identifier-array passes.
//!
//! ## Purpose
//!
//! This module owns the kernel configuration and runs typed passes: it
//! allocates output buffers, chooses between the sequential reference pass
//! and an injected replacement, and hands the typed slices to the pass.
//!
//! ## Design notes
//!
//! * **Pass tables**: Every operation is a plain `fn` pointer collected in a
//!   [`PassTable`]. The core ships the sequential table; extension crates
//!   (e.g. `fastIdArray`) install their own table per width.
//! * **Size cutoff**: Inputs shorter than `parallel_threshold` always take the
//!   sequential pass, so tiny arrays never pay fork-join overhead.
//! * **Generics**: Every method is generic over `T: PassSelect` (`i32` or `i64`).
//!
//! ## Invariants
//!
//! * Replacement passes must produce output identical to the sequential ones.
//! * Output buffers are allocated here with exactly the required length.
//!
//! ## Non-goals
//!
//! * This module does not validate operands (handled by `validator`).
//! * This module does not inspect runtime width tags (handled by `dispatch`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::algorithms::construction::{fill_pass, iota_pass};
use crate::algorithms::elementwise::{ScalarSide, binary_pass, scalar_pass, unary_pass};
use crate::algorithms::nonzero::nonzero_pass;
use crate::algorithms::relabel::relabel_pass;
use crate::algorithms::structural::{cast_pass, hstack_pass};
use crate::math::arith::{BinaryOp, UnaryOp};
use crate::primitives::context::DeviceContext;
use crate::primitives::width::IdType;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for an array-array elementwise pass.
#[doc(hidden)]
pub type BinaryPassFn<T> = fn(
    &[T],     // lhs
    &[T],     // rhs
    BinaryOp, // operator
    &mut [T], // output
);

/// Signature for an array-scalar elementwise pass.
#[doc(hidden)]
pub type ScalarPassFn<T> = fn(
    &[T],       // array operand
    T,          // scalar operand
    ScalarSide, // side of the scalar
    BinaryOp,   // operator
    &mut [T],   // output
);

/// Signature for a unary elementwise pass.
#[doc(hidden)]
pub type UnaryPassFn<T> = fn(&[T], UnaryOp, &mut [T]);

/// Signature for a width-conversion pass.
#[doc(hidden)]
pub type CastPassFn<T> = fn(&[T], &mut [<T as IdType>::Other]);

/// Signature for constant-fill and sequence passes (`value` or `low`, output).
#[doc(hidden)]
pub type FillPassFn<T> = fn(T, &mut [T]);

/// Signature for a concatenation pass.
#[doc(hidden)]
pub type HStackPassFn<T> = fn(&[T], &[T], &mut [T]);

/// Signature for a relabel pass (arrays rewritten in place, returns the map).
#[doc(hidden)]
pub type RelabelPassFn<T> = fn(&mut [&mut [T]]) -> Vec<T>;

/// Signature for a mask-to-index pass.
#[doc(hidden)]
pub type NonZeroPassFn<T> = fn(&[T]) -> Vec<T>;

/// One implementation of every pass for a single element type.
#[derive(Debug, Clone, Copy)]
pub struct PassTable<T: IdType> {
    /// Array-array elementwise pass.
    pub binary: BinaryPassFn<T>,

    /// Array-scalar elementwise pass.
    pub scalar: ScalarPassFn<T>,

    /// Unary elementwise pass.
    pub unary: UnaryPassFn<T>,

    /// Width-conversion pass.
    pub cast: CastPassFn<T>,

    /// Constant-fill pass.
    pub fill: FillPassFn<T>,

    /// Arithmetic-sequence pass.
    pub iota: FillPassFn<T>,

    /// Concatenation pass.
    pub hstack: HStackPassFn<T>,

    /// Relabel pass.
    pub relabel: RelabelPassFn<T>,

    /// Mask-to-index pass.
    pub nonzero: NonZeroPassFn<T>,
}

impl<T: IdType> PassTable<T> {
    /// The sequential reference passes.
    pub fn sequential() -> Self {
        Self {
            binary: binary_pass::<T>,
            scalar: scalar_pass::<T>,
            unary: unary_pass::<T>,
            cast: cast_pass::<T>,
            fill: fill_pass::<T>,
            iota: iota_pass::<T>,
            hstack: hstack_pass::<T>,
            relabel: relabel_pass::<T>,
            nonzero: nonzero_pass::<T>,
        }
    }
}

/// Which implementation ran a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// The built-in sequential pass.
    Sequential,

    /// An injected replacement pass.
    Custom,
}

impl PassKind {
    /// Get the name of the pass kind.
    pub const fn name(&self) -> &'static str {
        match self {
            PassKind::Sequential => "sequential",
            PassKind::Custom => "custom",
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Default minimum element count for using injected passes.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Configuration for kernel execution.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Context assigned to arrays built from scratch (`full`, `range`).
    pub context: DeviceContext,

    /// Minimum element count at which injected passes are used.
    pub parallel_threshold: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Replacement passes for 32-bit arrays.
    #[doc(hidden)]
    pub custom_passes_i32: Option<PassTable<i32>>,

    /// Replacement passes for 64-bit arrays.
    #[doc(hidden)]
    pub custom_passes_i64: Option<PassTable<i64>>,

    /// Whether replacement passes may be used at all.
    #[doc(hidden)]
    pub parallel: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            context: DeviceContext::cpu(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            custom_passes_i32: None,
            custom_passes_i64: None,
            parallel: false,
        }
    }
}

/// Element types that can look up their replacement passes in a config.
pub trait PassSelect: IdType {
    /// Replacement passes configured for this element type.
    fn custom_passes(config: &KernelConfig) -> Option<&PassTable<Self>>;
}

impl PassSelect for i32 {
    fn custom_passes(config: &KernelConfig) -> Option<&PassTable<Self>> {
        config.custom_passes_i32.as_ref()
    }
}

impl PassSelect for i64 {
    fn custom_passes(config: &KernelConfig) -> Option<&PassTable<Self>> {
        config.custom_passes_i64.as_ref()
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs typed passes under a [`KernelConfig`].
#[derive(Debug, Clone, Default)]
pub struct KernelExecutor {
    config: KernelConfig,
}

impl KernelExecutor {
    /// Create an executor from a configuration.
    pub fn new(config: KernelConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Select the pass table for an input of `len` elements.
    pub fn select<T: PassSelect>(&self, len: usize) -> (PassTable<T>, PassKind) {
        if self.config.parallel && len >= self.config.parallel_threshold {
            if let Some(table) = T::custom_passes(&self.config) {
                return (*table, PassKind::Custom);
            }
        }
        (PassTable::sequential(), PassKind::Sequential)
    }

    // ========================================================================
    // Elementwise
    // ========================================================================

    /// `op(lhs[i], rhs[i])` for every `i`; operands must have equal length.
    pub fn binary<T: PassSelect>(&self, lhs: &[T], rhs: &[T], op: BinaryOp) -> Vec<T> {
        let (table, kind) = self.select::<T>(lhs.len());
        let mut out = vec![T::zero(); lhs.len()];
        (table.binary)(lhs, rhs, op, &mut out);
        tracing::debug!(pass = kind.name(), op = op.name(), len = out.len(), "binary_pass");
        out
    }

    /// `op(arr[i], scalar)` or `op(scalar, arr[i])` for every `i`.
    pub fn scalar<T: PassSelect>(
        &self,
        arr: &[T],
        scalar: T,
        side: ScalarSide,
        op: BinaryOp,
    ) -> Vec<T> {
        let (table, kind) = self.select::<T>(arr.len());
        let mut out = vec![T::zero(); arr.len()];
        (table.scalar)(arr, scalar, side, op, &mut out);
        tracing::debug!(pass = kind.name(), op = op.name(), len = out.len(), "scalar_pass");
        out
    }

    /// `op(arr[i])` for every `i`.
    pub fn unary<T: PassSelect>(&self, arr: &[T], op: UnaryOp) -> Vec<T> {
        let (table, kind) = self.select::<T>(arr.len());
        let mut out = vec![T::zero(); arr.len()];
        (table.unary)(arr, op, &mut out);
        tracing::debug!(pass = kind.name(), op = op.name(), len = out.len(), "unary_pass");
        out
    }

    // ========================================================================
    // Construction and Structural
    // ========================================================================

    /// Convert every element to the other width.
    pub fn cast<T: PassSelect>(&self, arr: &[T]) -> Vec<T::Other> {
        let (table, kind) = self.select::<T>(arr.len());
        let mut out = vec![<T::Other as num_traits::Zero>::zero(); arr.len()];
        (table.cast)(arr, &mut out);
        tracing::debug!(pass = kind.name(), len = out.len(), "cast_pass");
        out
    }

    /// `len` copies of `value`.
    pub fn fill<T: PassSelect>(&self, value: T, len: usize) -> Vec<T> {
        let (table, kind) = self.select::<T>(len);
        let mut out = vec![T::zero(); len];
        (table.fill)(value, &mut out);
        tracing::debug!(pass = kind.name(), len, "fill_pass");
        out
    }

    /// `low, low + 1, ...` of length `len`.
    pub fn iota<T: PassSelect>(&self, low: T, len: usize) -> Vec<T> {
        let (table, kind) = self.select::<T>(len);
        let mut out = vec![T::zero(); len];
        (table.iota)(low, &mut out);
        tracing::debug!(pass = kind.name(), len, "iota_pass");
        out
    }

    /// `first` followed by `second`.
    pub fn hstack<T: PassSelect>(&self, first: &[T], second: &[T]) -> Vec<T> {
        let len = first.len() + second.len();
        let (table, kind) = self.select::<T>(len);
        let mut out = vec![T::zero(); len];
        (table.hstack)(first, second, &mut out);
        tracing::debug!(pass = kind.name(), len, "hstack_pass");
        out
    }

    // ========================================================================
    // Relabel and NonZero
    // ========================================================================

    /// Relabel `arrays` in place and return the compaction map.
    pub fn relabel<T: PassSelect>(&self, arrays: &mut [&mut [T]]) -> Vec<T> {
        let total: usize = arrays.iter().map(|a| a.len()).sum();
        let (table, kind) = self.select::<T>(total);
        let map = (table.relabel)(arrays);
        tracing::debug!(
            pass = kind.name(),
            arrays = arrays.len(),
            elements = total,
            distinct = map.len(),
            "relabel_pass"
        );
        map
    }

    /// Ascending indices of the non-zero elements of `mask`.
    pub fn nonzero<T: PassSelect>(&self, mask: &[T]) -> Vec<T> {
        let (table, kind) = self.select::<T>(mask.len());
        let out = (table.nonzero)(mask);
        tracing::debug!(pass = kind.name(), len = mask.len(), hits = out.len(), "nonzero_pass");
        out
    }
}

//! # fastIdArray: Parallel identifier-array kernels for Rust
//!
//! Rayon-based execution for the [`idarray`] kernel. The kernel built here is
//! the ordinary `idarray::Kernel` with parallel passes installed: elementwise
//! arithmetic, construction, concatenation and width casts run as chunked
//! fork-join tasks, `relabel` builds its map sequentially and rewrites the
//! arrays in parallel, and `nonzero` counts, scans and fills in parallel.
//! Results are bit-identical to the sequential kernel.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastIdArray::prelude::*;
//!
//! let kernel = IdKernel::new().build()?;
//!
//! let ids = kernel.range(0_i64, 100_000_i64)?;
//! let shifted = kernel.binary_scalar(Sub, &ids, 99_998_i64)?;
//! let tail = kernel.binary_scalar(GE, &shifted, 0_i64)?;
//! assert_eq!(kernel.nonzero(&tail)?.to_vec_i64(), vec![99_998, 99_999]);
//! # Result::<(), IdArrayError>::Ok(())
//! ```
//!
//! ### ndarray Inputs
//!
//! ```rust
//! use fastIdArray::prelude::*;
//! use ndarray::array;
//!
//! let kernel = IdKernel::new().build()?;
//! let mask = array![0_i32, 3, 0, 1].to_id_array()?;
//! assert_eq!(kernel.nonzero(&mask)?.to_vec_i64(), vec![1, 3]);
//! # Result::<(), IdArrayError>::Ok(())
//! ```
//!
//! ## Parallel Threshold
//!
//! Arrays shorter than `parallel_threshold` (default 4096 elements) run the
//! sequential passes. Set `.parallel(false)` to disable parallel passes.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel passes.
mod engine;

// High-level fluent API with parallel execution.
mod api;

// Input data handling.
mod input;

// Standard fastIdArray prelude.
pub mod prelude {
    pub use crate::api::{
        BinaryOp,
        BinaryOp::{Add, Div, EQ, GE, GT, LE, LT, Mul, NE, Sub},
        DeviceContext, DeviceType, IdArray, IdArrayError, IdBuffer, IdType, Kernel,
        ParallelKernelBuilder as IdKernel, Scalar, UnaryOp,
        UnaryOp::Neg,
        Width,
    };
    pub use crate::input::{IdInput, to_ndarray};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}

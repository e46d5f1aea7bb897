//! # idarray: Width-polymorphic identifier arrays for Rust
//!
//! A small numeric kernel over 1-dimensional integer arrays, used as the
//! compute substrate for identifier arrays in graph processing. Every
//! operation is written once and runs on both 32-bit and 64-bit storage; the
//! width is a runtime tag carried by each [`IdArray`](prelude::IdArray).
//!
//! ## Operations
//!
//! * **Elementwise**: `Add`, `Sub`, `Mul`, `Div`, comparisons (`GT`, `LT`,
//!   `GE`, `LE`, `EQ`, `NE`) and `Neg`, between arrays or against a scalar.
//! * **Construction**: `full` and `range`.
//! * **Structural**: `hstack` and `as_num_bits`.
//! * **Relabel**: dense first-occurrence compaction across a batch of arrays.
//! * **NonZero**: ascending indices of the non-zero elements of a mask.
//!
//! ## Quick Start
//!
//! ```rust
//! use idarray::prelude::*;
//!
//! let kernel = IdKernel::new().build()?;
//!
//! let a = IdArray::from_vec(vec![1_i64, 2, 3, 4]);
//! let b = kernel.full(10_i64, 4)?;
//!
//! let sum = kernel.binary(Add, &a, &b)?;
//! assert_eq!(sum.to_vec_i64(), vec![11, 12, 13, 14]);
//!
//! let mask = kernel.binary_scalar(GT, &sum, 12_i64)?;
//! let hits = kernel.nonzero(&mask)?;
//! assert_eq!(hits.to_vec_i64(), vec![2, 3]);
//! # Result::<(), IdArrayError>::Ok(())
//! ```
//!
//! ### Relabeling
//!
//! ```rust
//! use idarray::prelude::*;
//!
//! let kernel = IdKernel::new().build()?;
//!
//! let mut arrays = vec![
//!     IdArray::from_vec(vec![30_i32, 10]),
//!     IdArray::from_vec(vec![20_i32, 10, 30]),
//! ];
//! let map = kernel.relabel(&mut arrays)?;
//!
//! assert_eq!(arrays[0].to_vec_i64(), vec![0, 1]);
//! assert_eq!(arrays[1].to_vec_i64(), vec![2, 1, 0]);
//! assert_eq!(map.to_vec_i64(), vec![30, 10, 20]);
//! # Result::<(), IdArrayError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<IdArray, IdArrayError>`. Preconditions are
//! checked before any work is done, so a failed call never returns a partial
//! array:
//!
//! ```rust
//! use idarray::prelude::*;
//!
//! let kernel = IdKernel::new().build()?;
//! let a = IdArray::from_vec(vec![1_i32, 2, 3]);
//! let b = IdArray::from_vec(vec![1_i32, 2]);
//!
//! match kernel.binary(Add, &a, &b) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => eprintln!("Operation failed: {}", e),
//! }
//!
//! assert!(matches!(
//!     kernel.range(5_i64, 3_i64),
//!     Err(IdArrayError::InvalidRange { low: 5, high: 3 })
//! ));
//! # Result::<(), IdArrayError>::Ok(())
//! ```
//!
//! ## Arithmetic
//!
//! `Add`, `Sub`, `Mul`, `Neg` and `Div` wrap on overflow in two's complement.
//! Division by zero is not checked and panics like native integer division.
//! Narrowing a 64-bit array to 32 bits keeps the low 32 bits of every element.
//!
//! ## Parallel Execution
//!
//! This crate contains the sequential reference passes. The `fastIdArray`
//! crate installs rayon-based passes into the same kernel and produces
//! bit-identical results.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! idarray = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - the scalar operator catalog.
mod math;

// Layer 3: Algorithms - sequential passes, generic over the element type.
mod algorithms;

// Layer 4: Engine - validation, pass selection and width dispatch.
mod engine;

// High-level fluent API for identifier-array kernels.
mod api;

// Standard idarray prelude.
pub mod prelude {
    pub use crate::api::{
        BinaryOp::Add,
        BinaryOp::Div,
        BinaryOp::EQ,
        BinaryOp::GE,
        BinaryOp::GT,
        BinaryOp::LE,
        BinaryOp::LT,
        BinaryOp::Mul,
        BinaryOp::NE,
        BinaryOp::Sub,
        DeviceContext, DeviceType, IdArray, IdArrayError, IdBuffer, IdType, Kernel,
        KernelBuilder as IdKernel, Scalar,
        UnaryOp::Neg,
    };
    pub use crate::api::{BinaryOp, UnaryOp};
    pub use crate::primitives::width::Width;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure scalar functions the elementwise passes are
//! parametrized by.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Operator catalog.
pub mod arith;

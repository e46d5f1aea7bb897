//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the sequential reference pass of every operation,
//! each written once over `T: IdType`.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Full and range construction.
pub mod construction;

/// Elementwise passes.
pub mod elementwise;

/// Mask-to-index extraction.
pub mod nonzero;

/// Dense relabeling.
pub mod relabel;

/// Concatenation and width conversion.
pub mod structural;

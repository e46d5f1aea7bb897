//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates operands, selects between the sequential passes and
//! any injected replacements, and routes runtime width tags to the `i32` and
//! `i64` instantiations of every algorithm.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Runtime width routing over array handles.
pub mod dispatch;

/// Pass tables and the typed executor.
pub mod executor;

/// Validation utilities.
pub mod validator;

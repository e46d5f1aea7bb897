//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data types shared by every other layer: the
//! array handle, width tags, device tags, errors and the ordered id map.
//! It has zero internal dependencies outside itself.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Typed array handle.
pub mod array;

/// Execution context tags.
pub mod context;

/// Shared error types.
pub mod errors;

/// Insertion-ordered id map.
pub mod idmap;

/// Width tags and the element trait.
pub mod width;

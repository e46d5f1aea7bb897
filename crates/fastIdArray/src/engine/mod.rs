//! Layer 4: Engine
//!
//! This layer provides the parallel passes for identifier-array kernels.
//! It distributes chunks of every operation across the rayon thread pool.

// Parallel execution passes using CPU threads
pub mod executor;

//! Dense relabeling of identifiers.
//!
//! ## Purpose
//!
//! This module rewrites the ids stored across a batch of arrays into the
//! dense range `0..k`, in place, and returns the inverse (compaction) map.
//!
//! ## Design notes
//!
//! * **First occurrence wins**: Arrays are scanned in sequence order and each
//!   array in index order; an id's new label is the number of distinct ids
//!   seen before its first occurrence.
//! * **Single pass**: The sequential pass assigns and rewrites in the same scan.
//!   Whether an id is new depends on every id before it, so a parallel version
//!   must first build the full map sequentially and only then rewrite.
//!
//! ## Key concepts
//!
//! * **Compaction map**: `map[new_id] == original_id`.
//!
//! ## Invariants
//!
//! * After the pass, every element `e` at a position that held `v` satisfies
//!   `map[e] == v`.
//! * `map.len()` is the number of distinct ids across all arrays.
//!
//! ## Non-goals
//!
//! * This module does not validate that all arrays share a width.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::idmap::IdMap;
use crate::primitives::width::IdType;

/// Relabel `arrays` in place and return the compaction map.
pub fn relabel_pass<T: IdType>(arrays: &mut [&mut [T]]) -> Vec<T> {
    let mut map = IdMap::new();
    for arr in arrays.iter_mut() {
        for id in arr.iter_mut() {
            *id = map.get_or_insert(*id);
        }
    }
    map.into_order()
}

/// Build the compaction map without touching the arrays.
///
/// This is the sequential first phase of a two-phase relabel; the returned
/// map is immutable afterwards and may be shared by parallel rewriters.
pub fn build_map<T: IdType>(arrays: &[&mut [T]]) -> IdMap<T> {
    let mut map = IdMap::new();
    for arr in arrays {
        for &id in arr.iter() {
            map.get_or_insert(id);
        }
    }
    map
}

/// Rewrite `arr` through a completed map.
#[inline]
pub fn rewrite_pass<T: IdType>(arr: &mut [T], map: &IdMap<T>) {
    for id in arr.iter_mut() {
        if let Some(new_id) = map.get(id) {
            *id = new_id;
        }
    }
}

//! Insertion-ordered identifier map.
//!
//! ## Purpose
//!
//! This module provides [`IdMap`], the dictionary used by relabeling: it
//! assigns dense new ids `0, 1, 2, ...` to original ids in the order they are
//! first seen and remembers that order, which is exactly the compaction map.
//!
//! ## Design notes
//!
//! * **Two views**: A hash index (original -> new) plus an ordered list
//!   (new -> original). The list doubles as the returned map array.
//! * **No-std**: Falls back to `BTreeMap` when `std` is disabled.
//!
//! ## Invariants
//!
//! * `order[get(v)] == v` for every inserted `v`.
//! * New ids are assigned consecutively from zero.
//!
//! ## Non-goals
//!
//! * Removal of ids.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap as Index;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::HashMap as Index;

// Internal dependencies
use crate::primitives::width::IdType;

/// Map from original id to dense new id that remembers first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct IdMap<T: IdType> {
    index: Index<T, T>,
    order: Vec<T>,
}

impl<T: IdType> IdMap<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            index: Index::new(),
            order: Vec::new(),
        }
    }

    /// Return the new id of `id`, assigning the next one if `id` is unseen.
    #[inline]
    pub fn get_or_insert(&mut self, id: T) -> T {
        let order = &mut self.order;
        *self.index.entry(id).or_insert_with(|| {
            let new_id = T::from_index(order.len());
            order.push(id);
            new_id
        })
    }

    /// New id previously assigned to `id`.
    #[inline]
    pub fn get(&self, id: &T) -> Option<T> {
        self.index.get(id).copied()
    }

    /// Number of distinct ids seen.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no id has been seen.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Original ids in first-occurrence order (`result[new_id] == original`).
    pub fn into_order(self) -> Vec<T> {
        self.order
    }
}

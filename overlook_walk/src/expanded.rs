// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of node ids the user has opened.

use alloc::string::String;

use hashbrown::HashSet;

/// Expanded node ids with O(1) membership and a revision counter.
///
/// Owned by the embedding view and mutated only by explicit toggle actions;
/// the walker reads it but never writes it. The revision increments on
/// every effective mutation, letting hosts detect that an in-flight
/// traversal has been superseded.
///
/// # Example
///
/// ```rust
/// use overlook_walk::ExpandedSet;
///
/// let mut expanded = ExpandedSet::new();
/// assert!(expanded.toggle("root"));
/// assert!(expanded.contains("root"));
/// assert!(!expanded.toggle("root"));
/// assert!(!expanded.contains("root"));
/// assert_eq!(expanded.revision(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ExpandedSet {
    ids: HashSet<String>,
    revision: u64,
}

impl ExpandedSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the node id is expanded.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Marks a node id expanded. Returns `true` if it was newly inserted.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let inserted = self.ids.insert(id.into());
        if inserted {
            self.revision = self.revision.wrapping_add(1);
        }
        inserted
    }

    /// Collapses a node id. Returns `true` if it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.ids.remove(id);
        if removed {
            self.revision = self.revision.wrapping_add(1);
        }
        removed
    }

    /// Flips a node id. Returns `true` if the node is now expanded.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.ids.remove(&id) {
            self.revision = self.revision.wrapping_add(1);
            false
        } else {
            self.ids.insert(id);
            self.revision = self.revision.wrapping_add(1);
            true
        }
    }

    /// Collapses everything.
    pub fn clear(&mut self) {
        if !self.ids.is_empty() {
            self.ids.clear();
            self.revision = self.revision.wrapping_add(1);
        }
    }

    /// Number of expanded ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The revision counter, bumped on every effective mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Iterates over the expanded ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

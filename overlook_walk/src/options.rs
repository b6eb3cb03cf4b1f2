// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal policy configuration.

use core::cmp::Ordering;

/// Comparator for object keys.
///
/// `None` in [`WalkOptions::sort_keys`] preserves insertion order;
/// [`lexicographic`] is the stock comparator for sorted display.
pub type KeyComparator = fn(&str, &str) -> Ordering;

/// Plain lexicographic key ordering.
#[must_use]
pub fn lexicographic(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Absolute depth ceiling. Caller-supplied depths are clamped to this
/// regardless of configuration.
pub const MAX_DEPTH_CEILING: usize = 15;

/// Default maximum traversal depth.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Default hard cap on entries enumerated per level.
pub const DEFAULT_MAX_ITEMS_PER_LEVEL: usize = 300;

/// Default windowing threshold: levels with more surviving entries than
/// this are grouped into ranges.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Traversal policy: depth cap, per-level cap, windowing threshold, and
/// optional key ordering.
///
/// # Example
///
/// ```rust
/// use overlook_walk::{WalkOptions, lexicographic};
///
/// let options = WalkOptions::new()
///     .with_max_depth(4)
///     .with_chunk_size(50)
///     .with_sort_keys(lexicographic);
/// assert_eq!(options.max_depth(), 4);
///
/// // The depth cap is clamped to the absolute ceiling.
/// let capped = WalkOptions::new().with_max_depth(1_000);
/// assert_eq!(capped.max_depth(), overlook_walk::MAX_DEPTH_CEILING);
/// ```
#[derive(Clone, Debug)]
pub struct WalkOptions {
    max_depth: usize,
    max_items_per_level: usize,
    chunk_size: usize,
    sort_keys: Option<KeyComparator>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkOptions {
    /// Creates the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_items_per_level: DEFAULT_MAX_ITEMS_PER_LEVEL,
            chunk_size: DEFAULT_CHUNK_SIZE,
            sort_keys: None,
        }
    }

    /// Sets the maximum traversal depth, clamped to [`MAX_DEPTH_CEILING`].
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    /// Sets the hard per-level entry cap (at least 1).
    #[must_use]
    pub fn with_max_items_per_level(mut self, cap: usize) -> Self {
        self.max_items_per_level = cap.max(1);
        self
    }

    /// Sets the windowing threshold (at least 1).
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Sets an object-key comparator; `None` preserves insertion order.
    #[must_use]
    pub fn with_sort_keys(mut self, comparator: KeyComparator) -> Self {
        self.sort_keys = Some(comparator);
        self
    }

    /// The effective maximum depth.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The hard per-level entry cap.
    #[must_use]
    pub fn max_items_per_level(&self) -> usize {
        self.max_items_per_level
    }

    /// The windowing threshold.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The object-key comparator, if any.
    #[must_use]
    pub fn sort_keys(&self) -> Option<KeyComparator> {
        self.sort_keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_policy() {
        let options = WalkOptions::new();
        assert_eq!(options.max_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(options.max_items_per_level(), DEFAULT_MAX_ITEMS_PER_LEVEL);
        assert_eq!(options.chunk_size(), DEFAULT_CHUNK_SIZE);
        assert!(options.sort_keys().is_none());
    }

    #[test]
    fn max_depth_is_clamped_to_the_ceiling() {
        assert_eq!(
            WalkOptions::new().with_max_depth(usize::MAX).max_depth(),
            MAX_DEPTH_CEILING
        );
        assert_eq!(WalkOptions::new().with_max_depth(3).max_depth(), 3);
    }

    #[test]
    fn degenerate_sizes_are_raised_to_one() {
        let options = WalkOptions::new()
            .with_chunk_size(0)
            .with_max_items_per_level(0);
        assert_eq!(options.chunk_size(), 1);
        assert_eq!(options.max_items_per_level(), 1);
    }
}

// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index windows for large levels.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// A contiguous, inclusive index window summarizing sibling entries behind
/// one lazily expandable placeholder.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PageRange {
    /// First index in the window.
    pub from: usize,
    /// Last index in the window (inclusive).
    pub to: usize,
}

impl PageRange {
    /// Number of indices covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to - self.from + 1
    }

    /// Always `false`: windows cover at least one index.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Display label, e.g. `[100 .. 299]`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("[{} .. {}]", self.from, self.to)
    }

    /// The synthetic path segment identifying this window under its
    /// container, e.g. `100..299`.
    #[must_use]
    pub fn segment(&self) -> String {
        format!("{}..{}", self.from, self.to)
    }

    /// Shifts the window by an offset (used when sub-partitioning).
    #[must_use]
    pub fn offset(self, base: usize) -> Self {
        Self {
            from: self.from + base,
            to: self.to + base,
        }
    }
}

/// Partitions the index domain `[0, len - 1]` into windows.
///
/// Windows grow geometrically from both ends toward the middle: the first
/// and last windows are `chunk_size` wide, each following one doubles, and
/// the remainder lands in at most two middle windows. The result is
/// contiguous, non-overlapping, covers the domain exactly, and — for any
/// `len > chunk_size` — contains at least two windows, so re-partitioning
/// an opened window always makes progress.
///
/// # Example
///
/// ```rust
/// use overlook_walk::partition_ranges;
///
/// let ranges = partition_ranges(1000, 100);
/// let bounds: Vec<(usize, usize)> = ranges.iter().map(|r| (r.from, r.to)).collect();
/// assert_eq!(
///     bounds,
///     [(0, 99), (100, 299), (300, 699), (700, 899), (900, 999)]
/// );
/// ```
#[must_use]
pub fn partition_ranges(len: usize, chunk_size: usize) -> Vec<PageRange> {
    let chunk = chunk_size.max(1);
    let mut front: Vec<PageRange> = Vec::new();
    let mut back: Vec<PageRange> = Vec::new();

    let mut lo = 0_usize;
    let mut hi = len;
    let mut window = chunk;

    while lo < hi {
        let remaining = hi - lo;
        if remaining <= window.saturating_mul(2) {
            // At most two windows left; emit them front-to-back.
            let take = window.min(remaining);
            front.push(PageRange {
                from: lo,
                to: lo + take - 1,
            });
            lo += take;
            if lo < hi {
                front.push(PageRange {
                    from: lo,
                    to: hi - 1,
                });
            }
            break;
        }
        front.push(PageRange {
            from: lo,
            to: lo + window - 1,
        });
        lo += window;
        back.push(PageRange {
            from: hi - window,
            to: hi - 1,
        });
        hi -= window;
        window = window.saturating_mul(2);
    }

    front.extend(back.into_iter().rev());
    front
}

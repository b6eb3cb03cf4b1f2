// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cache adapter boundary.
//!
//! The explorer inspects entries of some external cache without knowing
//! which one. This module is trait-only: no cache is implemented here, and
//! the explorer core never calls it — hosts (and the demo) wire an adapter
//! to explorers themselves.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use overlook_value::Value;

/// Lifecycle state of a cached entry's data.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EntryStatus {
    /// No data yet.
    Pending,
    /// The last attempt failed.
    Error,
    /// Data is present.
    Success,
}

/// Whether a fetch is currently running for an entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FetchStatus {
    /// A fetch is in flight.
    Fetching,
    /// A fetch wants to run but is held back.
    Paused,
    /// Nothing in flight.
    Idle,
}

/// Snapshot of one cached entry as the adapter exposes it.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    /// Serialized cache key, unique within the adapter.
    pub key: String,
    /// The cached data, if any.
    pub data: Option<Value>,
    /// Lifecycle state of the data.
    pub status: EntryStatus,
    /// Whether a fetch is in flight.
    pub fetch_status: FetchStatus,
    /// Milliseconds since the Unix epoch of the last update.
    pub updated_at: i64,
    /// Message of the last failure, if the entry is in error.
    pub error: Option<String>,
    /// Number of live observers.
    pub observer_count: usize,
    /// Whether the data is older than its freshness window.
    pub is_stale: bool,
    /// Whether the entry's fetching is disabled.
    pub is_disabled: bool,
}

/// Token returned by [`CacheAdapter::subscribe`], passed back to
/// [`CacheAdapter::unsubscribe`].
pub type SubscriptionId = u64;

/// The external cache, seen through the narrowest interface the explorer
/// surface needs.
pub trait CacheAdapter {
    /// Snapshots of all entries, in the adapter's own order.
    fn entries(&self) -> Vec<CacheEntry>;

    /// Snapshot of the entry with the given key, if present.
    fn find(&self, key: &str) -> Option<CacheEntry>;

    /// Registers a change observer; the adapter calls it after any entry
    /// changes.
    fn subscribe(&mut self, on_change: Box<dyn FnMut()>) -> SubscriptionId;

    /// Drops a previously registered observer. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);

    /// Marks an entry stale so the next observer triggers a refetch.
    fn invalidate(&mut self, key: &str);

    /// Resets an entry to its initial state.
    fn reset(&mut self, key: &str);

    /// Removes an entry from the cache.
    fn remove(&mut self, key: &str);

    /// Forces an immediate refetch of an entry.
    fn refetch(&mut self, key: &str);

    /// Replaces an entry's data directly.
    fn set_data(&mut self, key: &str, value: Value);
}

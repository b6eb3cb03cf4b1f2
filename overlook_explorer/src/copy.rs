// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The external copy destination.

use alloc::string::String;
use alloc::vec::Vec;

/// Destination for copied node text (typically a platform clipboard).
///
/// A sink may reject: returning `false` reports the failure to the
/// explorer, which surfaces it as a transient status note instead of
/// panicking or swallowing it.
pub trait CopySink {
    /// Accepts serialized text. Returns `false` if the sink rejected it.
    fn receive(&mut self, text: &str) -> bool;
}

/// An in-memory sink that keeps everything it receives.
///
/// Used by tests and demos; hosts with a real clipboard implement
/// [`CopySink`] themselves.
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    /// Every accepted text, oldest first.
    pub received: Vec<String>,
}

impl BufferSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CopySink for BufferSink {
    fn receive(&mut self, text: &str) -> bool {
        self.received.push(text.into());
        true
    }
}

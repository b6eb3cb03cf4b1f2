// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient status notes.

use alloc::string::String;

/// A short-lived message the explorer shows after a failed mutation or
/// copy.
///
/// Owned by the explorer and cleared automatically after its tick budget
/// runs out; hosts call [`Explorer::tick`](crate::Explorer::tick) from
/// their frame or timer loop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusNote {
    message: String,
    remaining_ticks: u32,
}

impl StatusNote {
    pub(crate) fn new(message: impl Into<String>, ticks: u32) -> Self {
        Self {
            message: message.into(),
            remaining_ticks: ticks,
        }
    }

    /// The message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Ticks left before the note clears itself.
    #[must_use]
    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    /// Counts down one tick; returns `true` once expired.
    pub(crate) fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}

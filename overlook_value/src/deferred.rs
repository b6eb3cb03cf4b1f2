// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazily computed values whose forcing may fail.
//!
//! [`DeferredValue`] is the Rust rendition of "a getter that may throw": a
//! child position whose value is produced on demand by a closure. Forcing
//! can fail with an [`AccessError`], which traversal converts into an inline
//! error leaf rather than aborting.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::value::Value;

/// A failure to produce a value on access.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessError {
    message: String,
}

impl AccessError {
    /// Creates an access error with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value access failed: {}", self.message)
    }
}

impl core::error::Error for AccessError {}

/// A lazily computed value.
///
/// The closure runs on every [`force`](Self::force); this type does not
/// memoize, matching sources whose accessors can return different results
/// (or start failing) between reads.
///
/// # Example
///
/// ```rust
/// use overlook_value::{AccessError, DeferredValue, Value};
///
/// let ok = DeferredValue::new(|| Ok(Value::Number(1.0)));
/// assert_eq!(ok.force().unwrap(), Value::Number(1.0));
///
/// let hostile = DeferredValue::new(|| Err(AccessError::new("revoked proxy")));
/// assert!(hostile.force().is_err());
/// ```
#[derive(Clone)]
pub struct DeferredValue {
    produce: Rc<dyn Fn() -> Result<Value, AccessError>>,
}

impl DeferredValue {
    /// Wraps a producer closure.
    #[must_use]
    pub fn new(produce: impl Fn() -> Result<Value, AccessError> + 'static) -> Self {
        Self {
            produce: Rc::new(produce),
        }
    }

    /// Runs the producer once.
    pub fn force(&self) -> Result<Value, AccessError> {
        (self.produce)()
    }

    /// Returns `true` if both wrap the same closure.
    #[must_use]
    pub fn same_closure(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.produce, &other.produce)
    }
}

impl fmt::Debug for DeferredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredValue").finish_non_exhaustive()
    }
}

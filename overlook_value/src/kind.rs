// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value classification.
//!
//! [`classify`] maps every [`Value`] to a [`ValueKind`]. In dynamically
//! typed sources this classification is an ordered chain of runtime checks
//! whose order matters (arrays are also iterable, maps and sets are also
//! objects). Here the overlaps are resolved structurally by the closed enum,
//! and the precedence is preserved as a documented invariant: the specific
//! container kinds ([`ValueKind::Array`], [`ValueKind::Map`],
//! [`ValueKind::Set`]) always win over the generic [`ValueKind::Iterable`],
//! which wins over the [`ValueKind::Object`] fallback.

use crate::value::Value;

/// The semantic kind of a value.
///
/// Closed and total: every [`Value`] classifies to exactly one kind.
/// [`ValueKind::Circular`] is never produced by [`classify`]; traversal
/// assigns it when a container reappears in its own ancestor chain.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    /// An explicit null.
    Null,
    /// A missing value.
    Undefined,
    /// A boolean.
    Bool,
    /// A double-precision number.
    Number,
    /// A large integer.
    BigInt,
    /// A string.
    Text,
    /// A symbol.
    Symbol,
    /// A timestamp.
    Date,
    /// A regular expression.
    Regexp,
    /// An error-like value.
    Error,
    /// A function.
    Function,
    /// An ordered sequence.
    Array,
    /// String-keyed entries.
    Object,
    /// Arbitrary-keyed pairs.
    Map,
    /// Positional distinct elements.
    Set,
    /// A generic iterable snapshot.
    Iterable,
    /// A lazily computed value, not yet forced.
    Deferred,
    /// A container revisited along its own ancestor chain.
    Circular,
}

impl ValueKind {
    /// A lowercase display name, stable across releases.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Undefined => "undefined",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::Text => "string",
            Self::Symbol => "symbol",
            Self::Date => "date",
            Self::Regexp => "regexp",
            Self::Error => "error",
            Self::Function => "function",
            Self::Array => "array",
            Self::Object => "object",
            Self::Map => "map",
            Self::Set => "set",
            Self::Iterable => "iterable",
            Self::Deferred => "deferred",
            Self::Circular => "circular",
        }
    }

    /// Returns `true` for kinds whose values have enumerable children.
    ///
    /// [`ValueKind::Circular`] is not a container kind: a circular leaf is
    /// never descended into.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::Array | Self::Object | Self::Map | Self::Set | Self::Iterable
        )
    }
}

/// Classifies a value. Pure and total; never panics.
///
/// # Example
///
/// ```rust
/// use overlook_value::{Value, ValueKind, classify};
///
/// assert_eq!(classify(&Value::Null), ValueKind::Null);
/// assert_eq!(classify(&Value::array([])), ValueKind::Array);
/// assert_eq!(classify(&Value::map([])), ValueKind::Map);
/// ```
#[must_use]
pub fn classify(value: &Value) -> ValueKind {
    // Precedence: specific containers before Iterable before the Object
    // fallback. The match arms are ordered to mirror that chain even though
    // the closed enum makes them disjoint.
    match value {
        Value::Array(_) => ValueKind::Array,
        Value::Map(_) => ValueKind::Map,
        Value::Set(_) => ValueKind::Set,
        Value::Iterable(_) => ValueKind::Iterable,
        Value::Object(_) => ValueKind::Object,
        Value::Null => ValueKind::Null,
        Value::Undefined => ValueKind::Undefined,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::BigInt(_) => ValueKind::BigInt,
        Value::Text(_) => ValueKind::Text,
        Value::Symbol(_) => ValueKind::Symbol,
        Value::Date(_) => ValueKind::Date,
        Value::Regexp(_) => ValueKind::Regexp,
        Value::Error(_) => ValueKind::Error,
        Value::Function(_) => ValueKind::Function,
        Value::Deferred(_) => ValueKind::Deferred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn classifies_every_scalar_kind() {
        assert_eq!(classify(&Value::Null), ValueKind::Null);
        assert_eq!(classify(&Value::Undefined), ValueKind::Undefined);
        assert_eq!(classify(&Value::Bool(true)), ValueKind::Bool);
        assert_eq!(classify(&Value::Number(1.5)), ValueKind::Number);
        assert_eq!(classify(&Value::BigInt(10)), ValueKind::BigInt);
        assert_eq!(classify(&Value::text("s")), ValueKind::Text);
        assert_eq!(classify(&Value::Symbol("desc".into())), ValueKind::Symbol);
        assert_eq!(classify(&Value::Date(0)), ValueKind::Date);
        assert_eq!(classify(&Value::Regexp("a+".into())), ValueKind::Regexp);
        assert_eq!(classify(&Value::error("E", "m")), ValueKind::Error);
        assert_eq!(classify(&Value::Function("f".into())), ValueKind::Function);
    }

    #[test]
    fn specific_containers_win_over_iterable_and_object() {
        // An array is iterable and object-like in dynamic sources; the
        // specific kind must win.
        assert_eq!(classify(&Value::array([])), ValueKind::Array);
        assert_eq!(classify(&Value::map(vec![])), ValueKind::Map);
        assert_eq!(classify(&Value::set([])), ValueKind::Set);
        assert_eq!(classify(&Value::iterable([])), ValueKind::Iterable);
        assert_eq!(classify(&Value::object(vec![])), ValueKind::Object);
    }

    #[test]
    fn container_predicate_matches_enumerable_kinds() {
        assert!(ValueKind::Array.is_container());
        assert!(ValueKind::Object.is_container());
        assert!(ValueKind::Map.is_container());
        assert!(ValueKind::Set.is_container());
        assert!(ValueKind::Iterable.is_container());
        assert!(!ValueKind::Circular.is_container());
        assert!(!ValueKind::Text.is_container());
        assert!(!ValueKind::Deferred.is_container());
    }

    #[test]
    fn names_are_lowercase_and_distinct() {
        let kinds = [
            ValueKind::Null,
            ValueKind::Undefined,
            ValueKind::Bool,
            ValueKind::Number,
            ValueKind::BigInt,
            ValueKind::Text,
            ValueKind::Symbol,
            ValueKind::Date,
            ValueKind::Regexp,
            ValueKind::Error,
            ValueKind::Function,
            ValueKind::Array,
            ValueKind::Object,
            ValueKind::Map,
            ValueKind::Set,
            ValueKind::Iterable,
            ValueKind::Deferred,
            ValueKind::Circular,
        ];
        for (i, a) in kinds.iter().enumerate() {
            assert_eq!(a.name(), a.name().to_lowercase());
            for b in &kinds[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}

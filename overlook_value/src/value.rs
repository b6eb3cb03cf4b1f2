// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Value`] enum: scalars plus shared container cells.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::deferred::{AccessError, DeferredValue};

/// How many [`DeferredValue`] links [`Value::resolved`] follows before
/// giving up on a chain as non-terminating.
const MAX_DEFERRED_CHAIN: usize = 8;

/// Identity of a container cell.
///
/// Two [`Value`]s share an identity exactly when they are shallow clones of
/// the same container cell. Identity comparison is the only legal cycle
/// test: structural equality on a cyclic graph does not terminate.
///
/// A `ValueId` is only meaningful while the cell it was taken from is alive;
/// it must not be stored beyond one traversal pass.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ValueId(usize);

/// Name and message of an error-like value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorValue {
    /// Error class name, e.g. `"TypeError"`.
    pub name: String,
    /// Human-readable message.
    pub message: String,
}

/// A dynamic value: the arbitrary runtime data an explorer inspects.
///
/// Container variants hold `Rc<RefCell<...>>` cells: cloning a container
/// `Value` clones the handle, not the contents, so a graph can reference the
/// same cell from several positions — including its own descendants, which
/// is how cyclic input arises.
///
/// # Example
///
/// ```rust
/// use overlook_value::Value;
///
/// let shared = Value::array([Value::Number(1.0)]);
/// let root = Value::object([
///     ("left".into(), shared.clone()),
///     ("right".into(), shared.clone()),
/// ]);
///
/// // Both entries point at the same cell.
/// let (left, right) = match &root {
///     Value::Object(cell) => {
///         let entries = cell.borrow();
///         (entries[0].1.clone(), entries[1].1.clone())
///     }
///     _ => unreachable!(),
/// };
/// assert_eq!(left.identity(), right.identity());
/// ```
#[derive(Clone)]
pub enum Value {
    /// An explicit null.
    Null,
    /// A missing value, distinct from null.
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An arbitrarily large integer, bounded here to `i128`.
    BigInt(i128),
    /// A string.
    Text(String),
    /// A symbol, carrying its description.
    Symbol(String),
    /// A timestamp in milliseconds since the Unix epoch.
    Date(i64),
    /// A regular expression, carrying its source.
    Regexp(String),
    /// An error-like value.
    Error(ErrorValue),
    /// A function, carrying its name. Opaque: never traversed.
    Function(String),
    /// An ordered sequence of values.
    Array(Rc<RefCell<Vec<Value>>>),
    /// Insertion-ordered string-keyed entries.
    Object(Rc<RefCell<Vec<(String, Value)>>>),
    /// Insertion-ordered key/value pairs with arbitrary keys.
    Map(Rc<RefCell<Vec<(Value, Value)>>>),
    /// Insertion-ordered distinct elements, addressed positionally.
    Set(Rc<RefCell<Vec<Value>>>),
    /// A snapshot of some other iterable's items, addressed positionally.
    Iterable(Rc<RefCell<Vec<Value>>>),
    /// A lazily computed value; forcing it may fail.
    Deferred(DeferredValue),
}

impl Value {
    /// Creates an array from an iterator of items.
    #[must_use]
    pub fn array(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Creates an object from an iterator of `(key, value)` entries.
    ///
    /// Entry order is preserved; duplicate keys are kept as-is (the data
    /// model records what it was given).
    #[must_use]
    pub fn object(entries: impl IntoIterator<Item = (String, Self)>) -> Self {
        Self::Object(Rc::new(RefCell::new(entries.into_iter().collect())))
    }

    /// Creates a map from an iterator of `(key, value)` pairs.
    #[must_use]
    pub fn map(pairs: impl IntoIterator<Item = (Self, Self)>) -> Self {
        Self::Map(Rc::new(RefCell::new(pairs.into_iter().collect())))
    }

    /// Creates a set from an iterator of elements.
    #[must_use]
    pub fn set(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Set(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Creates an iterable snapshot from an iterator of items.
    #[must_use]
    pub fn iterable(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Iterable(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Creates a string value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates an error-like value.
    #[must_use]
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error(ErrorValue {
            name: name.into(),
            message: message.into(),
        })
    }

    /// Creates a deferred value from a closure.
    #[must_use]
    pub fn deferred(f: impl Fn() -> Result<Self, AccessError> + 'static) -> Self {
        Self::Deferred(DeferredValue::new(f))
    }

    /// Returns the identity of this value's container cell, if it has one.
    ///
    /// Scalars and [`Value::Deferred`] have no identity.
    #[must_use]
    pub fn identity(&self) -> Option<ValueId> {
        match self {
            Self::Array(cell) | Self::Set(cell) | Self::Iterable(cell) => {
                Some(ValueId(Rc::as_ptr(cell) as usize))
            }
            Self::Object(cell) => Some(ValueId(Rc::as_ptr(cell) as usize)),
            Self::Map(cell) => Some(ValueId(Rc::as_ptr(cell) as usize)),
            _ => None,
        }
    }

    /// Returns the number of direct children, if this is a container.
    #[must_use]
    pub fn child_count(&self) -> Option<usize> {
        match self {
            Self::Array(cell) | Self::Set(cell) | Self::Iterable(cell) => {
                Some(cell.borrow().len())
            }
            Self::Object(cell) => Some(cell.borrow().len()),
            Self::Map(cell) => Some(cell.borrow().len()),
            _ => None,
        }
    }

    /// Follows [`Value::Deferred`] links until a concrete value is reached.
    ///
    /// Non-deferred values resolve to a clone of themselves. A chain longer
    /// than a small fixed limit is treated as non-terminating and reported
    /// as an [`AccessError`].
    pub fn resolved(&self) -> Result<Self, AccessError> {
        let mut current = self.clone();
        for _ in 0..MAX_DEFERRED_CHAIN {
            match current {
                Self::Deferred(d) => current = d.force()?,
                other => return Ok(other),
            }
        }
        Err(AccessError::new("deferred chain did not terminate"))
    }
}

impl PartialEq for Value {
    /// Structural equality.
    ///
    /// Container contents are compared element-wise; [`Value::Deferred`]
    /// compares by closure identity. Must not be used on cyclic graphs —
    /// it recurses through container contents without a cycle guard.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) | (Self::Undefined, Self::Undefined) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::Text(a), Self::Text(b)) | (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Regexp(a), Self::Regexp(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            (Self::Array(a), Self::Array(b))
            | (Self::Set(a), Self::Set(b))
            | (Self::Iterable(a), Self::Iterable(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Map(a), Self::Map(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Deferred(a), Self::Deferred(b)) => a.same_closure(b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    /// Non-recursive debug rendering: kind plus child count for containers.
    ///
    /// Deliberately shallow so that debug-printing a cyclic graph
    /// terminates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Undefined => f.write_str("Undefined"),
            Self::Bool(b) => write!(f, "Bool({b})"),
            Self::Number(n) => write!(f, "Number({n})"),
            Self::BigInt(n) => write!(f, "BigInt({n})"),
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Symbol(s) => write!(f, "Symbol({s:?})"),
            Self::Date(ms) => write!(f, "Date({ms})"),
            Self::Regexp(s) => write!(f, "Regexp({s:?})"),
            Self::Error(e) => write!(f, "Error({}: {})", e.name, e.message),
            Self::Function(name) => write!(f, "Function({name:?})"),
            Self::Array(cell) => write!(f, "Array(len={})", cell.borrow().len()),
            Self::Object(cell) => write!(f, "Object(len={})", cell.borrow().len()),
            Self::Map(cell) => write!(f, "Map(len={})", cell.borrow().len()),
            Self::Set(cell) => write!(f, "Set(len={})", cell.borrow().len()),
            Self::Iterable(cell) => write!(f, "Iterable(len={})", cell.borrow().len()),
            Self::Deferred(_) => f.write_str("Deferred"),
        }
    }
}

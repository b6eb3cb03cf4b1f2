// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Short single-line previews.
//!
//! [`preview`] renders any value as a truncated one-line summary for
//! collapsed rows, max-depth leaves, and copy confirmations. It never fails:
//! containers summarize by count without recursing, and a failing deferred
//! value previews as its error.

use alloc::format;
use alloc::string::String;

use crate::value::Value;

/// Maximum number of characters in a preview before truncation.
pub const MAX_PREVIEW_LEN: usize = 60;

/// Renders a short single-line summary of a value.
///
/// Containers are summarized by their direct child count; their contents
/// are never visited, so previewing a cyclic graph terminates.
///
/// # Example
///
/// ```rust
/// use overlook_value::{Value, preview};
///
/// assert_eq!(preview(&Value::Number(3.0)), "3");
/// assert_eq!(preview(&Value::text("hi")), "\"hi\"");
/// assert_eq!(preview(&Value::array([Value::Null, Value::Null])), "[2 items]");
/// ```
#[must_use]
pub fn preview(value: &Value) -> String {
    let text = match value {
        Value::Null => String::from("null"),
        Value::Undefined => String::from("undefined"),
        Value::Bool(b) => format!("{b}"),
        Value::Number(n) => number_preview(*n),
        Value::BigInt(n) => format!("{n}n"),
        Value::Text(s) => format!("{s:?}"),
        Value::Symbol(desc) => format!("Symbol({desc})"),
        Value::Date(ms) => format!("Date({ms})"),
        Value::Regexp(src) => format!("/{src}/"),
        Value::Error(e) => format!("{}: {}", e.name, e.message),
        Value::Function(name) => format!("fn {name}()"),
        Value::Array(cell) => count_preview("item", cell.borrow().len(), "[", "]"),
        Value::Object(cell) => count_preview("entr", cell.borrow().len(), "{", "}"),
        Value::Map(cell) => format!("Map({})", cell.borrow().len()),
        Value::Set(cell) => format!("Set({})", cell.borrow().len()),
        Value::Iterable(cell) => format!("Iterable({})", cell.borrow().len()),
        // `resolved` follows the whole chain with a bound, so a
        // non-terminating deferred chain previews as an error.
        Value::Deferred(_) => match value.resolved() {
            Ok(resolved) => return preview(&resolved),
            Err(err) => format!("[{err}]"),
        },
    };
    truncate(text)
}

fn number_preview(n: f64) -> String {
    if n % 1.0 == 0.0 && n.is_finite() && n.abs() < 1e15 {
        #[expect(clippy::cast_possible_truncation, reason = "magnitude checked above")]
        return format!("{}", n as i64);
    }
    format!("{n}")
}

fn count_preview(noun: &str, count: usize, open: &str, close: &str) -> String {
    // "entr" pluralizes to entry/entries, "item" to item/items.
    let suffix = match (noun, count) {
        ("entr", 1) => "y",
        ("entr", _) => "ies",
        (_, 1) => "",
        _ => "s",
    };
    format!("{open}{count} {noun}{suffix}{close}")
}

fn truncate(text: String) -> String {
    if text.chars().count() <= MAX_PREVIEW_LEN {
        return text;
    }
    let head: String = text.chars().take(MAX_PREVIEW_LEN - 1).collect();
    format!("{head}\u{2026}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn scalar_previews() {
        assert_eq!(preview(&Value::Null), "null");
        assert_eq!(preview(&Value::Undefined), "undefined");
        assert_eq!(preview(&Value::Bool(false)), "false");
        assert_eq!(preview(&Value::BigInt(42)), "42n");
        assert_eq!(preview(&Value::Symbol("tag".into())), "Symbol(tag)");
        assert_eq!(preview(&Value::Regexp("a+b".into())), "/a+b/");
        assert_eq!(preview(&Value::error("TypeError", "nope")), "TypeError: nope");
        assert_eq!(preview(&Value::Function("go".into())), "fn go()");
    }

    #[test]
    fn integral_numbers_drop_the_fraction() {
        assert_eq!(preview(&Value::Number(3.0)), "3");
        assert_eq!(preview(&Value::Number(-2.0)), "-2");
        assert_eq!(preview(&Value::Number(1.5)), "1.5");
    }

    #[test]
    fn container_previews_count_children() {
        assert_eq!(preview(&Value::array([])), "[0 items]");
        assert_eq!(preview(&Value::array([Value::Null])), "[1 item]");
        assert_eq!(preview(&Value::object(vec![("a".into(), Value::Null)])), "{1 entry}");
        assert_eq!(
            preview(&Value::object(vec![
                ("a".into(), Value::Null),
                ("b".into(), Value::Null),
            ])),
            "{2 entries}"
        );
        assert_eq!(preview(&Value::set([Value::Null])), "Set(1)");
    }

    #[test]
    fn cyclic_container_preview_terminates() {
        let arr = Value::array([]);
        if let Value::Array(cell) = &arr {
            cell.borrow_mut().push(arr.clone());
        }
        assert_eq!(preview(&arr), "[1 item]");
    }

    #[test]
    fn long_text_truncates_with_ellipsis() {
        let long = "x".repeat(200);
        let p = preview(&Value::text(long));
        assert!(p.chars().count() <= MAX_PREVIEW_LEN);
        assert!(p.ends_with('\u{2026}'));
    }

    #[test]
    fn failing_deferred_previews_as_error() {
        let v = Value::deferred(|| Err(crate::AccessError::new("boom")));
        let p = preview(&v);
        assert!(p.contains("boom"));
    }

    #[test]
    fn successful_deferred_previews_its_result() {
        let v = Value::deferred(|| Ok(Value::Number(9.0)));
        assert_eq!(preview(&v), "9");
    }
}

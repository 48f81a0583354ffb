//! Iterable coercion: the single point that decides whether a value is
//! decomposed into children or tagged as a leaf.
//!
//! Coercion borrows from the inspected value instead of materializing
//! child sequences. The only synthetic shape is the map entry, which is
//! viewed as a two-element sequence (key then value) so that it tags as
//! a generic sequence when left intact and decomposes into key and
//! value when deep traversal descends into it.

use crate::value::Value;

/// One element of a coerced child sequence.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Child<'a> {
    /// An ordinary element.
    Value(&'a Value),
    /// A map entry viewed as the two-element sequence `[key, value]`.
    Entry(&'a Value, &'a Value),
}

impl<'a> Child<'a> {
    /// Resolves the tag this element contributes when it stays a leaf.
    pub(crate) fn tag(&self) -> &'a str {
        match *self {
            Child::Value(value) => value.tag(),
            // An intact entry is a generic two-element sequence.
            Child::Entry(..) => "Array",
        }
    }

    /// Coerces this element into its own child sequence, if it has one.
    pub(crate) fn children(&self) -> Option<Vec<Child<'a>>> {
        match *self {
            Child::Value(value) => children(value),
            Child::Entry(key, value) => Some(vec![Child::Value(key), Child::Value(value)]),
        }
    }
}

/// Returns the child sequence of a value, or `None` if the value is a
/// leaf.
///
/// Sequence-producing values yield their elements, maps yield their
/// entries, and plain objects yield their field values in key insertion
/// order. Labels delegate to the wrapped value; everything else is a
/// leaf.
pub(crate) fn children(value: &Value) -> Option<Vec<Child<'_>>> {
    match value {
        Value::List(items) | Value::Iterable(items) => {
            Some(items.iter().map(Child::Value).collect())
        }
        Value::Set(set) => Some(set.iter().map(Child::Value).collect()),
        Value::Map(map) => Some(map.iter().map(|(k, v)| Child::Entry(k, v)).collect()),
        Value::Object(object) => Some(object.values().map(Child::Value).collect()),
        Value::Labeled { value, .. } => children(value),
        _ => None,
    }
}

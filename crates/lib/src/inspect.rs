//! Public inspection API.
//!
//! Two entry points compose the pipeline `value → coercion → bounded
//! traversal → tag grouping`:
//!
//! - [`inspect_shallow`] classifies only the immediate children of a
//!   container (depth limit 1);
//! - [`inspect_deep`] descends into nested coercible children up to a
//!   configurable limit (default [`DEFAULT_MAX_DEPTH`]).
//!
//! Both fail with [`InspectError::NotCoercible`] when the top-level
//! value is not coercible. Configuration is an immutable [`Inspector`]
//! value rather than module state.

use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::InspectError;
use crate::value::Value;
use crate::{Result, coerce, walk};

/// Depth limit used by [`inspect_deep`] when no explicit bound is given.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Frequency statistics of tags: one entry per tag that occurred at
/// least once. The sum of counts equals the number of leaves the
/// traversal emitted.
pub type TagCounts = BTreeMap<String, usize>;

/// Resolves a value's tag.
///
/// Free-function form of [`Value::tag`], exported as part of the public
/// inspection surface.
///
/// # Examples
///
/// ```
/// use tagstat::{Value, get_tag};
///
/// assert_eq!(get_tag(&Value::Null), "Null");
/// assert_eq!(get_tag(&Value::Float(f64::NAN)), "Number");
/// ```
pub fn get_tag(value: &Value) -> &str {
    value.tag()
}

/// Immutable inspection configuration.
///
/// Carries the deep-inspection depth limit instead of keeping it in
/// process-wide state. The default limit is [`DEFAULT_MAX_DEPTH`]; a
/// limit of 0 means unlimited depth, which is safe here because values
/// are owned trees and cannot contain reference cycles.
///
/// # Examples
///
/// ```
/// use tagstat::{Inspector, Object, Value};
///
/// let mut point = Object::new();
/// point.set("x", 10).set("y", 20);
/// let point = Value::from(point);
///
/// let counts = Inspector::new().shallow(&point).unwrap();
/// assert_eq!(counts.get("Number"), Some(&2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspector {
    max_depth: usize,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    /// Creates an inspector with the default deep-inspection limit.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Creates an inspector with an explicit deep-inspection limit.
    ///
    /// A limit of 0 means unlimited depth.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the configured deep-inspection limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Classifies the immediate children of a container.
    ///
    /// Equivalent to a deep inspection with a depth limit of 1: a child
    /// that is itself coercible is tagged by its own type rather than
    /// decomposed.
    pub fn shallow(&self, value: &Value) -> Result<TagCounts> {
        self.run(value, 1)
    }

    /// Classifies the leaves reachable from a container, descending
    /// into nested coercible children up to the configured limit.
    ///
    /// Children sitting exactly at the limit are tagged as leaves even
    /// if they are further coercible.
    pub fn deep(&self, value: &Value) -> Result<TagCounts> {
        self.run(value, self.max_depth)
    }

    fn run(&self, value: &Value, max_depth: usize) -> Result<TagCounts> {
        let children = coerce::children(value).ok_or_else(|| InspectError::NotCoercible {
            value: value.to_string(),
        })?;
        let mut tags = Vec::new();
        walk::walk(&children, 0, max_depth, &mut tags);
        debug!(max_depth, leaves = tags.len(), "inspection complete");
        Ok(walk::group_count(tags))
    }
}

/// Classifies the immediate children of a container.
///
/// Fails with [`InspectError::NotCoercible`] when `value` is neither
/// sequence-producing nor a plain keyed structure.
///
/// # Examples
///
/// ```
/// use tagstat::{Object, Value, inspect_shallow};
///
/// let mut particle = Object::new();
/// particle
///     .set("x", 10)
///     .set("y", 20)
///     .set("exists", true)
///     .set("name", "p1");
///
/// let counts = inspect_shallow(&Value::from(particle)).unwrap();
/// assert_eq!(counts.get("Number"), Some(&2));
/// assert_eq!(counts.get("Boolean"), Some(&1));
/// assert_eq!(counts.get("String"), Some(&1));
/// ```
pub fn inspect_shallow(value: &Value) -> Result<TagCounts> {
    Inspector::new().shallow(value)
}

/// Classifies the leaves reachable from a container, descending up to
/// [`DEFAULT_MAX_DEPTH`] levels.
///
/// # Examples
///
/// ```
/// use tagstat::{Object, Value, inspect_deep};
///
/// let mut nested = Object::new();
/// nested.set("obj", Object::from_iter([("x", 10)]));
/// nested.set(
///     "arr",
///     vec![
///         Value::Int(1),
///         Value::Int(2),
///         Value::List(vec![Value::Int(3), Value::Int(4)]),
///     ],
/// );
///
/// let counts = inspect_deep(&Value::from(nested)).unwrap();
/// assert_eq!(counts.get("Number"), Some(&5));
/// ```
pub fn inspect_deep(value: &Value) -> Result<TagCounts> {
    Inspector::new().deep(value)
}

/// Classifies reachable leaves with an explicit depth limit.
///
/// A `max_depth` of 0 means unlimited depth. Unlimited traversal always
/// terminates: values are owned trees, so reference cycles cannot be
/// constructed.
pub fn inspect_deep_bounded(value: &Value, max_depth: usize) -> Result<TagCounts> {
    Inspector::with_max_depth(max_depth).deep(value)
}

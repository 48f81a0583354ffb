//! Insertion-ordered set of values.

use std::fmt;

use super::Value;

/// An insertion-ordered collection of distinct [`Value`]s.
///
/// Inserting an element equal to one already present is a no-op, so
/// duplicates collapse at construction time. Inspection then counts
/// each surviving element once, which is why a set built from
/// `[1, 1, 2, 2, 3]` reports three numbers, not five.
///
/// Distinctness uses `PartialEq`, so `Float(NaN)` elements never
/// collapse (NaN is not equal to itself).
///
/// # Examples
///
/// ```
/// use tagstat::Set;
///
/// let set: Set = [1, 1, 2, 2, 3].into_iter().collect();
/// assert_eq!(set.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Set {
    elements: Vec<Value>,
}

impl Set {
    /// Creates a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true if an equal element is already present.
    pub fn contains(&self, value: &Value) -> bool {
        self.elements.iter().any(|v| v == value)
    }

    /// Inserts an element, returning false if an equal one was already
    /// present.
    pub fn insert(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.elements.push(value);
        true
    }

    /// Iterates over elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.elements.iter()
    }
}

impl<V: Into<Value>> FromIterator<V> for Set {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = Set::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set {{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}

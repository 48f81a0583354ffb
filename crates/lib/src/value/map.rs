//! Insertion-ordered mapping keyed by arbitrary values.

use std::fmt;

use super::Value;

/// An insertion-ordered mapping from [`Value`] keys to [`Value`]s.
///
/// Unlike [`Object`](super::Object), keys may be any value, not just
/// strings. Inserting under an equal key replaces the value in place
/// (last write wins), keeping the key's original position.
///
/// A map's natural iteration during inspection yields its *entries*,
/// each viewed as a two-element sequence, so a shallow inspection of a
/// three-entry map reports `{"Array": 3}` rather than the tags of the
/// stored values.
///
/// # Examples
///
/// ```
/// use tagstat::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
/// assert_eq!(map.get(&Value::from("a")), Some(&Value::Int(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Map {
    entries: Vec<(Value, Value)>,
}

impl Map {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if an equal key is present.
    pub fn contains_key(&self, key: &Value) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Gets the value stored under an equal key.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Inserts an entry, returning the previous value if the key was
    /// already present.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes an entry by key, returning its value if present.
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates over `(key, value)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Map {{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key} => {value}")?;
        }
        write!(f, "}}")
    }
}

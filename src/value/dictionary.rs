//! Insertion-ordered mapping from [`Value`] keys to [`Value`]s.
//!
//! `Dictionary` is what [`Array::group_by`](crate::collection::Array::group_by)
//! produces and what [`Array::replace`](crate::collection::Array::replace)
//! consumes. Iteration follows the order in which keys were first inserted,
//! which keeps grouped output deterministic. Equality ignores that order:
//! two dictionaries are equal when they hold the same key/value associations.

use std::collections::HashMap;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use super::Value;

#[cfg(feature = "fxhash")]
type KeyHasher = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
type KeyHasher = std::hash::RandomState;

/// A mapping from keys to values that remembers insertion order.
///
/// # Examples
///
/// ```rust
/// use functional::value::{Dictionary, Value};
///
/// let dictionary = Dictionary::new()
///     .insert("one", 1)
///     .insert("two", 2);
///
/// assert_eq!(dictionary.get(&Value::from("two")), Some(&Value::from(2)));
/// assert_eq!(dictionary.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Dictionary {
    entries: Vec<(Value, Value)>,
    index: HashMap<Value, usize, KeyHasher>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a dictionary with `key` associated to `value`.
    ///
    /// An existing association for `key` is overwritten in place, keeping
    /// the key's original position.
    #[must_use]
    pub fn insert(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.insert_mut(key.into(), value.into());
        self
    }

    pub(crate) fn insert_mut(&mut self, key: Value, value: Value) {
        if let Some(&position) = self.index.get(&key) {
            self.entries[position].1 = value;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    /// Returns a mutable slot for `key`, inserting `default()` first when the
    /// key is absent.
    pub(crate) fn entry_or_insert_with(
        &mut self,
        key: Value,
        default: impl FnOnce() -> Value,
    ) -> &mut Value {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.clone(), position);
                self.entries.push((key, default()));
                position
            }
        };
        &mut self.entries[position].1
    }

    /// Looks up the value associated to `key`.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.index
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Returns `true` if `key` has an association.
    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.index.contains_key(key)
    }

    /// Number of associations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no associations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the associations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in key insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for Dictionary {}

impl Hash for Dictionary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order-independent so that it agrees with `PartialEq`.
        let combined = self.entries.iter().fold(0_u64, |accumulator, entry| {
            let mut hasher = DefaultHasher::new();
            entry.hash(&mut hasher);
            accumulator.wrapping_add(hasher.finish())
        });
        self.len().hash(state);
        combined.hash(state);
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterator: I) -> Self {
        let mut dictionary = Self::new();
        for (key, value) in iterator {
            dictionary.insert_mut(key.into(), value.into());
        }
        dictionary
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

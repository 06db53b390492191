//! The ordered, heterogeneous collection and its combinators.
//!
//! [`Array`] is an insertion-ordered sequence of [`Value`]s that allows
//! duplicates. Its API is immutable: every combinator borrows `self` and
//! returns a new collection, value or mapping.
//!
//! The combinators are grouped by concern:
//!
//! - **Map family** (`map`, `indexed_map`, `zip_map`, `matrix`, `square_map`,
//!   `child_map`, `nested_map`, `map_all`, `generators`, `transforms`,
//!   `replace`, `each`)
//! - **Filter family** (`filter`, `remove`, `every`, `any`, `find`,
//!   `contains_all`, `filter_in`, `remove_in`)
//! - **Folding** (`reduce`, `reduce_with`, `sort`, `sort_with`, `sort_by`,
//!   `group_by`)
//! - **Structure** (`reverse`, `unique`, `limit`, `join`, `nested_join`,
//!   `join_with`, `zip`, `flatten`, `concat`)
//! - **Randomization** (`random_element`, `shuffle`), behind the `random`
//!   feature
//!
//! # Error propagation
//!
//! Combinators that run callables return [`Result`](crate::Result). The first
//! error raised by a callable aborts the combinator and is returned as is;
//! no partial result is produced.
//!
//! # Examples
//!
//! ```rust
//! use functional::array;
//! use functional::value::Value;
//!
//! let numbers = array![1, 2, 3, 4];
//! let evens = numbers.filter(|value| Ok(value.require_integer()? % 2 == 0))?;
//! assert_eq!(evens, array![2, 4]);
//!
//! let doubled = evens.map(|value| Ok(Value::from(value.require_integer()? * 2)))?;
//! assert_eq!(doubled.join(), "[4, 8]");
//! # Ok::<(), functional::FunctionalError>(())
//! ```

mod filter;
mod fold;
mod map;
#[cfg(feature = "random")]
mod random;
mod structure;

use std::fmt;
use std::ops::Index;

use crate::value::Value;

/// Builds an [`Array`] from a list of expressions convertible into
/// [`Value`].
///
/// # Examples
///
/// ```rust
/// use functional::array;
///
/// let nested = array![1, "two", array![3.0, true]];
/// assert_eq!(nested.len(), 3);
/// assert_eq!(nested.nested_join(), "[1, two, [3, true]]");
/// ```
#[macro_export]
macro_rules! array {
    () => {
        $crate::collection::Array::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::collection::Array::from_vec(vec![$($crate::value::Value::from($element)),+])
    };
}

/// An ordered collection of heterogeneous values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Array {
    elements: Vec<Value>,
}

impl Array {
    /// Creates an empty array.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Wraps an existing vector without copying.
    #[inline]
    #[must_use]
    pub const fn from_vec(elements: Vec<Value>) -> Self {
        Self { elements }
    }

    /// Unwraps the array into its vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        self.elements
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    /// Number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the array has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Returns the first element, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.elements.first()
    }

    /// Returns the last element, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.elements.last()
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.elements.contains(value)
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Returns a new array with `value` appended.
    #[must_use]
    pub fn push_back(&self, value: impl Into<Value>) -> Self {
        let mut elements = Vec::with_capacity(self.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(value.into());
        Self::from_vec(elements)
    }
}

impl From<Vec<Value>> for Array {
    fn from(elements: Vec<Value>) -> Self {
        Self::from_vec(elements)
    }
}

impl From<Array> for Vec<Value> {
    fn from(array: Array) -> Self {
        array.into_vec()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iterator: I) -> Self {
        Self::from_vec(iterator.into_iter().collect())
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

/// The description form: elements separated by `", "` inside parentheses.
///
/// [`Array::join`] uses square brackets around the same list, so a nested
/// array inside a joined array stays distinguishable from the outer one.
impl fmt::Display for Array {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        for (position, element) in self.elements.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Array {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.elements {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

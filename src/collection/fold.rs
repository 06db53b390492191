//! Folding, ordering and grouping.

use std::cmp::Ordering;

use super::Array;
use crate::error::Result;
use crate::value::{Dictionary, Value};

impl Array {
    /// Folds the elements left to right, seeded with the first element.
    ///
    /// Returns `None` for an empty array. A single-element array returns that
    /// element without calling `operation`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `operation`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    /// use functional::value::Value;
    ///
    /// fn add(accumulator: &Value, element: &Value) -> functional::Result<Value> {
    ///     Ok(Value::from(accumulator.require_integer()? + element.require_integer()?))
    /// }
    ///
    /// assert_eq!(array![1, 2, 3].reduce(add)?, Some(Value::from(6)));
    /// assert_eq!(array![].reduce(add)?, None);
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    pub fn reduce<F>(&self, operation: F) -> Result<Option<Value>>
    where
        F: FnMut(&Value, &Value) -> Result<Value>,
    {
        self.reduce_with(operation, None)
    }

    /// Folds the elements left to right from an optional initial value.
    ///
    /// With `Some(initial)`, every element is folded into `initial`. With
    /// `None`, this behaves exactly like [`Array::reduce`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `operation`.
    pub fn reduce_with<F>(&self, mut operation: F, initial: Option<Value>) -> Result<Option<Value>>
    where
        F: FnMut(&Value, &Value) -> Result<Value>,
    {
        let mut elements = self.iter();
        let Some(mut accumulator) = initial.or_else(|| elements.next().cloned()) else {
            return Ok(None);
        };
        for element in elements {
            accumulator = operation(&accumulator, element)?;
        }
        Ok(Some(accumulator))
    }

    /// Sorts ascending by the natural ordering of [`Value::compare`].
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::Incomparable`](crate::FunctionalError::Incomparable)
    /// as soon as two elements without an ordering are compared.
    pub fn sort(&self) -> Result<Self> {
        self.sort_with(Value::compare)
    }

    /// Sorts with a caller-supplied comparator.
    ///
    /// The sort is a stable merge sort: equal elements keep their relative
    /// order, and the result is deterministic for a deterministic comparator.
    /// It never panics, so comparators that are not total orders (such as
    /// [`Value::random_compare`](crate::value::Value::random_compare)) are
    /// accepted and simply produce some permutation.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `comparator`.
    pub fn sort_with<F>(&self, mut comparator: F) -> Result<Self>
    where
        F: FnMut(&Value, &Value) -> Result<Ordering>,
    {
        let mut elements = self.as_slice().to_vec();
        merge_sort(&mut elements, &mut comparator)?;
        Ok(Self::from_vec(elements))
    }

    /// Sorts ascending by an unsigned key computed once per element.
    ///
    /// Ties keep their original relative order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `key`; keys are computed before any
    /// reordering happens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    ///
    /// let words = array!["ccc", "a", "bb", "d"];
    /// let by_length = words.sort_by(|word| Ok(word.require_text()?.len()))?;
    /// assert_eq!(by_length, array!["a", "d", "bb", "ccc"]);
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    pub fn sort_by<F>(&self, mut key: F) -> Result<Self>
    where
        F: FnMut(&Value) -> Result<usize>,
    {
        let mut keyed = self
            .iter()
            .map(|element| Ok((key(element)?, element.clone())))
            .collect::<Result<Vec<(usize, Value)>>>()?;
        keyed.sort_by_key(|(rank, _)| *rank);
        Ok(keyed.into_iter().map(|(_, element)| element).collect())
    }

    /// Groups the elements by the value `key` returns for them.
    ///
    /// Each distinct key maps to an [`Array`] of the elements that produced
    /// it, in their original relative order. Keys are compared with `Value`
    /// equality and appear in the order they were first produced.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    /// use functional::value::{Dictionary, Value};
    ///
    /// let words = array!["a", "bb", "cc", "d"];
    /// let groups = words.group_by(|word| Ok(Value::from(word.require_text()?.len() as i64)))?;
    /// assert_eq!(
    ///     groups,
    ///     Dictionary::new()
    ///         .insert(1, array!["a", "d"])
    ///         .insert(2, array!["bb", "cc"])
    /// );
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    pub fn group_by<F>(&self, mut key: F) -> Result<Dictionary>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        let mut groups = Dictionary::new();
        for element in self {
            let slot = groups.entry_or_insert_with(key(element)?, || Value::Array(Self::new()));
            if let Value::Array(bucket) = slot {
                bucket.elements.push(element.clone());
            }
        }
        Ok(groups)
    }
}

/// Stable top-down merge sort that tolerates inconsistent comparators.
fn merge_sort<F>(elements: &mut Vec<Value>, comparator: &mut F) -> Result<()>
where
    F: FnMut(&Value, &Value) -> Result<Ordering>,
{
    if elements.len() <= 1 {
        return Ok(());
    }
    let mut right = elements.split_off(elements.len() / 2);
    let mut left = std::mem::take(elements);
    merge_sort(&mut left, comparator)?;
    merge_sort(&mut right, comparator)?;

    elements.reserve(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(left_head), Some(right_head)) = (left.peek(), right.peek()) {
        let next = if comparator(right_head, left_head)? == Ordering::Less {
            right.next()
        } else {
            left.next()
        };
        elements.extend(next);
    }
    elements.extend(left);
    elements.extend(right);
    Ok(())
}

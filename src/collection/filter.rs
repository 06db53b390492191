//! Filter family: predicate selection, quantifiers and membership.

use super::Array;
use crate::error::Result;
use crate::value::Value;

impl Array {
    /// Keeps the elements for which `test` returns `true`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `test`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    /// use functional::value::Value;
    ///
    /// fn is_even(value: &Value) -> functional::Result<bool> {
    ///     Ok(value.require_integer()? % 2 == 0)
    /// }
    ///
    /// assert_eq!(array![1, 2, 3, 4].filter(is_even)?, array![2, 4]);
    /// assert_eq!(array![1, 2, 3, 4].remove(is_even)?, array![1, 3]);
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    pub fn filter<F>(&self, test: F) -> Result<Self>
    where
        F: FnMut(&Value) -> Result<bool>,
    {
        self.partition_by(test, true)
    }

    /// Keeps the elements for which `test` returns `false`, in order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `test`.
    pub fn remove<F>(&self, test: F) -> Result<Self>
    where
        F: FnMut(&Value) -> Result<bool>,
    {
        self.partition_by(test, false)
    }

    fn partition_by<F>(&self, mut test: F, keep: bool) -> Result<Self>
    where
        F: FnMut(&Value) -> Result<bool>,
    {
        let mut kept = Vec::new();
        for element in self {
            if test(element)? == keep {
                kept.push(element.clone());
            }
        }
        Ok(Self::from_vec(kept))
    }

    /// Returns `true` if `test` holds for every element.
    ///
    /// Stops at the first element that fails. An empty array is vacuously
    /// `true`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `test`.
    pub fn every<F>(&self, mut test: F) -> Result<bool>
    where
        F: FnMut(&Value) -> Result<bool>,
    {
        for element in self {
            if !test(element)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `true` if `test` holds for at least one element.
    ///
    /// Stops at the first element that passes. An empty array gives `false`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `test`.
    pub fn any<F>(&self, mut test: F) -> Result<bool>
    where
        F: FnMut(&Value) -> Result<bool>,
    {
        for element in self {
            if test(element)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Returns the first element for which `test` holds, or `None`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `test`.
    pub fn find<F>(&self, mut test: F) -> Result<Option<Value>>
    where
        F: FnMut(&Value) -> Result<bool>,
    {
        for element in self {
            if test(element)? {
                return Ok(Some(element.clone()));
            }
        }
        Ok(None)
    }

    /// Returns `true` if every element of `objects` occurs somewhere in
    /// `self`. Positions do not matter.
    #[must_use]
    pub fn contains_all(&self, objects: &Self) -> bool {
        objects.iter().all(|object| self.contains(object))
    }

    /// Keeps the elements of `self` that also occur in `objects`.
    #[must_use]
    pub fn filter_in(&self, objects: &Self) -> Self {
        self.iter()
            .filter(|element| objects.contains(element))
            .cloned()
            .collect()
    }

    /// Drops the elements of `self` that occur in `objects`.
    #[must_use]
    pub fn remove_in(&self, objects: &Self) -> Self {
        self.iter()
            .filter(|element| !objects.contains(element))
            .cloned()
            .collect()
    }
}

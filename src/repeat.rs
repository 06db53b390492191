//! Building arrays by repetition.
//!
//! - [`times`]: call a generator `n` times and collect the results
//! - [`copies_of`]: `n` copies of one value
//! - [`Array::generate`]: `times` with the arguments the other way round
//! - [`Array::range`]: consecutive integers
//!
//! Generators are called sequentially on the caller's thread. A generator
//! may mutate captured state; each call observes the effects of the previous
//! ones.

use crate::collection::Array;
use crate::error::Result;
use crate::value::Value;

/// Calls `generator` exactly `count` times and collects the results in call
/// order.
///
/// # Errors
///
/// Returns the first error raised by `generator`; no further calls are made.
///
/// # Examples
///
/// ```rust
/// use functional::array;
/// use functional::repeat::times;
/// use functional::value::Value;
///
/// assert_eq!(times(5, || Ok(Value::from(1)))?, array![1, 1, 1, 1, 1]);
///
/// let mut counter = 0;
/// let counted = times(3, || {
///     counter += 1;
///     Ok(Value::from(counter))
/// })?;
/// assert_eq!(counted, array![1, 2, 3]);
/// # Ok::<(), functional::FunctionalError>(())
/// ```
pub fn times<F>(count: usize, mut generator: F) -> Result<Array>
where
    F: FnMut() -> Result<Value>,
{
    (0..count).map(|_| generator()).collect()
}

/// Returns an array holding `count` clones of `value`.
#[must_use]
pub fn copies_of(count: usize, value: &Value) -> Array {
    Array::from_vec(vec![value.clone(); count])
}

impl Array {
    /// Calls `generator` exactly `count` times and collects the results.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `generator`.
    pub fn generate<F>(generator: F, count: usize) -> Result<Self>
    where
        F: FnMut() -> Result<Value>,
    {
        times(count, generator)
    }

    /// Returns the integers `location, location + 1, ..., location + length - 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    /// use functional::collection::Array;
    ///
    /// assert_eq!(Array::range(3, 4), array![3, 4, 5, 6]);
    /// assert!(Array::range(3, 0).is_empty());
    /// ```
    #[must_use]
    pub fn range(location: i64, length: u32) -> Self {
        (0..i64::from(length))
            .map(|offset| Value::Integer(location.saturating_add(offset)))
            .collect()
    }
}

//! Helpers that act on a single [`Value`] rather than on an [`Array`].
//!
//! - [`Value::apply`]: run one transform
//! - [`Value::apply_all`]: run several transforms on the same receiver
//! - [`Value::apply_pipeline`]: thread the receiver through transforms
//! - [`Value::copies`]: repeat the receiver
//! - [`Value::contains_text`]: substring test
//! - [`Value::json_string`]: JSON text (feature `serde`)
//! - [`Value::random_compare`]: an ordering drawn at random (feature `random`)

#[cfg(feature = "random")]
use std::cmp::Ordering;

use crate::callable::Transform;
use crate::collection::Array;
use crate::error::Result;
use crate::repeat::copies_of;
use crate::value::Value;

impl Value {
    /// Applies `transform` to the receiver.
    ///
    /// # Errors
    ///
    /// Returns whatever `transform` returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::value::Value;
    ///
    /// let doubled = Value::from(21).apply(|value| Ok(Value::from(value.require_integer()? * 2)))?;
    /// assert_eq!(doubled, Value::from(42));
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    pub fn apply<F>(&self, transform: F) -> Result<Self>
    where
        F: FnOnce(&Self) -> Result<Self>,
    {
        transform(self)
    }

    /// Applies every transform to the receiver and collects the results in
    /// order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised; the remaining transforms are skipped.
    pub fn apply_all(&self, transforms: &[Transform]) -> Result<Array> {
        transforms.iter().map(|transform| transform(self)).collect()
    }

    /// Feeds the receiver to the first transform, its result to the second,
    /// and so on. An empty pipeline returns a clone of the receiver.
    ///
    /// # Errors
    ///
    /// Returns the first error raised; later stages are not run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::closure::transforms_from_selectors;
    /// use functional::value::Value;
    ///
    /// let steps = transforms_from_selectors(&["reverse", "uppercase"])?;
    /// assert_eq!(Value::from("abc").apply_pipeline(&steps)?, Value::from("CBA"));
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    pub fn apply_pipeline(&self, transforms: &[Transform]) -> Result<Self> {
        transforms
            .iter()
            .try_fold(self.clone(), |current, transform| transform(&current))
    }

    /// Returns an array holding `count` clones of the receiver.
    #[must_use]
    pub fn copies(&self, count: usize) -> Array {
        copies_of(count, self)
    }

    /// Returns `true` if the receiver is text containing `needle`.
    ///
    /// The empty needle is contained in every text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FunctionalError::TypeMismatch`] if the receiver is
    /// not text.
    pub fn contains_text(&self, needle: &str) -> Result<bool> {
        Ok(self.require_text()?.contains(needle))
    }

    /// Renders the receiver as compact JSON.
    ///
    /// Arrays become JSON arrays, dictionaries JSON objects (keys must be
    /// scalars), pairs `{"first": .., "second": ..}` and nil `null`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FunctionalError::Json`] when the value cannot be
    /// encoded, e.g. a dictionary keyed by an array.
    #[cfg(feature = "serde")]
    pub fn json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns less, equal or greater with equal probability, ignoring both
    /// operands.
    ///
    /// Used as a comparator it produces a random order; [`Array::sort_with`]
    /// accepts it without panicking.
    #[cfg(feature = "random")]
    #[must_use]
    pub fn random_compare(&self, other: &Self) -> Ordering {
        self.random_compare_with(other, &mut rand::rng())
    }

    /// [`Value::random_compare`] drawing from the supplied generator.
    #[cfg(feature = "random")]
    #[must_use]
    pub fn random_compare_with<R: rand::Rng>(&self, _other: &Self, random: &mut R) -> Ordering {
        crate::random::random_ordering(random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::callable;
    use crate::error::FunctionalError;
    use rstest::rstest;

    fn increment() -> Transform {
        callable::transform(|value| Ok(Value::from(value.require_integer()? + 1)))
    }

    fn double() -> Transform {
        callable::transform(|value| Ok(Value::from(value.require_integer()? * 2)))
    }

    #[rstest]
    fn test_apply_all_uses_same_receiver() {
        let result = Value::from(5).apply_all(&[increment(), double()]).unwrap();
        assert_eq!(result, array![6, 10]);
    }

    #[rstest]
    fn test_apply_pipeline_threads_result() {
        let result = Value::from(5).apply_pipeline(&[increment(), double()]).unwrap();
        assert_eq!(result, Value::from(12));
    }

    #[rstest]
    fn test_apply_pipeline_empty_is_identity() {
        assert_eq!(Value::from("x").apply_pipeline(&[]), Ok(Value::from("x")));
    }

    #[rstest]
    fn test_apply_pipeline_stops_at_failure() {
        let result = Value::from("text").apply_pipeline(&[increment(), double()]);
        assert_eq!(
            result,
            Err(FunctionalError::TypeMismatch {
                expected: "integer",
                found: "text",
            })
        );
    }

    #[rstest]
    fn test_copies() {
        assert_eq!(Value::from(1).copies(3), array![1, 1, 1]);
        assert!(Value::Nil.copies(0).is_empty());
    }

    #[rstest]
    #[case("haystack", "st", true)]
    #[case("haystack", "", true)]
    #[case("haystack", "needle", false)]
    fn test_contains_text(#[case] text: &str, #[case] needle: &str, #[case] expected: bool) {
        assert_eq!(Value::from(text).contains_text(needle), Ok(expected));
    }

    #[rstest]
    fn test_contains_text_on_non_text() {
        assert!(Value::from(3).contains_text("3").is_err());
    }

    #[cfg(feature = "random")]
    #[rstest]
    fn test_random_compare_is_seed_determined() {
        let (left, right) = (Value::from(1), Value::from(2));
        let first = left.random_compare_with(&right, &mut crate::random::seeded(4));
        let second = left.random_compare_with(&right, &mut crate::random::seeded(4));
        assert_eq!(first, second);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_json_string_of_array() {
        let value = Value::from(array![1, "a", Value::Nil, true]);
        assert_eq!(value.json_string().unwrap(), r#"[1,"a",null,true]"#);
    }
}

//! Map family: element-wise, indexed, paired, cartesian and nested mapping.

use std::rc::Rc;

use super::Array;
use crate::callable::{Generator, Operation, Transform};
use crate::error::Result;
use crate::value::{Dictionary, Value};

impl Array {
    /// Applies `transform` to every element, in order.
    ///
    /// The result has the same length as `self`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `transform`; the remaining elements
    /// are not visited.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    /// use functional::value::Value;
    ///
    /// let lengths = array!["a", "bb", "ccc"]
    ///     .map(|value| Ok(Value::from(value.require_text()?.len() as i64)))?;
    /// assert_eq!(lengths, array![1, 2, 3]);
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    pub fn map<F>(&self, mut transform: F) -> Result<Self>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        self.iter().map(|element| transform(element)).collect()
    }

    /// Like [`Array::map`], also passing the zero-based index of each element.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `transform`.
    pub fn indexed_map<F>(&self, mut transform: F) -> Result<Self>
    where
        F: FnMut(usize, &Value) -> Result<Value>,
    {
        self.iter()
            .enumerate()
            .map(|(index, element)| transform(index, element))
            .collect()
    }

    /// Walks `self` and `other` in lockstep and combines each pair.
    ///
    /// Iteration stops at the end of the shorter array; a length mismatch is
    /// not an error.
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
    /// let sums = array![1, 2, 3].zip_map(&array![10, 20], |left, right| {
    ///     Ok(Value::from(left.require_integer()? + right.require_integer()?))
    /// })?;
    /// assert_eq!(sums, array![11, 22]);
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    pub fn zip_map<F>(&self, other: &Self, mut operation: F) -> Result<Self>
    where
        F: FnMut(&Value, &Value) -> Result<Value>,
    {
        self.iter()
            .zip(other.iter())
            .map(|(left, right)| operation(left, right))
            .collect()
    }

    /// Combines every element of `self` with every element of `other`.
    ///
    /// The result is row-major: one row per element of `self` (outer, varying
    /// slowest), each row holding `operation(a_i, b_j)` for every `b_j` in
    /// `other`. Its shape is `self.len() × other.len()`.
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
    /// let table = array![1, 2].matrix(&array![10, 100], |row, column| {
    ///     Ok(Value::from(row.require_integer()? * column.require_integer()?))
    /// })?;
    /// assert_eq!(table, array![array![10, 100], array![20, 200]]);
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    pub fn matrix<F>(&self, other: &Self, mut operation: F) -> Result<Self>
    where
        F: FnMut(&Value, &Value) -> Result<Value>,
    {
        self.iter()
            .map(|row| {
                other
                    .iter()
                    .map(|column| operation(row, column))
                    .collect::<Result<Self>>()
                    .map(Value::Array)
            })
            .collect()
    }

    /// Combines every element with every element of the same array.
    ///
    /// Equivalent to `self.matrix(self, operation)`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `operation`.
    pub fn square_map<F>(&self, operation: F) -> Result<Self>
    where
        F: FnMut(&Value, &Value) -> Result<Value>,
    {
        self.matrix(self, operation)
    }

    /// Maps `transform` over each child of an array of arrays.
    ///
    /// The result has the same shape as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::TypeMismatch`](crate::FunctionalError::TypeMismatch)
    /// when an element is not an array, or the first error raised by
    /// `transform`.
    pub fn child_map<F>(&self, mut transform: F) -> Result<Self>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        self.iter()
            .map(|child| {
                child
                    .require_array()?
                    .map(&mut transform)
                    .map(Value::Array)
            })
            .collect()
    }

    /// Applies `transform` to every non-array leaf of an arbitrarily nested
    /// array, preserving the nesting shape exactly.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `transform`, in depth-first order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    /// use functional::value::Value;
    ///
    /// let nested = array![1, array![2, array![3]], 4];
    /// let negated = nested.nested_map(|leaf| Ok(Value::from(-leaf.require_integer()?)))?;
    /// assert_eq!(negated, array![-1, array![-2, array![-3]], -4]);
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    pub fn nested_map<F>(&self, mut transform: F) -> Result<Self>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        self.nested_map_with(&mut transform)
    }

    fn nested_map_with(
        &self,
        transform: &mut dyn FnMut(&Value) -> Result<Value>,
    ) -> Result<Self> {
        self.iter()
            .map(|element| match element {
                Value::Array(child) => child.nested_map_with(transform).map(Value::Array),
                leaf => transform(leaf),
            })
            .collect()
    }

    /// Applies every block to every element.
    ///
    /// Each element yields one row holding `block(element)` for each block in
    /// order, so the result is `self.len()` rows of `blocks.len()` values.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a block.
    pub fn map_all(&self, blocks: &[Transform]) -> Result<Self> {
        self.iter()
            .map(|element| {
                blocks
                    .iter()
                    .map(|block| block(element))
                    .collect::<Result<Self>>()
                    .map(Value::Array)
            })
            .collect()
    }

    /// Returns one generator per element, each producing `transform(element)`
    /// when called.
    ///
    /// The element is captured when the generator is built; later changes
    /// to whatever produced the array do not affect it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    /// use functional::callable;
    /// use functional::closure::call_all;
    /// use functional::value::Value;
    ///
    /// let square = callable::transform(|value| {
    ///     let number = value.require_integer()?;
    ///     Ok(Value::from(number * number))
    /// });
    /// let deferred = array![2, 3].generators(&square);
    /// assert_eq!(call_all(&deferred)?, array![4, 9]);
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    #[must_use]
    pub fn generators(&self, transform: &Transform) -> Vec<Generator> {
        self.iter()
            .map(|element| {
                let captured = element.clone();
                let transform = Rc::clone(transform);
                Rc::new(move || transform(&captured)) as Generator
            })
            .collect()
    }

    /// Returns one transform per element `e`, each mapping `x` to
    /// `operation(e, x)`.
    ///
    /// The element is captured at construction time and is always the left
    /// operand.
    #[must_use]
    pub fn transforms(&self, operation: &Operation) -> Vec<Transform> {
        self.iter()
            .map(|element| {
                let captured = element.clone();
                let operation = Rc::clone(operation);
                Rc::new(move |argument: &Value| operation(&captured, argument)) as Transform
            })
            .collect()
    }

    /// Replaces every element found as a key in `dictionary` by its value.
    ///
    /// Elements without an entry pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    /// use functional::value::Dictionary;
    ///
    /// let names = Dictionary::new().insert(1, "one").insert(2, "two");
    /// assert_eq!(array![1, 2, 3].replace(&names), array!["one", "two", 3]);
    /// ```
    #[must_use]
    pub fn replace(&self, dictionary: &Dictionary) -> Self {
        self.iter()
            .map(|element| dictionary.get(element).unwrap_or(element).clone())
            .collect()
    }

    /// Runs `action` on every element, in order, for its side effects.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `action`.
    pub fn each<F>(&self, mut action: F) -> Result<()>
    where
        F: FnMut(&Value) -> Result<()>,
    {
        self.iter().try_for_each(|element| action(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::callable;
    use crate::error::FunctionalError;
    use rstest::rstest;
    use std::cell::Cell;

    fn integer(value: &Value) -> Result<i64> {
        value.require_integer()
    }

    #[rstest]
    fn test_map_preserves_order_and_length() {
        let result = array![1, 2, 3]
            .map(|value| Ok(Value::from(integer(value)? + 1)))
            .unwrap();
        assert_eq!(result, array![2, 3, 4]);
    }

    #[rstest]
    fn test_map_stops_at_first_failure() {
        let visited = Cell::new(0);
        let result = array![1, "two", 3].map(|value| {
            visited.set(visited.get() + 1);
            Ok(Value::from(integer(value)?))
        });
        assert!(matches!(result, Err(FunctionalError::TypeMismatch { .. })));
        assert_eq!(visited.get(), 2);
    }

    #[rstest]
    fn test_indexed_map_passes_zero_based_index() {
        let result = array!["a", "b"]
            .indexed_map(|index, value| Ok(Value::from(format!("{index}:{value}"))))
            .unwrap();
        assert_eq!(result, array!["0:a", "1:b"]);
    }

    #[rstest]
    #[case(array![1, 2, 3], array![10], 1)]
    #[case(array![1], array![10, 20, 30], 1)]
    #[case(array![], array![10], 0)]
    #[case(array![1, 2], array![3, 4], 2)]
    fn test_zip_map_stops_at_shorter(
        #[case] left: Array,
        #[case] right: Array,
        #[case] expected_length: usize,
    ) {
        let result = left
            .zip_map(&right, |first, second| {
                Ok(Value::from(integer(first)? * integer(second)?))
            })
            .unwrap();
        assert_eq!(result.len(), expected_length);
    }

    #[rstest]
    fn test_matrix_with_empty_inner_produces_empty_rows() {
        let result = array![1, 2]
            .matrix(&Array::new(), |_, _| Ok(Value::Nil))
            .unwrap();
        assert_eq!(result, array![Array::new(), Array::new()]);
    }

    #[rstest]
    fn test_square_map() {
        let result = array![1, 2]
            .square_map(|left, right| Ok(Value::from(integer(left)? - integer(right)?)))
            .unwrap();
        assert_eq!(result, array![array![0, -1], array![1, 0]]);
    }

    #[rstest]
    fn test_child_map_preserves_shape() {
        let result = array![array![1, 2], Array::new(), array![3]]
            .child_map(|value| Ok(Value::from(integer(value)? * 10)))
            .unwrap();
        assert_eq!(result, array![array![10, 20], Array::new(), array![30]]);
    }

    #[rstest]
    fn test_child_map_rejects_non_array_child() {
        let result = array![array![1], 2].child_map(|value| Ok(value.clone()));
        assert_eq!(
            result,
            Err(FunctionalError::TypeMismatch {
                expected: "array",
                found: "integer",
            })
        );
    }

    #[rstest]
    fn test_nested_map_leaves_empty_arrays_alone() {
        let calls = Cell::new(0);
        let result = array![Array::new(), array![Array::new()]]
            .nested_map(|value| {
                calls.set(calls.get() + 1);
                Ok(value.clone())
            })
            .unwrap();
        assert_eq!(result, array![Array::new(), array![Array::new()]]);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_map_all_produces_rows() {
        let blocks = vec![
            callable::transform(|value| Ok(Value::from(integer(value)? + 1))),
            callable::transform(|value| Ok(Value::from(integer(value)? * 2))),
            callable::transform(|value| Ok(Value::from(value.to_string()))),
        ];
        let result = array![3, 5].map_all(&blocks).unwrap();
        assert_eq!(result, array![array![4, 6, "3"], array![6, 10, "5"]]);
    }

    #[rstest]
    fn test_map_all_without_blocks_gives_empty_rows() {
        let result = array![1, 2].map_all(&[]).unwrap();
        assert_eq!(result, array![Array::new(), Array::new()]);
    }

    #[rstest]
    fn test_transforms_fix_left_operand() {
        let subtract = callable::operation(|left, right| {
            Ok(Value::from(integer(left)? - integer(right)?))
        });
        let from_ten = array![10, 20].transforms(&subtract);
        assert_eq!(from_ten.len(), 2);
        assert_eq!(from_ten[0](&Value::from(3)), Ok(Value::from(7)));
        assert_eq!(from_ten[1](&Value::from(3)), Ok(Value::from(17)));
    }

    #[rstest]
    fn test_generators_capture_at_construction() {
        let identity = callable::transform(|value| Ok(value.clone()));
        let source = array![1, 2];
        let generators = source.generators(&identity);
        drop(source);
        assert_eq!(generators[1](), Ok(Value::from(2)));
    }

    #[rstest]
    fn test_replace_miss_is_pass_through() {
        let dictionary = Dictionary::new().insert("a", "A");
        assert_eq!(
            array!["a", "b", 1].replace(&dictionary),
            array!["A", "b", 1]
        );
    }

    #[rstest]
    fn test_each_visits_in_order() {
        let mut seen = Vec::new();
        array![1, 2, 3]
            .each(|value| {
                seen.push(integer(value)?);
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, vec![1, 2, 3]);
    }
}

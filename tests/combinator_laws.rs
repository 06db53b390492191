//! Property-based tests for the combinator laws.
//!
//! - **Repetition**: `times(n, g)` has length `n` and records call order
//! - **Shape**: `map` preserves length, `zip_map` stops at the shorter input,
//!   `zip` keeps every element, `matrix` is `len(a) × len(b)`
//! - **Folding**: an associative operation reduces the same regardless of
//!   grouping
//! - **Structure**: `reverse` is an involution, `unique` keeps each distinct
//!   value once, `shuffle` permutes
//! - **Filtering**: `filter` and `remove` partition the input

use functional::prelude::*;
use proptest::prelude::*;

fn to_array(values: &[i64]) -> Array {
    values.iter().copied().map(Value::from).collect()
}

fn wrapping_add(left: &Value, right: &Value) -> Result<Value> {
    Ok(Value::from(left.require_integer()?.wrapping_add(right.require_integer()?)))
}

fn is_even(value: &Value) -> Result<bool> {
    Ok(value.require_integer()? % 2 == 0)
}

// =============================================================================
// Repetition and shape
// =============================================================================

proptest! {
    /// times(n, g) yields n results in invocation order
    #[test]
    fn prop_times_records_each_call(count in 0_usize..64) {
        let mut calls = 0_i64;
        let result = times(count, || {
            calls += 1;
            Ok(Value::from(calls))
        }).unwrap();
        prop_assert_eq!(result.len(), count);
        prop_assert_eq!(result, Array::range(1, u32::try_from(count).unwrap()));
    }

    /// map preserves length
    #[test]
    fn prop_map_preserves_length(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let array = to_array(&values);
        let mapped = array.map(|value| Ok(Value::from(value.to_string()))).unwrap();
        prop_assert_eq!(mapped.len(), array.len());
    }

    /// zip_map stops at the shorter array, zip keeps everything
    #[test]
    fn prop_zip_lengths(
        left in prop::collection::vec(any::<i64>(), 0..32),
        right in prop::collection::vec(any::<i64>(), 0..32),
    ) {
        let (left, right) = (to_array(&left), to_array(&right));
        let paired = left.zip_map(&right, wrapping_add).unwrap();
        prop_assert_eq!(paired.len(), left.len().min(right.len()));
        prop_assert_eq!(left.zip(&right).len(), left.len() + right.len());
    }

    /// matrix[i][j] == op(a[i], b[j])
    #[test]
    fn prop_matrix_cells(
        rows in prop::collection::vec(any::<i64>(), 0..12),
        columns in prop::collection::vec(any::<i64>(), 0..12),
    ) {
        let table = to_array(&rows).matrix(&to_array(&columns), wrapping_add).unwrap();
        prop_assert_eq!(table.len(), rows.len());
        for (row_index, row) in table.iter().enumerate() {
            let row = row.require_array().unwrap();
            prop_assert_eq!(row.len(), columns.len());
            for (column_index, cell) in row.iter().enumerate() {
                let expected = rows[row_index].wrapping_add(columns[column_index]);
                prop_assert_eq!(cell, &Value::from(expected));
            }
        }
    }
}

// =============================================================================
// Folding, structure and filtering
// =============================================================================

proptest! {
    /// Reducing the whole equals reducing two halves and combining them
    #[test]
    fn prop_reduce_is_grouping_independent(
        values in prop::collection::vec(any::<i64>(), 2..64),
        split in any::<prop::sample::Index>(),
    ) {
        let at = 1 + split.index(values.len() - 1);
        let whole = to_array(&values).reduce(wrapping_add).unwrap().unwrap();
        let head = to_array(&values[..at]).reduce(wrapping_add).unwrap().unwrap();
        let tail = to_array(&values[at..]).reduce(wrapping_add).unwrap().unwrap();
        prop_assert_eq!(whole, wrapping_add(&head, &tail).unwrap());
    }

    /// reverse(reverse(xs)) == xs
    #[test]
    fn prop_reverse_involution(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let array = to_array(&values);
        prop_assert_eq!(array.reverse().reverse(), array);
    }

    /// unique keeps every distinct value exactly once
    #[test]
    fn prop_unique_has_each_value_once(values in prop::collection::vec(0_i64..8, 0..64)) {
        let array = to_array(&values);
        let unique = array.unique();
        for value in &array {
            prop_assert_eq!(unique.iter().filter(|other| *other == value).count(), 1);
        }
        prop_assert!(array.contains_all(&unique));
    }

    /// filter and remove split the input without losing anything
    #[test]
    fn prop_filter_remove_partition(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let array = to_array(&values);
        let kept = array.filter(is_even).unwrap();
        let dropped = array.remove(is_even).unwrap();
        prop_assert_eq!(kept.len() + dropped.len(), array.len());
        prop_assert!(kept.every(is_even).unwrap());
        prop_assert!(!dropped.any(is_even).unwrap());
    }

    /// sort with the natural order yields a non-decreasing permutation
    #[test]
    fn prop_sort_is_ordered_permutation(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(to_array(&values).sort().unwrap(), to_array(&expected));
    }
}

#[cfg(feature = "random")]
proptest! {
    /// shuffle returns a permutation of its input
    #[test]
    fn prop_shuffle_is_permutation(
        values in prop::collection::vec(any::<i64>(), 0..64),
        seed in any::<u64>(),
    ) {
        let array = to_array(&values);
        let shuffled = array.shuffle_with(&mut functional::random::seeded(seed));
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(shuffled.sort().unwrap(), to_array(&expected));
    }
}

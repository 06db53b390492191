//! Integration tests for randomized selection, permutation and comparison.

#![cfg(feature = "random")]

use std::cmp::Ordering;

use functional::prelude::*;
use functional::random::seeded;
use rstest::rstest;

#[rstest]
fn random_element_of_empty_is_none() {
    assert_eq!(Array::new().random_element(), None);
}

#[rstest]
fn random_element_is_drawn_from_array() {
    let values = array!["a", "b", "c"];
    let mut random = seeded(2024);
    for _ in 0..30 {
        let picked = values.random_element_with(&mut random).unwrap();
        assert!(values.contains(&picked));
    }
}

#[rstest]
#[case(array![])]
#[case(array![1])]
#[case(array![1, 2, 2, "x", array![3]])]
fn shuffle_is_a_permutation(#[case] values: Array) {
    let shuffled = values.shuffle();
    assert_eq!(shuffled.len(), values.len());
    for value in &values {
        let expected = values.iter().filter(|other| *other == value).count();
        let actual = shuffled.iter().filter(|other| *other == value).count();
        assert_eq!(actual, expected);
    }
}

#[rstest]
fn shuffle_eventually_moves_something() {
    let values = Array::range(0, 10);
    let mut random = seeded(17);
    let moved = (0..20).any(|_| values.shuffle_with(&mut random) != values);
    assert!(moved);
}

#[rstest]
fn random_compare_sorts_without_panicking() {
    let values = Array::range(0, 200);
    let sorted = values
        .sort_with(|left, right| Ok(left.random_compare(right)))
        .unwrap();
    assert_eq!(sorted.len(), values.len());
    assert_eq!(sorted.sort().unwrap(), values);
}

#[rstest]
fn random_compare_with_reaches_every_ordering() {
    let (left, right) = (Value::from(1), Value::from(1));
    let mut random = seeded(8);
    let mut seen = Vec::new();
    for _ in 0..100 {
        let ordering = left.random_compare_with(&right, &mut random);
        if !seen.contains(&ordering) {
            seen.push(ordering);
        }
    }
    seen.sort();
    assert_eq!(seen, vec![Ordering::Less, Ordering::Equal, Ordering::Greater]);
}

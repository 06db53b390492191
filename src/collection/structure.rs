//! Structural operations: reversing, slicing, joining, interleaving and
//! flattening.

use std::collections::HashSet;
use std::fmt::Write;

use super::Array;
use crate::value::Value;

impl Array {
    /// Returns the elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Returns each distinct element exactly once.
    ///
    /// The order of the result is not part of the contract; callers should
    /// only rely on its contents.
    #[must_use]
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter()
            .filter(|element| seen.insert(*element))
            .cloned()
            .collect()
    }

    /// Returns the first `min(limit, len)` elements.
    #[must_use]
    pub fn limit(&self, limit: usize) -> Self {
        Self::from_vec(self.as_slice()[..limit.min(self.len())].to_vec())
    }

    /// Renders the elements separated by `", "` inside square brackets.
    ///
    /// Elements use their `Display` form, so a nested array shows up in its
    /// parenthesised description. Use [`Array::nested_join`] to bracket
    /// nested arrays too.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    ///
    /// assert_eq!(array![1, "a", array![2, 3]].join(), "[1, a, (2, 3)]");
    /// assert_eq!(array![].join(), "[]");
    /// ```
    #[must_use]
    pub fn join(&self) -> String {
        format!("[{}]", self.join_with(", "))
    }

    /// Like [`Array::join`], rendering nested arrays recursively with the
    /// same bracket format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    ///
    /// assert_eq!(array![1, array![2, array![3]]].nested_join(), "[1, [2, [3]]]");
    /// ```
    #[must_use]
    pub fn nested_join(&self) -> String {
        let mut rendered = String::from("[");
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                rendered.push_str(", ");
            }
            match element {
                Value::Array(child) => rendered.push_str(&child.nested_join()),
                leaf => {
                    let _ = write!(rendered, "{leaf}");
                }
            }
        }
        rendered.push(']');
        rendered
    }

    /// Renders the elements separated by `separator`, without brackets.
    #[must_use]
    pub fn join_with(&self, separator: &str) -> String {
        let mut rendered = String::new();
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                rendered.push_str(separator);
            }
            let _ = write!(rendered, "{element}");
        }
        rendered
    }

    /// Interleaves the elements of `self` and `other`: `a0, b0, a1, b1, ...`.
    ///
    /// When one array runs out, the remaining elements of the longer one are
    /// appended in order, so the result always has `self.len() + other.len()`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    ///
    /// assert_eq!(array![1, 2, 3].zip(&array!["a"]), array![1, "a", 2, 3]);
    /// ```
    #[must_use]
    pub fn zip(&self, other: &Self) -> Self {
        let mut interleaved = Vec::with_capacity(self.len() + other.len());
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => break,
                (first, second) => interleaved.extend(first.into_iter().chain(second).cloned()),
            }
        }
        Self::from_vec(interleaved)
    }

    /// Splices the contents of array elements into the result, one level
    /// deep.
    ///
    /// Arrays nested two or more levels down are kept as arrays.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    ///
    /// assert_eq!(array![1, array![2, 3], 4].flatten(), array![1, 2, 3, 4]);
    /// assert_eq!(array![array![array![1]]].flatten(), array![array![1]]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Self {
        let mut flattened = Vec::with_capacity(self.len());
        for element in self {
            match element {
                Value::Array(child) => flattened.extend(child.iter().cloned()),
                leaf => flattened.push(leaf.clone()),
            }
        }
        Self::from_vec(flattened)
    }

    /// Returns the elements of `self` followed by the elements of `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

//! Randomized selection and permutation.
//!
//! Each operation comes in two forms: one that draws from the thread-local
//! generator returned by [`rand::rng`], and a `_with` form that takes any
//! [`rand::Rng`]. Tests that need reproducible output pass a seeded
//! generator such as [`crate::random::seeded`].

use rand::Rng;

use super::Array;
use crate::value::Value;

impl Array {
    /// Picks one element uniformly at random, or `None` when empty.
    #[must_use]
    pub fn random_element(&self) -> Option<Value> {
        self.random_element_with(&mut rand::rng())
    }

    /// Picks one element uniformly using the supplied generator.
    #[must_use]
    pub fn random_element_with<R: Rng>(&self, random: &mut R) -> Option<Value> {
        if self.is_empty() {
            return None;
        }
        self.get(random.random_range(0..self.len())).cloned()
    }

    /// Returns a uniformly random permutation of the elements.
    ///
    /// The receiver is left untouched.
    #[must_use]
    pub fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::rng())
    }

    /// Returns a uniformly random permutation using the supplied generator.
    ///
    /// Fisher–Yates (Durstenfeld): walk backwards, swapping each position with
    /// a uniformly chosen position at or before it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::array;
    /// use functional::random::seeded;
    ///
    /// let deck = array![1, 2, 3, 4, 5];
    /// let shuffled = deck.shuffle_with(&mut seeded(7));
    /// assert_eq!(shuffled.len(), 5);
    /// assert_eq!(shuffled.sort()?, deck);
    /// assert_eq!(deck.shuffle_with(&mut seeded(7)), shuffled);
    /// # Ok::<(), functional::FunctionalError>(())
    /// ```
    #[must_use]
    pub fn shuffle_with<R: Rng>(&self, random: &mut R) -> Self {
        let mut elements = self.as_slice().to_vec();
        for index in (1..elements.len()).rev() {
            let other = random.random_range(0..=index);
            elements.swap(index, other);
        }
        Self::from_vec(elements)
    }
}

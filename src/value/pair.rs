//! An immutable two-field numeric record.
//!
//! `OrderedPair` holds two `f64` fields, `first` and `second`. There is no
//! range constraint on either field. The fields are private so that the only
//! way to obtain a pair with different contents is to build a new one:
//! [`OrderedPair::reverse`] returns a fresh pair and never mutates.
//!
//! # Examples
//!
//! ```rust
//! use functional::value::OrderedPair;
//!
//! let pair = OrderedPair::new(3.0, 4.0);
//! assert_eq!(pair.reverse(), OrderedPair::new(4.0, 3.0));
//! assert_eq!(pair, OrderedPair::new(3.0, 4.0));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// A pair of numbers with a swap operation.
///
/// Equality and hashing are bitwise on the two fields, so `OrderedPair` can
/// be used as a dictionary key and `NaN` fields compare equal to themselves.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderedPair {
    first: f64,
    second: f64,
}

impl OrderedPair {
    /// Creates a pair from its two fields.
    #[inline]
    #[must_use]
    pub const fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }

    /// Creates the default pair, with both fields set to zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::value::OrderedPair;
    ///
    /// let pair = OrderedPair::make();
    /// assert_eq!(pair.first(), 0.0);
    /// assert_eq!(pair.second(), 0.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn make() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Returns the zero pair together with its reversal.
    ///
    /// Both elements are `(0, 0)`, since swapping two zeros changes nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::value::OrderedPair;
    ///
    /// let [forward, backward] = OrderedPair::both_ways();
    /// assert_eq!(forward, OrderedPair::new(0.0, 0.0));
    /// assert_eq!(backward, OrderedPair::new(0.0, 0.0));
    /// ```
    #[inline]
    #[must_use]
    pub const fn both_ways() -> [Self; 2] {
        Self::make().with_reverse()
    }

    /// Returns `[self, self.reverse()]`.
    #[inline]
    #[must_use]
    pub const fn with_reverse(self) -> [Self; 2] {
        [self, self.reverse()]
    }

    /// Returns a new pair with the fields exchanged.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::new(self.second, self.first)
    }

    /// The first field.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> f64 {
        self.first
    }

    /// The second field.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> f64 {
        self.second
    }
}

impl PartialEq for OrderedPair {
    fn eq(&self, other: &Self) -> bool {
        self.first.to_bits() == other.first.to_bits()
            && self.second.to_bits() == other.second.to_bits()
    }
}

impl Eq for OrderedPair {}

impl Hash for OrderedPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first.to_bits().hash(state);
        self.second.to_bits().hash(state);
    }
}

impl From<(f64, f64)> for OrderedPair {
    fn from((first, second): (f64, f64)) -> Self {
        Self::new(first, second)
    }
}

impl fmt::Display for OrderedPair {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "OrderedPair({}, {})", self.first, self.second)
    }
}

//! The heterogeneous value type the combinators operate on.
//!
//! [`Value`] is a tagged sum type standing in for "any value": nil, booleans,
//! integers, floats, text, nested arrays, dictionaries and ordered pairs.
//! Every combinator in [`collection`](crate::collection) works uniformly over
//! it.
//!
//! # Equality and ordering
//!
//! Equality is structural. Floats compare bitwise, which makes `Value` a
//! lawful `Eq + Hash` type usable as a [`Dictionary`] key. An integer and a
//! float are never *equal*, even when numerically the same.
//!
//! The natural ordering used by [`Array::sort`](crate::collection::Array::sort)
//! is [`Value::compare`]. It is defined between values of the same kind and
//! between integers and floats (compared numerically). Every other pairing is
//! a contract violation reported as [`FunctionalError::Incomparable`].
//!
//! # Examples
//!
//! ```rust
//! use functional::value::Value;
//! use std::cmp::Ordering;
//!
//! assert_eq!(Value::from(1).compare(&Value::from(2.5)), Ok(Ordering::Less));
//! assert!(Value::from("a").compare(&Value::from(1)).is_err());
//! ```

mod dictionary;
mod pair;

pub use dictionary::Dictionary;
pub use pair::OrderedPair;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::collection::Array;
use crate::error::{FunctionalError, Result};

/// Any value an [`Array`] can hold.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A double-precision float.
    Float(f64),
    /// A string.
    Text(String),
    /// A nested array.
    Array(Array),
    /// A key/value mapping.
    Dictionary(Dictionary),
    /// An ordered pair of numbers.
    Pair(OrderedPair),
}

impl Value {
    /// Returns a short lowercase name for the kind of this value.
    ///
    /// Used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Array(_) => "array",
            Self::Dictionary(_) => "dictionary",
            Self::Pair(_) => "pair",
        }
    }

    /// Returns `true` for [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` for [`Value::Array`].
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number as a float. Integers are widened.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the nested array, if this is one.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the dictionary, if this is one.
    #[must_use]
    pub const fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Self::Dictionary(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the pair, if this is one.
    #[must_use]
    pub const fn as_pair(&self) -> Option<OrderedPair> {
        match self {
            Self::Pair(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the nested array or a [`FunctionalError::TypeMismatch`].
    ///
    /// # Errors
    ///
    /// Fails when the value is not an array.
    pub fn require_array(&self) -> Result<&Array> {
        self.as_array().ok_or_else(|| self.mismatch("array"))
    }

    /// Returns the integer or a [`FunctionalError::TypeMismatch`].
    ///
    /// # Errors
    ///
    /// Fails when the value is not an integer.
    pub fn require_integer(&self) -> Result<i64> {
        self.as_integer().ok_or_else(|| self.mismatch("integer"))
    }

    /// Returns the text or a [`FunctionalError::TypeMismatch`].
    ///
    /// # Errors
    ///
    /// Fails when the value is not text.
    pub fn require_text(&self) -> Result<&str> {
        self.as_text().ok_or_else(|| self.mismatch("text"))
    }

    pub(crate) const fn mismatch(&self, expected: &'static str) -> FunctionalError {
        FunctionalError::TypeMismatch {
            expected,
            found: self.kind_name(),
        }
    }

    /// Compares two values by their natural ordering.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::Incomparable`] when the two values (or two
    /// elements at the same position of nested arrays) have no ordering.
    #[allow(clippy::cast_precision_loss)]
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        match (self, other) {
            (Self::Nil, Self::Nil) => Ok(Ordering::Equal),
            (Self::Bool(left), Self::Bool(right)) => Ok(left.cmp(right)),
            (Self::Integer(left), Self::Integer(right)) => Ok(left.cmp(right)),
            (Self::Float(left), Self::Float(right)) => Ok(left.total_cmp(right)),
            (Self::Integer(left), Self::Float(right)) => Ok((*left as f64).total_cmp(right)),
            (Self::Float(left), Self::Integer(right)) => Ok(left.total_cmp(&(*right as f64))),
            (Self::Text(left), Self::Text(right)) => Ok(left.cmp(right)),
            (Self::Array(left), Self::Array(right)) => {
                for (left_element, right_element) in left.iter().zip(right.iter()) {
                    let ordering = left_element.compare(right_element)?;
                    if ordering != Ordering::Equal {
                        return Ok(ordering);
                    }
                }
                Ok(left.len().cmp(&right.len()))
            }
            (Self::Pair(left), Self::Pair(right)) => Ok(left
                .first()
                .total_cmp(&right.first())
                .then_with(|| left.second().total_cmp(&right.second()))),
            _ => Err(FunctionalError::Incomparable {
                left: self.kind_name(),
                right: other.kind_name(),
            }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left.to_bits() == right.to_bits(),
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Dictionary(left), Self::Dictionary(right)) => left == right,
            (Self::Pair(left), Self::Pair(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(value) => value.hash(state),
            Self::Integer(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::Text(value) => value.hash(state),
            Self::Array(value) => value.hash(state),
            Self::Dictionary(value) => value.hash(state),
            Self::Pair(value) => value.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(formatter, "nil"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Text(value) => write!(formatter, "{value}"),
            Self::Array(value) => write!(formatter, "{value}"),
            Self::Dictionary(value) => write!(formatter, "{value}"),
            Self::Pair(value) => write!(formatter, "{value}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_for_value {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => Bool,
    i64 => Integer,
    i32 => Integer,
    u32 => Integer,
    f64 => Float,
    f32 => Float,
    String => Text,
    &str => Text,
    Array => Array,
    Dictionary => Dictionary,
    OrderedPair => Pair,
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

// =============================================================================
// Serialization
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{Error, SerializeMap};

        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(value) => serializer.serialize_str(value),
            Self::Array(value) => value.serialize(serializer),
            Self::Pair(value) => value.serialize(serializer),
            Self::Dictionary(dictionary) => {
                let mut map = serializer.serialize_map(Some(dictionary.len()))?;
                for (key, value) in dictionary.iter() {
                    let key = match key {
                        Self::Text(text) => text.clone(),
                        Self::Bool(_) | Self::Integer(_) | Self::Float(_) => key.to_string(),
                        other => {
                            return Err(S::Error::custom(format!(
                                "dictionary keys must be scalar, found {}",
                                other.kind_name()
                            )));
                        }
                    };
                    map.serialize_entry(&key, value)?;
                }
                map.end()
            }
        }
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Eq, Hash);

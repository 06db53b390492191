//! Named operations and the closures built from them.
//!
//! A [`SelectorRegistry`] maps names to statically typed function pointers:
//! [`UnarySelector`]s take a receiver, [`BinarySelector`]s take a receiver
//! and one argument. Looking a name up turns it into a [`Transform`] or an
//! [`Operation`] that can be handed to any combinator.
//!
//! Resolution happens in two steps:
//!
//! 1. **Construction**: an unknown name is rejected immediately with
//!    [`FunctionalError::UnknownSelector`].
//! 2. **Invocation**: a known selector applied to a kind of value it does not
//!    handle fails with [`FunctionalError::UnsupportedSelector`].
//!
//! The free functions ([`transform_from_selector`] and friends) use the
//! shared [`SelectorRegistry::standard`] registry. Build your own registry
//! to add or replace selectors.
//!
//! # Examples
//!
//! ```rust
//! use functional::array;
//! use functional::closure::{operation_from_selector, transforms_from_selectors};
//! use functional::value::Value;
//!
//! let add = operation_from_selector("add")?;
//! assert_eq!(array![1, 2, 3].reduce(|left, right| add(left, right))?, Some(Value::from(6)));
//!
//! let steps = transforms_from_selectors(&["reverse", "count"])?;
//! assert_eq!(array!["abc", "de"].map_all(&steps)?, array![array!["cba", 3], array!["ed", 2]]);
//! # Ok::<(), functional::FunctionalError>(())
//! ```

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::LazyLock;

use crate::callable::{Operation, Transform};
use crate::collection::Array;
use crate::error::{FunctionalError, Result};
use crate::value::Value;

/// A named operation taking only its receiver.
pub type UnarySelector = fn(&Value) -> Result<Value>;

/// A named operation taking its receiver and one argument.
pub type BinarySelector = fn(&Value, &Value) -> Result<Value>;

/// A lookup table from names to selectors.
#[derive(Debug, Clone, Default)]
pub struct SelectorRegistry {
    unary: HashMap<String, UnarySelector>,
    binary: HashMap<String, BinarySelector>,
}

static STANDARD: LazyLock<SelectorRegistry> = LazyLock::new(SelectorRegistry::standard);

impl SelectorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in selector.
    ///
    /// Unary: `description`, `count`, `is_empty`, `uppercase`, `lowercase`,
    /// `negate`, `abs`, `reverse`, `sort`, `unique`, `flatten`, `first`,
    /// `last`.
    ///
    /// Binary: `add`, `subtract`, `multiply`, `divide`, `remainder`, `min`,
    /// `max`, `equals`, `compare`, `concat`, `contains`, `object_at`,
    /// `limit`, `join`.
    #[must_use]
    pub fn standard() -> Self {
        let unary: [(&str, UnarySelector); 13] = [
            ("description", builtin::description),
            ("count", builtin::count),
            ("is_empty", builtin::is_empty),
            ("uppercase", builtin::uppercase),
            ("lowercase", builtin::lowercase),
            ("negate", builtin::negate),
            ("abs", builtin::abs),
            ("reverse", builtin::reverse),
            ("sort", builtin::sort),
            ("unique", builtin::unique),
            ("flatten", builtin::flatten),
            ("first", builtin::first),
            ("last", builtin::last),
        ];
        let binary: [(&str, BinarySelector); 14] = [
            ("add", builtin::add),
            ("subtract", builtin::subtract),
            ("multiply", builtin::multiply),
            ("divide", builtin::divide),
            ("remainder", builtin::remainder),
            ("min", builtin::min),
            ("max", builtin::max),
            ("equals", builtin::equals),
            ("compare", builtin::compare),
            ("concat", builtin::concat),
            ("contains", builtin::contains),
            ("object_at", builtin::object_at),
            ("limit", builtin::limit),
            ("join", builtin::join),
        ];
        let registry = unary
            .into_iter()
            .fold(Self::new(), |registry, (name, selector)| {
                registry.with_unary(name, selector)
            });
        binary
            .into_iter()
            .fold(registry, |registry, (name, selector)| {
                registry.with_binary(name, selector)
            })
    }

    /// Returns the registry with `selector` registered under `name`,
    /// replacing any unary selector of the same name.
    #[must_use]
    pub fn with_unary(mut self, name: impl Into<String>, selector: UnarySelector) -> Self {
        let name = name.into();
        tracing::trace!(selector = %name, arity = 0, "registering selector");
        self.unary.insert(name, selector);
        self
    }

    /// Returns the registry with `selector` registered under `name`,
    /// replacing any binary selector of the same name.
    #[must_use]
    pub fn with_binary(mut self, name: impl Into<String>, selector: BinarySelector) -> Self {
        let name = name.into();
        tracing::trace!(selector = %name, arity = 1, "registering selector");
        self.binary.insert(name, selector);
        self
    }

    /// Looks up a unary selector.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::UnknownSelector`] if `name` is not
    /// registered as unary.
    pub fn unary(&self, name: &str) -> Result<UnarySelector> {
        self.unary.get(name).copied().ok_or_else(|| unknown(name))
    }

    /// Looks up a binary selector.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::UnknownSelector`] if `name` is not
    /// registered as binary.
    pub fn binary(&self, name: &str) -> Result<BinarySelector> {
        self.binary.get(name).copied().ok_or_else(|| unknown(name))
    }

    /// Builds a transform that applies the named unary selector to its
    /// argument.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::UnknownSelector`] for an unknown name.
    pub fn transform(&self, name: &str) -> Result<Transform> {
        let selector = self.unary(name)?;
        Ok(Rc::new(move |receiver: &Value| selector(receiver)))
    }

    /// Builds an operation that applies the named binary selector to its
    /// first argument, with the second as parameter.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::UnknownSelector`] for an unknown name.
    pub fn operation(&self, name: &str) -> Result<Operation> {
        let selector = self.binary(name)?;
        Ok(Rc::new(move |receiver: &Value, argument: &Value| {
            selector(receiver, argument)
        }))
    }

    /// Builds one transform per name, in order.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::UnknownSelector`] for the first unknown
    /// name.
    pub fn transforms(&self, names: &[&str]) -> Result<Vec<Transform>> {
        names.iter().map(|name| self.transform(name)).collect()
    }

    /// Builds one operation per name, in order.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::UnknownSelector`] for the first unknown
    /// name.
    pub fn operations(&self, names: &[&str]) -> Result<Vec<Operation>> {
        names.iter().map(|name| self.operation(name)).collect()
    }

    /// Returns `true` if `name` is registered with either arity.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.unary.contains_key(name) || self.binary.contains_key(name)
    }
}

fn unknown(name: &str) -> FunctionalError {
    tracing::debug!(selector = name, "selector lookup failed");
    FunctionalError::UnknownSelector(name.to_string())
}

/// Builds a transform from a unary selector of the standard registry.
///
/// # Errors
///
/// Returns [`FunctionalError::UnknownSelector`] for an unknown name.
pub fn transform_from_selector(name: &str) -> Result<Transform> {
    STANDARD.transform(name)
}

/// Builds an operation from a binary selector of the standard registry.
///
/// # Errors
///
/// Returns [`FunctionalError::UnknownSelector`] for an unknown name.
pub fn operation_from_selector(name: &str) -> Result<Operation> {
    STANDARD.operation(name)
}

/// Builds transforms from unary selectors of the standard registry.
///
/// # Errors
///
/// Returns [`FunctionalError::UnknownSelector`] for the first unknown name.
pub fn transforms_from_selectors(names: &[&str]) -> Result<Vec<Transform>> {
    STANDARD.transforms(names)
}

/// Builds operations from binary selectors of the standard registry.
///
/// # Errors
///
/// Returns [`FunctionalError::UnknownSelector`] for the first unknown name.
pub fn operations_from_selectors(names: &[&str]) -> Result<Vec<Operation>> {
    STANDARD.operations(names)
}

/// The built-in selectors.
mod builtin {
    use std::cmp::Ordering;

    use super::{Array, FunctionalError, Result, Value};

    fn unsupported(selector: &str, value: &Value) -> FunctionalError {
        FunctionalError::UnsupportedSelector {
            selector: selector.to_string(),
            kind: value.kind_name(),
        }
    }

    fn length(value: &Value) -> Option<usize> {
        match value {
            Value::Text(text) => Some(text.chars().count()),
            Value::Array(array) => Some(array.len()),
            Value::Dictionary(dictionary) => Some(dictionary.len()),
            _ => None,
        }
    }

    fn array<'a>(selector: &str, value: &'a Value) -> Result<&'a Array> {
        value.as_array().ok_or_else(|| unsupported(selector, value))
    }

    pub(super) fn description(value: &Value) -> Result<Value> {
        Ok(Value::Text(value.to_string()))
    }

    pub(super) fn count(value: &Value) -> Result<Value> {
        let length = length(value).ok_or_else(|| unsupported("count", value))?;
        i64::try_from(length)
            .map(Value::Integer)
            .map_err(|error| FunctionalError::Arithmetic(error.to_string()))
    }

    pub(super) fn is_empty(value: &Value) -> Result<Value> {
        length(value)
            .map(|length| Value::Bool(length == 0))
            .ok_or_else(|| unsupported("is_empty", value))
    }

    pub(super) fn uppercase(value: &Value) -> Result<Value> {
        value
            .as_text()
            .map(|text| Value::Text(text.to_uppercase()))
            .ok_or_else(|| unsupported("uppercase", value))
    }

    pub(super) fn lowercase(value: &Value) -> Result<Value> {
        value
            .as_text()
            .map(|text| Value::Text(text.to_lowercase()))
            .ok_or_else(|| unsupported("lowercase", value))
    }

    pub(super) fn negate(value: &Value) -> Result<Value> {
        match value {
            Value::Integer(number) => number
                .checked_neg()
                .map(Value::Integer)
                .ok_or_else(|| FunctionalError::Arithmetic(format!("cannot negate {number}"))),
            Value::Float(number) => Ok(Value::Float(-number)),
            other => Err(unsupported("negate", other)),
        }
    }

    pub(super) fn abs(value: &Value) -> Result<Value> {
        match value {
            Value::Integer(number) => number.checked_abs().map(Value::Integer).ok_or_else(|| {
                FunctionalError::Arithmetic(format!("absolute value of {number} overflows"))
            }),
            Value::Float(number) => Ok(Value::Float(number.abs())),
            other => Err(unsupported("abs", other)),
        }
    }

    pub(super) fn reverse(value: &Value) -> Result<Value> {
        match value {
            Value::Array(array) => Ok(Value::Array(array.reverse())),
            Value::Text(text) => Ok(Value::Text(text.chars().rev().collect())),
            Value::Pair(pair) => Ok(Value::Pair(pair.reverse())),
            other => Err(unsupported("reverse", other)),
        }
    }

    pub(super) fn sort(value: &Value) -> Result<Value> {
        array("sort", value)?.sort().map(Value::Array)
    }

    pub(super) fn unique(value: &Value) -> Result<Value> {
        Ok(Value::Array(array("unique", value)?.unique()))
    }

    pub(super) fn flatten(value: &Value) -> Result<Value> {
        Ok(Value::Array(array("flatten", value)?.flatten()))
    }

    pub(super) fn first(value: &Value) -> Result<Value> {
        Ok(array("first", value)?.first().cloned().unwrap_or_default())
    }

    pub(super) fn last(value: &Value) -> Result<Value> {
        Ok(array("last", value)?.last().cloned().unwrap_or_default())
    }

    /// Integer pairs use the checked integer operation; any other pair of
    /// numbers is computed in floating point.
    fn arithmetic(
        selector: &str,
        left: &Value,
        right: &Value,
        integer: fn(i64, i64) -> Option<i64>,
        float: fn(f64, f64) -> f64,
    ) -> Result<Value> {
        if let (Value::Integer(first), Value::Integer(second)) = (left, right) {
            return integer(*first, *second).map(Value::Integer).ok_or_else(|| {
                FunctionalError::Arithmetic(format!("{selector} of {first} and {second} is undefined"))
            });
        }
        match (left.as_float(), right.as_float()) {
            (Some(first), Some(second)) => Ok(Value::Float(float(first, second))),
            (None, _) => Err(unsupported(selector, left)),
            (_, None) => Err(unsupported(selector, right)),
        }
    }

    pub(super) fn add(left: &Value, right: &Value) -> Result<Value> {
        arithmetic("add", left, right, i64::checked_add, |first, second| first + second)
    }

    pub(super) fn subtract(left: &Value, right: &Value) -> Result<Value> {
        arithmetic("subtract", left, right, i64::checked_sub, |first, second| {
            first - second
        })
    }

    pub(super) fn multiply(left: &Value, right: &Value) -> Result<Value> {
        arithmetic("multiply", left, right, i64::checked_mul, |first, second| {
            first * second
        })
    }

    pub(super) fn divide(left: &Value, right: &Value) -> Result<Value> {
        arithmetic("divide", left, right, i64::checked_div, |first, second| {
            first / second
        })
    }

    pub(super) fn remainder(left: &Value, right: &Value) -> Result<Value> {
        arithmetic("remainder", left, right, i64::checked_rem, |first, second| {
            first % second
        })
    }

    pub(super) fn min(left: &Value, right: &Value) -> Result<Value> {
        Ok(if right.compare(left)? == Ordering::Less {
            right.clone()
        } else {
            left.clone()
        })
    }

    pub(super) fn max(left: &Value, right: &Value) -> Result<Value> {
        Ok(if right.compare(left)? == Ordering::Greater {
            right.clone()
        } else {
            left.clone()
        })
    }

    pub(super) fn equals(left: &Value, right: &Value) -> Result<Value> {
        Ok(Value::Bool(left == right))
    }

    pub(super) fn compare(left: &Value, right: &Value) -> Result<Value> {
        Ok(Value::Integer(match left.compare(right)? {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }))
    }

    pub(super) fn concat(left: &Value, right: &Value) -> Result<Value> {
        match (left, right) {
            (Value::Array(first), Value::Array(second)) => Ok(Value::Array(first.concat(second))),
            (Value::Text(first), Value::Text(second)) => Ok(Value::Text(format!("{first}{second}"))),
            (Value::Array(_) | Value::Text(_), other) | (other, _) => {
                Err(unsupported("concat", other))
            }
        }
    }

    pub(super) fn contains(left: &Value, right: &Value) -> Result<Value> {
        match (left, right) {
            (Value::Array(array), needle) => Ok(Value::Bool(array.contains(needle))),
            (Value::Text(text), Value::Text(needle)) => Ok(Value::Bool(text.contains(needle.as_str()))),
            (Value::Text(_), other) | (other, _) => Err(unsupported("contains", other)),
        }
    }

    pub(super) fn object_at(left: &Value, right: &Value) -> Result<Value> {
        let array = array("object_at", left)?;
        let index = right.as_integer().ok_or_else(|| unsupported("object_at", right))?;
        Ok(usize::try_from(index)
            .ok()
            .and_then(|index| array.get(index))
            .cloned()
            .unwrap_or_default())
    }

    pub(super) fn limit(left: &Value, right: &Value) -> Result<Value> {
        let array = array("limit", left)?;
        let count = right.as_integer().ok_or_else(|| unsupported("limit", right))?;
        Ok(Value::Array(array.limit(usize::try_from(count).unwrap_or(0))))
    }

    pub(super) fn join(left: &Value, right: &Value) -> Result<Value> {
        let array = array("join", left)?;
        let separator = right.as_text().ok_or_else(|| unsupported("join", right))?;
        Ok(Value::Text(array.join_with(separator)))
    }
}

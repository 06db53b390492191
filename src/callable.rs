//! The four callable kinds the combinators are built around.
//!
//! | Kind | Shape |
//! |------|-------|
//! | [`Generator`] | `() -> Value` |
//! | [`Transform`] | `Value -> Value` |
//! | [`Operation`] | `(Value, Value) -> Value` |
//! | [`Test`] | `Value -> bool` |
//!
//! All of them are fallible: returning an error aborts whichever combinator
//! is driving the callable. They are reference counted so that a single
//! closure can be stored in several collections and called repeatedly.
//! `Rc` keeps them on one thread, which matches the single-threaded contract
//! of the combinator layer.
//!
//! Combinator methods take plain closures (`impl FnMut(&Value) -> Result<Value>`),
//! so these aliases only appear where a callable has to be *stored*: closure
//! factories, selector lookups, `map_all`, `apply_all`, and so on.
//!
//! # Examples
//!
//! ```rust
//! use functional::callable::{self, Transform};
//! use functional::value::Value;
//!
//! let double: Transform = callable::transform(|value| {
//!     Ok(Value::from(value.require_integer()? * 2))
//! });
//! assert_eq!(double(&Value::from(21)), Ok(Value::from(42)));
//! ```

use std::rc::Rc;

use crate::error::Result;
use crate::value::Value;

/// A zero-argument callable producing a value.
pub type Generator = Rc<dyn Fn() -> Result<Value>>;

/// A one-argument callable mapping a value to a value.
pub type Transform = Rc<dyn Fn(&Value) -> Result<Value>>;

/// A two-argument callable combining two values into one.
pub type Operation = Rc<dyn Fn(&Value, &Value) -> Result<Value>>;

/// A one-argument predicate.
pub type Test = Rc<dyn Fn(&Value) -> Result<bool>>;

/// Wraps a closure as a [`Generator`].
pub fn generator<F>(function: F) -> Generator
where
    F: Fn() -> Result<Value> + 'static,
{
    Rc::new(function)
}

/// Wraps a closure as a [`Transform`].
pub fn transform<F>(function: F) -> Transform
where
    F: Fn(&Value) -> Result<Value> + 'static,
{
    Rc::new(function)
}

/// Wraps a closure as an [`Operation`].
pub fn operation<F>(function: F) -> Operation
where
    F: Fn(&Value, &Value) -> Result<Value> + 'static,
{
    Rc::new(function)
}

/// Wraps a closure as a [`Test`].
pub fn test<F>(function: F) -> Test
where
    F: Fn(&Value) -> Result<bool> + 'static,
{
    Rc::new(function)
}

static_assertions::assert_not_impl_any!(Transform: Send, Sync);

//! Closure factories: turning captured values and named operations into
//! reusable callables.
//!
//! The helpers here build [`Generator`]s, [`Transform`]s and [`Operation`]s
//! whose captured state is owned by the closure and lives as long as it
//! does:
//!
//! - [`constant`]: a generator that always yields the same value (the K
//!   combinator, deferred)
//! - [`identity`]: the transform that returns its argument (the I combinator)
//! - [`bind_left`] / [`bind_right`]: fix one operand of an operation
//! - [`flip`]: swap the operands of an operation (the C combinator)
//! - [`call_all`]: invoke a list of generators in order
//!
//! Per-element factories live on [`Array`]:
//! [`Array::generators`] and [`Array::transforms`].
//!
//! Named operations are resolved through the [`selector`] registry.

pub mod selector;

pub use selector::{
    BinarySelector, SelectorRegistry, UnarySelector, operation_from_selector,
    operations_from_selectors, transform_from_selector, transforms_from_selectors,
};

use std::rc::Rc;

use crate::callable::{Generator, Operation, Transform};
use crate::collection::Array;
use crate::error::Result;
use crate::value::Value;

/// Returns a generator that yields a clone of `value` on every call.
///
/// # Examples
///
/// ```rust
/// use functional::closure::constant;
/// use functional::value::Value;
///
/// let answer = constant(Value::from(42));
/// assert_eq!(answer(), Ok(Value::from(42)));
/// assert_eq!(answer(), Ok(Value::from(42)));
/// ```
pub fn constant(value: Value) -> Generator {
    Rc::new(move || Ok(value.clone()))
}

/// Returns the transform that hands back a clone of its argument.
pub fn identity() -> Transform {
    Rc::new(|value: &Value| Ok(value.clone()))
}

/// Fixes the left operand: the result maps `x` to `operation(left, x)`.
///
/// # Examples
///
/// ```rust
/// use functional::callable;
/// use functional::closure::bind_left;
/// use functional::value::Value;
///
/// let subtract = callable::operation(|left, right| {
///     Ok(Value::from(left.require_integer()? - right.require_integer()?))
/// });
/// let ten_minus = bind_left(&subtract, Value::from(10));
/// assert_eq!(ten_minus(&Value::from(3)), Ok(Value::from(7)));
/// ```
pub fn bind_left(operation: &Operation, left: Value) -> Transform {
    let operation = Rc::clone(operation);
    Rc::new(move |right: &Value| operation(&left, right))
}

/// Fixes the right operand: the result maps `x` to `operation(x, right)`.
pub fn bind_right(operation: &Operation, right: Value) -> Transform {
    let operation = Rc::clone(operation);
    Rc::new(move |left: &Value| operation(left, &right))
}

/// Swaps the operands of `operation`.
///
/// `flip(flip(f))` behaves like `f`.
pub fn flip(operation: &Operation) -> Operation {
    let operation = Rc::clone(operation);
    Rc::new(move |left: &Value, right: &Value| operation(right, left))
}

/// Invokes every generator in order and collects the results.
///
/// Later generators observe any state mutated by earlier ones.
///
/// # Errors
///
/// Returns the first error raised by a generator; the rest are not called.
pub fn call_all(generators: &[Generator]) -> Result<Array> {
    generators.iter().map(|generator| generator()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::callable;
    use crate::error::FunctionalError;
    use rstest::rstest;
    use std::cell::RefCell;

    fn subtract() -> Operation {
        callable::operation(|left, right| {
            Ok(Value::from(left.require_integer()? - right.require_integer()?))
        })
    }

    #[rstest]
    fn test_constant_owns_its_value() {
        let text = String::from("kept");
        let generator = constant(Value::from(text.clone()));
        drop(text);
        assert_eq!(generator(), Ok(Value::from("kept")));
    }

    #[rstest]
    fn test_identity() {
        let value = Value::from(array![1, "two"]);
        assert_eq!(identity()(&value), Ok(value));
    }

    #[rstest]
    fn test_bind_right() {
        let minus_three = bind_right(&subtract(), Value::from(3));
        assert_eq!(minus_three(&Value::from(10)), Ok(Value::from(7)));
    }

    #[rstest]
    fn test_flip_swaps_operands() {
        let flipped = flip(&subtract());
        assert_eq!(flipped(&Value::from(3), &Value::from(10)), Ok(Value::from(7)));
    }

    #[rstest]
    fn test_double_flip_is_original() {
        let operation = subtract();
        let twice = flip(&flip(&operation));
        let (left, right) = (Value::from(9), Value::from(4));
        assert_eq!(twice(&left, &right), operation(&left, &right));
    }

    #[rstest]
    fn test_call_all_observes_previous_mutations() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let generators: Vec<Generator> = (1..=3)
            .map(|step| {
                let log = Rc::clone(&log);
                callable::generator(move || {
                    log.borrow_mut().push(step);
                    Ok(Value::from(i64::try_from(log.borrow().len()).unwrap_or_default()))
                })
            })
            .collect();
        assert_eq!(call_all(&generators).unwrap(), array![1, 2, 3]);
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_call_all_stops_at_failure() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let generators = vec![
            callable::generator(|| Err(FunctionalError::custom("first fails"))),
            callable::generator(move || {
                *counter.borrow_mut() += 1;
                Ok(Value::Nil)
            }),
        ];
        assert_eq!(call_all(&generators), Err(FunctionalError::custom("first fails")));
        assert_eq!(*calls.borrow(), 0);
    }
}

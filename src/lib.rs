//! # functional
//!
//! Higher-order combinators over ordered, heterogeneous collections.
//!
//! ## Overview
//!
//! The crate centres on two types: [`Value`], a tagged sum of the kinds of
//! data a collection may hold, and [`Array`], an immutable ordered sequence
//! of values. On top of them it provides:
//!
//! - **Combinators**: map, filter, fold, sort, group and restructure arrays
//!   ([`collection`])
//! - **Repetition**: build arrays by calling generators or counting
//!   ([`repeat`])
//! - **Closure factories**: constant, identity, partial application, and
//!   callables built from named selectors ([`closure`])
//! - **Single-value helpers**: apply, pipeline, copies, substring test, JSON
//!   ([`apply`])
//! - **Ordered pairs**: an immutable two-field numeric record
//!   ([`value::OrderedPair`])
//! - **Background execution**: run work on a pool and resume on the calling
//!   thread ([`background`])
//!
//! Every combinator runs its callables synchronously, in a documented order,
//! and returns the first error a callable raises.
//!
//! ## Feature Flags
//!
//! - `random`: `random_element`, `shuffle` and `random_compare` (default)
//! - `background`: the tokio-backed worker pool (default)
//! - `serde`: `Serialize` for values and [`Value::json_string`]
//! - `fxhash`: faster hashing for dictionary indexes
//! - `full`: `random`, `background` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use functional::prelude::*;
//!
//! let words = array!["a", "bb", "cc", "d"];
//! let by_length = words.group_by(|word| Ok(Value::from(word.require_text()?.len() as i64)))?;
//! assert_eq!(by_length.get(&Value::from(1)), Some(&Value::from(array!["a", "d"])));
//!
//! let count = transform_from_selector("count")?;
//! assert_eq!(words.map(|word| count(word))?, array![1, 2, 2, 1]);
//! # Ok::<(), FunctionalError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use functional::prelude::*;
/// ```
pub mod prelude {
    pub use crate::array;
    pub use crate::callable::{Generator, Operation, Test, Transform};
    pub use crate::closure::{
        SelectorRegistry, bind_left, bind_right, call_all, constant, flip, identity,
        operation_from_selector, operations_from_selectors, transform_from_selector,
        transforms_from_selectors,
    };
    pub use crate::collection::Array;
    pub use crate::error::{FunctionalError, Result};
    pub use crate::repeat::{copies_of, times};
    pub use crate::value::{Dictionary, OrderedPair, Value};

    #[cfg(feature = "background")]
    pub use crate::background::{background, run_next, run_pending, run_until_idle};
}

pub mod apply;
pub mod callable;
pub mod closure;
pub mod collection;
pub mod error;
pub mod repeat;
pub mod value;

#[cfg(feature = "random")]
pub mod random;

#[cfg(feature = "background")]
pub mod background;

pub use collection::Array;
pub use error::{FunctionalError, Result};
pub use value::Value;

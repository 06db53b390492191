//! Error types for the combinator layer.
//!
//! Every fallible operation in this crate returns [`Result`], whose error type
//! is [`FunctionalError`]. Combinators never catch or mask an error raised
//! inside a callable: the first failure aborts the in-flight call and is
//! handed back to the caller unchanged.
//!
//! Boundary cases (reducing an empty array, picking from an empty array,
//! a `find` that matches nothing) are not errors; they return `None`.

/// Represents the errors that can occur while running combinators, closures
/// and selectors.
///
/// # Examples
///
/// ```rust
/// use functional::FunctionalError;
///
/// let error = FunctionalError::Incomparable {
///     left: "integer",
///     right: "text",
/// };
/// assert_eq!(format!("{error}"), "cannot compare integer with text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FunctionalError {
    /// Two values have no natural ordering between them.
    #[error("cannot compare {left} with {right}")]
    Incomparable {
        /// The kind of the left operand.
        left: &'static str,
        /// The kind of the right operand.
        right: &'static str,
    },

    /// A value of the wrong kind was supplied.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind that was required.
        expected: &'static str,
        /// The kind that was supplied.
        found: &'static str,
    },

    /// No selector with this name is registered.
    #[error("unknown selector `{0}`")]
    UnknownSelector(String),

    /// The selector exists but does not apply to this kind of value.
    #[error("selector `{selector}` is not supported by {kind}")]
    UnsupportedSelector {
        /// The name of the selector.
        selector: String,
        /// The kind of the receiver.
        kind: &'static str,
    },

    /// Division by zero or integer overflow.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// A failure raised by user code inside a callable.
    #[error("{0}")]
    Custom(String),

    /// A background generator panicked before producing a value.
    #[error("background task failed: {0}")]
    Background(String),

    /// The value graph could not be encoded as JSON.
    #[cfg(feature = "serde")]
    #[error("json encoding failed: {0}")]
    Json(String),
}

impl FunctionalError {
    /// Creates a [`FunctionalError::Custom`] from any message.
    ///
    /// This is the error a callable returns to abort the combinator that
    /// invoked it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional::FunctionalError;
    ///
    /// let error = FunctionalError::custom("negative input");
    /// assert_eq!(error.to_string(), "negative input");
    /// ```
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for FunctionalError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, FunctionalError>;

//! Errors returned by [`Tree`][crate::Tree] operations.
//!
//! Missing keys are never errors. `find` returns `None` and `delete` does nothing.

use thiserror::Error;

/// Things that can go wrong when calling into a [`Tree`][crate::Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument the operation can't run without was missing.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Message carried by [`Error::InvalidArgument`] when a traversal has no visitor.
pub(crate) const CALLBACK_REQUIRED: &str = "callback required";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_the_missing_argument() {
        let err = Error::InvalidArgument(CALLBACK_REQUIRED);
        assert_eq!(err.to_string(), "invalid argument: callback required");
    }
}

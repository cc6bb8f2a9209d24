//! The fatal signal raised by [`Outcome::unwrap`](crate::Outcome::unwrap).
//!
//! Unwrapping a `Failure` is a broken precondition, not a recoverable error,
//! so it never travels through the `Outcome` channel. Instead the error is
//! boxed into an [`UnwrapOnFailure`] and raised as a panic payload.

use std::error::Error as StdError;
use std::fmt;

/// Panic payload carrying the error of an unwrapped `Failure`.
///
/// # Examples
///
/// ```
/// use outcome::{failure, UnwrapOnFailure};
///
/// let caught = std::panic::catch_unwind(|| failure::<i32, _>("disk full").unwrap())
///     .unwrap_err();
/// let signal = caught.downcast::<UnwrapOnFailure<&str>>().unwrap();
/// assert_eq!(signal.error(), &"disk full");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapOnFailure<E> {
    error: E,
}

impl<E> UnwrapOnFailure<E> {
    /// Wrap the error of a failed unwrap.
    pub fn new(error: E) -> Self {
        UnwrapOnFailure { error }
    }

    /// The error that was found instead of a value.
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Consume the signal and return the error.
    pub fn into_error(self) -> E {
        self.error
    }
}

impl<E: fmt::Debug> fmt::Display for UnwrapOnFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "called `Outcome::unwrap()` on a `Failure` value: {:?}",
            self.error
        )
    }
}

impl<E: fmt::Debug> StdError for UnwrapOnFailure<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let signal = UnwrapOnFailure::new("timeout");
        assert_eq!(
            signal.to_string(),
            "called `Outcome::unwrap()` on a `Failure` value: \"timeout\""
        );
    }

    #[test]
    fn test_accessors() {
        let signal = UnwrapOnFailure::new(404);
        assert_eq!(signal.error(), &404);
        assert_eq!(signal.into_error(), 404);
    }

    #[test]
    fn test_is_std_error() {
        let boxed: Box<dyn StdError> = Box::new(UnwrapOnFailure::new(1u8));
        assert!(boxed.source().is_none());
    }
}

//! Errors that remember what was being attempted when they happened.
//!
//! A bare error such as `"connection refused"` says little once it has
//! bubbled up through several layers. [`ContextError`] keeps the original
//! error and a trail of short descriptions added on the way up, innermost
//! first. [`Outcome::context`] starts a trail and
//! [`Outcome::add_context`] extends it.
//!
//! # Examples
//!
//! ```
//! use outcome::{failure, Outcome};
//!
//! fn read_port() -> Outcome<u16, &'static str> {
//!     failure("no such key: port")
//! }
//!
//! let loaded = read_port()
//!     .context("reading server config")
//!     .add_context("starting http listener");
//!
//! let err = loaded.unwrap_failure();
//! assert_eq!(err.inner(), &"no such key: port");
//! assert_eq!(
//!     err.to_string(),
//!     "Error: no such key: port\n  -> reading server config\n  -> starting http listener"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::Outcome;

/// An error plus the trail of operations it interrupted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextError<E> {
    error: E,
    trail: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap an error with an empty trail.
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            trail: Vec::new(),
        }
    }

    /// Append one description to the trail.
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.trail.push(msg.into());
        self
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Drop the trail and return the wrapped error.
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Descriptions in the order they were added, innermost first.
    pub fn context_trail(&self) -> &[String] {
        &self.trail
    }

    /// Convert the wrapped error, keeping the trail.
    pub fn map_inner<F2, F>(self, f: F) -> ContextError<F2>
    where
        F: FnOnce(E) -> F2,
    {
        ContextError {
            error: f(self.error),
            trail: self.trail,
        }
    }
}

impl<E> From<E> for ContextError<E> {
    fn from(error: E) -> Self {
        ContextError::new(error)
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;
        for step in &self.trail {
            write!(f, "\n  -> {}", step)?;
        }
        Ok(())
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

impl<T, E> Outcome<T, E> {
    /// Wrap a failure's error in a [`ContextError`] whose trail starts with
    /// `msg`. Successes pass through.
    pub fn context(self, msg: impl Into<String>) -> Outcome<T, ContextError<E>> {
        self.map_err(|error| ContextError::new(error).context(msg))
    }
}

impl<T, E> Outcome<T, ContextError<E>> {
    /// Append `msg` to the trail of an already contextualised failure.
    pub fn add_context(self, msg: impl Into<String>) -> Self {
        self.map_err(|error| error.context(msg))
    }
}

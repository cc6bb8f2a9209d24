//! Tracing support for outcomes. Feature-gated behind `#[cfg(feature = "tracing")]`.
//!
//! `Outcome` itself never logs. Callers that want a record of how a step
//! ended can opt in with [`OutcomeTracingExt::trace_outcome`], which emits a
//! `debug` event on success and a `warn` event carrying the error on
//! failure, then returns the outcome unchanged.

use std::fmt;

use crate::Outcome;

/// Extension trait for logging outcomes through `tracing`.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait OutcomeTracingExt: Sized {
    /// Log how `operation` ended and return `self` unchanged.
    ///
    /// ```rust
    /// use outcome::{failure, Outcome, OutcomeTracingExt};
    ///
    /// let o: Outcome<u32, &str> = failure("quota exceeded").trace_outcome("upload");
    /// assert!(o.is_failure());
    /// ```
    fn trace_outcome(self, operation: &str) -> Self;
}

impl<T, E> OutcomeTracingExt for Outcome<T, E>
where
    E: fmt::Debug,
{
    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            Outcome::Success(_) => tracing::debug!(operation, "operation succeeded"),
            Outcome::Failure(error) => {
                tracing::warn!(operation, error = ?error, "operation failed")
            }
        }
        self
    }
}

//! # Outcome
//!
//! A success-or-failure sum type with chainable, short-circuiting
//! combinators.
//!
//! An [`Outcome<T, E>`](Outcome) is exactly one of `Success(T)` or
//! `Failure(E)`. Fallible steps return outcomes and are chained with
//! [`and_then`](Outcome::and_then): the first failure stops the chain and
//! flows through to the end untouched, so no step has to check whether the
//! previous one worked.
//!
//! ## Quick Example
//!
//! ```rust
//! use outcome::{failure, success, Outcome};
//!
//! #[derive(Debug, PartialEq)]
//! enum SignupError {
//!     Parse(String),
//!     Invalid(&'static str),
//! }
//!
//! fn parse_age(input: &str) -> Outcome<u8, SignupError> {
//!     Outcome::from_result(input.trim().parse::<u8>())
//!         .map_err(|e| SignupError::Parse(e.to_string()))
//! }
//!
//! fn check_adult(age: u8) -> Outcome<u8, SignupError> {
//!     if age >= 18 {
//!         success(age)
//!     } else {
//!         failure(SignupError::Invalid("must be 18 or older"))
//!     }
//! }
//!
//! assert_eq!(parse_age(" 30 ").and_then(check_adult), Outcome::Success(30));
//! assert_eq!(
//!     parse_age("12").and_then(check_adult),
//!     Outcome::Failure(SignupError::Invalid("must be 18 or older"))
//! );
//!
//! // Recover with a default, or dispatch on the variant.
//! let age = parse_age("n/a").and_then(check_adult).get_or_else(18);
//! assert_eq!(age, 18);
//! ```
//!
//! ## Features
//!
//! - `tracing`: [`OutcomeTracingExt`] and a log event before an unwrap panic
//! - `serde`: `Serialize`/`Deserialize` for [`Outcome`] and [`ContextError`]
//! - `proptest`: `Arbitrary` for [`Outcome`]
//! - `try_trait`: `?` on outcomes (nightly only)

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2, try_trait_v2_residual))]

pub mod combine;
pub mod context;
pub mod error;
pub mod future;
pub mod outcome;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod trace;
#[cfg(feature = "try_trait")]
mod try_impl;

// Re-exports
pub use combine::{combine, combine_all, partition, CombineAll};
pub use context::ContextError;
pub use error::UnwrapOnFailure;
pub use future::{combine_all_async, combine_async, OutcomeFutureExt};
pub use outcome::{failure, match_outcome, success, Outcome};
#[cfg(feature = "tracing")]
pub use trace::OutcomeTracingExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combine::{combine, combine_all, CombineAll};
    pub use crate::context::ContextError;
    pub use crate::future::{combine_all_async, combine_async, OutcomeFutureExt};
    pub use crate::outcome::{failure, match_outcome, success, Outcome};
    #[cfg(feature = "tracing")]
    pub use crate::trace::OutcomeTracingExt;
}

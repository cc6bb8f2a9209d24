//! Testing utilities for code built on [`Outcome`](crate::Outcome).
//!
//! - assertion macros that report the unexpected payload on failure;
//! - [`CallCounter`] for checking that short-circuited steps never ran;
//! - [`capture_unwrap_failure`] for inspecting the error carried by an
//!   `unwrap` panic;
//! - an `Arbitrary` implementation for `Outcome` behind the `proptest`
//!   feature.
//!
//! # Examples
//!
//! ```rust
//! use outcome::testing::CallCounter;
//! use outcome::{assert_failure, failure, success, Outcome};
//!
//! let persist = CallCounter::new();
//! let saved: Outcome<i32, &str> = failure("invalid")
//!     .and_then(|v| persist.track(|| success(v)));
//!
//! assert_failure!(saved);
//! assert_eq!(persist.count(), 0);
//! ```

use std::any::Any;
use std::panic::{self, UnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::UnwrapOnFailure;

/// Counts how many times a step was invoked.
///
/// Cheap to share by reference across closures; the count is atomic so the
/// same counter also works from async tasks.
///
/// ```rust
/// use outcome::testing::CallCounter;
///
/// let counter = CallCounter::new();
/// let twice = |x: i32| counter.track(|| x * 2);
/// assert_eq!(twice(2), 4);
/// assert_eq!(twice(5), 10);
/// assert_eq!(counter.count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: AtomicUsize,
}

impl CallCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call.
    pub fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Record one call and run `f`.
    pub fn track<R, F>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.hit();
        f()
    }

    /// Number of calls recorded so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Run `f` and return the error carried by an `Outcome::unwrap` panic.
///
/// Returns `None` if `f` completes without panicking. Panics raised by
/// anything other than an unwrap of an `Outcome<_, E>` are resumed.
///
/// ```rust
/// use outcome::failure;
/// use outcome::testing::capture_unwrap_failure;
///
/// let error = capture_unwrap_failure::<&str, _, _>(|| failure::<i32, _>("e").unwrap());
/// assert_eq!(error, Some("e"));
/// ```
pub fn capture_unwrap_failure<E, R, F>(f: F) -> Option<E>
where
    E: Any + Send,
    F: FnOnce() -> R + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(_) => None,
        Err(payload) => match payload.downcast::<UnwrapOnFailure<E>>() {
            Ok(signal) => Some(signal.into_error()),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Assert that an outcome is a `Success`.
///
/// ```rust
/// use outcome::{assert_success, success, Outcome};
///
/// assert_success!(success::<_, String>(1));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is a `Failure`.
///
/// ```rust
/// use outcome::{assert_failure, failure};
///
/// assert_failure!(failure::<i32, _>("nope"));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is a `Failure` with the given error.
///
/// ```rust
/// use outcome::{assert_failure_eq, failure};
///
/// assert_failure_eq!(failure::<i32, _>("nope"), "nope");
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(error) => {
                assert_eq!(error, $expected);
            }
            $crate::Outcome::Success(v) => {
                panic!(
                    "Expected Failure with error {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::Outcome;

    impl<T, E> Arbitrary for Outcome<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Outcome::Success),
                any_with::<E>(e_params).prop_map(Outcome::Failure),
            ]
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{failure, success, Outcome};

    #[test]
    fn call_counter_counts() {
        let counter = CallCounter::new();
        assert_eq!(counter.count(), 0);
        counter.hit();
        assert_eq!(counter.track(|| "ran"), "ran");
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn capture_returns_error_payload() {
        let error = capture_unwrap_failure::<&str, _, _>(|| failure::<i32, _>("e").unwrap());
        assert_eq!(error, Some("e"));
    }

    #[test]
    fn capture_returns_none_without_panic() {
        let error = capture_unwrap_failure::<&str, _, _>(|| success::<_, &str>(1).unwrap());
        assert_eq!(error, None);
    }

    #[test]
    #[should_panic(expected = "unrelated")]
    fn capture_resumes_foreign_panics() {
        let _ = capture_unwrap_failure::<&str, (), _>(|| panic!("unrelated"));
    }

    #[test]
    fn assert_success_macro() {
        assert_success!(success::<_, String>(42));
    }

    #[test]
    fn assert_failure_macro() {
        assert_failure!(failure::<i32, _>("error"));
    }

    #[test]
    fn assert_failure_eq_macro() {
        assert_failure_eq!(failure::<i32, _>(vec!["a", "b"]), vec!["a", "b"]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let o: Outcome<i32, &str> = failure("error");
        assert_success!(o);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let o: Outcome<i32, &str> = success(1);
        assert_failure!(o);
    }

    #[test]
    #[should_panic(expected = "Expected Failure with error")]
    fn assert_failure_eq_panics_on_success() {
        let o: Outcome<i32, &str> = success(1);
        assert_failure_eq!(o, "error");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_generates_both_variants(o in any::<Outcome<i32, String>>()) {
                match &o {
                    Outcome::Success(_) => prop_assert!(o.is_success()),
                    Outcome::Failure(_) => prop_assert!(o.is_failure()),
                }
            }
        }
    }
}

//! The `Outcome` sum type: a value or an error, never both.
//!
//! `Outcome<T, E>` models the result of an operation that may fail. It is a
//! closed enum with two variants, `Success(T)` and `Failure(E)`, so a value
//! can never carry both payloads or neither.
//!
//! Combinators consume the outcome and return a new one. The success channel
//! is the "happy path": `map` and `and_then` run only on `Success`, while
//! `map_err` and `catch` run only on `Failure`. A chain of `and_then` calls
//! stops at the first failure and every later step is skipped.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{failure, success, Outcome};
//!
//! fn parse(s: &str) -> Outcome<i32, String> {
//!     Outcome::from_result(s.parse::<i32>()).map_err(|e| e.to_string())
//! }
//!
//! fn positive(n: i32) -> Outcome<i32, String> {
//!     if n > 0 {
//!         success(n)
//!     } else {
//!         failure(format!("{} is not positive", n))
//!     }
//! }
//!
//! assert_eq!(parse("21").and_then(positive).map(|n| n * 2), Outcome::Success(42));
//! assert!(parse("-3").and_then(positive).is_failure());
//! ```

use std::fmt;

use crate::error::UnwrapOnFailure;

/// Either a successful value of type `T` or an error of type `E`.
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
///
/// let ok: Outcome<i32, &str> = Outcome::success(2);
/// let err: Outcome<i32, &str> = Outcome::failure("boom");
///
/// match ok {
///     Outcome::Success(v) => assert_eq!(v, 2),
///     Outcome::Failure(_) => unreachable!(),
/// }
/// assert_eq!(err.get_or_else(0), 0);
/// ```
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert!(Outcome::<_, String>::success(1).is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert!(Outcome::<i32, _>::failure("nope").is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Create an outcome from a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    // ========== Borrowing ==========

    /// Convert `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let o: Outcome<String, ()> = Outcome::success("hi".to_string());
    /// assert_eq!(o.as_ref().map(|s| s.len()), Outcome::Success(2));
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Convert `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    // ========== Extractors ==========

    /// The success value, if any.
    #[inline]
    pub fn success_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The error, if any.
    #[inline]
    pub fn failure_value(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Convert into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Return the success value, or `default` on failure. Never panics.
    ///
    /// ```rust
    /// use outcome::{failure, success, Outcome};
    ///
    /// assert_eq!(success::<_, &str>(5).get_or_else(0), 5);
    /// assert_eq!(failure::<i32, _>("e").get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Return the success value, or compute one from the error.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let o: Outcome<usize, &str> = Outcome::failure("four");
    /// assert_eq!(o.get_or_else_with(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`. The panic payload is an
    /// [`UnwrapOnFailure`] carrying the error, so it can be recovered with
    /// `std::panic::catch_unwind` and a downcast. Only call this when success
    /// is already established; otherwise use [`get_or_else`](Self::get_or_else)
    /// or a `match`.
    ///
    /// The default panic hook only renders `&str` and `String` payloads, so
    /// its message shows the panic location but not the error. Use
    /// [`expect`](Self::expect) when the panic message has to show the error,
    /// or enable the `tracing` feature to log it before panicking.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::success(3).unwrap(), 3);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                #[cfg(feature = "tracing")]
                tracing::error!(error = ?error, "called `Outcome::unwrap()` on a `Failure` value");
                std::panic::panic_any(UnwrapOnFailure::new(error))
            }
        }
    }

    /// Return the success value, panicking with `msg` on failure.
    ///
    /// # Panics
    ///
    /// Panics with `"{msg}: {error:?}"` if this is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic!("{}: {:?}", msg, error),
        }
    }

    /// Return the error.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Success(value) => panic!(
                "called `Outcome::unwrap_failure()` on a `Success` value: {:?}",
                value
            ),
            Outcome::Failure(error) => error,
        }
    }

    // ========== Transformations ==========

    /// Transform the success value. Failures pass through and `f` is not
    /// called.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let ok: Outcome<i32, &str> = Outcome::success(20);
    /// let err: Outcome<i32, &str> = Outcome::failure("e");
    /// assert_eq!(ok.map(|x| x + 1), Outcome::Success(21));
    /// assert_eq!(err.map(|x| x + 1), Outcome::Failure("e"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the error. Successes pass through and `f` is not called.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let err: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(err.map_err(str::len), Outcome::Failure(3));
    /// ```
    #[inline]
    pub fn map_err<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Transform both channels.
    #[inline]
    pub fn bimap<U, F2, F, G>(self, on_success: F, on_failure: G) -> Outcome<U, F2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(on_success(value)),
            Outcome::Failure(error) => Outcome::Failure(on_failure(error)),
        }
    }

    /// Call `f` with a reference to the success value, then return `self`.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Call `f` with a reference to the error, then return `self`.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(ref error) = self {
            f(error);
        }
        self
    }

    /// Turn a success into `Failure(error)` unless `predicate` holds.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let age: Outcome<u8, &str> = Outcome::success(15);
    /// assert_eq!(age.ensure(|a| *a >= 18, "too young"), Outcome::Failure("too young"));
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Success(value) if predicate(&value) => Outcome::Success(value),
            Outcome::Success(_) => Outcome::Failure(error),
            Outcome::Failure(e) => Outcome::Failure(e),
        }
    }

    // ========== Chaining ==========

    /// Chain a fallible step. On `Success(v)` the result of `f(v)` is
    /// returned as is; on `Failure` the error passes through and `f` is not
    /// called.
    ///
    /// ```rust
    /// use outcome::{failure, success, Outcome};
    ///
    /// let halve = |n: i32| if n % 2 == 0 { success(n / 2) } else { failure("odd") };
    ///
    /// assert_eq!(success(8).and_then(halve).and_then(halve), Outcome::Success(2));
    /// assert_eq!(success(6).and_then(halve).and_then(halve), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`and_then`](Self::and_then).
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.and_then(f)
    }

    /// Recover from a failure. On `Failure(e)` the result of `f(e)` is
    /// returned, which may be a success or a different failure. Successes
    /// pass through and `f` is not called.
    ///
    /// ```rust
    /// use outcome::{failure, success, Outcome};
    ///
    /// let cached: Outcome<&str, String> = failure::<&str, _>(404)
    ///     .catch(|code| if code == 404 { success("fallback") } else { failure(code.to_string()) });
    /// assert_eq!(cached, Outcome::Success("fallback"));
    /// ```
    #[inline]
    pub fn catch<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    /// Alias for [`catch`](Self::catch).
    #[inline]
    pub fn or_else<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        self.catch(f)
    }

    /// Pair two outcomes; see [`combine`](crate::combine::combine).
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E> {
        crate::combine::combine(self, other)
    }

    /// Collapse both variants into one value by calling exactly one handler.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::failure("oops");
    /// assert_eq!(o.fold(|v| v.to_string(), |e| format!("error: {}", e)), "error: oops");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_success: F, on_failure: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    // ========== Iteration ==========

    /// Iterate over the success value (zero or one item).
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().success_value().into_iter()
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

// ========== Free functions ==========

/// Create a successful outcome. The error type is left to inference.
#[inline]
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Create a failed outcome. The value type is left to inference.
#[inline]
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Dispatch on the variant, calling exactly one of the two handlers.
///
/// ```rust
/// use outcome::{match_outcome, success, Outcome};
///
/// let shown = match_outcome(success::<_, String>(7), |v| v * 6, |_| 0);
/// assert_eq!(shown, 42);
/// ```
#[inline]
pub fn match_outcome<T, E, R, F, G>(outcome: Outcome<T, E>, on_success: F, on_failure: G) -> R
where
    F: FnOnce(T) -> R,
    G: FnOnce(E) -> R,
{
    match outcome {
        Outcome::Success(value) => on_success(value),
        Outcome::Failure(error) => on_failure(error),
    }
}

// ========== Trait Implementations ==========

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.success_value().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_constructors_and_predicates() {
        let ok: Outcome<i32, &str> = success(1);
        let err: Outcome<i32, &str> = failure("e");

        assert!(ok.is_success());
        assert!(!ok.is_failure());
        assert!(err.is_failure());
        assert!(!err.is_success());
        assert_eq!(Outcome::<i32, &str>::success(1), ok);
        assert_eq!(Outcome::<i32, &str>::failure("e"), err);
    }

    #[test]
    fn test_map_invokes_once_on_success() {
        let calls = Cell::new(0);
        let result = success::<_, ()>(2).map(|x| {
            calls.set(calls.get() + 1);
            x * 10
        });
        assert_eq!(result, Outcome::Success(20));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_skips_failure() {
        let calls = Cell::new(0);
        let result = failure::<i32, _>("e").map(|x| {
            calls.set(calls.get() + 1);
            x * 10
        });
        assert_eq!(result, Outcome::Failure("e"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_err() {
        let err: Outcome<i32, &str> = failure("abc");
        assert_eq!(err.map_err(|e| e.len()), Outcome::Failure(3));

        let ok: Outcome<i32, &str> = success(1);
        assert_eq!(ok.map_err(|e| e.len()), Outcome::Success(1));
    }

    #[test]
    fn test_map_err_skips_success() {
        let calls = Cell::new(0);
        let result = success::<_, &str>(7).map_err(|e| {
            calls.set(calls.get() + 1);
            e.len()
        });
        assert_eq!(result, Outcome::Success(7));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_and_then_returns_callback_result_unwrapped() {
        let ok: Outcome<i32, &str> = success(3);
        assert_eq!(
            ok.and_then(|_| failure::<i32, _>("later")),
            Outcome::Failure("later")
        );
        assert_eq!(ok.flat_map(|x| success(x + 1)), Outcome::Success(4));
    }

    #[test]
    fn test_catch() {
        let err: Outcome<i32, &str> = failure("missing");
        assert_eq!(err.catch(|_| success::<_, String>(0)), Outcome::Success(0));

        let err: Outcome<i32, &str> = failure("missing");
        assert_eq!(
            err.catch(|e| failure::<i32, _>(e.to_uppercase())),
            Outcome::Failure("MISSING".to_string())
        );

        let calls = Cell::new(0);
        let ok: Outcome<i32, &str> = success(9);
        let result = ok.or_else(|_| {
            calls.set(calls.get() + 1);
            success::<_, ()>(0)
        });
        assert_eq!(result, Outcome::Success(9));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(success::<_, &str>(5).get_or_else(0), 5);
        assert_eq!(failure::<i32, _>("e").get_or_else(0), 0);
        assert_eq!(failure::<usize, _>("abc").get_or_else_with(|e| e.len()), 3);
    }

    #[test]
    fn test_unwrap_success() {
        assert_eq!(success::<_, &str>("v").unwrap(), "v");
    }

    #[test]
    #[should_panic]
    fn test_unwrap_failure_panics() {
        let _ = failure::<i32, _>("e").unwrap();
    }

    #[test]
    fn test_unwrap_panic_payload_carries_error() {
        let caught = std::panic::catch_unwind(|| failure::<i32, _>("e").unwrap())
            .expect_err("unwrap on failure must panic");
        let payload = caught
            .downcast::<UnwrapOnFailure<&str>>()
            .expect("payload should be UnwrapOnFailure");
        assert_eq!(payload.into_error(), "e");
    }

    #[test]
    fn test_unwrap_payload_is_not_a_message() {
        let caught = std::panic::catch_unwind(|| failure::<i32, _>("disk full").unwrap())
            .expect_err("unwrap on failure must panic");
        assert!(caught.downcast_ref::<&str>().is_none());
        assert!(caught.downcast_ref::<String>().is_none());
        assert!(caught.is::<UnwrapOnFailure<&str>>());
    }

    #[test]
    #[should_panic(expected = "config missing: \"e\"")]
    fn test_expect_message() {
        let _ = failure::<i32, _>("e").expect("config missing");
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_failure()` on a `Success` value: 1")]
    fn test_unwrap_failure_on_success_panics() {
        let _ = success::<_, &str>(1).unwrap_failure();
    }

    #[test]
    fn test_bimap_and_fold() {
        let ok: Outcome<i32, &str> = success(2);
        let err: Outcome<i32, &str> = failure("ab");
        assert_eq!(ok.bimap(|v| v + 1, str::len), Outcome::Success(3));
        assert_eq!(err.bimap(|v| v + 1, str::len), Outcome::Failure(2));
        assert_eq!(ok.fold(|v| v, |_| -1), 2);
        assert_eq!(err.fold(|v| v, |_| -1), -1);
    }

    #[test]
    fn test_match_outcome_calls_exactly_one_handler() {
        let successes = Cell::new(0);
        let failures = Cell::new(0);

        let label = match_outcome(
            failure::<i32, _>("x"),
            |_| {
                successes.set(successes.get() + 1);
                "ok"
            },
            |_| {
                failures.set(failures.get() + 1);
                "err"
            },
        );

        assert_eq!(label, "err");
        assert_eq!(successes.get(), 0);
        assert_eq!(failures.get(), 1);
    }

    #[test]
    fn test_inspect() {
        let seen = Cell::new(0);
        let ok = success::<_, &str>(4)
            .inspect(|v| seen.set(*v))
            .inspect_err(|_| seen.set(-1));
        assert_eq!(ok, Outcome::Success(4));
        assert_eq!(seen.get(), 4);

        let err = failure::<i32, _>("e")
            .inspect(|v| seen.set(*v))
            .inspect_err(|_| seen.set(-1));
        assert_eq!(err, Outcome::Failure("e"));
        assert_eq!(seen.get(), -1);
    }

    #[test]
    fn test_ensure() {
        assert_eq!(
            success::<_, &str>(20).ensure(|a| *a >= 18, "young"),
            Outcome::Success(20)
        );
        assert_eq!(
            success::<_, &str>(3).ensure(|a| *a >= 18, "young"),
            Outcome::Failure("young")
        );
        assert_eq!(
            failure::<i32, _>("first").ensure(|_| false, "second"),
            Outcome::Failure("first")
        );
    }

    #[test]
    fn test_result_conversion() {
        let o: Outcome<i32, &str> = Ok(1).into();
        assert_eq!(o, Outcome::Success(1));
        let o: Outcome<i32, &str> = Err("e").into();
        assert_eq!(o, Outcome::Failure("e"));

        let r: Result<i32, &str> = success::<_, &str>(2).into();
        assert_eq!(r, Ok(2));
        assert_eq!(failure::<i32, _>("e").into_result(), Err("e"));
    }

    #[test]
    fn test_extractors() {
        assert_eq!(success::<_, &str>(1).success_value(), Some(1));
        assert_eq!(success::<_, &str>(1).failure_value(), None);
        assert_eq!(failure::<i32, _>("e").success_value(), None);
        assert_eq!(failure::<i32, _>("e").failure_value(), Some("e"));
    }

    #[test]
    fn test_as_mut() {
        let mut o: Outcome<i32, &str> = success(1);
        if let Outcome::Success(v) = o.as_mut() {
            *v = 5;
        }
        assert_eq!(o, Outcome::Success(5));
    }

    #[test]
    fn test_flatten() {
        let nested: Outcome<Outcome<i32, &str>, &str> = success(success(1));
        assert_eq!(nested.flatten(), Outcome::Success(1));

        let outer: Outcome<Outcome<i32, &str>, &str> = failure("outer");
        assert_eq!(outer.flatten(), Outcome::Failure("outer"));
    }

    #[test]
    fn test_iteration() {
        let ok: Outcome<i32, &str> = success(7);
        let err: Outcome<i32, &str> = failure("e");

        assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&7]);
        assert!(err.iter().next().is_none());
        assert_eq!(ok.into_iter().collect::<Vec<_>>(), vec![7]);

        let total: i32 = (&ok).into_iter().sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn test_functor_identity() {
        let ok: Outcome<i32, &str> = success(3);
        let err: Outcome<i32, &str> = failure("e");
        assert_eq!(ok.map(|x| x), ok);
        assert_eq!(err.map(|x| x), err);
    }

    #[test]
    fn test_monad_identities() {
        let f = |x: i32| -> Outcome<i32, &'static str> {
            if x > 0 {
                success(x * 2)
            } else {
                failure("non-positive")
            }
        };

        assert_eq!(success(4).and_then(f), f(4));
        assert_eq!(success(-1).and_then(f), f(-1));

        let ok: Outcome<i32, &str> = success(4);
        let err: Outcome<i32, &str> = failure("e");
        assert_eq!(ok.and_then(success), ok);
        assert_eq!(err.and_then(success), err);
    }
}

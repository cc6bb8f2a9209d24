//! Chaining outcomes through asynchronous steps.
//!
//! When a step in a chain has to wait (a network call, a disk write) it
//! returns a future of an `Outcome` instead of an `Outcome`. The helpers in
//! this module keep the synchronous guarantees in that setting:
//!
//! - each step is awaited before the next one is created;
//! - the first `Failure` ends the chain, and later steps are neither called
//!   nor polled.
//!
//! Independent chains share nothing and can be driven concurrently with
//! [`combine_async`] or [`combine_all_async`]. There is no cancellation or
//! timeout here: dropping the returned future drops the rest of the chain.
//!
//! # Examples
//!
//! ```
//! use outcome::{failure, success, Outcome, OutcomeFutureExt};
//!
//! async fn fetch(id: u32) -> Outcome<String, String> {
//!     if id == 0 { failure("no user 0".to_string()) } else { success(format!("user-{}", id)) }
//! }
//!
//! async fn greet(name: String) -> Outcome<String, String> {
//!     success(format!("hello, {}", name))
//! }
//!
//! # tokio_test::block_on(async {
//! let hello = fetch(7).and_then_async(greet).await;
//! assert_eq!(hello, Outcome::Success("hello, user-7".to_string()));
//!
//! let missing = fetch(0).and_then_async(greet).map_success(|s| s.len()).await;
//! assert_eq!(missing, Outcome::Failure("no user 0".to_string()));
//! # });
//! ```

use std::future::Future;

use crate::combine::{combine, combine_all};
use crate::Outcome;

impl<T, E> Outcome<T, E> {
    /// Chain an asynchronous step onto a ready outcome.
    ///
    /// On `Success(v)` the future returned by `f(v)` is awaited. On
    /// `Failure` the error is returned and `f` is never called.
    ///
    /// ```
    /// use outcome::{success, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let doubled = success::<_, ()>(21)
    ///     .and_then_async(|n| async move { success(n * 2) })
    ///     .await;
    /// assert_eq!(doubled, Outcome::Success(42));
    /// # });
    /// ```
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        match self {
            Outcome::Success(value) => f(value).await,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recover from a failure with an asynchronous step.
    pub async fn catch_async<F2, F, Fut>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, F2>>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error).await,
        }
    }
}

/// Combinators for futures that resolve to an [`Outcome`].
///
/// Implemented for every `Future<Output = Outcome<T, E>>`.
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Sized {
    /// Map the success value once the future resolves.
    fn map_success<U, F>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Map the error once the future resolves.
    fn map_failure<F2, F>(self, f: F) -> impl Future<Output = Outcome<T, F2>>
    where
        F: FnOnce(E) -> F2,
    {
        async move { self.await.map_err(f) }
    }

    /// Await this future, then on success await the step produced by `f`.
    ///
    /// A failure from this future is returned without calling `f`.
    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U, E>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U, E>>,
    {
        async move { self.await.and_then_async(f).await }
    }

    /// Await this future, then on failure await the recovery produced by
    /// `f`.
    fn catch_async<F2, F, Fut>(self, f: F) -> impl Future<Output = Outcome<T, F2>>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = Outcome<T, F2>>,
    {
        async move { self.await.catch_async(f).await }
    }
}

impl<T, E, Fut> OutcomeFutureExt<T, E> for Fut where Fut: Future<Output = Outcome<T, E>> {}

/// Drive two independent outcome futures concurrently and pair their values.
///
/// Both futures run to completion. The result follows [`combine()`]: when both
/// fail, the left error is kept.
///
/// ```
/// use outcome::{combine_async, failure, success, Outcome};
///
/// # tokio_test::block_on(async {
/// let both = combine_async(async { success::<_, &str>(1) }, async { success('a') }).await;
/// assert_eq!(both, Outcome::Success((1, 'a')));
///
/// let left = combine_async(
///     async { failure::<i32, _>("left") },
///     async { failure::<char, _>("right") },
/// )
/// .await;
/// assert_eq!(left, Outcome::Failure("left"));
/// # });
/// ```
pub async fn combine_async<A, B, E, FutA, FutB>(left: FutA, right: FutB) -> Outcome<(A, B), E>
where
    FutA: Future<Output = Outcome<A, E>>,
    FutB: Future<Output = Outcome<B, E>>,
{
    let (left, right) = futures::future::join(left, right).await;
    combine(left, right)
}

/// Drive every future concurrently, then gather the values in input order.
///
/// All futures run to completion; the first failure in input order (not in
/// completion order) is returned.
pub async fn combine_all_async<T, E, I>(steps: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Outcome<T, E>>,
{
    combine_all(futures::future::join_all(steps).await)
}

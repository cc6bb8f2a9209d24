//! Combining several outcomes into one.
//!
//! Every function here uses the same tie-break policy: when more than one
//! input is a `Failure`, the **leftmost** failure (first in argument, tuple
//! or iteration order) is returned and the others are dropped. Errors are
//! never merged.
//!
//! # Examples
//!
//! ```
//! use outcome::{combine, failure, success, Outcome};
//!
//! let both: Outcome<(i32, &str), &str> = combine(success(1), success("a"));
//! assert_eq!(both, Outcome::Success((1, "a")));
//!
//! let first_wins = combine(failure::<i32, _>("a"), failure::<i32, _>("b"));
//! assert_eq!(first_wins, Outcome::Failure("a"));
//! ```

use crate::Outcome;

/// Pair two outcomes.
///
/// Returns `Success((v1, v2))` only if both are `Success`. Otherwise returns
/// the first argument's error if it failed, else the second's.
///
/// | `r1`        | `r2`        | result             |
/// |-------------|-------------|--------------------|
/// | `Success(1)`| `Success(2)`| `Success((1, 2))`  |
/// | `Failure(a)`| `Success(2)`| `Failure(a)`       |
/// | `Success(1)`| `Failure(b)`| `Failure(b)`       |
/// | `Failure(a)`| `Failure(b)`| `Failure(a)`       |
pub fn combine<T1, T2, E>(r1: Outcome<T1, E>, r2: Outcome<T2, E>) -> Outcome<(T1, T2), E> {
    match (r1, r2) {
        (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success((a, b)),
        (Outcome::Failure(e), _) => Outcome::Failure(e),
        (Outcome::Success(_), Outcome::Failure(e)) => Outcome::Failure(e),
    }
}

/// Collect an iterator of outcomes into one outcome of a `Vec`.
///
/// Iteration stops at the first `Failure`, which is returned; items after it
/// are never pulled from the iterator.
///
/// ```
/// use outcome::{combine_all, failure, success, Outcome};
///
/// let all = combine_all(vec![success::<_, &str>(1), success(2)]);
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let some = combine_all(vec![success(1), failure("x"), failure("y")]);
/// assert_eq!(some, Outcome::Failure("x"));
/// ```
pub fn combine_all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Split an iterator of outcomes into its values and its errors, in order.
///
/// ```
/// use outcome::{failure, partition, success};
///
/// let (values, errors) = partition(vec![success(1), failure("a"), success(2)]);
/// assert_eq!(values, vec![1, 2]);
/// assert_eq!(errors, vec!["a"]);
/// ```
pub fn partition<T, E, I>(outcomes: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => errors.push(error),
        }
    }

    (values, errors)
}

impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut first_error = None;
        let values = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    first_error = Some(error);
                    None
                }
            })
            .collect();

        match first_error {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(values),
        }
    }
}

/// Combine a tuple of outcomes that share an error type.
///
/// Implemented for tuples of 1 to 12 elements. The first failing element in
/// tuple order decides the error.
///
/// ```
/// use outcome::{failure, success, CombineAll, Outcome};
///
/// let ok = (
///     success::<_, &str>(1),
///     success::<_, &str>("two"),
///     success::<_, &str>(3.0),
/// )
///     .combine_all();
/// assert_eq!(ok, Outcome::Success((1, "two", 3.0)));
///
/// let err = (
///     success::<_, &str>(1),
///     failure::<&str, _>("second"),
///     failure::<f64, _>("third"),
/// )
///     .combine_all();
/// assert_eq!(err, Outcome::Failure("second"));
/// ```
pub trait CombineAll<E> {
    /// The tuple of success values.
    type Output;

    /// Combine every element, stopping at the first failure.
    fn combine_all(self) -> Outcome<Self::Output, E>;
}

macro_rules! impl_combine_all {
    ($($T:ident),+) => {
        impl<E, $($T),+> CombineAll<E> for ($(Outcome<$T, E>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn combine_all(self) -> Outcome<Self::Output, E> {
                let ($($T,)+) = self;
                $(
                    let $T = match $T {
                        Outcome::Success(value) => value,
                        Outcome::Failure(error) => return Outcome::Failure(error),
                    };
                )+
                Outcome::Success(($($T,)+))
            }
        }
    };
}

impl_combine_all!(T1);
impl_combine_all!(T1, T2);
impl_combine_all!(T1, T2, T3);
impl_combine_all!(T1, T2, T3, T4);
impl_combine_all!(T1, T2, T3, T4, T5);
impl_combine_all!(T1, T2, T3, T4, T5, T6);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);

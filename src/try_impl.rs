//! `?` support for [`Outcome`] on nightly (feature `try_trait`).
//!
//! With the feature enabled, `?` on an `Outcome` returns early with its
//! failure, converting the error through `From` the same way `?` does for
//! `Result`. A `Result` can also be propagated with `?` inside a function that
//! returns an `Outcome`.

use std::convert::Infallible;
use std::ops::{ControlFlow, FromResidual, Residual, Try};

use crate::Outcome;

impl<T, E> Try for Outcome<T, E> {
    type Output = T;
    type Residual = Outcome<Infallible, E>;

    #[inline]
    fn from_output(output: T) -> Self {
        Outcome::Success(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Outcome::Success(value) => ControlFlow::Continue(value),
            Outcome::Failure(error) => ControlFlow::Break(Outcome::Failure(error)),
        }
    }
}

impl<T, E> Residual<T> for Outcome<Infallible, E> {
    type TryType = Outcome<T, E>;
}

impl<T, E, F: From<E>> FromResidual<Outcome<Infallible, E>> for Outcome<T, F> {
    #[inline]
    fn from_residual(residual: Outcome<Infallible, E>) -> Self {
        match residual {
            Outcome::Failure(error) => Outcome::Failure(From::from(error)),
            Outcome::Success(never) => match never {},
        }
    }
}

impl<T, E, F: From<E>> FromResidual<Result<Infallible, E>> for Outcome<T, F> {
    #[inline]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Err(error) => Outcome::Failure(From::from(error)),
            Ok(never) => match never {},
        }
    }
}

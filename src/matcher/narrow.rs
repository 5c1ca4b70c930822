//! Narrowing matchers
//!
//! A plain matcher only answers yes or no. A narrowing matcher also hands back
//! the part of the action it recognized, so the caller does not have to match
//! on the action a second time after a successful test.
//!
//! - [`extract`] turns a `Fn(&A) -> Option<&T>` into a narrowing matcher
//! - `is_all_of((n1, n2, ..))` narrows to the tuple of every payload
//! - `is_any_of([n1, n2, ..])` narrows to the first payload found
//! - `n1.and(n2)` narrows to a pair, `n1.or(n2)` to an [`Either`]
//!
//! # Example
//!
//! ```rust
//! use sluice::matcher::*;
//!
//! enum Action {
//!     Add(i64),
//!     Rename(String),
//! }
//!
//! let add = extract(|a: &Action| match a {
//!     Action::Add(n) => Some(n),
//!     _ => None,
//! });
//!
//! assert_eq!(add.narrow(&Action::Add(3)), Some(&3));
//! assert_eq!(add.narrow(&Action::Rename("x".into())), None);
//! assert!(add.matches(&Action::Add(3)));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::combinators::{IsAllOf, IsAnyOf};
use super::trait_def::{And, Matcher, Or};
use crate::either::Either;

/// A matcher that can also extract what it matched.
///
/// `narrow(action).is_some()` must agree with `matches(action)`.
pub trait Narrow<'a, A: ?Sized + 'a>: Matcher<A> {
    /// The recognized payload, borrowed from the action.
    type Output;

    /// Return the recognized payload, or `None` when the action does not match.
    fn narrow(&self, action: &'a A) -> Option<Self::Output>;
}

/// Narrowing matcher built from an extraction function.
///
/// Created by [`extract`].
pub struct Extract<F, T: ?Sized> {
    f: F,
    _payload: PhantomData<fn(&T)>,
}

/// Create a narrowing matcher from a function returning the recognized part
/// of an action.
pub fn extract<A, T, F>(f: F) -> Extract<F, T>
where
    A: ?Sized,
    T: ?Sized,
    F: Fn(&A) -> Option<&T> + Send + Sync,
{
    Extract {
        f,
        _payload: PhantomData,
    }
}

impl<A, T, F> Matcher<A> for Extract<F, T>
where
    A: ?Sized,
    T: ?Sized,
    F: Fn(&A) -> Option<&T> + Send + Sync,
{
    #[inline]
    fn matches(&self, action: &A) -> bool {
        (self.f)(action).is_some()
    }
}

impl<'a, A, T, F> Narrow<'a, A> for Extract<F, T>
where
    A: ?Sized + 'a,
    T: ?Sized + 'a,
    F: Fn(&A) -> Option<&T> + Send + Sync,
{
    type Output = &'a T;

    #[inline]
    fn narrow(&self, action: &'a A) -> Option<&'a T> {
        (self.f)(action)
    }
}

impl<F, T: ?Sized> Clone for Extract<F, T>
where
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _payload: PhantomData,
        }
    }
}

impl<F, T: ?Sized> fmt::Debug for Extract<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extract").finish_non_exhaustive()
    }
}

impl<'a, A, N1, N2> Narrow<'a, A> for And<N1, N2>
where
    A: ?Sized + 'a,
    N1: Narrow<'a, A>,
    N2: Narrow<'a, A>,
{
    type Output = (N1::Output, N2::Output);

    fn narrow(&self, action: &'a A) -> Option<Self::Output> {
        let left = self.0.narrow(action)?;
        let right = self.1.narrow(action)?;
        Some((left, right))
    }
}

impl<'a, A, N1, N2> Narrow<'a, A> for Or<N1, N2>
where
    A: ?Sized + 'a,
    N1: Narrow<'a, A>,
    N2: Narrow<'a, A>,
{
    type Output = Either<N1::Output, N2::Output>;

    fn narrow(&self, action: &'a A) -> Option<Self::Output> {
        if let Some(left) = self.0.narrow(action) {
            return Some(Either::Left(left));
        }
        self.1.narrow(action).map(Either::Right)
    }
}

impl<'a, A, N, const K: usize> Narrow<'a, A> for IsAnyOf<[N; K]>
where
    A: ?Sized + 'a,
    N: Narrow<'a, A>,
{
    type Output = N::Output;

    fn narrow(&self, action: &'a A) -> Option<N::Output> {
        self.0.iter().find_map(|n| n.narrow(action))
    }
}

impl<'a, A, N> Narrow<'a, A> for IsAnyOf<Vec<N>>
where
    A: ?Sized + 'a,
    N: Narrow<'a, A>,
{
    type Output = N::Output;

    fn narrow(&self, action: &'a A) -> Option<N::Output> {
        self.0.iter().find_map(|n| n.narrow(action))
    }
}

impl<'a, A, N> Narrow<'a, A> for IsAllOf<Vec<N>>
where
    A: ?Sized + 'a,
    N: Narrow<'a, A>,
{
    type Output = Vec<N::Output>;

    fn narrow(&self, action: &'a A) -> Option<Vec<N::Output>> {
        self.0.iter().map(|n| n.narrow(action)).collect()
    }
}

// Tuple fields are evaluated left to right; `?` stops at the first miss.
macro_rules! impl_narrow_all_of_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<'a, A: ?Sized + 'a, $($name: Narrow<'a, A>),+> Narrow<'a, A> for IsAllOf<($($name,)+)> {
            type Output = ($($name::Output,)+);

            fn narrow(&self, action: &'a A) -> Option<Self::Output> {
                Some(($(self.0.$idx.narrow(action)?,)+))
            }
        }
    };
}

impl_narrow_all_of_tuple!(N0.0);
impl_narrow_all_of_tuple!(N0.0, N1.1);
impl_narrow_all_of_tuple!(N0.0, N1.1, N2.2);
impl_narrow_all_of_tuple!(N0.0, N1.1, N2.2, N3.3);
impl_narrow_all_of_tuple!(N0.0, N1.1, N2.2, N3.3, N4.4);
impl_narrow_all_of_tuple!(N0.0, N1.1, N2.2, N3.3, N4.4, N5.5);
impl_narrow_all_of_tuple!(N0.0, N1.1, N2.2, N3.3, N4.4, N5.5, N6.6);
impl_narrow_all_of_tuple!(N0.0, N1.1, N2.2, N3.3, N4.4, N5.5, N6.6, N7.7);
impl_narrow_all_of_tuple!(N0.0, N1.1, N2.2, N3.3, N4.4, N5.5, N6.6, N7.7, N8.8);
impl_narrow_all_of_tuple!(N0.0, N1.1, N2.2, N3.3, N4.4, N5.5, N6.6, N7.7, N8.8, N9.9);
impl_narrow_all_of_tuple!(N0.0, N1.1, N2.2, N3.3, N4.4, N5.5, N6.6, N7.7, N8.8, N9.9, N10.10);
impl_narrow_all_of_tuple!(N0.0, N1.1, N2.2, N3.3, N4.4, N5.5, N6.6, N7.7, N8.8, N9.9, N10.10, N11.11);

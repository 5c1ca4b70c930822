//! Any-of / all-of / none-of combinators
//!
//! Each combinator wraps a [`MatcherList`] and is itself a [`Matcher`], so the
//! result can be passed anywhere a single matcher is expected, including into
//! another combinator.

use super::list::MatcherList;
use super::trait_def::Matcher;

/// Matches when at least one of its matchers matches.
///
/// Matchers are tried in order and evaluation stops at the first match.
/// With no matchers at all it never matches.
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// let is_even = |x: &i32| x % 2 == 0;
/// let is_negative = |x: &i32| *x < 0;
///
/// let m = is_any_of((is_even, is_negative));
/// assert!(m.matches(&4));
/// assert!(m.matches(&-3));
/// assert!(!m.matches(&3));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct IsAnyOf<L>(pub L);

impl<A: ?Sized, L: MatcherList<A>> Matcher<A> for IsAnyOf<L> {
    #[inline]
    fn matches(&self, action: &A) -> bool {
        self.0.any_match(action)
    }
}

/// Create a matcher that succeeds if any of `matchers` succeeds.
///
/// `matchers` is a tuple (mixed matcher types), an array or `Vec` (one
/// matcher type), or a [`MatcherSet`](super::MatcherSet). The
/// [`is_any_of!`](crate::is_any_of!) macro takes the matchers as separate
/// arguments and requires at least one.
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// let ones_and_twos: [fn(&u8) -> bool; 2] = [|x| *x == 1, |x| *x == 2];
/// let small = is_any_of(ones_and_twos);
/// assert!(small.matches(&2));
/// assert!(!small.matches(&3));
/// ```
pub fn is_any_of<L>(matchers: L) -> IsAnyOf<L> {
    IsAnyOf(matchers)
}

/// Matches when every one of its matchers matches.
///
/// Matchers are tried in order and evaluation stops at the first miss.
/// With no matchers at all it always matches.
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// let is_even = |x: &i32| x % 2 == 0;
/// let is_negative = |x: &i32| *x < 0;
///
/// let m = is_all_of((is_even, is_negative));
/// assert!(m.matches(&-4));
/// assert!(!m.matches(&4));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct IsAllOf<L>(pub L);

impl<A: ?Sized, L: MatcherList<A>> Matcher<A> for IsAllOf<L> {
    #[inline]
    fn matches(&self, action: &A) -> bool {
        self.0.all_match(action)
    }
}

/// Create a matcher that succeeds only if all of `matchers` succeed.
///
/// Accepts the same sequences as [`is_any_of`].
pub fn is_all_of<L>(matchers: L) -> IsAllOf<L> {
    IsAllOf(matchers)
}

/// Matches when none of its matchers match.
///
/// Equivalent to `is_any_of(..).not()`; stops at the first match.
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// let m = is_none_of((|x: &i32| *x == 1, |x: &i32| *x == 5));
/// assert!(m.matches(&7));
/// assert!(!m.matches(&5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct IsNoneOf<L>(pub L);

impl<A: ?Sized, L: MatcherList<A>> Matcher<A> for IsNoneOf<L> {
    #[inline]
    fn matches(&self, action: &A) -> bool {
        !self.0.any_match(action)
    }
}

/// Create a matcher that succeeds only if none of `matchers` succeed.
pub fn is_none_of<L>(matchers: L) -> IsNoneOf<L> {
    IsNoneOf(matchers)
}

/// Build an [`IsAnyOf`] from one or more matchers.
///
/// ```rust
/// use sluice::is_any_of;
/// use sluice::matcher::Matcher;
///
/// let m = is_any_of!(|x: &i32| *x < 0, |x: &i32| *x > 100);
/// assert!(m.matches(&-1));
/// assert!(!m.matches(&50));
/// ```
///
/// Zero matchers is rejected at compile time:
///
/// ```compile_fail
/// let m = sluice::is_any_of!();
/// ```
#[macro_export]
macro_rules! is_any_of {
    ($($matcher:expr),+ $(,)?) => {
        $crate::matcher::IsAnyOf(($($matcher,)+))
    };
}

/// Build an [`IsAllOf`] from one or more matchers.
///
/// ```rust
/// use sluice::is_all_of;
/// use sluice::matcher::Matcher;
///
/// let m = is_all_of!(|x: &i32| *x > 0, |x: &i32| *x < 10);
/// assert!(m.matches(&5));
/// assert!(!m.matches(&10));
/// ```
#[macro_export]
macro_rules! is_all_of {
    ($($matcher:expr),+ $(,)?) => {
        $crate::matcher::IsAllOf(($($matcher,)+))
    };
}

/// Build an [`IsNoneOf`] from one or more matchers.
#[macro_export]
macro_rules! is_none_of {
    ($($matcher:expr),+ $(,)?) => {
        $crate::matcher::IsNoneOf(($($matcher,)+))
    };
}

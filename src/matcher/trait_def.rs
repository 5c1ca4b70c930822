//! Core matcher trait and pairwise combinators
//!
//! This module provides the foundational `Matcher` trait, the `matches`
//! normalizer, and the pairwise `and` / `or` / `not` combinators.

/// A composable test over actions of type `A`.
///
/// A matcher comes in one of two shapes, and both are used the same way:
///
/// - a plain predicate function: any `Fn(&A) -> bool` is a matcher through a
///   blanket impl
/// - a matcher object: a type that implements `Matcher` itself, exposing
///   [`matches`](Matcher::matches) as its match operation
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// struct IsLarge;
///
/// impl Matcher<i32> for IsLarge {
///     fn matches(&self, action: &i32) -> bool {
///         *action > 1000
///     }
/// }
///
/// let is_even = |x: &i32| x % 2 == 0;
///
/// assert!(is_even.matches(&4));
/// assert!(IsLarge.matches(&5000));
/// assert!(is_any_of((is_even, IsLarge)).matches(&1002));
/// ```
pub trait Matcher<A: ?Sized>: Send + Sync {
    /// Check if the action satisfies this matcher.
    fn matches(&self, action: &A) -> bool;
}

// Predicate-function variant
impl<A: ?Sized, F> Matcher<A> for F
where
    F: Fn(&A) -> bool + Send + Sync,
{
    #[inline]
    fn matches(&self, action: &A) -> bool {
        self(action)
    }
}

/// Test an action against a matcher of either shape.
///
/// Object matchers have their match operation invoked; predicate functions
/// are called directly. The matcher's own side effects are the only ones.
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// let is_negative = |x: &i32| *x < 0;
/// assert!(matches(&is_negative, &-3));
/// assert!(matches(&is_negative.not(), &3));
/// ```
#[inline]
pub fn matches<A, M>(matcher: &M, action: &A) -> bool
where
    A: ?Sized,
    M: Matcher<A> + ?Sized,
{
    matcher.matches(action)
}

/// Extension trait for chaining matchers.
///
/// All methods return concrete types, so a chain costs no allocation.
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// let is_even = |x: &i32| x % 2 == 0;
/// let is_negative = |x: &i32| *x < 0;
///
/// let m = is_even.and(is_negative.not());
/// assert!(m.matches(&4));
/// assert!(!m.matches(&-4));
/// ```
pub trait MatcherExt<A: ?Sized>: Matcher<A> + Sized {
    /// Combine with AND logic.
    ///
    /// `other` is only consulted when `self` matches.
    fn and<M: Matcher<A>>(self, other: M) -> And<Self, M> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// `other` is only consulted when `self` does not match.
    fn or<M: Matcher<A>>(self, other: M) -> Or<Self, M> {
        Or(self, other)
    }

    /// Invert the matcher.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<A: ?Sized, M: Matcher<A>> MatcherExt<A> for M {}

/// AND combinator - both matchers must match.
#[derive(Clone, Copy, Debug)]
pub struct And<M1, M2>(pub M1, pub M2);

impl<A: ?Sized, M1: Matcher<A>, M2: Matcher<A>> Matcher<A> for And<M1, M2> {
    #[inline]
    fn matches(&self, action: &A) -> bool {
        self.0.matches(action) && self.1.matches(action)
    }
}

/// OR combinator - either matcher must match.
#[derive(Clone, Copy, Debug)]
pub struct Or<M1, M2>(pub M1, pub M2);

impl<A: ?Sized, M1: Matcher<A>, M2: Matcher<A>> Matcher<A> for Or<M1, M2> {
    #[inline]
    fn matches(&self, action: &A) -> bool {
        self.0.matches(action) || self.1.matches(action)
    }
}

/// NOT combinator - inverts the matcher.
#[derive(Clone, Copy, Debug)]
pub struct Not<M>(pub M);

impl<A: ?Sized, M: Matcher<A>> Matcher<A> for Not<M> {
    #[inline]
    fn matches(&self, action: &A) -> bool {
        !self.0.matches(action)
    }
}

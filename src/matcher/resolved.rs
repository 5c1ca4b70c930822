//! Resolved matchers and dynamically built matcher sets
//!
//! Tuples and arrays cover matcher lists known at compile time. When the list
//! is assembled at runtime (from configuration, plugins, subscriptions) each
//! entry is boxed into a [`Resolved`] that remembers which calling convention
//! it uses, and the entries are collected into a [`MatcherSet`].

use std::fmt;

use super::list::MatcherList;
use super::trait_def::Matcher;
use crate::error::EmptyMatcherSet;

type BoxedFn<'a, A> = Box<dyn Fn(&A) -> bool + Send + Sync + 'a>;
type BoxedMatcher<'a, A> = Box<dyn Matcher<A> + 'a>;

/// A matcher whose calling convention was fixed when it was built.
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// struct Positive;
///
/// impl Matcher<i32> for Positive {
///     fn matches(&self, action: &i32) -> bool {
///         *action > 0
///     }
/// }
///
/// let callable = Resolved::from_fn(|x: &i32| x % 2 == 0);
/// let object = Resolved::from_matcher(Positive);
///
/// assert!(callable.is_callable());
/// assert!(object.is_object());
/// assert!(callable.matches(&-2));
/// assert!(!object.matches(&-2));
/// ```
pub enum Resolved<'a, A: ?Sized> {
    /// A plain predicate function, invoked directly.
    Callable(BoxedFn<'a, A>),
    /// A matcher object, invoked through its match operation.
    Object(BoxedMatcher<'a, A>),
}

impl<'a, A: ?Sized> Resolved<'a, A> {
    /// Resolve a plain predicate function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'a,
    {
        Resolved::Callable(Box::new(f))
    }

    /// Resolve a matcher object.
    pub fn from_matcher<M>(matcher: M) -> Self
    where
        M: Matcher<A> + 'a,
    {
        Resolved::Object(Box::new(matcher))
    }

    /// True if this wraps a plain predicate function.
    pub fn is_callable(&self) -> bool {
        matches!(self, Resolved::Callable(_))
    }

    /// True if this wraps a matcher object.
    pub fn is_object(&self) -> bool {
        matches!(self, Resolved::Object(_))
    }
}

impl<A: ?Sized> Matcher<A> for Resolved<'_, A> {
    #[inline]
    fn matches(&self, action: &A) -> bool {
        match self {
            Resolved::Callable(f) => f(action),
            Resolved::Object(m) => m.matches(action),
        }
    }
}

impl<A: ?Sized> fmt::Debug for Resolved<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Callable(_) => f.write_str("Resolved::Callable(..)"),
            Resolved::Object(_) => f.write_str("Resolved::Object(..)"),
        }
    }
}

/// A non-empty, ordered list of resolved matchers.
///
/// The first matcher is stored apart from the rest, so a set can never be
/// empty and `is_any_of` / `is_all_of` over it never fall back to a vacuous
/// result.
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// let set = MatcherSet::from_fn(|x: &i32| x % 2 == 0)
///     .with_fn(|x: &i32| *x < 0);
///
/// assert_eq!(set.len(), 2);
/// assert!(is_any_of(set).matches(&4));
/// ```
pub struct MatcherSet<'a, A: ?Sized> {
    first: Resolved<'a, A>,
    rest: Vec<Resolved<'a, A>>,
}

impl<'a, A: ?Sized> MatcherSet<'a, A> {
    /// Start a set from one resolved matcher.
    pub fn new(first: Resolved<'a, A>) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Start a set from a plain predicate function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'a,
    {
        Self::new(Resolved::from_fn(f))
    }

    /// Start a set from a matcher object.
    pub fn from_matcher<M>(matcher: M) -> Self
    where
        M: Matcher<A> + 'a,
    {
        Self::new(Resolved::from_matcher(matcher))
    }

    /// Append a plain predicate function.
    pub fn with_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'a,
    {
        self.push(Resolved::from_fn(f));
        self
    }

    /// Append a matcher object.
    pub fn with_matcher<M>(mut self, matcher: M) -> Self
    where
        M: Matcher<A> + 'a,
    {
        self.push(Resolved::from_matcher(matcher));
        self
    }

    /// Append a resolved matcher.
    pub fn push(&mut self, matcher: Resolved<'a, A>) {
        self.rest.push(matcher);
    }

    /// Number of matchers. Always >= 1.
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always `false`; a set holds at least one matcher.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the matchers in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Resolved<'a, A>> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Convert into a plain `Vec`, keeping the order.
    pub fn into_vec(self) -> Vec<Resolved<'a, A>> {
        let mut all = Vec::with_capacity(self.len());
        all.push(self.first);
        all.extend(self.rest);
        all
    }
}

impl<'a, A: ?Sized> TryFrom<Vec<Resolved<'a, A>>> for MatcherSet<'a, A> {
    type Error = EmptyMatcherSet;

    fn try_from(mut matchers: Vec<Resolved<'a, A>>) -> Result<Self, Self::Error> {
        if matchers.is_empty() {
            return Err(EmptyMatcherSet);
        }
        let first = matchers.remove(0);
        Ok(Self {
            first,
            rest: matchers,
        })
    }
}

impl<A: ?Sized> MatcherList<A> for MatcherSet<'_, A> {
    fn len(&self) -> usize {
        MatcherSet::len(self)
    }

    #[inline]
    fn any_match(&self, action: &A) -> bool {
        self.iter().any(|m| m.matches(action))
    }

    #[inline]
    fn all_match(&self, action: &A) -> bool {
        self.iter().all(|m| m.matches(action))
    }
}

impl<A: ?Sized> fmt::Debug for MatcherSet<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

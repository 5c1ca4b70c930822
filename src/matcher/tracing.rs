//! Tracing support for matchers.
//!
//! This module provides the `Traced` wrapper and the `traced` method for
//! logging every evaluation of a matcher. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.

use super::trait_def::Matcher;

/// A matcher that emits a `TRACE` event each time it is evaluated.
///
/// Created by [`MatcherTracingExt::traced`]. The event carries the matcher's
/// name and the outcome.
#[derive(Clone, Copy, Debug)]
pub struct Traced<M> {
    pub(crate) inner: M,
    pub(crate) name: &'static str,
}

impl<M> Traced<M> {
    /// The name reported in trace events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Unwrap the inner matcher.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<A: ?Sized, M: Matcher<A>> Matcher<A> for Traced<M> {
    fn matches(&self, action: &A) -> bool {
        let matched = self.inner.matches(action);
        tracing::trace!(matcher = self.name, matched, "matcher evaluated");
        matched
    }
}

/// Extension trait for adding trace logging to matchers.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait MatcherTracingExt<A: ?Sized>: Matcher<A> + Sized {
    /// Log every evaluation of this matcher under `name`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use sluice::matcher::*;
    ///
    /// let m = is_any_of((
    ///     of_type("todo/added").traced("added"),
    ///     of_type("todo/removed").traced("removed"),
    /// ))
    /// .traced("todo_changes");
    /// ```
    fn traced(self, name: &'static str) -> Traced<Self> {
        Traced { inner: self, name }
    }
}

impl<A: ?Sized, M: Matcher<A>> MatcherTracingExt<A> for M {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::is_any_of;
    use crate::testing::CallLog;
    use tracing_test::traced_test;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    fn is_negative(x: &i32) -> bool {
        *x < 0
    }

    #[test]
    fn traced_preserves_outcome() {
        let m = is_even.traced("is_even");
        assert!(m.matches(&2));
        assert!(!m.matches(&3));
        assert_eq!(m.name(), "is_even");
    }

    #[traced_test]
    #[test]
    fn emits_event_per_evaluation() {
        let m = is_even.traced("is_even");
        m.matches(&4);

        assert!(logs_contain("matcher evaluated"));
        assert!(logs_contain("is_even"));
        assert!(logs_contain("matched=true"));
    }

    #[traced_test]
    #[test]
    fn skipped_matchers_emit_nothing() {
        let m = is_any_of((is_even.traced("first_even"), is_negative.traced("second_negative")));
        assert!(m.matches(&2));

        assert!(logs_contain("first_even"));
        assert!(!logs_contain("second_negative"));
    }

    #[test]
    fn into_inner_returns_wrapped_matcher() {
        let log = CallLog::new();
        let inner = log.probe("probe", is_even).traced("probe").into_inner();
        assert!(inner.matches(&8));
        assert_eq!(log.calls(), vec!["probe"]);
    }
}

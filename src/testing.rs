//! Testing utilities for matchers
//!
//! Combinators promise a strict evaluation order and short-circuiting. This
//! module makes both observable: a [`CallLog`] records which [`Probe`]s ran,
//! in which order, across any number of evaluations.
//!
//! # Examples
//!
//! ## Recording evaluation order
//!
//! ```rust
//! use sluice::matcher::*;
//! use sluice::testing::CallLog;
//!
//! let log = CallLog::new();
//! let m = is_any_of((
//!     log.probe("even", |x: &i32| x % 2 == 0),
//!     log.probe("negative", |x: &i32| *x < 0),
//! ));
//!
//! assert!(m.matches(&4));
//! assert_eq!(log.calls(), vec!["even"]);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use sluice::{assert_match, assert_no_match};
//!
//! let is_even = |x: &i32| x % 2 == 0;
//! assert_match!(is_even, 4);
//! assert_no_match!(is_even, 3);
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crate::matcher::Matcher;

/// Shared, thread-safe record of matcher invocations.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `matcher` so every evaluation is recorded under `label`.
    ///
    /// The label is recorded before the wrapped matcher runs.
    pub fn probe<M>(&self, label: &'static str, matcher: M) -> Probe<M> {
        Probe {
            label,
            log: self.clone(),
            inner: matcher,
        }
    }

    /// Record one invocation.
    pub fn record(&self, label: &'static str) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(label);
    }

    /// All recorded labels, oldest first.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// How many times `label` was recorded.
    pub fn count(&self, label: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|recorded| **recorded == label)
            .count()
    }

    /// Forget all recorded calls.
    pub fn clear(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// A matcher that records each evaluation in a [`CallLog`].
///
/// Created by [`CallLog::probe`].
#[derive(Debug, Clone)]
pub struct Probe<M> {
    label: &'static str,
    log: CallLog,
    inner: M,
}

impl<M> Probe<M> {
    /// The label this probe records.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<A: ?Sized, M: Matcher<A>> Matcher<A> for Probe<M> {
    fn matches(&self, action: &A) -> bool {
        self.log.record(self.label);
        self.inner.matches(action)
    }
}

/// A matcher with a fixed answer, whatever the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Always(pub bool);

impl<A: ?Sized> Matcher<A> for Always {
    #[inline]
    fn matches(&self, _action: &A) -> bool {
        self.0
    }
}

/// Create a matcher that always answers `outcome`.
pub fn always(outcome: bool) -> Always {
    Always(outcome)
}

/// Assert that a matcher accepts an action.
///
/// # Example
///
/// ```rust
/// use sluice::assert_match;
///
/// assert_match!(|x: &i32| *x > 0, 1);
/// ```
#[macro_export]
macro_rules! assert_match {
    ($matcher:expr, $action:expr) => {
        match &$action {
            action => {
                if !$crate::matcher::matches(&$matcher, action) {
                    panic!("Expected matcher to accept {:?}", action);
                }
            }
        }
    };
}

/// Assert that a matcher rejects an action.
///
/// # Example
///
/// ```rust
/// use sluice::assert_no_match;
///
/// assert_no_match!(|x: &i32| *x > 0, -1);
/// ```
#[macro_export]
macro_rules! assert_no_match {
    ($matcher:expr, $action:expr) => {
        match &$action {
            action => {
                if $crate::matcher::matches(&$matcher, action) {
                    panic!("Expected matcher to reject {:?}", action);
                }
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::matcher::OfType;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for OfType {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        "[a-z]{1,8}(/[a-z]{1,8})?".prop_map(OfType::new).boxed()
    }
}

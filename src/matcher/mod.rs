//! Action matchers and the combinators that compose them
//!
//! A matcher tests whether an action (any value flowing through a dispatch
//! pipeline) satisfies some condition. Matchers come in two shapes, used
//! interchangeably:
//!
//! - plain predicate functions, `Fn(&A) -> bool`
//! - matcher objects, types implementing [`Matcher`]
//!
//! # Combinators
//!
//! - [`is_any_of`]: matches if any matcher matches, stops at the first match
//! - [`is_all_of`]: matches if every matcher matches, stops at the first miss
//! - [`is_none_of`]: matches if no matcher matches
//!
//! Matchers are always evaluated in the order they were supplied, so
//! side effects inside a matcher happen in a predictable sequence and never
//! for matchers whose answer is no longer needed.
//!
//! # Example
//!
//! ```rust
//! use sluice::matcher::*;
//!
//! struct Action {
//!     kind: &'static str,
//!     payload: i64,
//! }
//!
//! impl Tagged for Action {
//!     fn tag(&self) -> &str {
//!         self.kind
//!     }
//! }
//!
//! let positive_x = is_all_of((of_type("X"), |a: &Action| a.payload > 0));
//!
//! assert!(positive_x.matches(&Action { kind: "X", payload: 5 }));
//! assert!(!positive_x.matches(&Action { kind: "X", payload: -1 }));
//! assert!(!positive_x.matches(&Action { kind: "Y", payload: 5 }));
//! ```
//!
//! # Dynamic lists
//!
//! ```rust
//! use sluice::matcher::*;
//!
//! let mut set = MatcherSet::from_fn(|x: &i32| *x == 0);
//! for forbidden in [13, 666] {
//!     set.push(Resolved::from_fn(move |x: &i32| *x == forbidden));
//! }
//!
//! let flagged = is_any_of(set);
//! assert!(flagged.matches(&13));
//! assert!(!flagged.matches(&7));
//! ```

mod combinators;
mod list;
mod narrow;
mod resolved;
mod tagged;
mod trait_def;
#[cfg(feature = "tracing")]
mod tracing;

pub mod prelude;

// Re-export core trait and normalizer
pub use self::trait_def::{matches, Matcher, MatcherExt};

// Re-export pairwise combinator types
pub use self::trait_def::{And, Not, Or};

// Re-export sequence combinators
pub use combinators::{is_all_of, is_any_of, is_none_of, IsAllOf, IsAnyOf, IsNoneOf};
pub use list::MatcherList;

// Re-export dynamic lists
pub use resolved::{MatcherSet, Resolved};

// Re-export narrowing
pub use narrow::{extract, Extract, Narrow};

// Re-export tag matching
pub use tagged::{of_type, OfType, Tagged};

#[cfg(feature = "tracing")]
pub use self::tracing::{MatcherTracingExt, Traced};

//! # Sluice
//!
//! > *"Let through only what matches"*
//!
//! Composable matchers for actions flowing through a dispatch pipeline.
//!
//! ## Philosophy
//!
//! A matcher answers one question about an action: does it match? Small
//! matchers are written once and combined:
//! - `is_any_of` matches when at least one matcher does
//! - `is_all_of` matches only when every matcher does
//!
//! Plain functions and matcher objects mix freely, evaluation follows the
//! order the matchers were given in, and it stops as soon as the answer is
//! known.
//!
//! ## Quick Example
//!
//! ```rust
//! use sluice::matcher::*;
//!
//! fn is_even(x: &i32) -> bool {
//!     x % 2 == 0
//! }
//!
//! fn is_negative(x: &i32) -> bool {
//!     *x < 0
//! }
//!
//! let either = is_any_of((is_even, is_negative));
//! assert!(either.matches(&4));
//! assert!(!either.matches(&3));
//!
//! let both = is_all_of((is_even, is_negative));
//! assert!(both.matches(&-4));
//! assert!(!both.matches(&4));
//! ```
//!
//! ## Features
//!
//! - `tracing`: [`Traced`](matcher::Traced) logs every matcher evaluation
//! - `serde`: [`OfType`](matcher::OfType) (de)serializes as its tag string
//! - `proptest`: `Arbitrary` for [`OfType`](matcher::OfType)

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod error;
pub mod matcher;
pub mod testing;

// Re-exports
pub use either::Either;
pub use error::EmptyMatcherSet;
pub use matcher::{is_all_of, is_any_of, is_none_of, Matcher, MatcherExt, MatcherSet, Narrow};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::error::EmptyMatcherSet;
    pub use crate::matcher::prelude::*;
}

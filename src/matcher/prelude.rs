//! Matcher prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use sluice::matcher::prelude::*;
//!
//! let m = is_any_of((|x: &i32| *x < 0, |x: &i32| *x > 100));
//! assert!(m.matches(&-1));
//! ```

// Core trait
pub use super::trait_def::{Matcher, MatcherExt};

// Combinators
pub use super::combinators::{is_all_of, is_any_of, is_none_of};

// Dynamic lists
pub use super::resolved::{MatcherSet, Resolved};

// Narrowing and tags
pub use super::narrow::{extract, Narrow};
pub use super::tagged::{of_type, Tagged};

#[cfg(feature = "tracing")]
pub use super::tracing::MatcherTracingExt;

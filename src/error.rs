//! Error types.

use std::fmt;

/// Error returned when a [`MatcherSet`](crate::matcher::MatcherSet) is built
/// from an empty list.
///
/// # Example
///
/// ```rust
/// use sluice::matcher::{MatcherSet, Resolved};
/// use sluice::EmptyMatcherSet;
///
/// let empty: Vec<Resolved<'_, i32>> = Vec::new();
/// assert_eq!(MatcherSet::try_from(empty).unwrap_err(), EmptyMatcherSet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyMatcherSet;

impl fmt::Display for EmptyMatcherSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a matcher set needs at least one matcher")
    }
}

impl std::error::Error for EmptyMatcherSet {}

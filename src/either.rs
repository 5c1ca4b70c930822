//! A two-way union used by narrowing matchers.
//!
//! When `a.or(b)` narrows an action, the payload came from exactly one side.
//! `Either` records which one, without attaching success or failure meaning
//! to either variant.
//!
//! # Example
//!
//! ```rust
//! use sluice::Either;
//!
//! let from_left: Either<&str, i32> = Either::Left("add");
//! assert!(from_left.is_left());
//! assert_eq!(from_left.left(), Some("add"));
//!
//! let described = Either::<&str, i32>::Right(3).fold(|s| s.len() as i32, |n| n);
//! assert_eq!(described, 3);
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The value came from the left-hand matcher.
    Left(L),
    /// The value came from the right-hand matcher.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// True for `Left`.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// True for `Right`.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The left value, if any.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The right value, if any.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Collapse both sides into one value.
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }
}

impl<T> Either<T, T> {
    /// Extract the value when both sides carry the same type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::Either;
    ///
    /// let e: Either<i32, i32> = Either::Right(7);
    /// assert_eq!(e.into_inner(), 7);
    /// ```
    pub fn into_inner(self) -> T {
        match self {
            Either::Left(v) | Either::Right(v) => v,
        }
    }
}

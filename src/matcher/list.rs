//! Ordered matcher sequences
//!
//! `MatcherList` is the argument type of the `is_*_of` combinators. Every
//! implementation walks its matchers in the order they were supplied and
//! stops as soon as the outcome is known.

use super::trait_def::Matcher;

/// An ordered sequence of matchers over actions of type `A`.
///
/// Implemented for:
/// - tuples of 1 to 12 matchers, which may all have different types
/// - arrays `[M; N]` and `Vec<M>` of one matcher type
/// - [`MatcherSet`](super::MatcherSet), a dynamically built list
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// let list = (|x: &i32| *x > 0, |x: &i32| x % 2 == 0);
/// assert_eq!(MatcherList::<i32>::len(&list), 2);
/// assert!(list.any_match(&3));
/// assert!(!list.all_match(&3));
/// ```
pub trait MatcherList<A: ?Sized>: Send + Sync {
    /// Number of matchers in the sequence.
    fn len(&self) -> usize;

    /// True when the sequence holds no matchers.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if at least one matcher matches, stopping at the first that does.
    fn any_match(&self, action: &A) -> bool;

    /// True if every matcher matches, stopping at the first that does not.
    fn all_match(&self, action: &A) -> bool;
}

impl<A: ?Sized, M: Matcher<A>, const N: usize> MatcherList<A> for [M; N] {
    fn len(&self) -> usize {
        N
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

impl<A: ?Sized, M: Matcher<A>> MatcherList<A> for Vec<M> {
    fn len(&self) -> usize {
        Vec::len(self)
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

// `||` and `&&` evaluate left to right and short-circuit, which is exactly
// the ordering contract.
macro_rules! impl_matcher_list_for_tuple {
    ($len:expr; $($name:ident . $idx:tt),+) => {
        impl<A: ?Sized, $($name: Matcher<A>),+> MatcherList<A> for ($($name,)+) {
            fn len(&self) -> usize {
                $len
            }

            #[inline]
            fn any_match(&self, action: &A) -> bool {
                $(self.$idx.matches(action))||+
            }

            #[inline]
            fn all_match(&self, action: &A) -> bool {
                $(self.$idx.matches(action))&&+
            }
        }
    };
}

impl_matcher_list_for_tuple!(1; M0.0);
impl_matcher_list_for_tuple!(2; M0.0, M1.1);
impl_matcher_list_for_tuple!(3; M0.0, M1.1, M2.2);
impl_matcher_list_for_tuple!(4; M0.0, M1.1, M2.2, M3.3);
impl_matcher_list_for_tuple!(5; M0.0, M1.1, M2.2, M3.3, M4.4);
impl_matcher_list_for_tuple!(6; M0.0, M1.1, M2.2, M3.3, M4.4, M5.5);
impl_matcher_list_for_tuple!(7; M0.0, M1.1, M2.2, M3.3, M4.4, M5.5, M6.6);
impl_matcher_list_for_tuple!(8; M0.0, M1.1, M2.2, M3.3, M4.4, M5.5, M6.6, M7.7);
impl_matcher_list_for_tuple!(9; M0.0, M1.1, M2.2, M3.3, M4.4, M5.5, M6.6, M7.7, M8.8);
impl_matcher_list_for_tuple!(10; M0.0, M1.1, M2.2, M3.3, M4.4, M5.5, M6.6, M7.7, M8.8, M9.9);
impl_matcher_list_for_tuple!(11; M0.0, M1.1, M2.2, M3.3, M4.4, M5.5, M6.6, M7.7, M8.8, M9.9, M10.10);
impl_matcher_list_for_tuple!(12; M0.0, M1.1, M2.2, M3.3, M4.4, M5.5, M6.6, M7.7, M8.8, M9.9, M10.10, M11.11);

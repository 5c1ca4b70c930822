//! Matching actions by their type tag
//!
//! Dispatch systems usually give every action a string discriminant
//! (`"todo/added"`, `"user/logged_in"`). [`Tagged`] exposes that
//! discriminant and [`OfType`] is the matcher object that compares it, the
//! shape an action creator hands out alongside the actions it builds.

use std::borrow::Cow;
use std::fmt;

use super::trait_def::Matcher;

/// An action that carries a type tag.
///
/// # Example
///
/// ```rust
/// use sluice::matcher::*;
///
/// struct Action {
///     kind: &'static str,
/// }
///
/// impl Tagged for Action {
///     fn tag(&self) -> &str {
///         self.kind
///     }
/// }
///
/// let added = of_type("todo/added");
/// assert!(added.matches(&Action { kind: "todo/added" }));
/// assert!(!added.matches(&Action { kind: "todo/removed" }));
/// ```
pub trait Tagged {
    /// The action's type tag.
    fn tag(&self) -> &str;
}

impl<T: Tagged + ?Sized> Tagged for &T {
    fn tag(&self) -> &str {
        (**self).tag()
    }
}

impl<T: Tagged + ?Sized> Tagged for Box<T> {
    fn tag(&self) -> &str {
        (**self).tag()
    }
}

/// Matcher object that accepts actions with one exact tag.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OfType {
    tag: Cow<'static, str>,
}

impl OfType {
    /// Create a matcher for `tag`.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self { tag: tag.into() }
    }

    /// The tag this matcher accepts.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl<A: Tagged + ?Sized> Matcher<A> for OfType {
    #[inline]
    fn matches(&self, action: &A) -> bool {
        action.tag() == self.tag
    }
}

impl fmt::Debug for OfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OfType").field(&self.tag).finish()
    }
}

impl fmt::Display for OfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

/// Create an [`OfType`] matcher.
pub fn of_type(tag: impl Into<Cow<'static, str>>) -> OfType {
    OfType::new(tag)
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::OfType;

    // Serialized as the bare tag string.
    impl Serialize for OfType {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.tag())
        }
    }

    impl<'de> Deserialize<'de> for OfType {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            String::deserialize(deserializer).map(OfType::new)
        }
    }
}

//! Qualified names — dotted references like `a.b.c`.
//!
//! A [`Reference`] is an immutable, ordered list of name segments. It
//! identifies a module, class, function or variable path. The empty
//! reference (no segments) stands for the global scope and displays as `""`.
//!
//! Every operation here is total. Operations that "modify" a reference
//! return a new value.
//!
//! # Example
//!
//! ```
//! use dotref::Reference;
//!
//! let module = Reference::new("a.b");
//! let item = Reference::create(Some(&module), "c.d.e");
//!
//! assert_eq!(item.to_string(), "a.b.c.d.e");
//! assert!(module.is_strict_prefix(&item));
//! assert_eq!(item.drop_prefix(&module), Reference::new("c.d.e"));
//! ```

#[cfg(feature = "serde")]
mod serde_impl;

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// Separator between segments in the textual form.
pub const SEPARATOR: char = '.';

/// A dotted qualified name.
///
/// Equality, ordering and hashing are structural over the segments.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reference {
    segments: Vec<SmolStr>,
}

impl Reference {
    /// The empty reference (global scope).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a dotted string with no prefix.
    ///
    /// Shorthand for `Reference::create(None, input)`.
    pub fn new(input: &str) -> Self {
        Self::create(None, input)
    }

    /// Build a reference by splitting `input` on `.`, after the segments of
    /// `prefix` when one is given.
    ///
    /// The empty string contributes no segments, so `create(None, "")` is the
    /// empty reference. Any other input is split literally: `"a..b"` becomes
    /// `["a", "", "b"]`.
    pub fn create(prefix: Option<&Reference>, input: &str) -> Self {
        let mut segments = prefix.map(|p| p.segments.clone()).unwrap_or_default();
        if !input.is_empty() {
            segments.extend(input.split(SEPARATOR).map(SmolStr::new));
        }
        Self { segments }
    }

    /// Build a reference from already-split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The segments, in dotted order.
    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    /// Iterate over the segments as `&str`.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().map(SmolStr::as_str)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the empty reference.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The sole segment of a one-segment reference.
    pub fn single(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }

    /// Concatenate `self` and `other`.
    pub fn combine(&self, other: &Reference) -> Reference {
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Self { segments }
    }

    /// Whether `self` is a (non-strict) prefix of `reference`.
    ///
    /// The empty reference is a prefix of everything, and every reference is
    /// a prefix of itself.
    pub fn is_prefix(&self, reference: &Reference) -> bool {
        reference.segments.starts_with(&self.segments)
    }

    /// Whether `self` is a (non-strict) suffix of `reference`.
    pub fn is_suffix(&self, reference: &Reference) -> bool {
        reference.segments.ends_with(&self.segments)
    }

    /// Whether `self` is a prefix of `reference` and strictly shorter.
    pub fn is_strict_prefix(&self, reference: &Reference) -> bool {
        self.len() < reference.len() && self.is_prefix(reference)
    }

    /// Remove `prefix` from the front of `self`.
    ///
    /// Only a strict prefix is removed. When `prefix` is unrelated to `self`,
    /// or equal to it, `self` is returned unchanged: `a.drop_prefix(a) == a`.
    pub fn drop_prefix(&self, prefix: &Reference) -> Reference {
        if !prefix.is_strict_prefix(self) {
            tracing::trace!(
                "[REFERENCE] '{}' is not a strict prefix of '{}', keeping it",
                prefix,
                self
            );
            return self.clone();
        }
        Self {
            segments: self.segments[prefix.len()..].to_vec(),
        }
    }

    /// All segments but the last.
    ///
    /// Returns `None` when there is no parent, i.e. for one-segment and empty
    /// references.
    pub fn prefix(&self) -> Option<Reference> {
        match self.segments.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self {
                segments: rest.to_vec(),
            }),
            _ => None,
        }
    }

    /// The last segment as a one-segment reference.
    ///
    /// A one-segment reference is its own last; the empty reference stays empty.
    pub fn last(&self) -> Reference {
        Self {
            segments: self.segments.last().cloned().into_iter().collect(),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.segments.iter();
        if let Some(first) = segments.next() {
            f.write_str(first)?;
            for segment in segments {
                write!(f, "{SEPARATOR}{segment}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reference({:?})", self.to_string())
    }
}

impl FromStr for Reference {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Reference {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(s: &str) -> Reference {
        Reference::new(s)
    }

    #[test]
    fn test_create_splits_on_dots() {
        assert_eq!(r("a.b.c").segments(), ["a", "b", "c"]);
        assert_eq!(r("a").segments(), ["a"]);
    }

    #[test]
    fn test_create_empty_string_is_empty_reference() {
        assert!(r("").is_empty());
        assert_eq!(r(""), Reference::empty());
        assert_eq!(r("").to_string(), "");
    }

    #[test]
    fn test_create_with_prefix() {
        let prefix = r("a.b");
        let reference = Reference::create(Some(&prefix), "c.d.e");
        assert_eq!(reference.to_string(), "a.b.c.d.e");
        assert_eq!(Reference::create(Some(&prefix), ""), prefix);
    }

    #[test]
    fn test_create_keeps_empty_segments() {
        assert_eq!(r("a..b").segments(), ["a", "", "b"]);
        assert_eq!(r("a..b").to_string(), "a..b");
    }

    #[test]
    fn test_show() {
        assert_eq!(r("a.b.c").to_string(), "a.b.c");
        assert_eq!(format!("{:?}", r("a.b")), "Reference(\"a.b\")");
    }

    #[test]
    fn test_is_prefix() {
        assert!(r("a").is_prefix(&r("a.b")));
        assert!(r("a.b").is_prefix(&r("a.b")));
        assert!(Reference::empty().is_prefix(&r("a.b")));
        assert!(!r("b").is_prefix(&r("a.b")));
        assert!(!r("a.b.c").is_prefix(&r("a.b")));
    }

    #[test]
    fn test_is_suffix() {
        assert!(r("b").is_suffix(&r("a.b")));
        assert!(r("a.b").is_suffix(&r("a.b")));
        assert!(Reference::empty().is_suffix(&r("a.b")));
        assert!(!r("a").is_suffix(&r("a.b")));
    }

    #[test]
    fn test_is_strict_prefix() {
        assert!(r("a").is_strict_prefix(&r("a.b")));
        assert!(!r("a.b").is_strict_prefix(&r("a.b")));
        assert!(!r("a.c").is_strict_prefix(&r("c.a")));
        assert!(!r("c.a").is_strict_prefix(&r("a.c")));
    }

    #[test]
    fn test_drop_prefix() {
        assert_eq!(r("a.b.c").drop_prefix(&r("a")), r("b.c"));
        assert_eq!(r("a.b.c").drop_prefix(&r("a.b")), r("c"));
        assert_eq!(r("a.b.c").drop_prefix(&r("b")), r("a.b.c"));
        assert_eq!(r("a").drop_prefix(&r("a")), r("a"));
        assert_eq!(r("a.b").drop_prefix(&Reference::empty()), r("a.b"));
    }

    #[test]
    fn test_prefix_and_last() {
        assert_eq!(r("a.b.c").prefix(), Some(r("a.b")));
        assert_eq!(r("a.b.c").last(), r("c"));
        assert_eq!(r("a").prefix(), None);
        assert_eq!(r("a").last(), r("a"));
        assert_eq!(Reference::empty().prefix(), None);
        assert_eq!(Reference::empty().last(), Reference::empty());
    }

    #[test]
    fn test_single_and_combine() {
        assert_eq!(r("a").single(), Some("a"));
        assert_eq!(r("a.b").single(), None);
        assert_eq!(Reference::empty().single(), None);
        assert_eq!(r("a.b").combine(&r("c")), r("a.b.c"));
        assert_eq!(Reference::empty().combine(&r("c")), r("c"));
        assert_eq!(r("c").combine(&Reference::empty()), r("c"));
        assert_eq!(r("a.b").iter().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_ordering_is_segment_wise() {
        assert!(r("a") < r("a.b"));
        assert!(r("a.b") < r("a.c"));
        assert!(Reference::empty() < r("a"));
    }

    #[test]
    fn test_from_str() {
        let parsed: Reference = "x.y".parse().unwrap();
        assert_eq!(parsed, r("x.y"));
        assert_eq!(Reference::from("x.y"), parsed);
    }
}

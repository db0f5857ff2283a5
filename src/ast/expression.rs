//! Expression node shapes that references project into.
//!
//! Only the name-like corner of the expression tree lives here: flat access
//! chains and nested attribute chains.

use std::fmt;

use smol_str::SmolStr;

use crate::base::Location;

/// A value tagged with the source span it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub location: Location,
    pub value: T,
}

impl<T> Node<T> {
    /// Wrap `value` at `location`.
    pub fn new(location: Location, value: T) -> Self {
        Self { location, value }
    }

    /// Wrap `value` at [`Location::ANY`].
    pub fn synthesized(value: T) -> Self {
        Self::new(Location::ANY, value)
    }
}

/// An expression node.
pub type ExpressionNode = Node<Expression>;

/// A single name leaf.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identifier(SmolStr);

impl Identifier {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn as_smol_str(&self) -> &SmolStr {
        &self.0
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({:?})", self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<SmolStr> for Identifier {
    fn from(name: SmolStr) -> Self {
        Self(name)
    }
}

/// Expressions that can denote a qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Flat access chain: one identifier per segment, in order.
    Access(Vec<Identifier>),
    /// Nested name: a bare identifier or an attribute lookup.
    Name(Name),
}

/// A name expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Name {
    Identifier(Identifier),
    Attribute(Attribute),
}

/// `base.attribute`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub base: Box<ExpressionNode>,
    pub attribute: Identifier,
    /// Set for implicit dunder lookups introduced by operator desugaring.
    pub special: bool,
}

impl Expression {
    /// Returns the name if this is a name expression.
    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Expression::Name(name) => Some(name),
            Expression::Access(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_node_has_any_location() {
        let node = Node::synthesized(Expression::Access(vec![Identifier::from("a")]));
        assert!(node.location.is_any());
    }

    #[test]
    fn test_identifier_display() {
        let ident = Identifier::new("foo");
        assert_eq!(ident.to_string(), "foo");
        assert_eq!(ident.as_str(), "foo");
        assert_eq!(format!("{:?}", ident), "Identifier(\"foo\")");
    }

    #[test]
    fn test_as_name() {
        let name = Expression::Name(Name::Identifier("a".into()));
        assert!(name.as_name().is_some());
        assert!(Expression::Access(Vec::new()).as_name().is_none());
    }
}

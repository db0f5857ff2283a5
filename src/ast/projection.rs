//! Projections between references and expression nodes.
//!
//! Two encodings coexist: the older flat access chain and the nested
//! attribute chain. Each has its own function so either can be removed on
//! its own. All synthesized nodes carry [`Location::ANY`].

use thiserror::Error;

use super::expression::{Attribute, Expression, ExpressionNode, Identifier, Name, Node};
use crate::base::Location;
use crate::reference::Reference;

/// Project `reference` into a flat access chain, one identifier per segment.
pub fn to_access_expression(reference: &Reference) -> ExpressionNode {
    let identifiers = reference
        .segments()
        .iter()
        .cloned()
        .map(Identifier::from)
        .collect();
    Node::synthesized(Expression::Access(identifiers))
}

/// Project `reference` into a nested attribute chain.
///
/// `a.b.c` becomes `Attribute(base = Attribute(base = Name(a), attribute = b),
/// attribute = c)`. A one-segment reference is a bare identifier, and the
/// empty reference is the identifier `""`.
pub fn to_attribute_expression(reference: &Reference) -> ExpressionNode {
    let mut segments = reference.segments().iter().cloned().map(Identifier::from);
    let root = segments.next().unwrap_or_else(|| Identifier::new(""));
    let root = Node::synthesized(Expression::Name(Name::Identifier(root)));

    segments.fold(root, |base, attribute| {
        Node::synthesized(Expression::Name(Name::Attribute(Attribute {
            base: Box::new(base),
            attribute,
            special: false,
        })))
    })
}

/// Why an expression could not be read back as a reference.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The node, or a base in its attribute chain, is not a name expression.
    #[error("expected a name expression at {location}")]
    NotAName { location: Location },
    /// An attribute in the chain is an implicit dunder lookup.
    #[error("special attribute '{attribute}' at {location} is not part of a qualified name")]
    SpecialAttribute { attribute: Identifier, location: Location },
}

impl Reference {
    /// Read a flat access chain back as a reference.
    pub fn from_access(identifiers: &[Identifier]) -> Reference {
        Reference::from_segments(identifiers.iter().map(|ident| ident.as_smol_str().clone()))
    }

    /// Read a nested name expression back as a reference.
    ///
    /// Inverse of [`to_attribute_expression`]: the lone identifier `""` reads
    /// back as the empty reference.
    pub fn from_name_expression(node: &ExpressionNode) -> Result<Reference, ProjectionError> {
        let mut segments = Vec::new();
        let mut current = node;
        loop {
            match &current.value {
                Expression::Name(Name::Identifier(ident)) => {
                    if !(ident.as_str().is_empty() && segments.is_empty()) {
                        segments.push(ident.as_smol_str().clone());
                    }
                    break;
                }
                Expression::Name(Name::Attribute(attribute)) => {
                    if attribute.special {
                        tracing::debug!(
                            "[REFERENCE] rejecting special attribute '{}' at {}",
                            attribute.attribute,
                            current.location
                        );
                        return Err(ProjectionError::SpecialAttribute {
                            attribute: attribute.attribute.clone(),
                            location: current.location,
                        });
                    }
                    segments.push(attribute.attribute.as_smol_str().clone());
                    current = &*attribute.base;
                }
                Expression::Access(_) => {
                    tracing::debug!("[REFERENCE] expected a name expression at {}", current.location);
                    return Err(ProjectionError::NotAName {
                        location: current.location,
                    });
                }
            }
        }
        segments.reverse();
        Ok(Reference::from_segments(segments))
    }
}

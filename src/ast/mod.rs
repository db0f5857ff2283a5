//! Expression-AST encodings of references.
//!
//! - [`to_access_expression`] - flat access chain (legacy encoding)
//! - [`to_attribute_expression`] - nested attribute chain
//! - [`Reference::from_access`](crate::Reference::from_access),
//!   [`Reference::from_name_expression`](crate::Reference::from_name_expression) - the way back

mod expression;
mod projection;

pub use expression::{Attribute, Expression, ExpressionNode, Identifier, Name, Node};
pub use projection::{ProjectionError, to_access_expression, to_attribute_expression};

//! Shapes of the two expression encodings of a reference.

use dotref::ast::{Attribute, Expression, ExpressionNode, Identifier, Name, Node};
use dotref::{Location, ProjectionError, Reference, to_access_expression, to_attribute_expression};
use rstest::rstest;

fn name(identifier: &str) -> ExpressionNode {
    Node::new(
        Location::ANY,
        Expression::Name(Name::Identifier(Identifier::new(identifier))),
    )
}

fn attribute(base: ExpressionNode, attribute: &str) -> ExpressionNode {
    Node::new(
        Location::ANY,
        Expression::Name(Name::Attribute(Attribute {
            base: Box::new(base),
            attribute: Identifier::new(attribute),
            special: false,
        })),
    )
}

#[test]
fn test_access_expression_three_segments() {
    let node = to_access_expression(&Reference::new("a.b.c"));

    assert_eq!(node.location, Location::ANY);
    assert_eq!(
        node.value,
        Expression::Access(vec![
            Identifier::new("a"),
            Identifier::new("b"),
            Identifier::new("c"),
        ])
    );
}

#[test]
fn test_attribute_expression_two_segments() {
    assert_eq!(
        to_attribute_expression(&Reference::new("a.b")),
        attribute(name("a"), "b")
    );
}

#[test]
fn test_attribute_expression_three_segments_outermost_is_last() {
    let node = to_attribute_expression(&Reference::new("a.b.c"));

    let Expression::Name(Name::Attribute(outer)) = &node.value else {
        panic!("expected an attribute, got {:?}", node.value);
    };
    assert_eq!(outer.attribute.as_str(), "c");
    assert_eq!(*outer.base, attribute(name("a"), "b"));
}

#[rstest]
#[case("a")]
#[case("a.b")]
#[case("os.path.join")]
fn test_name_expression_reads_back(#[case] dotted: &str) {
    let reference = Reference::new(dotted);
    let node = to_attribute_expression(&reference);

    assert_eq!(Reference::from_name_expression(&node), Ok(reference));
}

#[test]
fn test_access_expression_is_not_a_name() {
    let node = to_access_expression(&Reference::new("a.b"));

    assert_eq!(
        Reference::from_name_expression(&node),
        Err(ProjectionError::NotAName { location: Location::ANY })
    );
}

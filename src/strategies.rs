//! `proptest` strategies for references.

use proptest::prelude::*;

use crate::Reference;

/// Strategy for a single well-formed segment (a Python-style identifier).
pub fn arb_segment() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
}

/// Strategy for references of up to `max_len` well-formed segments,
/// including the empty reference.
pub fn arb_reference_up_to(max_len: usize) -> impl Strategy<Value = Reference> {
    proptest::collection::vec(arb_segment(), 0..=max_len).prop_map(Reference::from_segments)
}

/// Strategy for references of up to five segments.
pub fn arb_reference() -> impl Strategy<Value = Reference> {
    arb_reference_up_to(5)
}

/// Strategy for non-empty references of up to five segments.
pub fn arb_non_empty_reference() -> impl Strategy<Value = Reference> {
    proptest::collection::vec(arb_segment(), 1..=5).prop_map(Reference::from_segments)
}

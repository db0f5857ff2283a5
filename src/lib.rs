//! # dotref
//!
//! Qualified names (`a.b.c`) for a language front-end, and their projections
//! into expression-AST nodes.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ast        → Expression nodes, access/attribute projections
//!   ↓
//! reference  → Reference value type, prefix/suffix operations
//!   ↓
//! base       → Primitives (FileId, LineCol, Location)
//! ```

/// Foundation types: FileId, LineCol, Location
pub mod base;

/// The qualified-name value type
pub mod reference;

/// Expression nodes and the two projections of a reference
pub mod ast;

/// Property-test strategies (enabled by the `proptest` feature)
#[cfg(feature = "proptest")]
pub mod strategies;

// Re-export commonly needed items
pub use ast::{ProjectionError, to_access_expression, to_attribute_expression};
pub use base::{FileId, LineCol, Location};
pub use reference::Reference;

//! Foundation types for dotted references.
//!
//! This module provides the positional primitives the expression nodes carry:
//! - [`FileId`] - Lightweight file identifiers
//! - [`LineCol`] - Line/column positions
//! - [`Location`] - Source spans, including the [`Location::ANY`] placeholder
//!
//! This module has NO dependencies on other dotref modules.

mod file_id;
mod span;

pub use file_id::FileId;
pub use span::{LineCol, Location};

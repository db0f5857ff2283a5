//! Source positions and spans.

use std::fmt;

use super::FileId;

/// A line and column position in source text.
///
/// Both line and column are 0-indexed internally, but displayed as 1-indexed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (in UTF-8 bytes, not characters)
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Get 1-indexed line number (for display).
    #[inline]
    pub const fn line_one_indexed(self) -> u32 {
        self.line + 1
    }

    /// Get 1-indexed column number (for display).
    #[inline]
    pub const fn col_one_indexed(self) -> u32 {
        self.col + 1
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

/// A span of source text in a particular file.
///
/// Nodes built from a [`Reference`](crate::Reference) were never parsed, so
/// they all carry [`Location::ANY`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub file: FileId,
    pub start: LineCol,
    pub stop: LineCol,
}

impl Location {
    /// The placeholder location for synthesized nodes.
    pub const ANY: Location = Location {
        file: FileId::DETACHED,
        start: LineCol::new(0, 0),
        stop: LineCol::new(0, 0),
    };

    /// Create a location spanning `start..stop` in `file`.
    #[inline]
    pub const fn new(file: FileId, start: LineCol, stop: LineCol) -> Self {
        Self { file, start, stop }
    }

    /// Whether this is the [`Location::ANY`] placeholder.
    #[inline]
    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            return f.write_str("*");
        }
        write!(f, "{}:{}-{}", self.file, self.start, self.stop)
    }
}

//! Source location tracking.
//!
//! A [`Span`] is a byte-offset range plus the 1-based line/column of its
//! start, attached to every token and AST node so that later phases can
//! report diagnostics against the original source text.

/// A range in the source text, with human-readable position for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character covered by this span.
    pub start: usize,
    /// Byte offset one past the last character covered by this span.
    pub end: usize,
    /// 1-based line number of `start`.
    pub line: u32,
    /// 1-based column number of `start`.
    pub column: u32,
}

impl Span {
    /// A span with no meaningful location, used for synthesized nodes.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// A zero-width span at a single position.
    pub const fn point(pos: usize, line: u32, column: u32) -> Self {
        Self::new(pos, pos, line, column)
    }

    /// Combine two spans into one covering both, keeping the earlier
    /// position for display.
    pub fn to(self, other: Span) -> Span {
        if self.start <= other.start {
            Span::new(self.start, other.end, self.line, self.column)
        } else {
            Span::new(other.start, self.end, other.line, other.column)
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

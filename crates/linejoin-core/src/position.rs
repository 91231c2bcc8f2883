//! Positions and selections.

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Selection range with `start <= end`.
///
/// A selection whose `start` equals its `end` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Selection start position
    pub start: Position,
    /// Selection end position
    pub end: Position,
}

/// How a selection is treated by the join command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionShape {
    /// No selected text.
    Caret,
    /// Non-empty range within one line.
    SingleLine,
    /// Range spanning two or more lines.
    MultiLine,
}

impl Selection {
    /// Create a selection from two positions in any order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Create a caret at `(line, column)`.
    pub fn caret(line: usize, column: usize) -> Self {
        let pos = Position::new(line, column);
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Create a selection on a single line.
    pub fn on_line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self::new(
            Position::new(line, start_column),
            Position::new(line, end_column),
        )
    }

    /// Returns `true` if no text is selected.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Classify the selection.
    pub fn shape(&self) -> SelectionShape {
        if self.is_caret() {
            SelectionShape::Caret
        } else if self.start.line == self.end.line {
            SelectionShape::SingleLine
        } else {
            SelectionShape::MultiLine
        }
    }
}

//! Deferred batch edits.
//!
//! A join command never mutates the document while it is computing. Every replacement is
//! recorded into an [`EditBatch`] against the pre-edit document, and the host applies the whole
//! batch as one transaction (see [`EditHost`](crate::EditHost)).

use crate::document::DocumentLines;
use crate::position::Position;
use thiserror::Error;

/// Replace the text between `start` and `end` (pre-edit coordinates) with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Inclusive start position.
    pub start: Position,
    /// Exclusive end position.
    pub end: Position,
    /// Inserted text (may be empty).
    pub replacement: String,
}

impl TextEdit {
    /// Create a replacement edit.
    pub fn replace(start: Position, end: Position, replacement: impl Into<String>) -> Self {
        Self {
            start,
            end,
            replacement: replacement.into(),
        }
    }
}

/// Edit transaction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A position lies outside the document.
    #[error("invalid position: line {line}, column {column}")]
    InvalidPosition {
        /// Logical line index.
        line: usize,
        /// Column in characters.
        column: usize,
    },
    /// An edit's end precedes its start.
    #[error("invalid range: {start:?}..{end:?}")]
    InvalidRange {
        /// Start position.
        start: Position,
        /// End position.
        end: Position,
    },
    /// Two edits of the batch touch the same text.
    #[error("overlapping edits at {first:?} and {second:?}")]
    Overlapping {
        /// Start of the earlier edit.
        first: Position,
        /// Start of the later edit.
        second: Position,
    },
    /// The host refused the transaction.
    #[error("edit rejected: {0}")]
    Rejected(String),
}

/// An ordered list of edits to apply atomically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    edits: Vec<TextEdit>,
}

impl EditBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a replacement.
    pub fn replace(&mut self, start: Position, end: Position, replacement: impl Into<String>) {
        self.edits.push(TextEdit::replace(start, end, replacement));
    }

    /// Recorded edits, in recording order.
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// Number of recorded edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Check every edit against `doc` without applying anything.
    ///
    /// Positions must address existing characters (a column may equal the line length), each
    /// range must be ordered, and no two ranges may overlap. Ranges that only touch are allowed.
    pub fn validate<D: DocumentLines + ?Sized>(&self, doc: &D) -> Result<(), EditError> {
        let line_count = doc.line_count();
        let check = |pos: Position| {
            if pos.line >= line_count || pos.column > doc.line_len(pos.line) {
                Err(EditError::InvalidPosition {
                    line: pos.line,
                    column: pos.column,
                })
            } else {
                Ok(())
            }
        };

        for edit in &self.edits {
            check(edit.start)?;
            check(edit.end)?;
            if edit.end < edit.start {
                return Err(EditError::InvalidRange {
                    start: edit.start,
                    end: edit.end,
                });
            }
        }

        let mut sorted: Vec<&TextEdit> = self.edits.iter().collect();
        sorted.sort_by_key(|edit| (edit.start, edit.end));
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            // Identical zero-width inserts would have no defined order either.
            if a.end > b.start || a.start == b.start {
                return Err(EditError::Overlapping {
                    first: a.start,
                    second: b.start,
                });
            }
        }

        Ok(())
    }
}

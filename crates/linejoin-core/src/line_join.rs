//! Joining one line with the next.
//!
//! Rules, first match wins:
//!
//! 1. **Comment**: the first line starts with a line comment. The second line loses its comment
//!    prefix (if it has one) or its leading whitespace, and a single space separates the two.
//! 2. **Quote**: the first line ends with a closing quote and the second starts with an opening
//!    quote. Both quotes (and the whitespace around them) are dropped and the fragments are
//!    concatenated with no separator.
//! 3. **Whitespace**: trailing whitespace of the first line and leading whitespace of the second
//!    are replaced by a single space.
//!
//! In every case the first line's trailing whitespace is dropped.

use crate::document::{DocumentLines, trailing_whitespace_len};
use crate::edit::EditBatch;
use crate::position::Position;
use linejoin_lang::LanguageProfile;

/// Which rule decided a join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinRule {
    /// Comment line followed by another comment line.
    CommentToComment,
    /// Comment line followed by a non-comment line.
    CommentToCode,
    /// Split string literal.
    Quote,
    /// Plain whitespace collapse.
    Whitespace,
}

/// Char counts discarded by one join, for offset bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    /// Chars removed from the end of the first line.
    pub removed_at_end: usize,
    /// Chars removed from the start of the second line.
    pub removed_at_start: usize,
    /// Chars of the inserted separator (0 or 1).
    pub separator_len: usize,
    /// Rule that fired.
    pub rule: JoinRule,
}

/// Computes joins of adjacent lines against a read-only document.
pub struct LineJoiner<'a, D: ?Sized> {
    doc: &'a D,
    profile: &'a LanguageProfile,
}

impl<'a, D: DocumentLines + ?Sized> LineJoiner<'a, D> {
    /// Create a joiner for `doc` using `profile`'s syntax hints.
    pub fn new(doc: &'a D, profile: &'a LanguageProfile) -> Self {
        Self { doc, profile }
    }

    /// Record the join of `line` with `line + 1` into `batch`.
    ///
    /// Returns `None` (and records nothing) if `line` is the last line of the document.
    pub fn join(&self, line: usize, batch: &mut EditBatch) -> Option<JoinOutcome> {
        self.join_from(line, 0, batch)
    }

    /// Like [`join`](Self::join), but never trims the first line before column `floor`.
    ///
    /// Used for consecutive joins of one selection: `floor` is what the previous join already
    /// removed from the start of `line`, so the two recorded ranges cannot overlap.
    pub(crate) fn join_from(
        &self,
        line: usize,
        floor: usize,
        batch: &mut EditBatch,
    ) -> Option<JoinOutcome> {
        let first = self.doc.line_text(line)?;
        let second = self.doc.line_text(line + 1)?;
        let first_len = first.chars().count();

        let mut keep_end = first_len - trailing_whitespace_len(&first);
        let mut drop_start = self.doc.first_non_whitespace(line + 1);
        let mut separator = " ";

        let rule = if self.profile.comment_prefix_len(&first).is_some() {
            match self.profile.comment_prefix_len(&second) {
                Some(prefix) => {
                    drop_start = prefix;
                    JoinRule::CommentToComment
                }
                None => JoinRule::CommentToCode,
            }
        } else if let (Some(close), Some(open)) = (
            self.profile.closing_quote_len(&first),
            self.profile.opening_quote_len(&second),
        ) {
            keep_end = first_len - close;
            drop_start = open;
            separator = "";
            JoinRule::Quote
        } else {
            JoinRule::Whitespace
        };

        let keep_end = keep_end.max(floor.min(first_len));
        log::debug!(
            "join line {line}: {rule:?}, keep ..{keep_end}, resume at {drop_start}"
        );

        batch.replace(
            Position::new(line, keep_end),
            Position::new(line + 1, drop_start),
            separator,
        );

        Some(JoinOutcome {
            removed_at_end: first_len - keep_end,
            removed_at_start: drop_start,
            separator_len: separator.len(),
            rule,
        })
    }
}

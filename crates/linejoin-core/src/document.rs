//! Host document contract and a rope-backed reference document.
//!
//! The join engine only needs read access to lines plus one atomic batch-edit transaction.
//! [`DocumentLines`] and [`EditHost`] describe that contract; [`TextDocument`] implements it on
//! top of [`ropey::Rope`] for hosts (and tests) that do not bring their own buffer.

use crate::edit::{EditBatch, EditError};
use crate::position::Position;
use ropey::Rope;

/// Read access to a document, line by line.
///
/// Columns are measured in chars (Unicode scalar values).
pub trait DocumentLines {
    /// Language identifier used to pick a join profile.
    fn language_id(&self) -> &str;

    /// Number of logical lines (always at least 1 for a real document).
    fn line_count(&self) -> usize;

    /// Text of `line` without its line terminator.
    fn line_text(&self, line: usize) -> Option<String>;

    /// Length of `line` in chars (the column of its end).
    fn line_len(&self, line: usize) -> usize {
        self.line_text(line)
            .map(|text| text.chars().count())
            .unwrap_or(0)
    }

    /// Column of the first non-whitespace char of `line`, or the line length if the line is
    /// blank.
    fn first_non_whitespace(&self, line: usize) -> usize {
        self.line_text(line)
            .map(|text| leading_whitespace_len(&text))
            .unwrap_or(0)
    }
}

/// A document that can apply an [`EditBatch`] as one transaction.
///
/// Implementations must be all-or-nothing: on `Err`, the document is left exactly as it was.
pub trait EditHost: DocumentLines {
    /// Apply every edit of `batch` (expressed in pre-edit coordinates).
    fn apply_edits(&mut self, batch: &EditBatch) -> Result<(), EditError>;
}

/// Number of leading whitespace chars in `text`.
pub fn leading_whitespace_len(text: &str) -> usize {
    text.chars().take_while(|c| c.is_whitespace()).count()
}

/// Number of trailing whitespace chars in `text`.
pub fn trailing_whitespace_len(text: &str) -> usize {
    text.chars().rev().take_while(|c| c.is_whitespace()).count()
}

/// The newline sequence a document was loaded with.
///
/// Text is kept LF-normalized internally; the original ending is restored on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `'\n'`
    #[default]
    Lf,
    /// `"\r\n"`
    Crlf,
}

impl LineEnding {
    /// CRLF if `text` contains any `"\r\n"`, LF otherwise.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// The newline sequence itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Rope-backed document implementing [`EditHost`].
#[derive(Debug, Clone)]
pub struct TextDocument {
    rope: Rope,
    language_id: String,
    line_ending: LineEnding,
}

impl TextDocument {
    /// Load `text` (CRLF is normalized to LF) tagged with `language_id`.
    pub fn new(text: &str, language_id: impl Into<String>) -> Self {
        let line_ending = LineEnding::detect(text);
        let rope = match line_ending {
            LineEnding::Lf => Rope::from_str(text),
            LineEnding::Crlf => Rope::from_str(&text.replace("\r\n", "\n")),
        };
        Self {
            rope,
            language_id: language_id.into(),
            line_ending,
        }
    }

    /// Full LF-normalized text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text with the original line ending restored.
    pub fn to_saved_text(&self) -> String {
        match self.line_ending {
            LineEnding::Lf => self.text(),
            LineEnding::Crlf => self.text().replace('\n', LineEnding::Crlf.as_str()),
        }
    }

    /// Line ending detected on load.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Lines as owned strings, without terminators.
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|line| self.line_text(line))
            .collect()
    }

    /// Convert a position to a char offset. The position must be valid.
    fn position_to_char_offset(&self, pos: Position) -> usize {
        self.rope.line_to_char(pos.line) + pos.column
    }
}

impl DocumentLines for TextDocument {
    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }
        Some(text)
    }

    fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len -= 1;
        }
        if len > 0 && slice.char(len - 1) == '\r' {
            len -= 1;
        }
        len
    }
}

impl EditHost for TextDocument {
    fn apply_edits(&mut self, batch: &EditBatch) -> Result<(), EditError> {
        if let Err(err) = batch.validate(&*self) {
            log::warn!("rejecting batch of {} edits: {err}", batch.len());
            return Err(err);
        }

        let mut ops: Vec<(usize, usize, &str)> = batch
            .edits()
            .iter()
            .map(|edit| {
                (
                    self.position_to_char_offset(edit.start),
                    self.position_to_char_offset(edit.end),
                    edit.replacement.as_str(),
                )
            })
            .collect();

        // Highest offset first so earlier offsets stay valid while mutating.
        ops.sort_by_key(|(start, _, _)| std::cmp::Reverse(*start));

        for (start, end, text) in ops {
            log::trace!("replace chars {start}..{end} with {text:?}");
            if end > start {
                self.rope.remove(start..end);
            }
            if !text.is_empty() {
                self.rope.insert(start, text);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_and_whitespace_queries() {
        let doc = TextDocument::new("  foo  \n\tbar\n   \n", "plaintext");
        assert_eq!(doc.line_count(), 4);
        assert_eq!(doc.line_text(0).as_deref(), Some("  foo  "));
        assert_eq!(doc.line_len(0), 7);
        assert_eq!(doc.first_non_whitespace(0), 2);
        assert_eq!(doc.first_non_whitespace(1), 1);
        // Blank lines report their full length.
        assert_eq!(doc.first_non_whitespace(2), 3);
        assert_eq!(doc.line_text(3).as_deref(), Some(""));
        assert_eq!(doc.line_text(4), None);
    }

    #[test]
    fn test_only_lf_and_cr_break_lines() {
        let doc = TextDocument::new("x = 1\u{0C}\ny\u{2028}z\u{0B}\nend", "python");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_text(0).as_deref(), Some("x = 1\u{0C}"));
        assert_eq!(doc.line_len(1), 4);
        assert_eq!(doc.line_text(2).as_deref(), Some("end"));
    }

    #[test]
    fn test_crlf_round_trip() {
        let mut doc = TextDocument::new("a\r\nb\r\nc", "plaintext");
        assert_eq!(doc.line_ending(), LineEnding::Crlf);
        assert_eq!(doc.line_len(0), 1);
        assert_eq!(doc.text(), "a\nb\nc");

        let mut batch = EditBatch::new();
        batch.replace(Position::new(0, 1), Position::new(1, 0), " ");
        doc.apply_edits(&batch).unwrap();
        assert_eq!(doc.to_saved_text(), "a b\r\nc");
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut doc = TextDocument::new("one\ntwo\nthree", "plaintext");
        let mut batch = EditBatch::new();
        batch.replace(Position::new(0, 3), Position::new(1, 0), " ");
        batch.replace(Position::new(2, 9), Position::new(2, 9), "!");

        assert!(doc.apply_edits(&batch).is_err());
        assert_eq!(doc.text(), "one\ntwo\nthree");
    }

    #[test]
    fn test_apply_uses_pre_edit_coordinates() {
        let mut doc = TextDocument::new("one\ntwo\nthree", "plaintext");
        let mut batch = EditBatch::new();
        batch.replace(Position::new(0, 3), Position::new(1, 0), " ");
        batch.replace(Position::new(1, 3), Position::new(2, 0), " ");

        doc.apply_edits(&batch).unwrap();
        assert_eq!(doc.text(), "one two three");
        assert_eq!(doc.line_count(), 1);
    }

    #[test]
    fn test_multibyte_columns() {
        let mut doc = TextDocument::new("你好  \n  世界", "plaintext");
        assert_eq!(doc.line_len(0), 4);
        assert_eq!(doc.first_non_whitespace(1), 2);

        let mut batch = EditBatch::new();
        batch.replace(Position::new(0, 2), Position::new(1, 2), " ");
        doc.apply_edits(&batch).unwrap();
        assert_eq!(doc.text(), "你好 世界");
    }
}

//! Comment and quote families, and the per-language profile built from them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static HASH_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:#+\s*)+").expect("hash comment pattern"));
static DOUBLE_SLASH_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?://+\s*)+").expect("double-slash comment pattern"));

static ANY_QUOTE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*['"]"#).expect("opening quote pattern"));
static ANY_QUOTE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"]\s*$"#).expect("closing quote pattern"));
static DOUBLE_QUOTE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*""#).expect("opening double quote pattern"));
static DOUBLE_QUOTE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""\s*$"#).expect("closing double quote pattern"));

/// Line-comment marker family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentStyle {
    /// `#` comments (Ruby, Python, shells).
    Hash,
    /// `//` comments (C family, JavaScript, Go).
    DoubleSlash,
}

impl CommentStyle {
    /// Pattern matching a run of markers (optionally interleaved with whitespace) at line start,
    /// including the whitespace that follows the last marker.
    pub fn prefix_pattern(self) -> &'static Regex {
        match self {
            Self::Hash => &HASH_COMMENT,
            Self::DoubleSlash => &DOUBLE_SLASH_COMMENT,
        }
    }
}

/// String-literal quote family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteStyle {
    /// Both `'` and `"` delimit strings.
    SingleOrDouble,
    /// Only `"` delimits strings.
    Double,
}

impl QuoteStyle {
    /// Pattern matching an optionally indented opening quote at line start.
    pub fn opening_pattern(self) -> &'static Regex {
        match self {
            Self::SingleOrDouble => &ANY_QUOTE_OPEN,
            Self::Double => &DOUBLE_QUOTE_OPEN,
        }
    }

    /// Pattern matching a closing quote at line end, optionally followed by whitespace.
    pub fn closing_pattern(self) -> &'static Regex {
        match self {
            Self::SingleOrDouble => &ANY_QUOTE_CLOSE,
            Self::Double => &DOUBLE_QUOTE_CLOSE,
        }
    }
}

/// Syntax hints used to decide how two lines are joined.
///
/// A profile with neither a comment nor a quote style is "plain": none of its patterns match,
/// so every join falls back to the whitespace rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    language_id: String,
    comment: Option<CommentStyle>,
    quote: Option<QuoteStyle>,
}

/// The profile handed out for identifiers that have no row in a table.
pub(crate) static PLAIN: LanguageProfile = LanguageProfile::plain();

impl LanguageProfile {
    /// Create a profile for `language_id`.
    pub fn new(
        language_id: impl Into<String>,
        comment: Option<CommentStyle>,
        quote: Option<QuoteStyle>,
    ) -> Self {
        Self {
            language_id: language_id.into(),
            comment,
            quote,
        }
    }

    /// The degenerate profile: no comment or quote handling.
    pub const fn plain() -> Self {
        Self {
            language_id: String::new(),
            comment: None,
            quote: None,
        }
    }

    /// Language identifier this profile was registered under (empty for the plain profile).
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Configured comment family, if any.
    pub fn comment_style(&self) -> Option<CommentStyle> {
        self.comment
    }

    /// Configured quote family, if any.
    pub fn quote_style(&self) -> Option<QuoteStyle> {
        self.quote
    }

    /// Returns `true` if no pattern of this profile can ever match.
    pub fn is_plain(&self) -> bool {
        self.comment.is_none() && self.quote.is_none()
    }

    /// Length in chars of the comment prefix at the start of `text`, or `None` if `text` does
    /// not begin with a line comment.
    pub fn comment_prefix_len(&self, text: &str) -> Option<usize> {
        let m = self.comment?.prefix_pattern().find(text)?;
        Some(char_len(&text[m.start()..m.end()]))
    }

    /// Length in chars of the (indented) opening quote at the start of `text`.
    pub fn opening_quote_len(&self, text: &str) -> Option<usize> {
        let m = self.quote?.opening_pattern().find(text)?;
        Some(char_len(&text[m.start()..m.end()]))
    }

    /// Length in chars of the closing quote (plus trailing whitespace) at the end of `text`.
    pub fn closing_quote_len(&self, text: &str) -> Option<usize> {
        let m = self.quote?.closing_pattern().find(text)?;
        Some(char_len(&text[m.start()..m.end()]))
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::plain()
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slash() -> LanguageProfile {
        LanguageProfile::new("go", Some(CommentStyle::DoubleSlash), Some(QuoteStyle::Double))
    }

    fn hash() -> LanguageProfile {
        LanguageProfile::new(
            "python",
            Some(CommentStyle::Hash),
            Some(QuoteStyle::SingleOrDouble),
        )
    }

    #[test]
    fn test_comment_prefix_includes_marker_runs_and_spaces() {
        let p = slash();
        assert_eq!(p.comment_prefix_len("// bar"), Some(3));
        assert_eq!(p.comment_prefix_len("    /// doc"), Some(8));
        assert_eq!(p.comment_prefix_len("// // nested"), Some(6));
        assert_eq!(p.comment_prefix_len("let x = 1; // trailing"), None);
        assert_eq!(p.comment_prefix_len("/ not a comment"), None);
    }

    #[test]
    fn test_hash_comment_prefix() {
        let p = hash();
        assert_eq!(p.comment_prefix_len("# foo"), Some(2));
        assert_eq!(p.comment_prefix_len("  ## # foo"), Some(7));
        assert_eq!(p.comment_prefix_len("// foo"), None);
    }

    #[test]
    fn test_quote_patterns_respect_family() {
        let p = slash();
        assert_eq!(p.closing_quote_len("x = \"hello\"  "), Some(3));
        assert_eq!(p.opening_quote_len("   \"world\""), Some(4));
        assert_eq!(p.closing_quote_len("x = 'a'"), None);

        let p = hash();
        assert_eq!(p.closing_quote_len("x = 'a'"), Some(1));
        assert_eq!(p.opening_quote_len("'b'"), Some(1));
    }

    #[test]
    fn test_lengths_are_counted_in_chars() {
        let p = slash();
        // U+3000 (ideographic space) is whitespace and 3 bytes in UTF-8.
        assert_eq!(p.comment_prefix_len("\u{3000}// 你好"), Some(4));
    }

    #[test]
    fn test_plain_profile_never_matches() {
        let p = LanguageProfile::plain();
        assert!(p.is_plain());
        assert_eq!(p.comment_prefix_len("// foo"), None);
        assert_eq!(p.comment_prefix_len("# foo"), None);
        assert_eq!(p.opening_quote_len("\"a"), None);
        assert_eq!(p.closing_quote_len("a\""), None);
    }
}

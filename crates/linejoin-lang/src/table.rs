//! The language-id -> profile lookup table.

use crate::profile::{CommentStyle, LanguageProfile, PLAIN, QuoteStyle};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// One row of the table: a profile plus the file extensions that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Join profile for the language.
    pub profile: LanguageProfile,
    /// File extensions (without the leading dot, lower-case).
    pub extensions: Vec<String>,
}

impl LanguageEntry {
    /// Build a row from its parts.
    pub fn new(
        language_id: impl Into<String>,
        comment: Option<CommentStyle>,
        quote: Option<QuoteStyle>,
        extensions: &[&str],
    ) -> Self {
        Self {
            profile: LanguageProfile::new(language_id, comment, quote),
            extensions: extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
        }
    }
}

/// Immutable mapping from language identifiers to [`LanguageProfile`]s.
///
/// Exactly one profile exists per identifier; inserting a row for an existing identifier
/// replaces it.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    entries: HashMap<String, LanguageEntry>,
    by_extension: HashMap<String, String>,
}

static BUILTIN: Lazy<LanguageTable> = Lazy::new(|| {
    use CommentStyle::{DoubleSlash, Hash};
    use QuoteStyle::{Double, SingleOrDouble};

    let rows = [
        ("ruby", Hash, SingleOrDouble, &["rb"][..]),
        ("python", Hash, SingleOrDouble, &["py", "pyw"][..]),
        ("javascript", DoubleSlash, SingleOrDouble, &["js", "mjs", "cjs"][..]),
        ("json", DoubleSlash, SingleOrDouble, &["json"][..]),
        ("java", DoubleSlash, Double, &["java"][..]),
        ("csharp", DoubleSlash, Double, &["cs"][..]),
        ("cpp", DoubleSlash, Double, &["cpp", "cc", "cxx", "hpp", "hh", "h"][..]),
        ("go", DoubleSlash, Double, &["go"][..]),
        ("php", DoubleSlash, Double, &["php"][..]),
    ];

    let mut table = LanguageTable::new();
    for (id, comment, quote, extensions) in rows {
        table.insert(LanguageEntry::new(id, Some(comment), Some(quote), extensions));
    }
    table
});

impl LanguageTable {
    /// An empty table: every lookup yields the plain profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table, constructed once per process.
    pub fn builtin() -> &'static LanguageTable {
        &BUILTIN
    }

    /// Insert or replace a row.
    pub fn insert(&mut self, entry: LanguageEntry) {
        let id = entry.profile.language_id().to_string();
        if let Some(old) = self.entries.get(&id) {
            for ext in &old.extensions {
                if self.by_extension.get(ext) == Some(&id) {
                    self.by_extension.remove(ext);
                }
            }
        }
        for ext in &entry.extensions {
            self.by_extension.insert(ext.clone(), id.clone());
        }
        log::trace!("language table row: {id} -> {:?}", entry.profile);
        self.entries.insert(id, entry);
    }

    /// Profile for `language_id`, or the plain profile if the identifier has no row.
    pub fn profile_for(&self, language_id: &str) -> &LanguageProfile {
        self.entries
            .get(language_id)
            .map(|entry| &entry.profile)
            .unwrap_or(&PLAIN)
    }

    /// Returns `true` if `language_id` has a row.
    pub fn contains(&self, language_id: &str) -> bool {
        self.entries.contains_key(language_id)
    }

    /// Language id registered for a file extension (case-insensitive, no leading dot).
    pub fn language_for_extension(&self, extension: &str) -> Option<&str> {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        self.by_extension.get(&ext).map(String::as_str)
    }

    /// Language id for a path, derived from its extension.
    pub fn language_for_path(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?;
        self.language_for_extension(ext)
    }

    /// Registered language ids, sorted.
    pub fn language_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

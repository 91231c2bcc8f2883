//! YAML overrides for the language table.
//!
//! ```yaml
//! languages:
//!   - id: rust
//!     comment: double-slash
//!     quote: double
//!     extensions: [rs]
//! ```

use crate::profile::{CommentStyle, QuoteStyle};
use crate::table::{LanguageEntry, LanguageTable};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors produced while loading a language configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row had an empty `id`.
    #[error("language entry {0} has an empty id")]
    EmptyId(usize),

    /// The same `id` appeared twice in one document.
    #[error("duplicate language id '{0}'")]
    DuplicateId(String),
}

/// A single `languages:` row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageSpec {
    /// Language identifier (as reported by the host document).
    pub id: String,
    /// Line-comment family, if the language has one.
    #[serde(default)]
    pub comment: Option<CommentStyle>,
    /// String quote family, if the language has one.
    #[serde(default)]
    pub quote: Option<QuoteStyle>,
    /// File extensions selecting this language.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Parsed configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    /// Rows to add to (or replace in) a table.
    #[serde(default)]
    pub languages: Vec<LanguageSpec>,
}

impl LanguageConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: LanguageConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        log::debug!("loading language config from {}", path.display());
        Self::from_yaml_str(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (idx, spec) in self.languages.iter().enumerate() {
            let id = spec.id.trim();
            if id.is_empty() {
                return Err(ConfigError::EmptyId(idx));
            }
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateId(id.to_string()));
            }
        }
        Ok(())
    }

    /// Apply the rows on top of `table`.
    pub fn apply_to(&self, table: &mut LanguageTable) {
        for spec in &self.languages {
            let extensions: Vec<&str> = spec
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.'))
                .collect();
            table.insert(LanguageEntry::new(
                spec.id.trim(),
                spec.comment,
                spec.quote,
                &extensions,
            ));
        }
    }

    /// The built-in table with this configuration applied.
    pub fn into_table(self) -> LanguageTable {
        let mut table = LanguageTable::builtin().clone();
        self.apply_to(&mut table);
        table
    }
}

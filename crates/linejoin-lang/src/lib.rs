#![warn(missing_docs)]
//! `linejoin-lang` - data-driven language profiles for comment- and string-aware line joining.
//!
//! A [`LanguageProfile`] tells the joiner which line-comment marker and which string quotes a
//! language uses. Profiles live in a [`LanguageTable`] keyed by language identifier; unknown
//! identifiers resolve to a plain profile so joining degrades to the whitespace rule.
//!
//! ```rust
//! use linejoin_lang::{CommentStyle, LanguageTable};
//!
//! let table = LanguageTable::builtin();
//! let python = table.profile_for("python");
//! assert_eq!(python.comment_style(), Some(CommentStyle::Hash));
//! assert_eq!(python.comment_prefix_len("  # note"), Some(4));
//! assert!(table.profile_for("markdown").is_plain());
//! ```

pub mod config;
mod profile;
mod table;

pub use config::{ConfigError, LanguageConfig, LanguageSpec};
pub use profile::{CommentStyle, LanguageProfile, QuoteStyle};
pub use table::{LanguageEntry, LanguageTable};

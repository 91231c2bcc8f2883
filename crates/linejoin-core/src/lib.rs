#![warn(missing_docs)]
//! Linejoin Core - comment- and string-aware "join lines" for multi-cursor editors
//!
//! # Overview
//!
//! `linejoin-core` merges each selected line with the line below it and picks the separator
//! from the surrounding syntax instead of blindly deleting the newline:
//!
//! - two consecutive line comments merge into one comment (the second marker is dropped)
//! - a string literal split across two lines is glued back together (both quotes dropped)
//! - anything else collapses the surrounding whitespace into a single space
//!
//! The syntax hints come from [`linejoin_lang`], keyed by the document's language identifier.
//!
//! # Pipeline
//!
//! ```text
//! document snapshot + selections
//!          │
//!          ▼
//!   plan_join ──── LineJoiner (per line pair) ──── LanguageProfile
//!          │
//!          ▼
//!   JoinPlan { EditBatch, [PendingSelection] }
//!          │  host applies the batch atomically
//!          ▼
//!   remap_selections  ──►  final selections
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use linejoin_core::{Selection, TextDocument, plan_join};
//! use linejoin_lang::LanguageTable;
//!
//! let mut doc = TextDocument::new("x = \"hello\"\n    \"world\"", "go");
//! let profile = LanguageTable::builtin().profile_for("go");
//!
//! let plan = plan_join(&doc, profile, &[Selection::caret(0, 0)]);
//! let selections = plan.commit(&mut doc).unwrap();
//!
//! assert_eq!(doc.text(), "x = \"helloworld\"");
//! assert_eq!(selections, vec![Selection::caret(0, 10)]);
//! ```
//!
//! # Module Description
//!
//! - [`document`] - host document contract and a rope-backed reference document
//! - [`edit`] - deferred, atomic batch edits
//! - [`line_join`] - joining one line with the next
//! - [`selection_join`] - planning joins for a whole selection set
//! - [`remap`] - renumbering selections after the batch is applied
//! - [`command`] - command interface

pub mod command;
pub mod document;
pub mod edit;
pub mod line_join;
mod position;
pub mod remap;
pub mod selection_join;

pub use command::{Command, CommandError, CommandExecutor, CommandResult};
pub use document::{DocumentLines, EditHost, LineEnding, TextDocument};
pub use edit::{EditBatch, EditError, TextEdit};
pub use line_join::{JoinOutcome, JoinRule, LineJoiner};
pub use position::{Position, Selection, SelectionShape};
pub use remap::remap_selections;
pub use selection_join::{JoinPlan, PendingSelection, plan_join};

//! Command interface.
//!
//! [`CommandExecutor`] owns a host document, its current selection set and the language table,
//! and exposes the join action as [`Command::JoinLines`].
//!
//! ```rust
//! use linejoin_core::{Command, CommandExecutor, CommandResult, Selection, TextDocument};
//!
//! let doc = TextDocument::new("// foo\n// bar\nbaz", "javascript");
//! let mut executor = CommandExecutor::new(doc);
//! executor
//!     .execute(Command::SetSelections {
//!         selections: vec![Selection::caret(0, 6)],
//!     })
//!     .unwrap();
//!
//! let result = executor.execute(Command::JoinLines).unwrap();
//! assert!(matches!(result, CommandResult::Joined { lines_removed: 1, .. }));
//! assert_eq!(executor.document().text(), "// foo bar\nbaz");
//! assert_eq!(executor.selections(), &[Selection::caret(0, 6)]);
//! ```

use crate::document::{EditHost, TextDocument};
use crate::edit::EditError;
use crate::position::{Position, Selection};
use crate::selection_join::plan_join;
use linejoin_lang::LanguageTable;
use thiserror::Error;

/// Editor commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Join each selection's line(s) with the following line.
    JoinLines,
    /// Replace the selection set.
    SetSelections {
        /// New selections, in order.
        selections: Vec<Selection>,
    },
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success, no return value
    Success,
    /// Join result.
    Joined {
        /// Total number of lines removed from the document.
        lines_removed: usize,
        /// Installed selections (empty if the selection set was left unchanged).
        selections: Vec<Selection>,
    },
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A selection refers to a position outside the document.
    #[error("invalid position: line {line}, column {column}")]
    InvalidPosition {
        /// Logical line index.
        line: usize,
        /// Column in characters.
        column: usize,
    },
    /// An empty selection set was supplied.
    #[error("selection set cannot be empty")]
    EmptySelections,
    /// The host rejected the edit transaction; nothing changed.
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Command executor
///
/// Runs commands against a host document and keeps its selection set in sync.
pub struct CommandExecutor<H = TextDocument> {
    host: H,
    selections: Vec<Selection>,
    languages: LanguageTable,
}

impl<H: EditHost> CommandExecutor<H> {
    /// Create an executor using the built-in language table. The initial selection set is a
    /// single caret at the document start.
    pub fn new(host: H) -> Self {
        Self::with_languages(host, LanguageTable::builtin().clone())
    }

    /// Create an executor with a custom language table.
    pub fn with_languages(host: H, languages: LanguageTable) -> Self {
        Self {
            host,
            selections: vec![Selection::caret(0, 0)],
            languages,
        }
    }

    /// Execute a command.
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        match command {
            Command::JoinLines => self.join_lines(),
            Command::SetSelections { selections } => {
                self.set_selections(selections)?;
                Ok(CommandResult::Success)
            }
        }
    }

    /// Execute commands in order, stopping at the first error.
    pub fn execute_batch(
        &mut self,
        commands: Vec<Command>,
    ) -> Result<Vec<CommandResult>, CommandError> {
        let mut results = Vec::with_capacity(commands.len());
        for command in commands {
            results.push(self.execute(command)?);
        }
        Ok(results)
    }

    /// Run the join action over the current selection set.
    ///
    /// The plan is computed against the current document, applied as one transaction, and the
    /// remapped selections are installed only after the host accepted the edits. If every
    /// selection ended on the last line, nothing changes.
    pub fn join_lines(&mut self) -> Result<CommandResult, CommandError> {
        let profile = self.languages.profile_for(self.host.language_id());
        let plan = plan_join(&self.host, profile, &self.selections);
        let lines_removed = plan.lines_removed();

        let selections = plan.commit(&mut self.host)?;
        if !selections.is_empty() {
            self.selections = selections.clone();
        }
        log::debug!(
            "join removed {lines_removed} lines, {} selections installed",
            selections.len()
        );

        Ok(CommandResult::Joined {
            lines_removed,
            selections,
        })
    }

    /// Replace the selection set after checking it against the document.
    pub fn set_selections(&mut self, selections: Vec<Selection>) -> Result<(), CommandError> {
        if selections.is_empty() {
            return Err(CommandError::EmptySelections);
        }
        for selection in &selections {
            self.check_position(selection.start)?;
            self.check_position(selection.end)?;
        }
        self.selections = selections;
        Ok(())
    }

    fn check_position(&self, pos: Position) -> Result<(), CommandError> {
        if pos.line >= self.host.line_count() || pos.column > self.host.line_len(pos.line) {
            return Err(CommandError::InvalidPosition {
                line: pos.line,
                column: pos.column,
            });
        }
        Ok(())
    }

    /// Current selections, in order.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// The host document.
    pub fn document(&self) -> &H {
        &self.host
    }

    /// Consume the executor, returning the host document.
    pub fn into_document(self) -> H {
        self.host
    }

    /// Language table in use.
    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentLines;
    use crate::edit::EditBatch;

    /// A host whose transactions always fail.
    struct ReadOnly(TextDocument);

    impl DocumentLines for ReadOnly {
        fn language_id(&self) -> &str {
            self.0.language_id()
        }

        fn line_count(&self) -> usize {
            self.0.line_count()
        }

        fn line_text(&self, line: usize) -> Option<String> {
            self.0.line_text(line)
        }
    }

    impl EditHost for ReadOnly {
        fn apply_edits(&mut self, _batch: &EditBatch) -> Result<(), EditError> {
            Err(EditError::Rejected("read-only".to_string()))
        }
    }

    #[test]
    fn test_set_selections_validates_positions() {
        let mut executor = CommandExecutor::new(TextDocument::new("ab\ncd", "plaintext"));

        let result = executor.execute(Command::SetSelections {
            selections: vec![Selection::caret(2, 0)],
        });
        assert_eq!(
            result,
            Err(CommandError::InvalidPosition { line: 2, column: 0 })
        );

        let result = executor.execute(Command::SetSelections {
            selections: vec![Selection::caret(0, 3)],
        });
        assert!(result.is_err());

        assert_eq!(
            executor.set_selections(Vec::new()),
            Err(CommandError::EmptySelections)
        );
        assert_eq!(executor.selections(), &[Selection::caret(0, 0)]);
    }

    #[test]
    fn test_failed_transaction_leaves_state_untouched() {
        let host = ReadOnly(TextDocument::new("a\nb\nc", "plaintext"));
        let mut executor = CommandExecutor::new(host);
        executor
            .set_selections(vec![Selection::caret(0, 0), Selection::caret(1, 1)])
            .unwrap();

        let err = executor.execute(Command::JoinLines).unwrap_err();
        assert!(matches!(err, CommandError::Edit(EditError::Rejected(_))));
        assert_eq!(executor.document().0.text(), "a\nb\nc");
        assert_eq!(
            executor.selections(),
            &[Selection::caret(0, 0), Selection::caret(1, 1)]
        );
    }

    #[test]
    fn test_all_selections_on_last_line_is_a_no_op() {
        let mut executor = CommandExecutor::new(TextDocument::new("a\nb", "plaintext"));
        executor.set_selections(vec![Selection::caret(1, 1)]).unwrap();

        let result = executor.join_lines().unwrap();
        assert_eq!(
            result,
            CommandResult::Joined {
                lines_removed: 0,
                selections: Vec::new(),
            }
        );
        assert_eq!(executor.document().text(), "a\nb");
        assert_eq!(executor.selections(), &[Selection::caret(1, 1)]);
    }

    #[test]
    fn test_batch_execution() {
        let mut executor = CommandExecutor::new(TextDocument::new("a\nb\nc\nd", "plaintext"));
        let results = executor
            .execute_batch(vec![Command::JoinLines, Command::JoinLines])
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(executor.document().text(), "a b c\nd");
        assert_eq!(executor.selections(), &[Selection::caret(0, 3)]);
    }
}

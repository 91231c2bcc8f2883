//! Renumbering selections after a batch join.

use crate::position::{Position, Selection};
use crate::selection_join::PendingSelection;

/// Final selections for `pending`, once the batch has been applied.
///
/// Candidates are expressed in pre-edit line numbers. Entry `i` moves up by the number of lines
/// removed by entries `0..i` and collapses onto that single line, keeping its columns.
pub fn remap_selections(pending: &[PendingSelection]) -> Vec<Selection> {
    pending
        .iter()
        .scan(0usize, |removed_before, entry| {
            let line = entry.candidate.start.line.saturating_sub(*removed_before);
            *removed_before += entry.lines_removed;
            Some(Selection {
                start: Position::new(line, entry.candidate.start.column),
                end: Position::new(line, entry.candidate.end.column),
            })
        })
        .collect()
}

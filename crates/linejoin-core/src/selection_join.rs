//! Planning a join for a whole selection set.
//!
//! [`plan_join`] is pure: it reads one snapshot of the document and produces a [`JoinPlan`]
//! holding every edit to apply plus, for each selection, how many lines it removes and where it
//! should end up (in pre-edit line numbers). [`JoinPlan::commit`] then hands the edits to the
//! host and, only if the host accepts them, remaps the selections.

use crate::document::{DocumentLines, EditHost};
use crate::edit::{EditBatch, EditError};
use crate::line_join::LineJoiner;
use crate::position::{Position, Selection, SelectionShape};
use crate::remap::remap_selections;
use linejoin_lang::LanguageProfile;

/// Per-selection result of planning, before line renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSelection {
    /// Lines eliminated by this selection's joins.
    pub lines_removed: usize,
    /// Where the selection goes, in pre-edit line numbers.
    pub candidate: Selection,
}

/// Edits and pending selections for one join command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinPlan {
    edits: EditBatch,
    pending: Vec<PendingSelection>,
}

impl JoinPlan {
    /// Edits to apply, in pre-edit coordinates.
    pub fn edits(&self) -> &EditBatch {
        &self.edits
    }

    /// Pending selections, in input order.
    pub fn pending(&self) -> &[PendingSelection] {
        &self.pending
    }

    /// Returns `true` if no selection produced a join.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total number of lines the plan removes.
    pub fn lines_removed(&self) -> usize {
        self.pending.iter().map(|p| p.lines_removed).sum()
    }

    /// Apply the edits through `host`, then compute the final selections.
    ///
    /// Nothing is remapped if the host rejects the batch. An empty plan does not touch the host
    /// and yields no selections.
    pub fn commit<H: EditHost + ?Sized>(self, host: &mut H) -> Result<Vec<Selection>, EditError> {
        if self.pending.is_empty() {
            return Ok(Vec::new());
        }
        host.apply_edits(&self.edits)?;
        Ok(remap_selections(&self.pending))
    }
}

/// Plan a join for every selection of `selections` against `doc`.
///
/// Selections ending on the last line are skipped entirely: they contribute no edit and no
/// pending selection. Selection order is preserved and matters for remapping.
///
/// Overlapping or adjacent selections are not merged; their edits may collide, in which case
/// the host rejects the batch.
pub fn plan_join<D: DocumentLines + ?Sized>(
    doc: &D,
    profile: &LanguageProfile,
    selections: &[Selection],
) -> JoinPlan {
    let last_line = doc.line_count().saturating_sub(1);
    let joiner = LineJoiner::new(doc, profile);
    let mut plan = JoinPlan::default();

    for raw in selections {
        let selection = Selection::new(raw.start, raw.end);
        if selection.end.line >= last_line {
            log::debug!("skipping selection {selection:?}: nothing below it");
            continue;
        }

        let shape = selection.shape();
        log::debug!("joining {shape:?} selection {selection:?}");
        let pending = match shape {
            SelectionShape::Caret => join_caret(&joiner, doc, selection, &mut plan.edits),
            SelectionShape::SingleLine => {
                joiner
                    .join(selection.start.line, &mut plan.edits)
                    .map(|_| PendingSelection {
                        lines_removed: 1,
                        candidate: selection,
                    })
            }
            SelectionShape::MultiLine => join_range(&joiner, doc, selection, &mut plan.edits),
        };
        plan.pending.extend(pending);
    }

    plan
}

fn join_caret<D: DocumentLines + ?Sized>(
    joiner: &LineJoiner<'_, D>,
    doc: &D,
    selection: Selection,
    edits: &mut EditBatch,
) -> Option<PendingSelection> {
    let line = selection.start.line;
    let line_len = doc.line_len(line);
    let outcome = joiner.join(line, edits)?;
    Some(PendingSelection {
        lines_removed: 1,
        candidate: Selection::caret(line, line_len - outcome.removed_at_end),
    })
}

fn join_range<D: DocumentLines + ?Sized>(
    joiner: &LineJoiner<'_, D>,
    doc: &D,
    selection: Selection,
    edits: &mut EditBatch,
) -> Option<PendingSelection> {
    let Selection { start, end } = selection;

    // Column of the end of the merged text so far, measured on the start line.
    let mut end_column = doc.line_len(start.line);
    let mut floor = 0;

    for line in start.line..end.line {
        let outcome = joiner.join_from(line, floor, edits)?;
        let kept_next = if line + 1 == end.line {
            end.column.saturating_sub(outcome.removed_at_start)
        } else {
            doc.line_len(line + 1)
                .saturating_sub(outcome.removed_at_start)
        };
        end_column = end_column.saturating_sub(outcome.removed_at_end)
            + outcome.separator_len
            + kept_next;
        floor = outcome.removed_at_start;
    }

    Some(PendingSelection {
        lines_removed: end.line - start.line,
        candidate: Selection {
            start,
            end: Position::new(start.line, end_column),
        },
    })
}

use linejoin_core::{
    CommandError, CommandExecutor, EditError, JoinRule, LineJoiner, Position, Selection,
    TextDocument, plan_join, remap_selections,
};
use linejoin_lang::LanguageTable;
use pretty_assertions::assert_eq;

#[test]
fn test_multiple_carets_are_renumbered() {
    let mut ex = CommandExecutor::new(TextDocument::new("a\nb\nc\nd\ne\nf", "plaintext"));
    ex.set_selections(vec![
        Selection::caret(0, 0),
        Selection::caret(2, 0),
        Selection::caret(4, 0),
    ])
    .unwrap();

    ex.join_lines().unwrap();

    assert_eq!(ex.document().text(), "a b\nc d\ne f");
    assert_eq!(
        ex.selections(),
        &[
            Selection::caret(0, 1),
            Selection::caret(1, 1),
            Selection::caret(2, 1),
        ]
    );
}

#[test]
fn test_mixed_shapes_are_renumbered() {
    let text = "// one\n// two\nx\n  y\nz\np\n  q\n  r\ns";
    let mut ex = CommandExecutor::new(TextDocument::new(text, "go"));
    ex.set_selections(vec![
        Selection::caret(0, 2),
        Selection::on_line(2, 0, 1),
        Selection::new(Position::new(5, 0), Position::new(7, 3)),
    ])
    .unwrap();

    ex.join_lines().unwrap();

    assert_eq!(
        ex.document().lines(),
        vec!["// one two", "x y", "z", "p q r", "s"]
    );
    assert_eq!(
        ex.selections(),
        &[
            Selection::caret(0, 6),
            Selection::on_line(1, 0, 1),
            Selection::on_line(3, 0, 5),
        ]
    );
}

#[test]
fn test_plan_then_commit_in_two_stages() {
    let mut doc = TextDocument::new("a  \n  b\nc\n  d\ne", "plaintext");
    let profile = LanguageTable::builtin().profile_for("plaintext");
    let selections = [Selection::caret(0, 0), Selection::caret(2, 0)];

    let plan = plan_join(&doc, profile, &selections);
    assert_eq!(plan.edits().len(), 2);
    assert_eq!(plan.lines_removed(), 2);

    // Remapping is a pure fold over the pending list.
    let expected = remap_selections(plan.pending());
    let installed = plan.commit(&mut doc).unwrap();

    assert_eq!(installed, expected);
    assert_eq!(installed, vec![Selection::caret(0, 1), Selection::caret(1, 1)]);
    assert_eq!(doc.text(), "a b\nc d\ne");
}

#[test]
fn test_overlapping_selections_are_rejected_atomically() {
    let mut ex = CommandExecutor::new(TextDocument::new("a\nb\nc", "plaintext"));
    let before = vec![Selection::caret(0, 0), Selection::on_line(0, 0, 1)];
    ex.set_selections(before.clone()).unwrap();

    let err = ex.join_lines().unwrap_err();

    assert!(matches!(err, CommandError::Edit(EditError::Overlapping { .. })));
    assert_eq!(ex.document().text(), "a\nb\nc");
    assert_eq!(ex.selections(), before.as_slice());
}

#[test]
fn test_adjacent_carets_use_plain_renumbering() {
    // Both edits touch line 1 without overlapping. Columns are not shifted between selections,
    // so the second caret lands on the first caret's column.
    let mut ex = CommandExecutor::new(TextDocument::new("a\nb\nc", "plaintext"));
    ex.set_selections(vec![Selection::caret(0, 0), Selection::caret(1, 0)])
        .unwrap();

    ex.join_lines().unwrap();

    assert_eq!(ex.document().text(), "a b c");
    assert_eq!(
        ex.selections(),
        &[Selection::caret(0, 1), Selection::caret(0, 1)]
    );
}

#[test]
fn test_line_joiner_is_usable_on_its_own() {
    let doc = TextDocument::new("# a\n# b", "python");
    let profile = LanguageTable::builtin().profile_for("python");
    let mut batch = linejoin_core::EditBatch::new();

    let outcome = LineJoiner::new(&doc, profile).join(0, &mut batch).unwrap();

    assert_eq!(outcome.rule, JoinRule::CommentToComment);
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.edits()[0].start, Position::new(0, 3));
    assert_eq!(batch.edits()[0].end, Position::new(1, 2));
}

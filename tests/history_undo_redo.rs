use eframe_sketchpad::drawable::{Drawable, DrawableKind, Sticker, Stroke};
use eframe_sketchpad::history::{History, HistoryError};
use egui::pos2;

// Helper matching the canonical two-action session: a thin stroke
// followed by a placed sticker.
fn stroke_then_sticker() -> History {
    let mut history = History::new();

    let mut stroke = Stroke::new(pos2(0.0, 0.0), 1.0);
    stroke.extend(pos2(5.0, 5.0));
    history.commit(stroke);

    history.commit(Sticker::new(pos2(10.0, 10.0), "🐶"));
    history
}

#[test]
fn undo_moves_exactly_the_newest_action() {
    let mut history = stroke_then_sticker();

    history.undo().unwrap();

    assert_eq!(history.all().len(), 1);
    assert!(matches!(history.all()[0], DrawableKind::Stroke(_)));
    assert!(history.can_redo());
}

#[test]
fn redo_restores_the_pre_undo_state_exactly() {
    let mut history = stroke_then_sticker();
    let before = history.all().to_vec();

    history.undo().unwrap();
    history.redo().unwrap();

    assert_eq!(history.all(), &before[..]);
    assert!(!history.can_redo());

    match &history.all()[1] {
        DrawableKind::Sticker(sticker) => {
            assert_eq!(sticker.anchor(), pos2(10.0, 10.0));
            assert_eq!(sticker.glyph(), "🐶");
        }
        other => panic!("expected sticker back on top, got {other:?}"),
    }
}

#[test]
fn committing_after_undo_discards_the_redo_buffer() {
    let mut history = stroke_then_sticker();

    history.undo().unwrap();
    history.commit(Stroke::new(pos2(1.0, 1.0), 3.0));

    assert!(!history.can_redo());
    assert_eq!(history.redo(), Err(HistoryError::Empty));
    // The undone sticker is gone for good; the new stroke is on top.
    assert_eq!(history.all().len(), 2);
    assert!(matches!(history.all()[1], DrawableKind::Stroke(_)));
}

#[test]
fn undo_and_redo_on_empty_stacks_change_nothing() {
    let mut history = History::new();

    assert_eq!(history.undo(), Err(HistoryError::Empty));
    assert_eq!(history.redo(), Err(HistoryError::Empty));
    assert!(history.is_empty());

    // A populated history with an empty redo buffer behaves the same way.
    let mut history = stroke_then_sticker();
    let before = history.all().to_vec();
    assert_eq!(history.redo(), Err(HistoryError::Empty));
    assert_eq!(history.all(), &before[..]);
}

#[test]
fn repeated_undo_drains_in_reverse_chronological_order() {
    let mut history = stroke_then_sticker();

    history.undo().unwrap();
    history.undo().unwrap();
    assert!(history.is_empty());
    assert_eq!(history.undo(), Err(HistoryError::Empty));

    // Redo replays forward.
    history.redo().unwrap();
    assert!(matches!(history.all()[0], DrawableKind::Stroke(_)));
    history.redo().unwrap();
    assert!(matches!(history.all()[1], DrawableKind::Sticker(_)));
}

#[test]
fn clear_empties_the_canvas_and_cannot_be_undone() {
    let mut history = stroke_then_sticker();

    history.clear();

    assert!(history.is_empty());
    assert_eq!(history.undo(), Err(HistoryError::Empty));
}

#[test]
fn extend_last_on_empty_history_reports_empty() {
    let mut history = History::new();
    assert_eq!(history.extend_last(pos2(0.0, 0.0)), Err(HistoryError::Empty));
}

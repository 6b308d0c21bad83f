use egui::Pos2;
use thiserror::Error;

use crate::drawable::{Drawable, DrawableKind};

/// Errors from history operations. `Empty` is expected in normal use
/// (undo with nothing drawn) and callers treat it as a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The operation had nothing to act on.
    #[error("history has nothing to act on")]
    Empty,
}

/// The committed drawing actions plus the redo buffer.
///
/// One unified chronological stack: insertion order is z-order, and undo
/// always removes the most recent action regardless of which tool made it.
///
/// Invariants:
/// - committing clears the redo buffer;
/// - undo/redo move exactly one drawable between the two stacks;
/// - a drawable is owned by at most one stack at a time (moves, not
///   copies).
#[derive(Debug, Clone, Default)]
pub struct History {
    committed: Vec<DrawableKind>,
    redo_buffer: Vec<DrawableKind>,
}

impl History {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished-or-in-progress drawable to the committed list.
    /// Any undone actions become unreachable.
    pub fn commit(&mut self, drawable: impl Into<DrawableKind>) {
        self.committed.push(drawable.into());
        self.redo_buffer.clear();
    }

    /// Forward a drag point to the most recently committed drawable.
    pub fn extend_last(&mut self, point: Pos2) -> Result<(), HistoryError> {
        let last = self.committed.last_mut().ok_or(HistoryError::Empty)?;
        last.extend(point);
        Ok(())
    }

    /// Move the most recent committed drawable to the redo buffer.
    pub fn undo(&mut self) -> Result<(), HistoryError> {
        let drawable = self.committed.pop().ok_or(HistoryError::Empty)?;
        self.redo_buffer.push(drawable);
        Ok(())
    }

    /// Move the most recently undone drawable back to the committed list.
    pub fn redo(&mut self) -> Result<(), HistoryError> {
        let drawable = self.redo_buffer.pop().ok_or(HistoryError::Empty)?;
        self.committed.push(drawable);
        Ok(())
    }

    /// Drop everything. Clearing is not undoable: the redo buffer goes
    /// too, so a later redo cannot resurrect drawables onto the blank
    /// canvas.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_buffer.clear();
    }

    /// Committed drawables in chronological (= paint) order.
    pub fn all(&self) -> &[DrawableKind] {
        &self.committed
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

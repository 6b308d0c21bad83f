use egui::Pos2;
use log::debug;

use crate::drawable::{BrushPreview, DrawableKind, Sticker, StickerPreview, Stroke};
use crate::event::{CanvasEvent, EventBus};
use crate::history::{History, HistoryError};

/// The two brush width presets.
pub const BRUSH_THIN: f32 = 1.0;
pub const BRUSH_THICK: f32 = 3.0;

/// Which drawing behavior the next pointer-down starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    #[default]
    Brush,
    Sticker,
}

/// Whether a commit is in progress (pointer held down) and where the
/// pointer last was, in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub active: bool,
    pub pos: Pos2,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            active: false,
            pos: Pos2::ZERO,
        }
    }
}

/// All mutable editor state in one place: the unified history, the tool
/// configuration, the cursor, and the transient hover preview.
///
/// Starts with the thin brush selected and no sticker glyph chosen; the
/// glyph stays unset until a sticker control is used.
#[derive(Debug, Default)]
pub struct EditorState {
    history: History,
    tool: ToolKind,
    brush_width: f32,
    sticker: Option<String>,
    cursor: CursorState,
    preview: Option<DrawableKind>,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            brush_width: BRUSH_THIN,
            ..Self::default()
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn brush_width(&self) -> f32 {
        self.brush_width
    }

    pub fn sticker_glyph(&self) -> Option<&str> {
        self.sticker.as_deref()
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn preview(&self) -> Option<&DrawableKind> {
        self.preview.as_ref()
    }

    // ---- Tool selection controls (the button layer calls these) ----

    /// Switch the active tool. An existing hover preview is rebuilt in
    /// place so the cue matches the new tool immediately.
    pub fn set_tool(&mut self, tool: ToolKind, bus: &EventBus) {
        self.tool = tool;
        if let Some(pos) = self.preview.as_ref().map(|preview| preview.position()) {
            self.preview = Some(self.make_preview(pos));
        }
        bus.publish(CanvasEvent::ToolChanged);
    }

    /// Select a brush width preset; also makes the brush the active tool.
    pub fn select_brush_width(&mut self, width: f32, bus: &EventBus) {
        self.brush_width = width;
        self.set_tool(ToolKind::Brush, bus);
    }

    /// Select a sticker glyph; also makes the sticker the active tool.
    pub fn select_sticker(&mut self, glyph: impl Into<String>, bus: &EventBus) {
        self.sticker = Some(glyph.into());
        self.set_tool(ToolKind::Sticker, bus);
    }

    /// Undo the most recent committed action. Silent no-op when there is
    /// nothing to undo.
    pub fn undo(&mut self, bus: &EventBus) {
        if self.history.undo().is_ok() {
            bus.publish(CanvasEvent::DrawingChanged);
        }
    }

    /// Redo the most recently undone action. Silent no-op when the redo
    /// buffer is empty.
    pub fn redo(&mut self, bus: &EventBus) {
        if self.history.redo().is_ok() {
            bus.publish(CanvasEvent::DrawingChanged);
        }
    }

    /// Wipe the canvas. Not undoable.
    pub fn clear(&mut self, bus: &EventBus) {
        debug!("clearing {} committed drawables", self.history.all().len());
        self.history.clear();
        bus.publish(CanvasEvent::DrawingChanged);
    }

    // ---- Router hooks ----

    pub(crate) fn set_cursor(&mut self, active: bool, pos: Pos2) {
        self.cursor = CursorState { active, pos };
    }

    /// Build the active tool's drawable at `pos` and commit it. Dragging
    /// from here on extends the committed item.
    pub(crate) fn commit_at(&mut self, pos: Pos2) {
        let drawable = self.make_tool_drawable(pos);
        debug!("commit {drawable:?}");
        self.history.commit(drawable);
    }

    pub(crate) fn extend_at(&mut self, pos: Pos2) -> Result<(), HistoryError> {
        self.history.extend_last(pos)
    }

    /// Replace the hover preview wholesale with a fresh one at `pos`.
    pub(crate) fn refresh_preview(&mut self, pos: Pos2) {
        self.preview = Some(self.make_preview(pos));
    }

    pub(crate) fn drop_preview(&mut self) {
        self.preview = None;
    }

    fn make_tool_drawable(&self, pos: Pos2) -> DrawableKind {
        match self.tool {
            ToolKind::Brush => Stroke::new(pos, self.brush_width).into(),
            ToolKind::Sticker => {
                Sticker::new(pos, self.sticker.clone().unwrap_or_default()).into()
            }
        }
    }

    fn make_preview(&self, pos: Pos2) -> DrawableKind {
        match self.tool {
            ToolKind::Brush => BrushPreview::new(pos, self.brush_width).into(),
            ToolKind::Sticker => {
                StickerPreview::new(pos, self.sticker.clone().unwrap_or_default()).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn starts_with_thin_brush_and_no_glyph() {
        let state = EditorState::new();
        assert_eq!(state.tool(), ToolKind::Brush);
        assert_eq!(state.brush_width(), BRUSH_THIN);
        assert_eq!(state.sticker_glyph(), None);
        assert!(!state.cursor().active);
        assert!(state.preview().is_none());
        assert!(state.history().is_empty());
    }

    #[test]
    fn committed_stroke_keeps_its_width_across_selections() {
        let bus = EventBus::new();
        let mut state = EditorState::new();

        state.select_brush_width(BRUSH_THICK, &bus);
        state.commit_at(pos2(1.0, 1.0));
        state.select_brush_width(BRUSH_THIN, &bus);

        match &state.history().all()[0] {
            DrawableKind::Stroke(stroke) => assert_eq!(stroke.width(), BRUSH_THICK),
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn switching_tool_rebuilds_live_preview() {
        let bus = EventBus::new();
        let mut state = EditorState::new();
        state.refresh_preview(pos2(7.0, 9.0));
        assert!(matches!(state.preview(), Some(DrawableKind::BrushPreview(_))));

        state.select_sticker("🐶", &bus);

        match state.preview() {
            Some(DrawableKind::StickerPreview(preview)) => {
                assert_eq!(preview.anchor(), pos2(7.0, 9.0));
                assert_eq!(preview.glyph(), "🐶");
            }
            other => panic!("expected sticker preview, got {other:?}"),
        }
    }

    #[test]
    fn sticker_selection_switches_mode_and_glyph() {
        let bus = EventBus::new();
        let mut state = EditorState::new();

        state.select_sticker("🥞", &bus);
        assert_eq!(state.tool(), ToolKind::Sticker);
        assert_eq!(state.sticker_glyph(), Some("🥞"));

        state.commit_at(pos2(10.0, 10.0));
        match &state.history().all()[0] {
            DrawableKind::Sticker(sticker) => assert_eq!(sticker.glyph(), "🥞"),
            other => panic!("expected sticker, got {other:?}"),
        }
    }
}

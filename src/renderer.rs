use egui::{Color32, Pos2, Rect};

use crate::drawable::Drawable;
use crate::state::EditorState;
use crate::surface::Surface;

/// Deterministic full repaint of the editor state onto any [`Surface`].
///
/// No dirty-region tracking: every change notification repaints the whole
/// canvas from the history, which keeps the renderer a pure function of
/// state. Repainting twice with no intervening mutation produces
/// identical output.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    ink: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            ink: Color32::BLACK,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear, fill the background, paint every committed drawable in
    /// chronological order, then the hover preview — at most one, and
    /// only while no commit is in progress.
    pub fn repaint(&self, state: &EditorState, surface: &mut dyn Surface) {
        surface.clear();
        surface.set_color(self.background);
        surface.fill_rect(Rect::from_min_size(Pos2::ZERO, surface.size()));
        surface.set_color(self.ink);

        for drawable in state.history().all() {
            drawable.render(surface);
        }

        if !state.cursor().active {
            if let Some(preview) = state.preview() {
                preview.render(surface);
            }
        }
    }
}

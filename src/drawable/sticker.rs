use egui::Pos2;

use super::Drawable;
use crate::surface::Surface;

/// Font size every sticker is stamped at, committed or previewed.
pub const STICKER_FONT_SIZE: f32 = 30.0;

/// A placed glyph (usually an emoji) anchored at a single point.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    anchor: Pos2,
    glyph: String,
}

impl Sticker {
    pub fn new(anchor: Pos2, glyph: impl Into<String>) -> Self {
        Self {
            anchor,
            glyph: glyph.into(),
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

impl Drawable for Sticker {
    fn render(&self, surface: &mut dyn Surface) {
        if self.glyph.is_empty() {
            return;
        }
        surface.fill_text(self.anchor, &self.glyph, STICKER_FONT_SIZE);
    }

    /// Dragging a sticker repositions it rather than leaving a trail.
    fn extend(&mut self, point: Pos2) {
        self.anchor = point;
    }
}

use egui::Pos2;

use super::{Drawable, sticker::STICKER_FONT_SIZE};
use crate::surface::Surface;

/// Hover cue for the brush tool: a filled circle sized to the brush width,
/// following the pointer while nothing is being drawn. Never committed.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushPreview {
    center: Pos2,
    radius: f32,
}

impl BrushPreview {
    pub fn new(center: Pos2, brush_width: f32) -> Self {
        Self {
            center,
            radius: brush_width,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Drawable for BrushPreview {
    fn render(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.center, self.radius);
    }

    fn extend(&mut self, point: Pos2) {
        self.center = point;
    }
}

/// Hover cue for the sticker tool: the selected glyph rendered exactly as
/// a committed sticker would be, minus the commitment.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPreview {
    anchor: Pos2,
    glyph: String,
}

impl StickerPreview {
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

impl Drawable for StickerPreview {
    fn render(&self, surface: &mut dyn Surface) {
        if self.glyph.is_empty() {
            return;
        }
        surface.fill_text(self.anchor, &self.glyph, STICKER_FONT_SIZE);
    }

    fn extend(&mut self, point: Pos2) {
        self.anchor = point;
    }
}

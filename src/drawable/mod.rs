use egui::Pos2;

use crate::surface::Surface;

pub(crate) mod preview;
pub(crate) mod sticker;
pub(crate) mod stroke;

pub use preview::{BrushPreview, StickerPreview};
pub use sticker::{STICKER_FONT_SIZE, Sticker};
pub use stroke::Stroke;

/// Capability shared by every drawing action: paint yourself from your own
/// stored state, and absorb the next drag point.
pub trait Drawable {
    /// Paint onto `surface` using only stored geometry. Must tolerate
    /// degenerate states (a one-point stroke, an empty glyph) by drawing
    /// nothing; never errors.
    fn render(&self, surface: &mut dyn Surface);

    /// Update geometry with a drag point: strokes append, stickers and
    /// previews reposition.
    fn extend(&mut self, point: Pos2);
}

/// Sum of all drawing actions. Strokes and stickers live in the history;
/// the preview variants only ever live in the transient preview slot.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableKind {
    Stroke(Stroke),
    Sticker(Sticker),
    BrushPreview(BrushPreview),
    StickerPreview(StickerPreview),
}

impl DrawableKind {
    /// The variant's reference point: a stroke's latest point, a sticker's
    /// anchor, a preview's position. Used to rebuild previews in place when
    /// the tool changes under them.
    pub fn position(&self) -> Pos2 {
        match self {
            DrawableKind::Stroke(s) => s.points().last().copied().unwrap_or(Pos2::ZERO),
            DrawableKind::Sticker(s) => s.anchor(),
            DrawableKind::BrushPreview(p) => p.center(),
            DrawableKind::StickerPreview(p) => p.anchor(),
        }
    }
}

impl Drawable for DrawableKind {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            DrawableKind::Stroke(s) => s.render(surface),
            DrawableKind::Sticker(s) => s.render(surface),
            DrawableKind::BrushPreview(p) => p.render(surface),
            DrawableKind::StickerPreview(p) => p.render(surface),
        }
    }

    fn extend(&mut self, point: Pos2) {
        match self {
            DrawableKind::Stroke(s) => s.extend(point),
            DrawableKind::Sticker(s) => s.extend(point),
            DrawableKind::BrushPreview(p) => p.extend(point),
            DrawableKind::StickerPreview(p) => p.extend(point),
        }
    }
}

impl From<Stroke> for DrawableKind {
    fn from(stroke: Stroke) -> Self {
        DrawableKind::Stroke(stroke)
    }
}

impl From<Sticker> for DrawableKind {
    fn from(sticker: Sticker) -> Self {
        DrawableKind::Sticker(sticker)
    }
}

impl From<BrushPreview> for DrawableKind {
    fn from(preview: BrushPreview) -> Self {
        DrawableKind::BrushPreview(preview)
    }
}

impl From<StickerPreview> for DrawableKind {
    fn from(preview: StickerPreview) -> Self {
        DrawableKind::StickerPreview(preview)
    }
}

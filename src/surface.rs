use egui::{Align2, Color32, FontId, Pos2, Rect, Vec2};

/// Abstract 2D sink the drawables paint onto.
///
/// The core never talks to a concrete backend: committed drawables and
/// previews render through this trait, which makes `Renderer::repaint`
/// reusable against the on-screen painter, the offscreen export pixmap,
/// or anything a test hands in.
///
/// Coordinates are canvas-local. Strokes and fills use the surface's
/// current color, set via [`Surface::set_color`] (render-time state, the
/// way a 2D context carries its fill/stroke style).
pub trait Surface {
    /// Logical size of the drawing area in canvas units.
    fn size(&self) -> Vec2;

    /// Reset the surface to its blank state.
    fn clear(&mut self);

    /// Set the color used by subsequent fill/stroke calls.
    fn set_color(&mut self, color: Color32);

    /// Fill an axis-aligned rectangle with the current color.
    fn fill_rect(&mut self, rect: Rect);

    /// Stroke a connected polyline through `points` in order.
    fn stroke_polyline(&mut self, points: &[Pos2], width: f32);

    /// Fill a circle centered at `center`.
    fn fill_circle(&mut self, center: Pos2, radius: f32);

    /// Draw `text` with its baseline starting at `anchor`.
    fn fill_text(&mut self, anchor: Pos2, text: &str, size: f32);
}

/// [`Surface`] adapter over an [`egui::Painter`].
///
/// Translates canvas-local coordinates into the screen rect the canvas
/// widget was allocated. `clear` is a no-op: egui repaints the whole
/// frame anyway, so the background fill that follows covers everything.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    canvas_rect: Rect,
    color: Color32,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            canvas_rect,
            color: Color32::BLACK,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.canvas_rect.min.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        self.canvas_rect.size()
    }

    fn clear(&mut self) {}

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        let rect = Rect::from_min_size(self.to_screen(rect.min), rect.size());
        self.painter
            .rect_filled(rect.intersect(self.canvas_rect), 0.0, self.color);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32) {
        if points.len() < 2 {
            return;
        }
        let points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::line(points, egui::Stroke::new(width, self.color)));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, self.color);
    }

    fn fill_text(&mut self, anchor: Pos2, text: &str, size: f32) {
        // LEFT_BOTTOM is the closest egui anchor to a canvas baseline.
        self.painter.text(
            self.to_screen(anchor),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(size),
            self.color,
        );
    }
}

use ab_glyph::{Font, FontArc, GlyphId, ScaleFont};
use egui::{Color32, Pos2, Rect, Vec2};
use log::warn;

use crate::surface::Surface;

/// Owned RGBA8 raster implementing [`Surface`] in software.
///
/// Backs the PNG export path and the rendering tests; no GPU, no window.
/// A scale factor multiplies every coordinate, so the export can repaint
/// the same logical canvas at 4x resolution. Glyphs are rasterized with
/// `ab_glyph` over egui's bundled fonts, which is how on-screen stickers
/// are shaped too.
pub struct Pixmap {
    width: u32,
    height: u32,
    scale: f32,
    pixels: Vec<u8>,
    color: Color32,
    fonts: Vec<FontArc>,
}

impl Pixmap {
    /// A pixmap of `size` logical canvas units at `scale` device pixels
    /// per unit, initially transparent.
    pub fn new(size: Vec2, scale: f32) -> Self {
        debug_assert!(scale > 0.0, "scale must be positive");
        let width = (size.x * scale).round().max(1.0) as u32;
        let height = (size.y * scale).round().max(1.0) as u32;
        Self {
            width,
            height,
            scale,
            pixels: vec![0; (width * height * 4) as usize],
            color: Color32::BLACK,
            fonts: load_fonts(),
        }
    }

    /// Width in device pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in device pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 buffer, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the pixmap, returning the RGBA8 buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Color32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = ((y * self.width as i64 + x) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&color.to_array());
    }

    /// Source-over blend of `color` at fractional coverage.
    fn blend_pixel(&mut self, x: i64, y: i64, color: Color32, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let alpha = (color.a() as f32 / 255.0 * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let i = ((y * self.width as i64 + x) * 4) as usize;
        let src = [color.r() as f32, color.g() as f32, color.b() as f32, 255.0];
        for (offset, channel) in src.iter().enumerate() {
            let dst = self.pixels[i + offset] as f32;
            self.pixels[i + offset] = (channel * alpha + dst * (1.0 - alpha)).round() as u8;
        }
    }

    /// Filled disc in device coordinates. The quarter-pixel inflation
    /// guarantees a sub-pixel disc still covers its nearest pixel center.
    fn fill_disc(&mut self, cx: f32, cy: f32, radius: f32) {
        let radius = radius.max(0.5) + 0.25;
        let color = self.color;
        let (x0, x1) = ((cx - radius).floor() as i64, (cx + radius).ceil() as i64);
        let (y0, y1) = ((cy - radius).floor() as i64, (cy + radius).ceil() as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let (dx, dy) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// First bundled font that has a real glyph for `ch`.
    fn glyph_for(&self, ch: char) -> Option<(FontArc, GlyphId)> {
        self.fonts.iter().find_map(|font| {
            let id = font.glyph_id(ch);
            (id.0 != 0).then(|| (font.clone(), id))
        })
    }
}

impl Surface for Pixmap {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) / self.scale
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        let color = self.color;
        let x0 = (rect.min.x * self.scale).round() as i64;
        let y0 = (rect.min.y * self.scale).round() as i64;
        let x1 = (rect.max.x * self.scale).round() as i64;
        let y1 = (rect.max.y * self.scale).round() as i64;
        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, color);
            }
        }
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32) {
        if points.len() < 2 {
            return;
        }
        let radius = (width * self.scale) / 2.0;
        for segment in points.windows(2) {
            let a = segment[0] * self.scale;
            let b = segment[1] * self.scale;
            let length = a.distance(b);
            // Stamp discs densely enough that the caps overlap.
            let steps = (length / radius.max(0.5)).ceil().max(1.0) as u32 * 2;
            for step in 0..=steps {
                let t = step as f32 / steps as f32;
                let p = a.lerp(b, t);
                self.fill_disc(p.x, p.y, radius);
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32) {
        let center = center * self.scale;
        self.fill_disc(center.x, center.y, radius * self.scale);
    }

    fn fill_text(&mut self, anchor: Pos2, text: &str, size: f32) {
        let px_size = size * self.scale;
        let baseline = anchor.y * self.scale;
        let mut caret = anchor.x * self.scale;
        let color = self.color;

        for ch in text.chars() {
            let Some((font, glyph_id)) = self.glyph_for(ch) else {
                // Variation selectors and other marks have no outlines.
                continue;
            };
            let glyph = glyph_id.with_scale_and_position(px_size, ab_glyph::point(caret, baseline));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (ox, oy) = (bounds.min.x as i64, bounds.min.y as i64);
                outlined.draw(|px, py, coverage| {
                    self.blend_pixel(ox + px as i64, oy + py as i64, color, coverage);
                });
            }
            caret += font.as_scaled(px_size).h_advance(glyph_id);
        }
    }
}

/// egui's bundled fonts in proportional fallback order, so pixmap text
/// shapes the same glyphs the on-screen painter would.
fn load_fonts() -> Vec<FontArc> {
    let definitions = egui::FontDefinitions::default();
    let order = definitions
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();
    order
        .iter()
        .filter_map(|name| {
            let data = definitions.font_data.get(name)?;
            match FontArc::try_from_vec(data.font.to_vec()) {
                Ok(font) => Some(font),
                Err(err) => {
                    warn!("skipping bundled font {name}: {err}");
                    None
                }
            }
        })
        .collect()
}

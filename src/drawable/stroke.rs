use egui::Pos2;

use super::Drawable;
use crate::surface::Surface;

/// A committed freehand line: the points the pointer visited, in order,
/// plus the brush width the stroke was started with.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    width: f32,
}

impl Stroke {
    /// Start a stroke at the pointer-down position. The width is captured
    /// here and stays fixed for the stroke's lifetime, regardless of later
    /// brush selections.
    pub fn new(start: Pos2, width: f32) -> Self {
        debug_assert!(width > 0.0, "brush width must be positive");
        Self {
            points: vec![start],
            width,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Drawable for Stroke {
    fn render(&self, surface: &mut dyn Surface) {
        // A single point has no extent to stroke.
        if self.points.len() < 2 {
            return;
        }
        surface.stroke_polyline(&self.points, self.width);
    }

    fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }
}

use egui::{Pos2, Rect};

mod router;
pub use router::route_event;

/// Pointer activity over the canvas, in canvas-local coordinates.
///
/// This is the whole input surface of the core: the host windowing layer
/// (or a test) produces these and feeds them to [`route_event`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer crossed into the canvas.
    Enter { pos: Pos2 },
    /// Primary button pressed over the canvas.
    Down { pos: Pos2 },
    /// The pointer moved while over the canvas, button down or not.
    Move { pos: Pos2 },
    /// Primary button released over the canvas.
    Up { pos: Pos2 },
    /// The pointer left the canvas.
    Leave,
}

/// Converts raw egui input into [`PointerEvent`]s for one canvas rect.
///
/// Tracks the previous hover position so enter/leave transitions can be
/// synthesized; egui only reports where the pointer is now.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's input against the canvas `rect` (screen
    /// coordinates) and return the canvas-local events, in the order they
    /// should be routed.
    pub fn process_input(&mut self, ctx: &egui::Context, rect: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos().filter(|pos| rect.contains(*pos));

            match (self.last_pos, hover) {
                (None, Some(pos)) => {
                    events.push(PointerEvent::Enter {
                        pos: to_canvas(pos, rect),
                    });
                }
                (Some(_), None) => {
                    events.push(PointerEvent::Leave);
                }
                (Some(last), Some(pos)) if pos != last => {
                    events.push(PointerEvent::Move {
                        pos: to_canvas(pos, rect),
                    });
                }
                _ => {}
            }
            self.last_pos = hover;

            if let Some(pos) = hover {
                if input.pointer.primary_pressed() {
                    events.push(PointerEvent::Down {
                        pos: to_canvas(pos, rect),
                    });
                }
                if input.pointer.primary_released() {
                    events.push(PointerEvent::Up {
                        pos: to_canvas(pos, rect),
                    });
                }
            }
        });

        events
    }
}

fn to_canvas(pos: Pos2, rect: Rect) -> Pos2 {
    pos - rect.min.to_vec2()
}

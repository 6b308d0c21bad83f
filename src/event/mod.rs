mod bus;
mod events;

pub use bus::EventBus;
pub use events::CanvasEvent;

pub trait EventHandler {
    fn handle_event(&mut self, event: CanvasEvent);
}

/// Closures subscribe directly; most handlers are one-liners that poke a
/// flag or request a repaint.
impl<F: FnMut(CanvasEvent)> EventHandler for F {
    fn handle_event(&mut self, event: CanvasEvent) {
        self(event)
    }
}

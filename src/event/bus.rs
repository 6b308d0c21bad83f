use std::cell::RefCell;

use crate::event::{CanvasEvent, EventHandler};

/// A simple event bus for broadcasting canvas events to registered
/// handlers.
///
/// Dispatch is synchronous and single-threaded: `publish` runs every
/// handler in subscription order and returns only once all of them have.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus with no subscribers.
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive every published event.
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Publish an event to all registered handlers, in order.
    pub fn publish(&self, event: CanvasEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn publish_runs_handlers_in_subscription_order() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(Box::new(move |event: CanvasEvent| {
                seen.borrow_mut().push((tag, event));
            }));
        }

        bus.publish(CanvasEvent::DrawingChanged);
        bus.publish(CanvasEvent::ToolChanged);

        assert_eq!(
            &*seen.borrow(),
            &[
                ("first", CanvasEvent::DrawingChanged),
                ("second", CanvasEvent::DrawingChanged),
                ("first", CanvasEvent::ToolChanged),
                ("second", CanvasEvent::ToolChanged),
            ]
        );
    }
}

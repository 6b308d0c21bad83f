use crate::event::{CanvasEvent, EventBus};
use crate::state::EditorState;

use super::PointerEvent;

/// Translates one pointer event into editor-state mutations and signals,
/// depending on the active tool and whether a commit is in progress.
///
/// The commit/extend split: pointer-down commits the new drawable right
/// away (a one-point stroke, or a sticker at its initial spot), and every
/// drag point thereafter extends that already-committed item. Releasing
/// outside the canvas leaves the cursor active, which is why re-entering
/// with the button held starts a fresh commit.
pub fn route_event(event: &PointerEvent, state: &mut EditorState, bus: &EventBus) {
    match *event {
        PointerEvent::Enter { pos } => {
            if state.cursor().active {
                state.commit_at(pos);
                bus.publish(CanvasEvent::DrawingChanged);
            }
            state.set_cursor(state.cursor().active, pos);
            state.refresh_preview(pos);
            bus.publish(CanvasEvent::ToolChanged);
        }
        PointerEvent::Down { pos } => {
            state.set_cursor(true, pos);
            state.drop_preview();
            bus.publish(CanvasEvent::ToolChanged);

            state.commit_at(pos);
            bus.publish(CanvasEvent::DrawingChanged);
        }
        PointerEvent::Move { pos } => {
            let active = state.cursor().active;
            state.set_cursor(active, pos);
            if active {
                // Empty means the press happened with no commit to grow;
                // ignore it and keep routing.
                let _ = state.extend_at(pos);
                bus.publish(CanvasEvent::DrawingChanged);
            } else {
                state.refresh_preview(pos);
                bus.publish(CanvasEvent::ToolChanged);
            }
        }
        PointerEvent::Up { pos } => {
            state.set_cursor(false, pos);
            state.refresh_preview(pos);
            bus.publish(CanvasEvent::ToolChanged);
        }
        PointerEvent::Leave => {
            state.drop_preview();
            bus.publish(CanvasEvent::ToolChanged);
        }
    }
}

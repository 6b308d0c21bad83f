/// The two repaint-triggering signals.
///
/// Carries no payload: subscribers re-read the shared editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// The committed drawing changed: a commit, an extension, undo/redo,
    /// or a clear.
    DrawingChanged,
    /// Transient tool-facing state changed: the preview moved or died, or
    /// the active tool was switched.
    ToolChanged,
}

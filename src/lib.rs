#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod drawable;
pub mod event;
pub mod export;
pub mod history;
pub mod input;
pub mod pixmap;
pub mod renderer;
pub mod state;
pub mod surface;

pub use app::SketchpadApp;
pub use drawable::{Drawable, DrawableKind, Sticker, Stroke};
pub use event::{CanvasEvent, EventBus};
pub use history::{History, HistoryError};
pub use input::{InputHandler, PointerEvent, route_event};
pub use renderer::Renderer;
pub use state::{EditorState, ToolKind};
pub use surface::{PainterSurface, Surface};

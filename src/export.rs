use egui::Vec2;
use thiserror::Error;

use crate::pixmap::Pixmap;
use crate::renderer::Renderer;
use crate::state::EditorState;

/// Failures on the export path. Logged, never shown in the UI.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Repaint the editor state onto an offscreen pixmap of `size` logical
/// units at `scale` device pixels per unit, and PNG-encode it. The same
/// repaint that drives the screen runs here against the raster surface.
pub fn render_png(state: &EditorState, size: Vec2, scale: f32) -> Result<Vec<u8>, ExportError> {
    let mut pixmap = Pixmap::new(size, scale);
    Renderer::new().repaint(state, &mut pixmap);

    let mut bytes = Vec::new();
    image::write_buffer_with_format(
        &mut std::io::Cursor::new(&mut bytes),
        pixmap.pixels(),
        pixmap.width(),
        pixmap.height(),
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )?;
    Ok(bytes)
}

/// Render and write the PNG to `path` (the fixed download-style name the
/// app uses, or anywhere a caller chooses).
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(
    state: &EditorState,
    size: Vec2,
    scale: f32,
    path: &std::path::Path,
) -> Result<(), ExportError> {
    let bytes = render_png(state, size, scale)?;
    std::fs::write(path, bytes)?;
    log::info!("exported canvas to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn render_png_produces_png_bytes() {
        let mut state = EditorState::new();
        state.commit_at(pos2(2.0, 2.0));
        state.extend_at(pos2(30.0, 30.0)).unwrap();

        let bytes = render_png(&state, Vec2::splat(32.0), 2.0).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }
}

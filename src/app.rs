use eframe::egui;

use crate::event::{CanvasEvent, EventBus};
use crate::input::{InputHandler, route_event};
use crate::renderer::Renderer;
use crate::state::{BRUSH_THICK, BRUSH_THIN, EditorState, ToolKind};
use crate::surface::PainterSurface;

/// Side length of the square drawing canvas, in points.
pub const CANVAS_SIZE: f32 = 256.0;

/// Export renders the canvas at 4x resolution.
#[cfg(not(target_arch = "wasm32"))]
const EXPORT_SCALE: f32 = 4.0;

const DEFAULT_STICKERS: [&str; 3] = ["👁️", "🐶", "🥞"];

/// The drawing pad application: canvas, tool buttons, and the glue
/// between egui input and the core. All drawing semantics live in the
/// core; this type only translates widgets and pointer events.
pub struct SketchpadApp {
    state: EditorState,
    bus: EventBus,
    renderer: Renderer,
    input: InputHandler,
    /// Sticker palette shown as buttons; grows via the Add dialog.
    stickers: Vec<String>,
    show_add_sticker: bool,
    sticker_draft: String,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let bus = EventBus::new();

        // The renderer's subscription: any published signal schedules a
        // fresh frame, so mutations become visible without waiting for
        // other input.
        let ctx = cc.egui_ctx.clone();
        bus.subscribe(Box::new(move |_event: CanvasEvent| ctx.request_repaint()));

        Self {
            state: EditorState::new(),
            bus,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            stickers: DEFAULT_STICKERS.map(String::from).to_vec(),
            show_add_sticker: false,
            sticker_draft: "🧝".to_owned(),
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(egui::Vec2::splat(CANVAS_SIZE), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // The preview acts as the cursor over the canvas.
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::None);
        }

        for event in self.input.process_input(ui.ctx(), canvas_rect) {
            route_event(&event, &mut self.state, &self.bus);
        }

        let mut surface = PainterSurface::new(&painter, canvas_rect);
        self.renderer.repaint(&self.state, &mut surface);

        painter.rect_stroke(canvas_rect, 0.0, egui::Stroke::new(1.0, egui::Color32::DARK_GRAY));
    }

    fn function_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.state.clear(&self.bus);
            }

            let can_undo = self.state.history().can_undo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                self.state.undo(&self.bus);
            }

            let can_redo = self.state.history().can_redo();
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                self.state.redo(&self.bus);
            }
        });
    }

    fn tool_buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let brush = self.state.tool() == ToolKind::Brush;
            let width = self.state.brush_width();

            if ui.selectable_label(brush && width == BRUSH_THIN, "Thin").clicked() {
                self.state.select_brush_width(BRUSH_THIN, &self.bus);
            }
            if ui.selectable_label(brush && width == BRUSH_THICK, "Thick").clicked() {
                self.state.select_brush_width(BRUSH_THICK, &self.bus);
            }
        });

        ui.horizontal_wrapped(|ui| {
            let mut clicked = None;
            for glyph in &self.stickers {
                let selected = self.state.tool() == ToolKind::Sticker
                    && self.state.sticker_glyph() == Some(glyph.as_str());
                if ui.selectable_label(selected, glyph).clicked() {
                    clicked = Some(glyph.clone());
                }
            }
            if let Some(glyph) = clicked {
                log::info!("sticker selected: {glyph}");
                self.state.select_sticker(glyph, &self.bus);
            }

            if ui.button("Add").clicked() {
                self.show_add_sticker = true;
            }

            #[cfg(not(target_arch = "wasm32"))]
            if ui.button("Export").clicked() {
                let path = std::path::Path::new("sketchpad.png");
                if let Err(err) = crate::export::save_png(
                    &self.state,
                    egui::Vec2::splat(CANVAS_SIZE),
                    EXPORT_SCALE,
                    path,
                ) {
                    log::error!("export failed: {err}");
                }
            }
        });
    }

    /// The custom-sticker prompt, shown as a small modal window.
    fn add_sticker_window(&mut self, ctx: &egui::Context) {
        if !self.show_add_sticker {
            return;
        }

        egui::Window::new("Add Sticker")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.text_edit_singleline(&mut self.sticker_draft);
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        let glyph = self.sticker_draft.trim().to_owned();
                        if !glyph.is_empty() && !self.stickers.contains(&glyph) {
                            self.stickers.push(glyph);
                        }
                        self.show_add_sticker = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_add_sticker = false;
                    }
                });
            });
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Draw Pad");
            });
            ui.add_space(4.0);

            self.canvas(ui);
            ui.add_space(8.0);
            self.function_buttons(ui);
            self.tool_buttons(ui);
        });

        self.add_sticker_window(ctx);
    }
}

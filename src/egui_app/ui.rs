//! egui renderer for the application UI.

mod assess_panel;
mod batch_panel;
mod chrome;
mod info_panel;
mod sections_panel;
pub mod style;

use eframe::egui::{self, TextureHandle, TextureOptions};

use crate::egui_app::controller::AppController;
use crate::egui_app::state::Section;

/// Smallest viewport the layout is designed for.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: AppController,
    visuals_set: bool,
    info_textures: Option<Vec<TextureHandle>>,
}

impl EguiApp {
    /// Create a new egui app, loading persisted configuration and the model.
    pub fn new() -> Result<Self, String> {
        let mut controller = AppController::new();
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
            info_textures: None,
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_center(&mut self, ui: &mut egui::Ui) {
        match self.controller.ui.section {
            Section::Information => self.render_info(ui),
            Section::Assessment => self.render_assessment(ui),
            Section::BatchEvaluation => self.render_batch(ui),
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.ensure_info_textures(ctx);
        self.render_top_bar(ctx, frame);
        self.render_status(ctx);
        egui::SidePanel::left("sections")
            .resizable(false)
            .min_width(200.0)
            .max_width(220.0)
            .show(ctx, |ui| self.render_sections_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("section_scroll")
                .show(ui, |ui| self.render_center(ui));
        });
    }
}

/// Decode embedded image bytes into a GPU texture.
fn load_texture(ctx: &egui::Context, name: &str, bytes: &[u8]) -> Option<TextureHandle> {
    let image = image::load_from_memory(bytes).ok()?.to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
    Some(ctx.load_texture(name, color_image, TextureOptions::LINEAR))
}

use super::style;
use super::*;
use eframe::egui::{RichText, Ui};

impl EguiApp {
    pub(super) fn render_sections_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.vertical(|ui| {
            ui.add_space(6.0);
            ui.label(RichText::new("Sections").color(palette.text_muted));
            ui.add_space(6.0);
            let current = self.controller.ui.section;
            for section in Section::ALL {
                let response = ui.selectable_label(
                    section == current,
                    RichText::new(section.label()).color(palette.text_primary),
                );
                if response.clicked() {
                    self.controller.select_section(section);
                }
                ui.add_space(4.0);
            }
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(6.0);
            let (model_text, model_color) = if self.controller.model_available() {
                ("Classifier ready", palette.success)
            } else {
                ("Classifier unavailable", palette.warning)
            };
            ui.label(RichText::new(model_text).color(model_color));
        });
    }
}

use super::style;
use super::*;
use eframe::egui::{self, RichText, Ui};

use crate::batch::BatchTable;
use crate::egui_app::state::PREVIEW_ROWS;

impl EguiApp {
    pub(super) fn render_batch(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("Batch Evaluation").color(palette.text_primary));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Open CSV dataset...").clicked() {
                self.controller.open_batch_via_dialog();
            }
            if let Some(path) = &self.controller.ui.batch.input_path {
                ui.label(RichText::new(path.display().to_string()).color(palette.text_muted));
            }
        });

        if let Some(error) = self.controller.ui.batch.error.clone() {
            ui.add_space(8.0);
            ui.colored_label(palette.warning, error);
        }

        if let Some(input) = self.controller.ui.batch.input.clone() {
            ui.add_space(12.0);
            ui.label(RichText::new("Uploaded Dataset").strong().color(palette.text_primary));
            ui.label(
                RichText::new(format!("{} rows", input.row_count())).color(palette.text_muted),
            );
            ui.add_space(4.0);
            render_table_preview(ui, "batch_input_preview", &input);

            ui.add_space(12.0);
            let run_enabled = self.controller.model_available();
            if ui
                .add_enabled(run_enabled, egui::Button::new("Run predictions"))
                .clicked()
            {
                self.controller.run_batch();
            }
            if !run_enabled {
                let message = self
                    .controller
                    .model_error()
                    .unwrap_or("Classifier unavailable");
                ui.colored_label(palette.warning, message);
            }
        }

        if let Some(output) = self.controller.ui.batch.output.clone() {
            ui.add_space(12.0);
            ui.label(RichText::new("Predicted Dataset").strong().color(palette.text_primary));
            ui.add_space(4.0);
            render_table_preview(ui, "batch_output_preview", &output);
            ui.add_space(4.0);
            ui.label(
                RichText::new(
                    "Results are in the last column, named 'depression_diagnosis'.",
                )
                .color(palette.text_muted),
            );
            ui.add_space(8.0);
            if ui.button("Save predictions...").clicked() {
                self.controller.save_batch_via_dialog();
            }
        }
    }
}

/// Render the head of a table as a striped grid.
fn render_table_preview(ui: &mut Ui, id: &str, table: &BatchTable) {
    let palette = style::palette();
    egui::ScrollArea::horizontal().id_salt(id).show(ui, |ui| {
        egui::Grid::new(format!("{id}_grid"))
            .striped(true)
            .min_col_width(72.0)
            .show(ui, |ui| {
                for header in table.headers() {
                    ui.label(RichText::new(header).strong().color(palette.accent));
                }
                ui.end_row();
                for row in table.rows().iter().take(PREVIEW_ROWS) {
                    for cell in row {
                        ui.label(RichText::new(cell).color(palette.text_primary));
                    }
                    ui.end_row();
                }
            });
    });
    if table.row_count() > PREVIEW_ROWS {
        ui.label(
            RichText::new(format!(
                "Showing first {PREVIEW_ROWS} of {} rows",
                table.row_count()
            ))
            .color(palette.text_muted),
        );
    }
}

use super::style;
use super::*;
use eframe::egui::{self, RichText, SliderClamping, Ui};

use crate::features::{Answer, AnxietySeverity, DepressionSeverity, Gender, WhoBmiCategory};

impl EguiApp {
    pub(super) fn render_assessment(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("Predict Depression Diagnosis").color(palette.text_primary));
        ui.add_space(4.0);
        ui.label(RichText::new("User Input").color(palette.text_muted));
        ui.add_space(8.0);

        let input = &mut self.controller.ui.assessment.input;
        ui.columns(2, |columns| {
            let left = &mut columns[0];
            let age_slider = egui::Slider::new(&mut input.age, 18..=31)
                .text("Age (years)")
                .clamping(SliderClamping::Always);
            left.add(age_slider);
            enum_combo(left, "gender", "Gender", &mut input.gender, &Gender::ALL, Gender::label);
            let bmi_slider = egui::Slider::new(&mut input.bmi, 0.0..=54.55)
                .text("BMI")
                .clamping(SliderClamping::Always);
            left.add(bmi_slider);
            enum_combo(
                left,
                "who_bmi",
                "WHO BMI Category",
                &mut input.who_bmi,
                &WhoBmiCategory::ALL,
                WhoBmiCategory::label,
            );
            let phq_slider = egui::Slider::new(&mut input.phq_score, 0..=24)
                .text("PHQ Score")
                .clamping(SliderClamping::Always);
            left.add(phq_slider);
            enum_combo(
                left,
                "depression_severity",
                "Depression Severity",
                &mut input.depression_severity,
                &DepressionSeverity::ALL,
                DepressionSeverity::label,
            );
            enum_combo(
                left,
                "depressiveness",
                "Depressiveness",
                &mut input.depressiveness,
                &Answer::ALL,
                Answer::label,
            );
            enum_combo(
                left,
                "suicidal",
                "Suicidal Thoughts",
                &mut input.suicidal,
                &Answer::ALL,
                Answer::label,
            );

            let right = &mut columns[1];
            enum_combo(
                right,
                "depression_treatment",
                "Depression Treatment",
                &mut input.depression_treatment,
                &Answer::ALL,
                Answer::label,
            );
            let gad_slider = egui::Slider::new(&mut input.gad_score, 0..=21)
                .text("GAD Score")
                .clamping(SliderClamping::Always);
            right.add(gad_slider);
            enum_combo(
                right,
                "anxiety_severity",
                "Anxiety Severity",
                &mut input.anxiety_severity,
                &AnxietySeverity::ALL,
                AnxietySeverity::label,
            );
            enum_combo(
                right,
                "anxiousness",
                "Anxiousness",
                &mut input.anxiousness,
                &Answer::ALL,
                Answer::label,
            );
            enum_combo(
                right,
                "anxiety_diagnosis",
                "Anxiety Diagnosis",
                &mut input.anxiety_diagnosis,
                &Answer::ALL,
                Answer::label,
            );
            enum_combo(
                right,
                "anxiety_treatment",
                "Anxiety Treatment",
                &mut input.anxiety_treatment,
                &Answer::ALL,
                Answer::label,
            );
            let epworth_slider = egui::Slider::new(&mut input.epworth_score, 0..=33)
                .text("Epworth Score")
                .clamping(SliderClamping::Always);
            right.add(epworth_slider);
            enum_combo(
                right,
                "sleepiness",
                "Sleepiness",
                &mut input.sleepiness,
                &Answer::ALL,
                Answer::label,
            );
        });

        ui.add_space(12.0);
        if ui.button("Evaluate").clicked() {
            self.controller.evaluate_assessment();
        }

        ui.add_space(8.0);
        if let Some(diagnosis) = self.controller.ui.assessment.result {
            ui.label(RichText::new("Result").strong().color(palette.text_primary));
            ui.label(
                RichText::new(diagnosis.label())
                    .strong()
                    .color(palette.success),
            );
        }
        if let Some(error) = &self.controller.ui.assessment.error {
            ui.colored_label(palette.warning, error);
        }
    }
}

/// Combo box over a closed option set.
fn enum_combo<T: Copy + PartialEq>(
    ui: &mut Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[T],
    to_label: fn(T) -> &'static str,
) {
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt(id)
            .width(180.0)
            .selected_text(to_label(*value))
            .show_ui(ui, |ui| {
                for &option in options {
                    ui.selectable_value(value, option, to_label(option));
                }
            });
        ui.label(label);
    });
}

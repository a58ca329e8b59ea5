use super::style;
use super::*;
use eframe::egui::{self, RichText, Ui};

/// Decorative illustrations shown alongside the educational text.
const INFO_IMAGES: [(&str, &[u8]); 5] = [
    (
        "info_overview",
        include_bytes!("../../../assets/info/overview.png"),
    ),
    (
        "info_symptoms_mood",
        include_bytes!("../../../assets/info/symptoms_mood.png"),
    ),
    (
        "info_symptoms_sleep",
        include_bytes!("../../../assets/info/symptoms_sleep.png"),
    ),
    (
        "info_treatment_therapy",
        include_bytes!("../../../assets/info/treatment_therapy.png"),
    ),
    (
        "info_treatment_medication",
        include_bytes!("../../../assets/info/treatment_medication.png"),
    ),
];

const IMAGE_WIDTH: f32 = 260.0;

impl EguiApp {
    /// Upload the embedded illustrations once; failures just skip the image.
    pub(super) fn ensure_info_textures(&mut self, ctx: &egui::Context) {
        if self.info_textures.is_some() {
            return;
        }
        let textures = INFO_IMAGES
            .iter()
            .filter_map(|(name, bytes)| super::load_texture(ctx, name, bytes))
            .collect();
        self.info_textures = Some(textures);
    }

    pub(super) fn render_info(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("Depression").color(palette.text_primary));
        ui.add_space(8.0);

        ui.label(RichText::new("What is depression?").strong().color(palette.accent));
        ui.add_space(4.0);
        ui.label(
            "Depression is a common mental disorder characterized by a persistently \
             low mood, loss of interest or pleasure in daily activities, and \
             difficulty carrying out everyday tasks. According to the World Health \
             Organization it is one of the leading causes of disability worldwide, \
             affecting more than 280 million people. It can develop from a \
             combination of biological, psychological, and social factors, and \
             should not be confused with the temporary emotional changes that are \
             part of daily life.",
        );
        ui.add_space(8.0);
        self.render_info_images(ui, &[0]);

        ui.add_space(12.0);
        ui.label(RichText::new("Common symptoms").strong().color(palette.accent));
        ui.add_space(4.0);
        ui.label(
            "The most common symptoms include persistent feelings of sadness, \
             irritability or emptiness; loss of interest or pleasure in activities; \
             sleep disturbances (insomnia or hypersomnia); changes in appetite and \
             weight; fatigue or loss of energy; difficulty concentrating; and \
             recurrent thoughts of death or suicide. For a diagnosis of depression, \
             these symptoms must last at least two weeks and significantly affect \
             the person's daily life.",
        );
        ui.add_space(8.0);
        self.render_info_images(ui, &[1, 2]);

        ui.add_space(12.0);
        ui.label(RichText::new("Treatment options").strong().color(palette.accent));
        ui.add_space(4.0);
        ui.label(
            "Treatment may include psychotherapy, medication, or a combination of \
             both. Cognitive behavioral therapy helps people identify and change \
             negative thinking patterns. Antidepressants such as selective \
             serotonin reuptake inhibitors are commonly used to regulate chemical \
             imbalances in the brain. In severe cases, alternatives such as \
             transcranial magnetic stimulation or electroconvulsive therapy may be \
             considered. Treatment should always be supervised by a mental health \
             professional and adjusted to individual needs.",
        );
        ui.add_space(8.0);
        self.render_info_images(ui, &[3, 4]);
    }

    fn render_info_images(&self, ui: &mut Ui, indices: &[usize]) {
        let Some(textures) = &self.info_textures else {
            return;
        };
        ui.horizontal(|ui| {
            for &index in indices {
                let Some(texture) = textures.get(index) else {
                    continue;
                };
                let size = texture.size_vec2();
                let scale = IMAGE_WIDTH / size.x.max(1.0);
                ui.add_space(16.0);
                ui.image((texture.id(), size * scale));
            }
        });
    }
}

//! Maintains app state and bridges prediction logic to the egui UI.

use std::path::PathBuf;

use rfd::FileDialog;

use crate::batch::{self, BatchTable};
use crate::config::{self, AppConfig};
use crate::diagnosis::DiagnosisService;
use crate::egui_app::state::{Section, UiState};
use crate::egui_app::ui::style::StatusTone;
use crate::features;

/// Maintains app state and bridges core logic to the egui UI.
pub struct AppController {
    pub ui: UiState,
    config: AppConfig,
    service: Option<DiagnosisService>,
    model_error: Option<String>,
}

impl AppController {
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            config: AppConfig::default(),
            service: None,
            model_error: None,
        }
    }

    /// Load persisted config, restore the last section, and load the model.
    pub fn load_configuration(&mut self) -> Result<(), config::ConfigError> {
        self.config = config::load_or_default()?;
        if let Some(section) = self
            .config
            .last_section
            .as_deref()
            .and_then(Section::from_label)
        {
            self.ui.section = section;
        }
        self.reload_model();
        Ok(())
    }

    /// Load (or re-load) the classifier from its configured location.
    ///
    /// A failed load leaves the app usable; prediction actions report the
    /// stored error instead of attempting inference.
    pub fn reload_model(&mut self) {
        let path = match config::resolve_model_path(&self.config) {
            Ok(path) => path,
            Err(error) => {
                self.service = None;
                self.model_error = Some(error.to_string());
                self.set_status(format!("Model unavailable: {error}"), StatusTone::Error);
                return;
            }
        };
        self.ui.model_path = Some(path.clone());
        match DiagnosisService::load(&path) {
            Ok(service) => {
                self.service = Some(service);
                self.model_error = None;
                self.set_status(
                    format!("Classifier loaded from {}", path.display()),
                    StatusTone::Info,
                );
            }
            Err(error) => {
                tracing::warn!("Classifier load failed: {error}");
                self.service = None;
                self.model_error = Some(error.to_string());
                self.set_status(error.to_string(), StatusTone::Error);
            }
        }
    }

    /// Whether a classifier is loaded and ready to predict.
    pub fn model_available(&self) -> bool {
        self.service.is_some()
    }

    /// The stored load failure, if the classifier is unavailable.
    pub fn model_error(&self) -> Option<&str> {
        self.model_error.as_deref()
    }

    /// Switch the visible section and persist the choice.
    pub fn select_section(&mut self, section: Section) {
        if self.ui.section == section {
            return;
        }
        self.ui.section = section;
        self.config.last_section = Some(section.label().to_string());
        self.persist_config("Failed to save config after switching section");
    }

    /// Point the app at a different model artifact via file picker.
    pub fn pick_model_via_dialog(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("Model artifact", &["json"])
            .pick_file()
        else {
            return;
        };
        self.config.model_path = Some(path);
        self.persist_config("Failed to save config after choosing model");
        self.reload_model();
    }

    /// Evaluate the current assessment form selections.
    pub fn evaluate_assessment(&mut self) {
        self.ui.assessment.result = None;
        self.ui.assessment.error = None;
        let Some(service) = &self.service else {
            let message = self.model_unavailable_message();
            self.ui.assessment.error = Some(message.clone());
            self.set_status(message, StatusTone::Error);
            return;
        };
        let record = features::encode(&self.ui.assessment.input);
        match service.diagnose(&record) {
            Ok(diagnosis) => {
                self.ui.assessment.result = Some(diagnosis);
                self.set_status(
                    format!("Evaluation complete: {}", diagnosis.label()),
                    StatusTone::Info,
                );
            }
            Err(error) => {
                let message = format!("Error during prediction: {error}");
                self.ui.assessment.error = Some(message.clone());
                self.set_status(message, StatusTone::Error);
            }
        }
    }

    /// Choose a dataset via file picker and load it.
    pub fn open_batch_via_dialog(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("CSV dataset", &["csv"])
            .pick_file()
        else {
            return;
        };
        self.load_batch_from_path(path);
    }

    /// Load a dataset from a known path.
    pub fn load_batch_from_path(&mut self, path: PathBuf) {
        self.ui.batch.output = None;
        self.ui.batch.error = None;
        match BatchTable::read_csv(&path) {
            Ok(table) => {
                self.set_status(
                    format!("Loaded {} rows from {}", table.row_count(), path.display()),
                    StatusTone::Info,
                );
                self.ui.batch.input_path = Some(path);
                self.ui.batch.input = Some(table);
            }
            Err(error) => {
                let message = error.to_string();
                self.ui.batch.input_path = Some(path);
                self.ui.batch.input = None;
                self.ui.batch.error = Some(message.clone());
                self.set_status(message, StatusTone::Error);
            }
        }
    }

    /// Predict every row of the loaded dataset.
    pub fn run_batch(&mut self) {
        self.ui.batch.output = None;
        self.ui.batch.error = None;
        let Some(service) = &self.service else {
            let message = self.model_unavailable_message();
            self.ui.batch.error = Some(message.clone());
            self.set_status(message, StatusTone::Error);
            return;
        };
        let Some(table) = &self.ui.batch.input else {
            self.set_status("Load a CSV dataset first", StatusTone::Warning);
            return;
        };
        match batch::run_batch(service.model(), table) {
            Ok(output) => {
                self.set_status(
                    format!("Predicted {} rows", output.row_count()),
                    StatusTone::Info,
                );
                self.ui.batch.output = Some(output);
            }
            Err(error) => {
                let message = format!("Error during batch prediction: {error}");
                self.ui.batch.error = Some(message.clone());
                self.set_status(message, StatusTone::Error);
            }
        }
    }

    /// Save the augmented dataset via file picker.
    pub fn save_batch_via_dialog(&mut self) {
        if self.ui.batch.output.is_none() {
            self.set_status("Run predictions before saving", StatusTone::Warning);
            return;
        }
        let Some(path) = FileDialog::new()
            .add_filter("CSV dataset", &["csv"])
            .set_file_name("predictions.csv")
            .save_file()
        else {
            return;
        };
        self.save_batch_to_path(path);
    }

    /// Save the augmented dataset to a known path.
    pub fn save_batch_to_path(&mut self, path: PathBuf) {
        let Some(output) = &self.ui.batch.output else {
            return;
        };
        match batch::write_csv(output, &path) {
            Ok(()) => {
                self.set_status(
                    format!("Saved predictions to {}", path.display()),
                    StatusTone::Info,
                );
            }
            Err(error) => {
                self.set_status(error.to_string(), StatusTone::Error);
            }
        }
    }

    fn model_unavailable_message(&self) -> String {
        match &self.model_error {
            Some(error) => format!("The model could not be loaded: {error}"),
            None => "The model could not be loaded".to_string(),
        }
    }

    fn persist_config(&mut self, error_prefix: &str) {
        if let Err(error) = config::save(&self.config) {
            self.set_status(format!("{error_prefix}: {error}"), StatusTone::Warning);
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = crate::egui_app::ui::style::status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label.into();
        self.ui.status.badge_color = color;
    }

    #[cfg(test)]
    pub(crate) fn with_service(service: DiagnosisService) -> Self {
        let mut controller = Self::new();
        controller.service = Some(service);
        controller
    }

    #[cfg(test)]
    pub(crate) fn with_load_failure(message: &str) -> Self {
        let mut controller = Self::new();
        controller.model_error = Some(message.to_string());
        controller
    }
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::Diagnosis;
    use crate::features::{FEATURE_COLUMNS, FEATURE_COUNT};
    use crate::ml::svm::test_support::sum_model;

    #[test]
    fn evaluate_without_model_reports_and_skips_inference() {
        let mut controller = AppController::with_load_failure("artifact missing");
        controller.evaluate_assessment();
        assert!(controller.ui.assessment.result.is_none());
        let error = controller.ui.assessment.error.as_deref().unwrap();
        assert!(error.contains("could not be loaded"));
        assert!(error.contains("artifact missing"));
    }

    #[test]
    fn evaluate_with_model_sets_result() {
        let service = DiagnosisService::from_model(sum_model(1.0)).unwrap();
        let mut controller = AppController::with_service(service);
        controller.evaluate_assessment();
        assert_eq!(controller.ui.assessment.result, Some(Diagnosis::Depressed));
        assert!(controller.ui.assessment.error.is_none());
    }

    #[test]
    fn run_batch_without_model_reports_and_skips_inference() {
        let mut controller = AppController::with_load_failure("artifact missing");
        controller.ui.batch.input = Some(BatchTable::new(
            FEATURE_COLUMNS.iter().map(|name| name.to_string()).collect(),
            vec![vec!["0".to_string(); FEATURE_COUNT]],
        ));
        controller.run_batch();
        assert!(controller.ui.batch.output.is_none());
        assert!(controller.ui.batch.error.is_some());
    }

    #[test]
    fn run_batch_appends_predictions() {
        let service = DiagnosisService::from_model(sum_model(1.0)).unwrap();
        let mut controller = AppController::with_service(service);
        controller.ui.batch.input = Some(BatchTable::new(
            FEATURE_COLUMNS.iter().map(|name| name.to_string()).collect(),
            vec![vec!["0".to_string(); FEATURE_COUNT]; 3],
        ));
        controller.run_batch();
        let output = controller.ui.batch.output.as_ref().unwrap();
        assert_eq!(output.row_count(), 3);
        assert_eq!(output.headers().last().unwrap(), "depression_diagnosis");
    }
}

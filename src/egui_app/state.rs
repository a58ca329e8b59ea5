//! Shared state types consumed by the egui renderer.

use std::path::PathBuf;

use crate::batch::BatchTable;
use crate::diagnosis::Diagnosis;
use crate::egui_app::ui::style::{self, StatusTone};
use crate::features::ScreeningInput;
use egui::Color32;

/// Maximum number of rows shown in a dataset preview.
pub const PREVIEW_ROWS: usize = 5;

/// Top-level sections offered in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Information,
    Assessment,
    BatchEvaluation,
}

impl Section {
    /// Sidebar entries in display order.
    pub const ALL: [Self; 3] = [Self::Information, Self::Assessment, Self::BatchEvaluation];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Information => "Information",
            Self::Assessment => "Diagnostic Measures",
            Self::BatchEvaluation => "Evaluate Data",
        }
    }

    /// Restore a section from its persisted label.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.label() == value)
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Default status shown on launch.
    pub fn idle() -> Self {
        let (label, color) = style::status_badge(StatusTone::Idle);
        Self {
            text: "Ready".into(),
            badge_label: label.into(),
            badge_color: color,
        }
    }
}

/// State behind the single-record assessment form.
#[derive(Clone, Debug, Default)]
pub struct AssessmentState {
    /// Current form selections.
    pub input: ScreeningInput,
    /// Diagnosis from the latest evaluation, if any.
    pub result: Option<Diagnosis>,
    /// Error from the latest evaluation, if it failed.
    pub error: Option<String>,
}

/// State behind the batch evaluation panel.
#[derive(Clone, Debug, Default)]
pub struct BatchPanelState {
    /// Path of the currently loaded dataset.
    pub input_path: Option<PathBuf>,
    /// Loaded dataset awaiting prediction.
    pub input: Option<BatchTable>,
    /// Augmented dataset from the latest run.
    pub output: Option<BatchTable>,
    /// Error from the latest load or run, if it failed.
    pub error: Option<String>,
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub section: Section,
    pub assessment: AssessmentState,
    pub batch: BatchPanelState,
    /// Path the model was loaded from, for display in the options menu.
    pub model_path: Option<PathBuf>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            section: Section::Information,
            assessment: AssessmentState::default(),
            batch: BatchPanelState::default(),
            model_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_round_trip_through_labels() {
        for section in Section::ALL {
            assert_eq!(Section::from_label(section.label()), Some(section));
        }
        assert_eq!(Section::from_label("nope"), None);
    }
}

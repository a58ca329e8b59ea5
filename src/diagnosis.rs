//! Single-record diagnosis over the loaded classifier.

use std::path::Path;

use crate::features::FeatureRecord;
use crate::ml::svm::{LinearSvmModel, ModelError, PredictError};

/// Binary outcome of a depression screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    NotDepressed,
    Depressed,
}

impl Diagnosis {
    /// Map the classifier's output code onto a diagnosis.
    ///
    /// Code 1 means depressed; every other value maps to not depressed.
    pub fn from_code(code: u8) -> Self {
        if code == 1 {
            Self::Depressed
        } else {
            Self::NotDepressed
        }
    }

    /// Human-readable result label.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotDepressed => "Not Depressed",
            Self::Depressed => "Depressed",
        }
    }
}

/// Immutable prediction service wrapping the deserialized classifier.
///
/// Constructed once at startup and shared read-only with every request
/// handler; nothing is mutated after load.
#[derive(Debug, Clone)]
pub struct DiagnosisService {
    model: LinearSvmModel,
}

impl DiagnosisService {
    /// Load the classifier artifact and wrap it for prediction.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let model = LinearSvmModel::load_json(path)?;
        tracing::info!(
            "Loaded classifier v{} from {}",
            model.model_version,
            path.display()
        );
        Ok(Self { model })
    }

    /// Build a service around an already-validated model.
    pub fn from_model(model: LinearSvmModel) -> Result<Self, ModelError> {
        model.validate()?;
        Ok(Self { model })
    }

    /// The wrapped classifier, for batch prediction.
    pub fn model(&self) -> &LinearSvmModel {
        &self.model
    }

    /// Diagnose one encoded record.
    pub fn diagnose(&self, record: &FeatureRecord) -> Result<Diagnosis, PredictError> {
        let code = self.model.predict(record.values())?;
        Ok(Diagnosis::from_code(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{ScreeningInput, encode};
    use crate::ml::svm::test_support::sum_model;

    #[test]
    fn code_one_is_depressed_everything_else_is_not() {
        assert_eq!(Diagnosis::from_code(1), Diagnosis::Depressed);
        assert_eq!(Diagnosis::from_code(0), Diagnosis::NotDepressed);
        assert_eq!(Diagnosis::from_code(7), Diagnosis::NotDepressed);
    }

    #[test]
    fn always_positive_model_diagnoses_depressed() {
        let service = DiagnosisService::from_model(sum_model(1.0)).unwrap();
        let record = encode(&ScreeningInput::default());
        assert_eq!(service.diagnose(&record).unwrap(), Diagnosis::Depressed);
        assert_eq!(service.diagnose(&record).unwrap().label(), "Depressed");
    }

    #[test]
    fn always_negative_model_diagnoses_not_depressed() {
        let mut model = sum_model(-1.0);
        model.weights = vec![0.0; model.weights.len()];
        let service = DiagnosisService::from_model(model).unwrap();
        let record = encode(&ScreeningInput::default());
        assert_eq!(service.diagnose(&record).unwrap(), Diagnosis::NotDepressed);
        assert_eq!(service.diagnose(&record).unwrap().label(), "Not Depressed");
    }
}

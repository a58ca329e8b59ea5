use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::{FEATURE_COLUMNS, FEATURE_COUNT};

/// Errors raised while loading a model artifact from disk.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The artifact file does not exist at the expected path.
    #[error("model artifact not found at {path}")]
    ArtifactNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact exists but could not be read.
    #[error("failed to read model artifact {path}: {source}")]
    ArtifactUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact bytes do not deserialize into a model.
    #[error("model artifact {path} is corrupt: {source}")]
    ArtifactCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifact deserialized but violates a structural invariant.
    #[error("invalid model: {0}")]
    InvalidModel(String),
}

/// Errors raised during inference.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The feature vector length does not match the model.
    #[error("expected {expected} features, got {got}")]
    FeatureLengthMismatch { expected: usize, got: usize },
}

/// Linear support-vector classifier over standardized features.
///
/// The artifact stores the standardization parameters captured at training
/// time so raw feature values can be passed in directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSvmModel {
    /// Model format version.
    pub model_version: i64,
    /// Ordered feature names this model was trained on.
    pub feature_names: Vec<String>,
    /// Per-feature mean subtracted before applying weights.
    pub scaler_mean: Vec<f32>,
    /// Per-feature scale divided out before applying weights.
    pub scaler_scale: Vec<f32>,
    /// One weight per feature.
    pub weights: Vec<f32>,
    /// Decision function intercept.
    pub bias: f32,
}

impl LinearSvmModel {
    /// Load and validate a model from a JSON artifact.
    pub fn load_json(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ModelError::ArtifactNotFound {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                ModelError::ArtifactUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let model: Self =
            serde_json::from_slice(&bytes).map_err(|source| ModelError::ArtifactCorrupt {
                path: path.to_path_buf(),
                source,
            })?;
        model.validate()?;
        Ok(model)
    }

    /// Validate structural invariants of the model.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names.len() != FEATURE_COUNT {
            return Err(ModelError::InvalidModel(format!(
                "model expects {} features but this application encodes {}",
                self.feature_names.len(),
                FEATURE_COUNT
            )));
        }
        for (name, expected) in self.feature_names.iter().zip(FEATURE_COLUMNS) {
            if name != expected {
                return Err(ModelError::InvalidModel(format!(
                    "feature name mismatch: artifact has '{name}' where '{expected}' was expected"
                )));
            }
        }
        if self.weights.len() != self.feature_names.len() {
            return Err(ModelError::InvalidModel(format!(
                "{} weights for {} features",
                self.weights.len(),
                self.feature_names.len()
            )));
        }
        if self.scaler_mean.len() != self.weights.len()
            || self.scaler_scale.len() != self.weights.len()
        {
            return Err(ModelError::InvalidModel(
                "scaler parameter lengths must match weight length".to_string(),
            ));
        }
        if self.scaler_scale.iter().any(|scale| *scale == 0.0) {
            return Err(ModelError::InvalidModel(
                "scaler scale contains a zero entry".to_string(),
            ));
        }
        Ok(())
    }

    /// Signed distance from the separating hyperplane.
    pub fn decision_function(&self, features: &[f32]) -> Result<f32, PredictError> {
        if features.len() != self.weights.len() {
            return Err(PredictError::FeatureLengthMismatch {
                expected: self.weights.len(),
                got: features.len(),
            });
        }
        let mut score = self.bias;
        for (idx, &value) in features.iter().enumerate() {
            let standardized = (value - self.scaler_mean[idx]) / self.scaler_scale[idx];
            score += self.weights[idx] * standardized;
        }
        Ok(score)
    }

    /// Predict the binary class label (0 or 1) for one feature vector.
    pub fn predict(&self, features: &[f32]) -> Result<u8, PredictError> {
        Ok(if self.decision_function(features)? > 0.0 {
            1
        } else {
            0
        })
    }

    /// Predict one label per row, in row order.
    pub fn predict_rows(&self, rows: &[Vec<f32>]) -> Result<Vec<u8>, PredictError> {
        rows.iter().map(|row| self.predict(row)).collect()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Model whose decision function is `sum(features) + bias`.
    pub fn sum_model(bias: f32) -> LinearSvmModel {
        LinearSvmModel {
            model_version: 1,
            feature_names: FEATURE_COLUMNS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            scaler_mean: vec![0.0; FEATURE_COUNT],
            scaler_scale: vec![1.0; FEATURE_COUNT],
            weights: vec![1.0; FEATURE_COUNT],
            bias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::sum_model;
    use super::*;

    #[test]
    fn decision_function_standardizes_features() {
        let mut model = sum_model(0.0);
        model.weights = vec![0.0; FEATURE_COUNT];
        model.weights[0] = 2.0;
        model.scaler_mean[0] = 10.0;
        model.scaler_scale[0] = 5.0;
        let mut features = vec![0.0; FEATURE_COUNT];
        features[0] = 20.0;
        let score = model.decision_function(&features).unwrap();
        assert!((score - 4.0).abs() < 1e-6);
    }

    #[test]
    fn predict_maps_sign_to_label() {
        let positive = sum_model(1.0);
        assert_eq!(positive.predict(&[0.0; FEATURE_COUNT]).unwrap(), 1);
        let negative = sum_model(-1.0);
        assert_eq!(negative.predict(&[0.0; FEATURE_COUNT]).unwrap(), 0);
    }

    #[test]
    fn predict_rejects_wrong_feature_count() {
        let model = sum_model(0.0);
        let err = model.predict(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            PredictError::FeatureLengthMismatch {
                expected: FEATURE_COUNT,
                got: 2
            }
        ));
    }

    #[test]
    fn validate_rejects_renamed_feature() {
        let mut model = sum_model(0.0);
        model.feature_names[3] = "bmi_class".to_string();
        assert!(matches!(model.validate(), Err(ModelError::InvalidModel(_))));
    }

    #[test]
    fn validate_rejects_zero_scale() {
        let mut model = sum_model(0.0);
        model.scaler_scale[7] = 0.0;
        assert!(matches!(model.validate(), Err(ModelError::InvalidModel(_))));
    }

    #[test]
    fn load_json_distinguishes_missing_and_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            LinearSvmModel::load_json(&missing),
            Err(ModelError::ArtifactNotFound { .. })
        ));

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, b"not json").unwrap();
        assert!(matches!(
            LinearSvmModel::load_json(&corrupt),
            Err(ModelError::ArtifactCorrupt { .. })
        ));
    }

    #[test]
    fn model_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let model = sum_model(0.25);
        std::fs::write(&path, serde_json::to_vec(&model).unwrap()).unwrap();
        let loaded = LinearSvmModel::load_json(&path).unwrap();
        assert_eq!(loaded.bias, model.bias);
        assert_eq!(loaded.weights, model.weights);
    }
}

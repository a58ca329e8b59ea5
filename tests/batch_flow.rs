//! End-to-end batch flow: artifact on disk, CSV in, augmented CSV out.

use std::path::Path;

use depscreen::batch::{self, BatchTable, TARGET_COLUMN};
use depscreen::features::{FEATURE_COLUMNS, FEATURE_COUNT};
use depscreen::ml::svm::{LinearSvmModel, ModelError};

/// Write a model whose decision function is `sum(features) + bias`.
fn write_sum_model(path: &Path, bias: f32) {
    let model = serde_json::json!({
        "model_version": 1,
        "feature_names": FEATURE_COLUMNS,
        "scaler_mean": vec![0.0; FEATURE_COUNT],
        "scaler_scale": vec![1.0; FEATURE_COUNT],
        "weights": vec![1.0; FEATURE_COUNT],
        "bias": bias,
    });
    std::fs::write(path, serde_json::to_vec_pretty(&model).unwrap()).unwrap();
}

#[test]
fn csv_in_predictions_out() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("depression_svm.json");
    write_sum_model(&model_path, -10.0);
    let model = LinearSvmModel::load_json(&model_path).unwrap();

    // Stale label column up front, an extra passthrough column, and a blank
    // epworth_score cell in the second row.
    let mut header = vec![TARGET_COLUMN.to_string(), "participant_id".to_string()];
    header.extend(FEATURE_COLUMNS.iter().map(|name| name.to_string()));
    let mut low = vec!["1".to_string(), "p0".to_string()];
    low.extend(std::iter::repeat_n("0".to_string(), FEATURE_COUNT));
    let mut high = vec!["0".to_string(), "p1".to_string()];
    high.extend(std::iter::repeat_n("0".to_string(), FEATURE_COUNT));
    // epworth_score is the next-to-last feature column; blank it so the
    // fill step has to supply 33 and push the sum past the bias.
    let epworth_cell = 2 + FEATURE_COUNT - 2;
    high[epworth_cell] = String::new();

    let input_path = dir.path().join("screenings.csv");
    batch::write_csv(&BatchTable::new(header, vec![low, high]), &input_path).unwrap();

    let table = BatchTable::read_csv(&input_path).unwrap();
    let output = batch::run_batch(&model, &table).unwrap();

    assert_eq!(
        output
            .headers()
            .iter()
            .filter(|h| h.as_str() == TARGET_COLUMN)
            .count(),
        1
    );
    assert_eq!(output.headers().last().unwrap(), TARGET_COLUMN);
    assert_eq!(output.headers()[0], "participant_id");

    assert_eq!(output.row_count(), 2);
    assert_eq!(output.rows()[0][0], "p0");
    assert_eq!(output.rows()[0].last().unwrap(), "0");
    assert_eq!(output.rows()[1][0], "p1");
    // filled epworth of 33 gives sum 33 > bias 10
    assert_eq!(output.rows()[1].last().unwrap(), "1");

    let output_path = dir.path().join("predictions.csv");
    batch::write_csv(&output, &output_path).unwrap();
    let reloaded = BatchTable::read_csv(&output_path).unwrap();
    assert_eq!(&reloaded, &output);
}

#[test]
fn missing_artifact_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = LinearSvmModel::load_json(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ModelError::ArtifactNotFound { .. }));
}

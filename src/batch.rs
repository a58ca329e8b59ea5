//! Batch prediction over an uploaded CSV dataset.
//!
//! Columns may appear in any order. The only cleanup performed is filling
//! blank `epworth_score` cells with the training-time default before
//! inference; everything else must already be numerically encoded. A batch
//! either predicts completely or fails with a single error for the upload.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::features::FEATURE_COLUMNS;
use crate::ml::svm::{LinearSvmModel, PredictError};

/// Name of the predicted (and optionally pre-existing) label column.
pub const TARGET_COLUMN: &str = "depression_diagnosis";

/// Column whose blank cells are defaulted before inference.
pub const EPWORTH_COLUMN: &str = "epworth_score";

/// Training-time default for a missing Epworth score.
pub const EPWORTH_FILL: f32 = 33.0;

/// Errors raised while reading, validating, or predicting a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The CSV file could not be opened or parsed.
    #[error("failed to read dataset {path}: {source}")]
    Read { path: PathBuf, source: csv::Error },
    /// The augmented CSV could not be written out.
    #[error("failed to write dataset {path}: {source}")]
    Write { path: PathBuf, source: csv::Error },
    /// A feature column the model requires is absent.
    #[error("dataset is missing required column '{column}'")]
    MissingColumn { column: &'static str },
    /// A cell could not be interpreted as a numeric feature value.
    #[error("row {row}: column '{column}' has non-numeric value '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
    /// The model rejected the assembled feature rows.
    #[error("prediction failed: {0}")]
    Predict(#[from] PredictError),
}

/// An uploaded dataset, kept as text cells until prediction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl BatchTable {
    /// Build a table from pre-split cells. Intended for tests and previews.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Read a comma-separated dataset from disk.
    pub fn read_csv(path: &Path) -> Result<Self, BatchError> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| BatchError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let headers = reader
            .headers()
            .map_err(|source| BatchError::Read {
                path: path.to_path_buf(),
                source,
            })?
            .iter()
            .map(str::to_string)
            .collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| BatchError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { headers, rows })
    }

    /// Column names as they appeared in the file.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All data rows, in file order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Fill blank `epworth_score` cells with the training default.
    ///
    /// Returns how many cells were filled. A dataset without the column is
    /// left untouched; the schema check at prediction time reports it.
    pub fn fill_missing_epworth(&mut self) -> usize {
        let Some(col) = self.column_index(EPWORTH_COLUMN) else {
            return 0;
        };
        let mut filled = 0;
        for row in &mut self.rows {
            if let Some(cell) = row.get_mut(col)
                && cell.trim().is_empty()
            {
                *cell = EPWORTH_FILL.to_string();
                filled += 1;
            }
        }
        filled
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// Run the whole batch: fill, drop the old label column, predict, append.
///
/// All-or-nothing: any schema or value problem fails the entire upload and no
/// partial table is produced.
pub fn run_batch(model: &LinearSvmModel, table: &BatchTable) -> Result<BatchTable, BatchError> {
    let mut table = table.clone();
    let filled = table.fill_missing_epworth();
    if filled > 0 {
        tracing::info!("Filled {filled} missing {EPWORTH_COLUMN} values with {EPWORTH_FILL}");
    }

    let feature_indices = feature_column_indices(&table)?;
    let mut feature_rows = Vec::with_capacity(table.rows.len());
    for (row_idx, row) in table.rows.iter().enumerate() {
        let mut features = Vec::with_capacity(FEATURE_COLUMNS.len());
        for (column, &cell_idx) in FEATURE_COLUMNS.iter().zip(&feature_indices) {
            let cell = row.get(cell_idx).map(String::as_str).unwrap_or_default();
            let value = cell
                .trim()
                .parse::<f32>()
                .map_err(|_| BatchError::InvalidValue {
                    row: row_idx + 1,
                    column: column.to_string(),
                    value: cell.to_string(),
                })?;
            features.push(value);
        }
        feature_rows.push(features);
    }

    let labels = model.predict_rows(&feature_rows)?;

    // Pre-existing label column is dropped and fully replaced by the
    // predictions, appended as the last column.
    let dropped = table.column_index(TARGET_COLUMN);
    let mut headers: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != dropped)
        .map(|(_, header)| header.clone())
        .collect();
    headers.push(TARGET_COLUMN.to_string());

    let rows = table
        .rows
        .iter()
        .zip(labels)
        .map(|(row, label)| {
            let mut out: Vec<String> = row
                .iter()
                .enumerate()
                .filter(|(idx, _)| Some(*idx) != dropped)
                .map(|(_, cell)| cell.clone())
                .collect();
            out.push(label.to_string());
            out
        })
        .collect();

    Ok(BatchTable { headers, rows })
}

/// Write a table back out as CSV.
pub fn write_csv(table: &BatchTable, path: &Path) -> Result<(), BatchError> {
    let map_err = |source| BatchError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(map_err)?;
    writer.write_record(&table.headers).map_err(map_err)?;
    for row in &table.rows {
        writer.write_record(row).map_err(map_err)?;
    }
    writer
        .flush()
        .map_err(|source| BatchError::Write {
            path: path.to_path_buf(),
            source: csv::Error::from(source),
        })?;
    Ok(())
}

fn feature_column_indices(table: &BatchTable) -> Result<Vec<usize>, BatchError> {
    FEATURE_COLUMNS
        .iter()
        .map(|&column| {
            table
                .column_index(column)
                .ok_or(BatchError::MissingColumn { column })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FEATURE_COUNT;
    use crate::ml::svm::test_support::sum_model;

    fn feature_headers() -> Vec<String> {
        FEATURE_COLUMNS.iter().map(|name| name.to_string()).collect()
    }

    fn zero_row() -> Vec<String> {
        vec!["0".to_string(); FEATURE_COUNT]
    }

    #[test]
    fn fill_replaces_only_blank_epworth_cells() {
        let mut table = BatchTable::new(
            feature_headers(),
            vec![
                {
                    let mut row = zero_row();
                    row[14] = String::new();
                    row
                },
                {
                    let mut row = zero_row();
                    row[14] = "12".to_string();
                    row
                },
            ],
        );
        assert_eq!(table.fill_missing_epworth(), 1);
        assert_eq!(table.rows()[0][14], "33");
        assert_eq!(table.rows()[1][14], "12");
    }

    #[test]
    fn existing_target_column_is_replaced() {
        let mut headers = feature_headers();
        headers.insert(0, TARGET_COLUMN.to_string());
        let mut row = zero_row();
        row.insert(0, "1".to_string());
        let table = BatchTable::new(headers, vec![row]);

        // sum model with negative bias predicts 0 for the all-zero row
        let output = run_batch(&sum_model(-1.0), &table).unwrap();
        assert_eq!(
            output
                .headers()
                .iter()
                .filter(|h| h.as_str() == TARGET_COLUMN)
                .count(),
            1
        );
        assert_eq!(output.headers().last().unwrap(), TARGET_COLUMN);
        assert_eq!(output.rows()[0].last().unwrap(), "0");
    }

    #[test]
    fn row_order_and_extra_columns_survive() {
        let mut headers = feature_headers();
        headers.push("participant_id".to_string());
        let rows: Vec<Vec<String>> = (0..4)
            .map(|idx| {
                let mut row = zero_row();
                row.push(format!("p{idx}"));
                row
            })
            .collect();
        let table = BatchTable::new(headers, rows);
        let output = run_batch(&sum_model(1.0), &table).unwrap();
        assert_eq!(output.row_count(), 4);
        for (idx, row) in output.rows().iter().enumerate() {
            assert_eq!(row[FEATURE_COUNT], format!("p{idx}"));
            assert_eq!(row.last().unwrap(), "1");
        }
    }

    #[test]
    fn shuffled_columns_predict_the_same() {
        let mut headers = feature_headers();
        headers.reverse();
        let row: Vec<String> = (0..FEATURE_COUNT).map(|idx| idx.to_string()).collect();
        let table = BatchTable::new(headers, vec![row]);
        // sum of 0..=15 = 120, bias -119 leaves a positive score
        let output = run_batch(&sum_model(-119.0), &table).unwrap();
        assert_eq!(output.rows()[0].last().unwrap(), "1");
    }

    #[test]
    fn missing_feature_column_fails_whole_batch() {
        let mut headers = feature_headers();
        headers.retain(|header| header != "gad_score");
        let table = BatchTable::new(headers, vec![vec!["0".to_string(); FEATURE_COUNT - 1]]);
        let err = run_batch(&sum_model(0.0), &table).unwrap_err();
        assert!(matches!(
            err,
            BatchError::MissingColumn {
                column: "gad_score"
            }
        ));
    }

    #[test]
    fn non_numeric_cell_fails_whole_batch() {
        let mut bad_row = zero_row();
        bad_row[3] = "Normal".to_string();
        let table = BatchTable::new(feature_headers(), vec![zero_row(), bad_row]);
        let err = run_batch(&sum_model(0.0), &table).unwrap_err();
        match err {
            BatchError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "who_bmi");
                assert_eq!(value, "Normal");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn csv_round_trip_preserves_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.csv");
        let table = BatchTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".to_string(), "x".to_string()]],
        );
        write_csv(&table, &path).unwrap();
        let loaded = BatchTable::read_csv(&path).unwrap();
        assert_eq!(loaded, table);
    }
}

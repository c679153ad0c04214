use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use scalargrad_core::ScalarGradError;

use super::traits::Dataset;

/// One sample: a feature vector and its scalar target.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRow {
    pub features: Vec<f64>,
    pub target: f64,
}

/// How to read a delimited text file whose last column is the label.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvOptions {
    pub delimiter: char,
    /// Skip the first non-blank line.
    pub has_header: bool,
    /// Zero-based feature columns to ignore, e.g. an `Id` column.
    pub skip_columns: Vec<usize>,
    /// Maps class names to targets. Rows whose label is missing from a
    /// non-empty map are skipped. With an empty map the label must parse as
    /// a number.
    pub label_map: HashMap<String, f64>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: ',',
            has_header: false,
            skip_columns: Vec::new(),
            label_map: HashMap::new(),
        }
    }
}

impl CsvOptions {
    /// Iris binary task: setosa is -1, versicolor is 1, virginica and header
    /// rows are skipped because their label is not in the map.
    pub fn iris_binary() -> Self {
        CsvOptions::default()
            .with_label("Iris-setosa", -1.0)
            .with_label("Iris-versicolor", 1.0)
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_skip_columns(mut self, columns: Vec<usize>) -> Self {
        self.skip_columns = columns;
        self
    }

    pub fn with_label(mut self, name: impl Into<String>, target: f64) -> Self {
        self.label_map.insert(name.into(), target);
        self
    }
}

/// Labelled rows read from CSV text.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    rows: Vec<LabeledRow>,
    feature_len: usize,
}

impl CsvDataset {
    /// Opens and parses the file at `path`.
    pub fn from_path(
        path: impl AsRef<Path>,
        options: &CsvOptions,
    ) -> Result<Self, ScalarGradError> {
        let path = path.as_ref();
        log::debug!("Loading CSV dataset from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), options)
    }

    /// Parses CSV text line by line.
    ///
    /// Blank lines are ignored. The label is checked before the features, so
    /// a header or an unmapped class never fails on its non-numeric fields.
    ///
    /// # Errors
    /// `Parse` (with a 1-based line number) for a non-numeric feature or
    /// label, a row with no feature column, or a row whose width differs from
    /// the first accepted row. `EmptyInput` if no row is accepted. `Io` if
    /// reading fails.
    pub fn from_reader<R: BufRead>(
        reader: R,
        options: &CsvOptions,
    ) -> Result<Self, ScalarGradError> {
        let mut rows: Vec<LabeledRow> = Vec::new();
        let mut feature_len: Option<usize> = None;
        let mut header_pending = options.has_header;
        let mut skipped = 0usize;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if header_pending {
                header_pending = false;
                continue;
            }

            let fields: Vec<&str> = trimmed.split(options.delimiter).map(str::trim).collect();
            let Some((label, feature_fields)) = fields.split_last() else {
                continue;
            };
            if feature_fields.is_empty() {
                return Err(parse_error(line_no, "row has a label but no features"));
            }

            let target = match resolve_label(label, options) {
                LabelOutcome::Target(target) => target,
                LabelOutcome::Unmapped => {
                    log::debug!("Skipping line {}: label {:?} is not mapped", line_no, label);
                    skipped += 1;
                    continue;
                }
                LabelOutcome::Invalid => {
                    return Err(parse_error(line_no, &format!("label {:?} is not a number", label)));
                }
            };

            let features = feature_fields
                .iter()
                .enumerate()
                .filter(|(col, _)| !options.skip_columns.contains(col))
                .map(|(col, field)| {
                    field.parse::<f64>().map_err(|_| {
                        let message = format!("column {}: {:?} is not a number", col, field);
                        parse_error(line_no, &message)
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;

            match feature_len {
                None => feature_len = Some(features.len()),
                Some(expected) if expected != features.len() => {
                    return Err(parse_error(
                        line_no,
                        &format!("expected {} features, found {}", expected, features.len()),
                    ));
                }
                Some(_) => {}
            }
            rows.push(LabeledRow { features, target });
        }

        if skipped > 0 {
            log::warn!("Skipped {} rows with unmapped labels", skipped);
        }
        match feature_len {
            Some(feature_len) if feature_len > 0 => {
                log::debug!("Loaded {} rows with {} features", rows.len(), feature_len);
                Ok(CsvDataset { rows, feature_len })
            }
            _ => Err(ScalarGradError::EmptyInput("CSV input has no usable rows".to_string())),
        }
    }

    /// Number of features per row.
    pub fn feature_len(&self) -> usize {
        self.feature_len
    }

    pub fn rows(&self) -> &[LabeledRow] {
        &self.rows
    }

    /// Feature vectors, in file order.
    pub fn inputs(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|row| row.features.clone()).collect()
    }

    /// Targets, in file order.
    pub fn targets(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.target).collect()
    }
}

impl Dataset for CsvDataset {
    type Item = LabeledRow;

    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError> {
        self.rows.get(index).cloned().ok_or(ScalarGradError::IndexOutOfBounds {
            index,
            len: self.rows.len(),
        })
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

enum LabelOutcome {
    Target(f64),
    Unmapped,
    Invalid,
}

fn resolve_label(label: &str, options: &CsvOptions) -> LabelOutcome {
    if options.label_map.is_empty() {
        return match label.parse::<f64>() {
            Ok(target) => LabelOutcome::Target(target),
            Err(_) => LabelOutcome::Invalid,
        };
    }
    match options.label_map.get(label) {
        Some(&target) => LabelOutcome::Target(target),
        None => LabelOutcome::Unmapped,
    }
}

fn parse_error(line: usize, message: &str) -> ScalarGradError {
    ScalarGradError::Parse { line, message: message.to_string() }
}

#[cfg(test)]
#[path = "csv_dataset_test.rs"]
mod tests;

use crate::core::{Dataset, Example, Label};
use crate::io::DataError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Reads a training file: headerless CSV rows of numeric features followed by
/// a `yes`/`no` class label.
pub fn read_training_set(path: &Path) -> Result<Dataset, DataError> {
    let file = File::open(path).map_err(|e| DataError::io(path, e))?;
    parse_training_set(file, path)
}

/// Reads a test file: headerless CSV rows of numeric features only, with no
/// label column.
pub fn read_test_set(path: &Path) -> Result<Dataset, DataError> {
    let file = File::open(path).map_err(|e| DataError::io(path, e))?;
    parse_test_set(file, path)
}

/// `source` only names the input in error messages and logs.
pub fn parse_training_set<R: Read>(reader: R, source: &Path) -> Result<Dataset, DataError> {
    read_rows(reader, source, true)
}

pub fn parse_test_set<R: Read>(reader: R, source: &Path) -> Result<Dataset, DataError> {
    read_rows(reader, source, false)
}

fn read_rows<R: Read>(reader: R, source: &Path, labeled: bool) -> Result<Dataset, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut examples = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| DataError::csv(source, e))?;
        let line = record.position().map_or(0, |p| p.line());

        let example = if labeled {
            parse_labeled_record(&record, source, line)?
        } else {
            Example::unlabeled(parse_features(record.iter(), source, line)?)
        };
        examples.push(example);
    }

    let dataset = Dataset::new(examples)?;
    info!(
        path = %source.display(),
        rows = dataset.len(),
        features = dataset.dimensionality(),
        labeled,
        "dataset loaded"
    );
    Ok(dataset)
}

fn parse_labeled_record(
    record: &StringRecord,
    source: &Path,
    line: u64,
) -> Result<Example, DataError> {
    let n = record.len();
    if n < 2 {
        return Err(DataError::MissingLabelColumn {
            path: source.to_path_buf(),
            line,
        });
    }

    let features = parse_features(record.iter().take(n - 1), source, line)?;
    let raw_label = &record[n - 1];
    let label = raw_label
        .parse::<Label>()
        .map_err(|_| DataError::ParseLabel {
            path: source.to_path_buf(),
            line,
            value: raw_label.to_string(),
        })?;
    Ok(Example::labeled(features, label))
}

/// Finite numbers only; `NaN` and the infinities are rejected like any other
/// non-numeric token.
pub(crate) fn parse_features<'a, I>(
    fields: I,
    source: &Path,
    line: u64,
) -> Result<Vec<f64>, DataError>
where
    I: Iterator<Item = &'a str>,
{
    fields
        .enumerate()
        .map(|(column, raw)| {
            raw.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| DataError::ParseFeature {
                    path: source.to_path_buf(),
                    line,
                    column: column + 1,
                    value: raw.to_string(),
                })
        })
        .collect()
}

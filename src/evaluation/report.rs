use crate::classifiers::Algorithm;
use crate::io::DataError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use strum_macros::{Display as StrumDisplay, EnumString};
use tracing::info;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    StrumDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ReportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ReportFormat {
    fn delimiter(self) -> u8 {
        match self {
            ReportFormat::Tsv => b'\t',
            _ => b',',
        }
    }
}

/// Held-out result for one fold. `fold` is 1-based, like the fold dump headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldResult {
    pub fold: usize,
    pub size: usize,
    pub correct: usize,
    pub accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossValidationReport {
    pub algorithm: Algorithm,
    pub folds: Vec<FoldResult>,
    pub mean_accuracy: f64,
    pub seconds: f64,
    pub generated_at: String,
}

impl CrossValidationReport {
    pub fn new(algorithm: Algorithm, folds: Vec<FoldResult>, seconds: f64) -> Self {
        let mean_accuracy = if folds.is_empty() {
            f64::NAN
        } else {
            folds.iter().map(|f| f.accuracy).sum::<f64>() / folds.len() as f64
        };
        Self {
            algorithm,
            folds,
            mean_accuracy,
            seconds,
            generated_at: timestamp_now(),
        }
    }

    pub fn fold_count(&self) -> usize {
        self.folds.len()
    }

    pub fn export(&self, path: &Path, format: ReportFormat) -> Result<(), DataError> {
        let file = File::create(path).map_err(|source| DataError::io(path, source))?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out, format)?;
        out.flush()?;
        info!(path = %path.display(), format = %format, "cross-validation report written");
        Ok(())
    }

    pub fn write_to<W: Write>(&self, out: W, format: ReportFormat) -> Result<(), DataError> {
        match format {
            ReportFormat::Json => {
                serde_json::to_writer_pretty(out, self)?;
                Ok(())
            }
            ReportFormat::Csv | ReportFormat::Tsv => {
                let mut writer = csv::WriterBuilder::new()
                    .delimiter(format.delimiter())
                    .from_writer(out);
                writer.write_record(["fold", "size", "correct", "accuracy"])?;
                for f in &self.folds {
                    writer.write_record([
                        f.fold.to_string(),
                        f.size.to_string(),
                        f.correct.to_string(),
                        fmtv(f.accuracy),
                    ])?;
                }
                writer.write_record([
                    "mean".to_string(),
                    String::new(),
                    String::new(),
                    fmtv(self.mean_accuracy),
                ])?;
                writer.flush()?;
                Ok(())
            }
        }
    }
}

#[inline]
fn fmtv(v: f64) -> String {
    if v.is_nan() {
        "NaN".into()
    } else {
        format!("{:.6}", v)
    }
}

fn timestamp_now() -> String {
    use chrono::{SecondsFormat, Utc};
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Display for CrossValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "algorithm={}, folds={}, acc={}, t={:.6}s",
            self.algorithm,
            self.fold_count(),
            fmtv(self.mean_accuracy),
            self.seconds
        )
    }
}

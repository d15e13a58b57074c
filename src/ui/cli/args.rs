use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};

use crate::classifiers::Algorithm;
use crate::evaluation::ReportFormat;
use crate::ui::types::{EvaluationParams, KeyValue, parse_key_value};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Classify numeric feature vectors as yes/no with k-nearest-neighbors or Naive Bayes"
)]
pub struct Cli {
    /// Training CSV: feature columns followed by a yes/no label, no header
    #[arg(value_name = "TRAINING", value_hint = ValueHint::FilePath)]
    pub training: PathBuf,

    /// Test CSV: feature columns only, no header
    #[arg(value_name = "TEST", value_hint = ValueHint::FilePath)]
    pub test: PathBuf,

    /// Algorithm: NB for Naive Bayes or <k>NN (e.g. 5NN) for k-nearest-neighbors
    #[arg(value_name = "ALGORITHM")]
    pub algorithm: String,

    /// Also estimate accuracy by stratified cross-validation on the training set
    #[arg(long)]
    pub cross_validate: bool,

    /// Number of cross-validation folds
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub folds: Option<u64>,

    /// Write the cross-validation folds to this file
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub folds_file: Option<PathBuf>,

    /// Write the cross-validation report to this file
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub report_file: Option<PathBuf>,

    /// Format for the report file (csv, tsv, json)
    #[arg(long, value_name = "FORMAT")]
    pub report_format: Option<String>,

    /// JSON file with cross-validation parameters
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Override a cross-validation parameter (key=value)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<KeyValue>,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub training: PathBuf,
    pub test: PathBuf,
    pub algorithm: Algorithm,
    pub evaluation: EvaluationParams,
}

impl Cli {
    pub fn into_run_config(self) -> Result<RunConfig> {
        let algorithm: Algorithm = self
            .algorithm
            .parse()
            .with_context(|| format!("invalid algorithm '{}'", self.algorithm))?;

        let mut evaluation = match &self.config {
            Some(path) => EvaluationParams::from_json_file(path)?,
            None => EvaluationParams::default(),
        }
        .with_overrides(&self.params)?;

        if self.cross_validate {
            evaluation.cross_validate = true;
        }
        if let Some(n) = self.folds {
            evaluation.folds = usize::try_from(n).context("fold count does not fit in memory")?;
        }
        if let Some(path) = self.folds_file {
            evaluation.folds_file = Some(path);
        }
        if let Some(path) = self.report_file {
            evaluation.report_file = Some(path);
        }
        if let Some(fmt) = &self.report_format {
            evaluation.report_format = fmt
                .parse::<ReportFormat>()
                .with_context(|| format!("invalid report format '{fmt}'"))?;
        }
        evaluation.validate()?;

        Ok(RunConfig {
            training: self.training,
            test: self.test,
            algorithm,
            evaluation,
        })
    }
}

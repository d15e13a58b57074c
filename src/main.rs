use std::io::{self, BufWriter, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use binclass::core::{Dataset, Label};
use binclass::evaluation::{CrossValidationReport, CrossValidator};
use binclass::io::{read_test_set, read_training_set, write_folds};
use binclass::ui::cli::{Cli, RunConfig};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.into_run_config()?;

    let training = read_training_set(&config.training).with_context(|| {
        format!(
            "failed to load training set {}",
            config.training.display()
        )
    })?;
    let test = read_test_set(&config.test)
        .with_context(|| format!("failed to load test set {}", config.test.display()))?;

    let predictions = config
        .algorithm
        .classify(&training, &test)
        .with_context(|| format!("{} classification failed", config.algorithm))?;

    let report = if config.evaluation.cross_validate {
        Some(run_cross_validation(&config, &training)?)
    } else {
        None
    };

    print_predictions(&predictions).context("failed to write predictions")?;

    if let Some(report) = report {
        print_summary(&report);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "binclass=warn",
        1 => "binclass=info",
        _ => "binclass=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_cross_validation(config: &RunConfig, training: &Dataset) -> Result<CrossValidationReport> {
    let params = &config.evaluation;
    let validator = CrossValidator::new(config.algorithm, params.folds);

    let folds = validator
        .partition(training)
        .context("failed to build cross-validation folds")?;

    if let Some(path) = &params.folds_file {
        write_folds(path, &folds)
            .with_context(|| format!("failed to write folds to {}", path.display()))?;
    }

    let report = validator
        .evaluate_folds(&folds)
        .context("cross-validation failed")?;

    if let Some(path) = &params.report_file {
        report
            .export(path, params.report_format)
            .with_context(|| format!("failed to export report to {}", path.display()))?;
    }

    Ok(report)
}

fn print_predictions(predictions: &[Label]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for label in predictions {
        writeln!(out, "{label}")?;
    }
    out.flush()
}

fn print_summary(report: &CrossValidationReport) {
    if io::stderr().is_terminal() {
        eprintln!("{BOLD}{FG_CYAN}▶ Cross-validation{RESET}  {DIM}{report}{RESET}");
    } else {
        eprintln!("cross-validation: {report}");
    }
}

use crate::evaluation::ReportFormat;
use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_FOLDS: usize = 10;
fn default_folds() -> usize {
    DEFAULT_FOLDS
}

/// Cross-validation settings. Layered as defaults, then an optional JSON
/// file, then `key=value` overrides, then explicit command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluationParams {
    #[serde(default)]
    pub cross_validate: bool,

    #[serde(default = "default_folds")]
    pub folds: usize,

    /// Where to dump the folds, if anywhere.
    #[serde(default)]
    pub folds_file: Option<PathBuf>,

    #[serde(default)]
    pub report_file: Option<PathBuf>,

    #[serde(default)]
    pub report_format: ReportFormat,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            cross_validate: false,
            folds: DEFAULT_FOLDS,
            folds_file: None,
            report_file: None,
            report_format: ReportFormat::default(),
        }
    }
}

impl EvaluationParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn with_overrides(self, overrides: &[KeyValue]) -> Result<Self> {
        if overrides.is_empty() {
            return Ok(self);
        }
        let mut value = serde_json::to_value(self)?;
        apply_overrides(&mut value, overrides)?;
        serde_json::from_value(value).context("overrides produced invalid parameters")
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.folds >= 1, "folds must be at least 1, got {}", self.folds);
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue {
    key: String,
    value: Value,
}

pub fn parse_key_value(raw: &str) -> Result<KeyValue, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| "expected KEY=VALUE".to_string())?;
    let key = key.trim();
    if key.is_empty() {
        return Err("key cannot be empty".to_string());
    }

    Ok(KeyValue {
        key: key.to_string(),
        value: parse_literal(value.trim()),
    })
}

/// JSON when it parses as JSON, otherwise the raw text as a string.
fn parse_literal(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Keys name top-level fields only; an unknown key is caught when the result
/// is deserialized back into [`EvaluationParams`].
fn apply_overrides(target: &mut Value, overrides: &[KeyValue]) -> Result<()> {
    let Value::Object(fields) = target else {
        bail!("parameters must serialize to a JSON object");
    };
    for kv in overrides {
        fields.insert(kv.key.clone(), kv.value.clone());
    }
    Ok(())
}

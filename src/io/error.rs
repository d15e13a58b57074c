use crate::error::ClassifierError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures reading or writing the crate's text files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{line}: column {column}: '{value}' is not a number", path.display())]
    ParseFeature {
        path: PathBuf,
        line: u64,
        column: usize,
        value: String,
    },

    #[error("{}:{line}: unknown class label '{value}' (expected 'yes' or 'no')", path.display())]
    ParseLabel {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("{}:{line}: row needs at least one feature and a class label", path.display())]
    MissingLabelColumn { path: PathBuf, line: u64 },

    #[error("{}:{line}: {reason}", path.display())]
    MalformedFoldFile {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error(transparent)]
    Dataset(#[from] ClassifierError),

    #[error(transparent)]
    Write(#[from] std::io::Error),

    #[error(transparent)]
    WriteCsv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl DataError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        DataError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

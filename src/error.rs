use crate::core::Label;
use thiserror::Error;

/// Failures raised by the classification core. None of them is recovered from
/// internally; a failed call produces no predictions at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("unknown algorithm '{0}' (expected 'NB' or '<k>NN')")]
    UnknownAlgorithm(String),

    #[error("k must be between 1 and the training set size ({training_size}), got {k}")]
    InvalidK { k: usize, training_size: usize },

    #[error("expected {expected} features, found {found} (example #{index})")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        index: usize,
    },

    #[error("feature {feature} has zero standard deviation within class '{label}'")]
    DegenerateFeature { label: Label, feature: usize },

    #[error("score for class '{label}' left the finite range at feature {feature}")]
    NonFiniteScore { label: Label, feature: usize },

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("example #{index} has no class label")]
    MissingLabel { index: usize },

    #[error("cannot split {examples} examples into {folds} folds")]
    InvalidFoldCount { folds: usize, examples: usize },
}

pub type Result<T, E = ClassifierError> = std::result::Result<T, E>;

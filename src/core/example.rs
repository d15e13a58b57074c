use crate::core::label::Label;
use serde::{Deserialize, Serialize};

/// One feature vector and, for training data, its class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    features: Vec<f64>,
    label: Option<Label>,
}

impl Example {
    pub fn new(features: Vec<f64>, label: Option<Label>) -> Self {
        Self { features, label }
    }

    pub fn labeled(features: Vec<f64>, label: Label) -> Self {
        Self::new(features, Some(label))
    }

    pub fn unlabeled(features: Vec<f64>) -> Self {
        Self::new(features, None)
    }

    #[inline]
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    #[inline]
    pub fn number_of_features(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn label(&self) -> Option<Label> {
        self.label
    }

    pub fn is_labeled(&self) -> bool {
        self.label.is_some()
    }

    /// Euclidean distance over every feature. Callers check dimensionality first;
    /// extra trailing features on either side are ignored.
    pub fn euclidean_distance(&self, other: &Example) -> f64 {
        self.features
            .iter()
            .zip(other.features.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

use crate::classifiers::classifier::{Classifier, Votes, check_dimensions};
use crate::core::estimators::GaussianEstimator;
use crate::core::{Dataset, Example, Label};
use crate::error::{ClassifierError, Result};
use strum::IntoEnumIterator;
use tracing::debug;

/// Gaussian Naive Bayes over two classes.
///
/// Each class keeps one [`GaussianEstimator`] per feature. A query is scored as
/// `prior(c) * prod_i pdf(x_i | c)` and the larger score wins, `Positive` on a
/// tie. Scores are plain products, so very long feature vectors can underflow
/// both classes to zero, which then resolves as a tie. A product that
/// overflows is an error instead of a silent `inf` or `NaN`.
#[derive(Debug, Clone, Default)]
pub struct NaiveBayes {
    observed_class_distribution: [usize; 2],
    attribute_observers: [Vec<GaussianEstimator>; 2],
    dimensionality: usize,
    trained: bool,
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self::default()
    }

    fn total_observed(&self) -> usize {
        self.observed_class_distribution.iter().sum()
    }

    /// Fraction of training examples carrying `label`. Zero before training.
    pub fn prior(&self, label: Label) -> f64 {
        let total = self.total_observed();
        if total == 0 {
            return 0.0;
        }
        self.observed_class_distribution[label.index()] as f64 / total as f64
    }

    pub fn class_mean(&self, label: Label, feature: usize) -> Option<f64> {
        self.attribute_observers[label.index()]
            .get(feature)
            .map(GaussianEstimator::mean)
    }

    pub fn class_std_dev(&self, label: Label, feature: usize) -> Option<f64> {
        self.attribute_observers[label.index()]
            .get(feature)
            .map(GaussianEstimator::get_std_dev)
    }

    /// Rejects any class that was observed but has a zero-spread feature.
    /// Absent classes are skipped: their zero prior already decides their score.
    fn check_degenerate_features(&self) -> Result<()> {
        for label in Label::iter() {
            if self.observed_class_distribution[label.index()] == 0 {
                continue;
            }
            let observers = &self.attribute_observers[label.index()];
            if let Some(feature) = observers.iter().position(|o| o.get_std_dev() <= 0.0) {
                return Err(ClassifierError::DegenerateFeature { label, feature });
            }
        }
        Ok(())
    }

    fn class_score(&self, label: Label, example: &Example) -> Result<f64> {
        let mut score = self.prior(label);
        if score == 0.0 {
            return Ok(0.0);
        }

        for (feature, (observer, &x)) in self.attribute_observers[label.index()]
            .iter()
            .zip(example.features())
            .enumerate()
        {
            let p = observer
                .probability_density(x)
                .ok_or(ClassifierError::DegenerateFeature { label, feature })?;
            score *= p;
            if !score.is_finite() {
                return Err(ClassifierError::NonFiniteScore { label, feature });
            }
        }
        Ok(score)
    }
}

impl Classifier for NaiveBayes {
    fn train(&mut self, training: &Dataset) -> Result<()> {
        *self = NaiveBayes::new();
        if training.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }
        training.ensure_labeled()?;

        let dimensionality = training.dimensionality();
        self.dimensionality = dimensionality;
        for observers in self.attribute_observers.iter_mut() {
            observers.resize_with(dimensionality, GaussianEstimator::new);
        }

        for (index, example) in training.iter().enumerate() {
            let class_val = example
                .label()
                .ok_or(ClassifierError::MissingLabel { index })?
                .index();
            self.observed_class_distribution[class_val] += 1;
            for (observer, &x) in self.attribute_observers[class_val]
                .iter_mut()
                .zip(example.features())
            {
                observer.add_observation(x);
            }
        }

        self.check_degenerate_features()?;
        self.trained = true;

        debug!(
            positives = self.observed_class_distribution[Label::Positive.index()],
            negatives = self.observed_class_distribution[Label::Negative.index()],
            features = dimensionality,
            "naive bayes trained"
        );
        Ok(())
    }

    fn get_votes_for_example(&self, example: &Example) -> Result<Votes> {
        if !self.trained {
            return Err(ClassifierError::EmptyTrainingSet);
        }
        check_dimensions(self.dimensionality, example)?;

        Ok(Votes::new(
            self.class_score(Label::Positive, example)?,
            self.class_score(Label::Negative, example)?,
        ))
    }
}

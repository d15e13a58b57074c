use crate::classifiers::{Algorithm, Classifier};
use crate::core::Dataset;
use crate::error::{ClassifierError, Result};
use crate::evaluation::report::{CrossValidationReport, FoldResult};
use crate::evaluation::stratified_folds::Folds;
use cpu_time::ThreadTime;
use tracing::{debug, info};

/// Estimates held-out accuracy of one algorithm by n-fold cross-validation.
#[derive(Debug, Clone, Copy)]
pub struct CrossValidator {
    algorithm: Algorithm,
    folds: usize,
}

impl CrossValidator {
    pub fn new(algorithm: Algorithm, folds: usize) -> Self {
        Self { algorithm, folds }
    }

    /// Every fold must receive at least one example, so the fold count may not
    /// exceed the dataset size.
    pub fn partition(&self, dataset: &Dataset) -> Result<Folds> {
        if self.folds == 0 || self.folds > dataset.len() {
            return Err(ClassifierError::InvalidFoldCount {
                folds: self.folds,
                examples: dataset.len(),
            });
        }
        Folds::stratified(self.folds, dataset)
    }

    pub fn evaluate(&self, dataset: &Dataset) -> Result<CrossValidationReport> {
        let folds = self.partition(dataset)?;
        self.evaluate_folds(&folds)
    }

    pub fn evaluate_folds(&self, folds: &Folds) -> Result<CrossValidationReport> {
        let algorithm = self.algorithm;
        self.evaluate_folds_with(folds, || algorithm.build())
    }

    /// Runs the held-out loop with classifiers produced by `make_classifier`,
    /// one fresh instance per fold.
    pub fn evaluate_folds_with<F>(
        &self,
        folds: &Folds,
        mut make_classifier: F,
    ) -> Result<CrossValidationReport>
    where
        F: FnMut() -> Box<dyn Classifier>,
    {
        if folds.is_empty() || folds.iter().any(<[_]>::is_empty) {
            return Err(ClassifierError::InvalidFoldCount {
                folds: folds.len(),
                examples: folds.total_examples(),
            });
        }

        let start = ThreadTime::now();
        let mut results = Vec::with_capacity(folds.len());

        for (i, test_fold) in folds.iter().enumerate() {
            let training = Dataset::new(folds.training_set_excluding(i))?;
            let test = Dataset::new(test_fold.to_vec())?;

            let mut classifier = make_classifier();
            let predictions = classifier.classify(&training, &test)?;

            let correct = predictions
                .iter()
                .zip(test.iter())
                .filter(|(predicted, example)| example.label() == Some(**predicted))
                .count();
            let accuracy = correct as f64 / test.len() as f64;

            debug!(fold = i + 1, size = test.len(), correct, accuracy, "fold evaluated");
            results.push(FoldResult {
                fold: i + 1,
                size: test.len(),
                correct,
                accuracy,
            });
        }

        let report =
            CrossValidationReport::new(self.algorithm, results, start.elapsed().as_secs_f64());
        info!(
            algorithm = %self.algorithm,
            folds = report.fold_count(),
            accuracy = report.mean_accuracy,
            "cross-validation finished"
        );
        Ok(report)
    }
}

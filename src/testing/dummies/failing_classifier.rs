use crate::classifiers::{Classifier, Votes};
use crate::core::{Dataset, Example};
use crate::error::{ClassifierError, Result};

/// Refuses to train, so every evaluation using it must fail.
#[derive(Default)]
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn train(&mut self, _training: &Dataset) -> Result<()> {
        Err(ClassifierError::EmptyTrainingSet)
    }

    fn get_votes_for_example(&self, _example: &Example) -> Result<Votes> {
        Err(ClassifierError::EmptyTrainingSet)
    }
}

use crate::classifiers::{Classifier, Votes};
use crate::core::{Dataset, Example, Label};
use crate::error::{ClassifierError, Result};

fn votes_for(label: Label) -> Votes {
    match label {
        Label::Positive => Votes::new(1.0, 0.0),
        Label::Negative => Votes::new(0.0, 1.0),
    }
}

/// Reads the answer off the query's own label.
#[derive(Default)]
pub struct OracleClassifier;

impl Classifier for OracleClassifier {
    fn train(&mut self, _training: &Dataset) -> Result<()> {
        Ok(())
    }

    fn get_votes_for_example(&self, example: &Example) -> Result<Votes> {
        let label = example
            .label()
            .ok_or(ClassifierError::MissingLabel { index: 0 })?;
        Ok(votes_for(label))
    }
}

/// Always answers the opposite of the query's own label.
#[derive(Default)]
pub struct ContrarianClassifier;

impl Classifier for ContrarianClassifier {
    fn train(&mut self, _training: &Dataset) -> Result<()> {
        Ok(())
    }

    fn get_votes_for_example(&self, example: &Example) -> Result<Votes> {
        let flipped = match example.label() {
            Some(Label::Positive) => Label::Negative,
            Some(Label::Negative) => Label::Positive,
            None => return Err(ClassifierError::MissingLabel { index: 0 }),
        };
        Ok(votes_for(flipped))
    }
}

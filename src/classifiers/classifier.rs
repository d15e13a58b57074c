use crate::core::{Dataset, Example, Label};
use crate::error::{ClassifierError, Result};

/// Per-class scores for one query. Their scale depends on the classifier:
/// neighbour counts for kNN, prior-weighted likelihoods for Naive Bayes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Votes {
    pub positive: f64,
    pub negative: f64,
}

impl Votes {
    pub fn new(positive: f64, negative: f64) -> Self {
        Self { positive, negative }
    }

    /// A tie goes to `Positive`.
    pub fn winner(&self) -> Label {
        if self.positive >= self.negative {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

pub trait Classifier {
    /// Replaces any previous model with one fitted on `training`.
    fn train(&mut self, training: &Dataset) -> Result<()>;

    /// Scores a single query against the trained model.
    fn get_votes_for_example(&self, example: &Example) -> Result<Votes>;

    fn predict(&self, example: &Example) -> Result<Label> {
        Ok(self.get_votes_for_example(example)?.winner())
    }

    /// Trains on `training`, then predicts every example of `test` in order.
    /// Fails as a whole if any single prediction fails.
    fn classify(&mut self, training: &Dataset, test: &Dataset) -> Result<Vec<Label>> {
        self.train(training)?;
        test.iter()
            .enumerate()
            .map(|(index, example)| self.predict(example).map_err(|e| e.at_index(index)))
            .collect()
    }
}

impl ClassifierError {
    /// Points a per-query dimension error at the query's position in its dataset.
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            ClassifierError::DimensionMismatch {
                expected, found, ..
            } => ClassifierError::DimensionMismatch {
                expected,
                found,
                index,
            },
            other => other,
        }
    }
}

pub(crate) fn check_dimensions(expected: usize, example: &Example) -> Result<()> {
    let found = example.number_of_features();
    if found == expected {
        Ok(())
    } else {
        Err(ClassifierError::DimensionMismatch {
            expected,
            found,
            index: 0,
        })
    }
}

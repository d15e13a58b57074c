use crate::core::{Dataset, Example, Label};
use crate::error::{ClassifierError, Result};
use tracing::debug;

/// A disjoint split of a labeled dataset into `n` folds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Folds {
    folds: Vec<Vec<Example>>,
}

impl Folds {
    /// Deals examples round-robin into `n` folds: every `Positive` example in
    /// input order first, then every `Negative` one. The fold counter is not
    /// reset between the two classes, so negatives start in the fold after the
    /// last positive.
    pub fn stratified(n: usize, dataset: &Dataset) -> Result<Self> {
        if n == 0 {
            return Err(ClassifierError::InvalidFoldCount {
                folds: n,
                examples: dataset.len(),
            });
        }
        dataset.ensure_labeled()?;

        let mut folds = vec![Vec::new(); n];
        let mut count = 0usize;
        for label in [Label::Positive, Label::Negative] {
            for example in dataset.iter().filter(|e| e.label() == Some(label)) {
                folds[count % n].push(example.clone());
                count += 1;
            }
        }

        debug!(
            folds = n,
            examples = count,
            sizes = ?folds.iter().map(Vec::len).collect::<Vec<_>>(),
            "stratified folds built"
        );
        Ok(Self { folds })
    }

    pub fn from_parts(folds: Vec<Vec<Example>>) -> Self {
        Self { folds }
    }

    pub fn len(&self) -> usize {
        self.folds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[Example]> {
        self.folds.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Example]> {
        self.folds.iter().map(Vec::as_slice)
    }

    pub fn total_examples(&self) -> usize {
        self.folds.iter().map(Vec::len).sum()
    }

    /// Every example outside fold `index`, concatenated in fold order.
    pub fn training_set_excluding(&self, index: usize) -> Vec<Example> {
        self.folds
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .flat_map(|(_, fold)| fold.iter().cloned())
            .collect()
    }
}

use crate::core::{Example, Label};
use crate::error::{ClassifierError, Result};
use std::ops::Index;
use std::slice::Iter;

/// An ordered collection of examples that all share one dimensionality.
///
/// Order is significant: predictions are reported positionally against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    examples: Vec<Example>,
    dimensionality: usize,
}

impl Dataset {
    pub fn new(examples: Vec<Example>) -> Result<Self> {
        let dimensionality = examples.first().map_or(0, Example::number_of_features);

        if let Some((index, bad)) = examples
            .iter()
            .enumerate()
            .find(|(_, e)| e.number_of_features() != dimensionality)
        {
            return Err(ClassifierError::DimensionMismatch {
                expected: dimensionality,
                found: bad.number_of_features(),
                index,
            });
        }

        Ok(Self {
            examples,
            dimensionality,
        })
    }

    #[inline]
    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn iter(&self) -> Iter<'_, Example> {
        self.examples.iter()
    }

    /// Fails with `MissingLabel` on the first unlabeled example.
    pub fn ensure_labeled(&self) -> Result<()> {
        match self.examples.iter().position(|e| !e.is_labeled()) {
            Some(index) => Err(ClassifierError::MissingLabel { index }),
            None => Ok(()),
        }
    }

    /// Counts indexed by [`Label::index`]. Unlabeled examples are not counted.
    pub fn class_counts(&self) -> [usize; 2] {
        let mut counts = [0; 2];
        for label in self.examples.iter().filter_map(Example::label) {
            counts[label.index()] += 1;
        }
        counts
    }
}

impl Index<usize> for Dataset {
    type Output = Example;

    fn index(&self, index: usize) -> &Self::Output {
        &self.examples[index]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Example;
    type IntoIter = Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}

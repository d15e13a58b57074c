use crate::classifiers::classifier::{Classifier, Votes, check_dimensions};
use crate::core::{Dataset, Example, Label};
use crate::error::{ClassifierError, Result};
use tracing::debug;

/// Majority vote among the `k` training examples closest to the query.
///
/// Distances are computed into a buffer owned by each query; the stored
/// training set is never written to after [`Classifier::train`].
#[derive(Debug, Clone)]
pub struct KNearestNeighbors {
    k: usize,
    training: Dataset,
}

impl KNearestNeighbors {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            training: Dataset::default(),
        }
    }

    fn check_k(&self) -> Result<()> {
        if self.k == 0 || self.k > self.training.len() {
            return Err(ClassifierError::InvalidK {
                k: self.k,
                training_size: self.training.len(),
            });
        }
        Ok(())
    }

    /// `(distance, training index)` pairs in ascending distance, ties by index.
    pub fn rank_neighbors(&self, query: &Example) -> Result<Vec<(f64, usize)>> {
        check_dimensions(self.training.dimensionality(), query)?;

        let mut distances: Vec<(f64, usize)> = self
            .training
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.euclidean_distance(query), i))
            .collect();
        distances.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        Ok(distances)
    }
}

impl Classifier for KNearestNeighbors {
    fn train(&mut self, training: &Dataset) -> Result<()> {
        training.ensure_labeled()?;
        self.training = training.clone();
        self.check_k()?;
        debug!(
            k = self.k,
            training_size = self.training.len(),
            "k-nearest-neighbors trained"
        );
        Ok(())
    }

    fn get_votes_for_example(&self, example: &Example) -> Result<Votes> {
        self.check_k()?;
        let ranked = self.rank_neighbors(example)?;

        let mut votes = Votes::default();
        for &(_, i) in ranked.iter().take(self.k) {
            match self.training[i].label() {
                Some(Label::Positive) => votes.positive += 1.0,
                Some(Label::Negative) => votes.negative += 1.0,
                None => return Err(ClassifierError::MissingLabel { index: i }),
            }
        }
        Ok(votes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{two_clusters, unlabeled};

    #[test]
    fn one_nearest_picks_closest_label() {
        let mut knn = KNearestNeighbors::new(1);
        let out = knn
            .classify(&two_clusters(), &unlabeled(&[&[1.2, 2.2]]))
            .unwrap();
        assert_eq!(out, vec![Label::Positive]);

        let out = knn
            .classify(&two_clusters(), &unlabeled(&[&[4.8, 5.2]]))
            .unwrap();
        assert_eq!(out, vec![Label::Negative]);
    }

    #[test]
    fn predictions_follow_test_order() {
        let mut knn = KNearestNeighbors::new(1);
        let test = unlabeled(&[&[5.0, 5.0], &[1.0, 2.0], &[4.6, 5.4], &[1.4, 2.4]]);
        let out = knn.classify(&two_clusters(), &test).unwrap();
        assert_eq!(
            out,
            vec![
                Label::Negative,
                Label::Positive,
                Label::Negative,
                Label::Positive
            ]
        );
    }

    #[test]
    fn saturated_k_predicts_training_majority() {
        let training = Dataset::new(vec![
            Example::labeled(vec![0.0], Label::Negative),
            Example::labeled(vec![1.0], Label::Negative),
            Example::labeled(vec![2.0], Label::Positive),
            Example::labeled(vec![9.0], Label::Negative),
        ])
        .unwrap();
        let mut knn = KNearestNeighbors::new(training.len());
        let out = knn
            .classify(&training, &unlabeled(&[&[2.0], &[100.0], &[-5.0]]))
            .unwrap();
        assert!(out.iter().all(|l| *l == Label::Negative));
    }

    #[test]
    fn tie_in_votes_favors_positive() {
        let mut knn = KNearestNeighbors::new(4);
        let out = knn
            .classify(&two_clusters(), &unlabeled(&[&[5.0, 5.0]]))
            .unwrap();
        assert_eq!(out, vec![Label::Positive]);
    }

    #[test]
    fn equal_distances_break_by_training_order() {
        let training = Dataset::new(vec![
            Example::labeled(vec![-1.0], Label::Negative),
            Example::labeled(vec![1.0], Label::Positive),
        ])
        .unwrap();
        let mut knn = KNearestNeighbors::new(1);
        knn.train(&training).unwrap();
        let ranked = knn.rank_neighbors(&Example::unlabeled(vec![0.0])).unwrap();
        assert_eq!(ranked[0].1, 0);
        assert_eq!(
            knn.predict(&Example::unlabeled(vec![0.0])).unwrap(),
            Label::Negative
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let test = unlabeled(&[&[3.0, 3.5], &[2.0, 2.0], &[4.0, 4.0]]);
        let mut knn = KNearestNeighbors::new(3);
        let first = knn.classify(&two_clusters(), &test).unwrap();
        for _ in 0..5 {
            assert_eq!(knn.classify(&two_clusters(), &test).unwrap(), first);
        }
    }

    #[test]
    fn training_set_is_untouched_by_queries() {
        let training = two_clusters();
        let mut knn = KNearestNeighbors::new(2);
        knn.train(&training).unwrap();
        knn.predict(&Example::unlabeled(vec![4.9, 5.1])).unwrap();
        assert_eq!(knn.training, training);
    }

    #[test]
    fn k_outside_range_is_rejected() {
        let mut zero = KNearestNeighbors::new(0);
        assert_eq!(
            zero.train(&two_clusters()),
            Err(ClassifierError::InvalidK {
                k: 0,
                training_size: 4
            })
        );

        let mut big = KNearestNeighbors::new(5);
        assert_eq!(
            big.classify(&two_clusters(), &unlabeled(&[&[0.0, 0.0]])),
            Err(ClassifierError::InvalidK {
                k: 5,
                training_size: 4
            })
        );
    }

    #[test]
    fn dimension_mismatch_reports_query_position() {
        let mut knn = KNearestNeighbors::new(1);
        let test = Dataset::new(vec![Example::unlabeled(vec![1.0, 2.0, 3.0])]).unwrap();
        assert_eq!(
            knn.classify(&two_clusters(), &test),
            Err(ClassifierError::DimensionMismatch {
                expected: 2,
                found: 3,
                index: 0
            })
        );
    }

    #[test]
    fn unlabeled_training_example_is_rejected() {
        let training = Dataset::new(vec![
            Example::labeled(vec![0.0], Label::Positive),
            Example::unlabeled(vec![1.0]),
        ])
        .unwrap();
        let mut knn = KNearestNeighbors::new(1);
        assert_eq!(
            knn.train(&training),
            Err(ClassifierError::MissingLabel { index: 1 })
        );
    }
}

use crate::classifiers::{Classifier, KNearestNeighbors, NaiveBayes};
use crate::core::{Dataset, Label};
use crate::error::{ClassifierError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use tracing::info;

const NAIVE_BAYES_TOKEN: &str = "NB";
const KNN_SUFFIX: &str = "NN";

/// Classification strategy selected by its command-line token: `NB` or `<k>NN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    NaiveBayes,
    KNearestNeighbors { k: usize },
}

impl Algorithm {
    pub fn build(self) -> Box<dyn Classifier> {
        match self {
            Algorithm::NaiveBayes => Box::new(NaiveBayes::new()),
            Algorithm::KNearestNeighbors { k } => Box::new(KNearestNeighbors::new(k)),
        }
    }

    /// Trains a fresh classifier on `training` and labels `test` in order.
    pub fn classify(self, training: &Dataset, test: &Dataset) -> Result<Vec<Label>> {
        let mut classifier = self.build();
        let predictions = classifier.classify(training, test)?;
        info!(
            algorithm = %self,
            training = training.len(),
            test = test.len(),
            "classification finished"
        );
        Ok(predictions)
    }
}

impl FromStr for Algorithm {
    type Err = ClassifierError;

    fn from_str(token: &str) -> Result<Self> {
        if token == NAIVE_BAYES_TOKEN {
            return Ok(Algorithm::NaiveBayes);
        }

        let unknown = || ClassifierError::UnknownAlgorithm(token.to_string());
        let digits = token.strip_suffix(KNN_SUFFIX).ok_or_else(unknown)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unknown());
        }
        let k = digits.parse::<usize>().map_err(|_| unknown())?;
        Ok(Algorithm::KNearestNeighbors { k })
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Algorithm::NaiveBayes => f.write_str(NAIVE_BAYES_TOKEN),
            Algorithm::KNearestNeighbors { k } => write!(f, "{k}{KNN_SUFFIX}"),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ClassifierError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(value: Algorithm) -> Self {
        value.to_string()
    }
}

/// Resolves `token` and runs the matching classifier.
pub fn classify(token: &str, training: &Dataset, test: &Dataset) -> Result<Vec<Label>> {
    token.parse::<Algorithm>()?.classify(training, test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{two_clusters, unlabeled};

    #[test]
    fn parses_known_tokens() {
        assert_eq!("NB".parse::<Algorithm>().unwrap(), Algorithm::NaiveBayes);
        assert_eq!(
            "3NN".parse::<Algorithm>().unwrap(),
            Algorithm::KNearestNeighbors { k: 3 }
        );
        assert_eq!(
            "15NN".parse::<Algorithm>().unwrap(),
            Algorithm::KNearestNeighbors { k: 15 }
        );
    }

    #[test]
    fn rejects_unknown_tokens() {
        for token in [
            "", "nb", "NN", "3nn", "3N", "-3NN", "+3NN", "3 NN", " 3NN", "3NNN", "k3NN", "SVM",
            "99999999999999999999999NN",
        ] {
            assert_eq!(
                token.parse::<Algorithm>(),
                Err(ClassifierError::UnknownAlgorithm(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn zero_k_parses_but_fails_at_classification() {
        let algo: Algorithm = "0NN".parse().unwrap();
        assert_eq!(algo, Algorithm::KNearestNeighbors { k: 0 });
        assert!(matches!(
            algo.classify(&two_clusters(), &unlabeled(&[&[1.0, 1.0]])),
            Err(ClassifierError::InvalidK { k: 0, .. })
        ));
    }

    #[test]
    fn display_round_trips() {
        for token in ["NB", "1NN", "7NN"] {
            assert_eq!(token.parse::<Algorithm>().unwrap().to_string(), token);
        }
    }

    #[test]
    fn serde_uses_token_form() {
        let v = serde_json::to_value(Algorithm::KNearestNeighbors { k: 5 }).unwrap();
        assert_eq!(v, serde_json::json!("5NN"));
        let back: Algorithm = serde_json::from_value(serde_json::json!("NB")).unwrap();
        assert_eq!(back, Algorithm::NaiveBayes);
        assert!(serde_json::from_value::<Algorithm>(serde_json::json!("XX")).is_err());
    }

    #[test]
    fn dispatches_both_algorithms() {
        let test = unlabeled(&[&[1.2, 2.2], &[4.9, 5.1]]);
        let expected = vec![Label::Positive, Label::Negative];
        assert_eq!(classify("NB", &two_clusters(), &test).unwrap(), expected);
        assert_eq!(classify("1NN", &two_clusters(), &test).unwrap(), expected);
        assert_eq!(
            classify("knn", &two_clusters(), &test),
            Err(ClassifierError::UnknownAlgorithm("knn".into()))
        );
    }
}

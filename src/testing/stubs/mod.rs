mod oracle_classifier;

pub use oracle_classifier::{ContrarianClassifier, OracleClassifier};

pub mod algorithm;
pub mod bayes;
pub mod classifier;
pub mod knn;

pub use algorithm::{Algorithm, classify};
pub use bayes::NaiveBayes;
pub use classifier::{Classifier, Votes};
pub use knn::KNearestNeighbors;
